use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("invalid vehicle price: {price}")]
    InvalidVehiclePrice {
        price: Money,
    },

    #[error("invalid down payment: {provided}")]
    InvalidDownPayment {
        provided: Money,
    },

    #[error("down payment exceeds cap: maximum {maximum}, provided {provided}")]
    DownPaymentAboveCap {
        maximum: Money,
        provided: Money,
    },

    #[error("term out of range: {months} months, allowed {min}-{max}")]
    TermOutOfRange {
        months: u32,
        min: u32,
        max: u32,
    },

    #[error("monthly income below minimum: minimum {minimum}, provided {provided}")]
    IncomeBelowMinimum {
        minimum: Money,
        provided: Money,
    },

    #[error("unknown credit profile: {id}")]
    UnknownCreditProfile {
        id: String,
    },

    #[error("no tax bracket applies to vehicle year {vehicle_year}")]
    MissingTaxBracket {
        vehicle_year: i32,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
