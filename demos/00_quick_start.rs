/// quick start - one financing quote end to end
use auto_financing_rs::{Money, Simulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let simulator = Simulator::with_builtin_catalog();

    // 2022 sedan, 20% down, 48 months, good credit
    let quote = simulator.quote(
        2022,
        "good",
        Money::from_major(30_000),
        Money::from_major(6_000),
        48,
    )?;

    match quote {
        Some(result) => {
            println!("financed amount: {}", result.financed_amount.round_dp(2));
            println!("monthly payment: {}", result.monthly_payment.round_dp(2));
            println!("total amount:    {}", result.total_amount.round_dp(2));
            println!("total interest:  {}", result.total_interest.round_dp(2));
            println!("total fees:      {}", result.total_fees.round_dp(2));
        }
        None => println!("not computable with these inputs"),
    }

    Ok(())
}
