/// rate menu - adjusted rates across all credit tiers for one vehicle year
use auto_financing_rs::Simulator;

fn main() {
    let simulator = Simulator::with_builtin_catalog();

    for year in [2024, 2018, 1995] {
        let menu = simulator.rate_menu(year);
        println!("vehicle year {year}:");
        for entry in menu.entries() {
            println!("  {:12} {:>6}  ({})", entry.profile_id, entry.rate.to_string(), entry.year_range);
        }
    }

    if let Some(profile) = simulator.default_profile() {
        println!("default profile: {} ({})", profile.name, profile.description);
    }
}
