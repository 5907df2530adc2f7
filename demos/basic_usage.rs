// ============================================================================
// Basic Usage Example
// ============================================================================

use petro_metrics::prelude::*;
use rust_decimal_macros::dec;

fn main() -> Result<(), MetricError> {
    println!("=== Petroleum Metrics Example ===\n");

    // A mid-size producer's annual numbers
    let exploration = dec!(50000000); // $50M
    let development = dec!(150000000); // $150M
    let reserves_added = dec!(12000000); // 12M BOE
    let annual_production = dec!(10000000); // 10M BOE
    let proved_reserves = dec!(100000000); // 100M BOE
    let shares_outstanding = dec!(500000000);

    println!("Reserve metrics...");
    let fd_cost = finding_development_cost(exploration, development, reserves_added)?;
    println!("  F&D cost:            ${}/BOE", currency(fd_cost));

    let rrr = reserve_replacement_ratio(reserves_added, annual_production)?;
    println!("  Reserve replacement: {}", ratio(rrr));

    let rli = reserve_life_index(proved_reserves, annual_production)?;
    println!("  Reserve life:        {} years", currency(rli));

    let rps = reserves_per_share(proved_reserves, shares_outstanding)?;
    println!("  Reserves per share:  {} BOE", ratio(rps));

    println!("\nCost metrics...");
    let lift = lifting_cost(dec!(50000000), annual_production)?;
    println!("  Lifting cost:        ${}/BOE", currency(lift));

    let breakeven = breakeven_price(dec!(500000000), annual_production)?;
    println!("  Breakeven price:     ${}/BOE", currency(breakeven));

    let cap_eff = capital_efficiency(dec!(10000), development)?;
    println!("  Capital efficiency:  {} BOE/$", ratio(cap_eff));

    println!("\nProfitability...");
    let nb = netback(dec!(70.00), dec!(10.00), dec!(5.00), dec!(15.00))?;
    println!("  Netback:             ${}/bbl", currency(nb));

    let margin = operating_netback_margin(nb, dec!(70.00))?;
    println!("  Netback margin:      {}%", currency(margin));

    let recycle = recycle_ratio(nb, fd_cost)?;
    println!("  Recycle ratio:       {}", ratio(recycle));

    // Guarded inputs reject zero and negatives with the parameter name
    println!("\nValidation...");
    match breakeven_price(dec!(500000000), dec!(0)) {
        Err(e) => println!("  rejected as expected: {}", e),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
