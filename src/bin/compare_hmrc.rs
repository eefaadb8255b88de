//! Compare engine stamp duty with HMRC published worked figures
//! Covers the April 2025 residential tables, both buyer types

use mortgage_engine::schedules::SdltAssumptions;

fn main() {
    let assumptions = SdltAssumptions::default();

    println!("Engine vs HMRC comparison (April 2025 residential rates)");
    println!(
        "{:<12} {:<6} {:<14} {:<14} {:<14}",
        "Value", "FTB", "Engine", "HMRC", "Diff"
    );

    // HMRC reference values (worked examples and band arithmetic)
    let hmrc_values = [
        (125_000.0, false, 0.0),
        (250_000.0, false, 2_500.0),
        (295_000.0, false, 4_750.0),
        (500_000.0, false, 15_000.0),
        (925_000.0, false, 36_250.0),
        (1_000_000.0, false, 43_750.0),
        (1_500_000.0, false, 93_750.0),
        (2_000_000.0, false, 153_750.0),
        (300_000.0, true, 0.0),
        (425_000.0, true, 6_250.0),
        (500_000.0, true, 10_000.0),
        // One pound over the relief ceiling: standard bands in full
        (500_001.0, true, 15_000.05),
        (625_000.0, true, 21_250.0),
    ];

    for (value, ftb, hmrc) in hmrc_values.iter() {
        let engine = assumptions.duty(*value, *ftb);
        let diff = engine - hmrc;

        println!(
            "{:<12.0} {:<6} {:<14.2} {:<14.2} {:<14.8}",
            value,
            if *ftb { "Yes" } else { "No" },
            engine,
            hmrc,
            diff
        );
    }
}
