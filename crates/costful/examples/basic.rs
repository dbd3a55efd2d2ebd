//! Basic example walking the full engine: normalize, forecast,
//! detect, summarize.
//!
//! Run with: cargo run --example basic -p costful

use costful::focus::{normalize_private_dc, PrivateDcInputs};
use costful::forecast::{predict, CostHistoryPoint};
use costful::insight::{detect_anomalies, generate_executive_summary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== costful Basic Example ===\n");

    // 1. Normalize a private datacenter into canonical records
    let inputs = PrivateDcInputs::new(180_000.0, 5.0, 1_800.0);
    let private_records = normalize_private_dc(&inputs)?;
    println!("1. Normalized private datacenter ({} records)", private_records.len());
    for record in &private_records {
        println!(
            "   {} / {}: effective ${:.2}/mo (billed ${:.2})",
            record.service_category, record.service_name, record.effective_cost, record.billed_cost
        );
    }

    // 2. Forecast from six months of observed spend
    let history = vec![
        CostHistoryPoint::new("Jan", 4_050.0),
        CostHistoryPoint::new("Feb", 4_275.0),
        CostHistoryPoint::new("Mar", 4_140.0),
        CostHistoryPoint::new("Apr", 4_725.0),
        CostHistoryPoint::new("May", 4_410.0),
        CostHistoryPoint::new("Jun", 4_500.0),
    ];
    let forecast = predict(&history, 6)?;
    println!("\n2. Forecast (slope {:.2}, trend {})", forecast.slope, forecast.trend());
    for projection in &forecast.projections {
        println!("   month +{}: ${:.2}", projection.index - 5, projection.predicted_cost);
    }

    // 3. Detect cost spikes across the record set
    let mut records = private_records.clone();
    let mut spike = records[1].clone();
    spike.service_name = "Emergency Cooling".to_string();
    spike.effective_cost = 30_000.0;
    records.push(spike);
    for _ in 0..6 {
        records.push(records[1].clone());
    }

    let anomalies = detect_anomalies(&records);
    println!("\n3. Anomalies ({})", anomalies.len());
    for anomaly in &anomalies {
        println!("   [{}] {}", anomaly.severity, anomaly.message);
    }

    // 4. Executive summary
    println!("\n4. Executive summary");
    for insight in generate_executive_summary(&private_records, &[]) {
        println!("   - {}", insight);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
