use card_analytics::narrative;
use card_analytics::{Analyzer, CleanedDataset, CompassConfig, Record};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Card Analytics: Basic Analysis Example");
    println!("======================================\n");

    // Create three years of synthetic monthly data with growth and a
    // summer dip
    println!("Creating sample data...");
    let data = create_sample_data();
    println!("Sample data created: {} records\n", data.len());

    // Run the full pipeline for one category
    let analyzer = Analyzer::new(CompassConfig::default());
    let bundle = analyzer.analyze(&data, "Pokemon")?;

    println!("12-month forecast:");
    for (i, date) in bundle.forecast.dates.iter().enumerate() {
        println!(
            "  {}: {:.2} ({:.2} .. {:.2})",
            date.format("%Y-%m"),
            bundle.forecast.point[i],
            bundle.forecast.lower[i],
            bundle.forecast.upper[i]
        );
    }

    println!("\nProjected change: {:.2}%", bundle.pct_change);
    println!("Most recent momentum: {}", bundle.latest_trend);
    println!("Best month to buy: {}", bundle.seasonal.best_month_name());

    println!();
    println!("{}", narrative::trend_commentary(&bundle.category, bundle.latest_trend));
    println!(
        "{}",
        narrative::best_month_commentary(&bundle.category, bundle.seasonal.best_month)
    );

    Ok(())
}

fn create_sample_data() -> CleanedDataset {
    let mut records = Vec::new();

    for t in 0..36usize {
        let year = 2021 + (t / 12) as i32;
        let month = (t % 12) as u32 + 1;
        let seasonal_dip = if month == 7 { -15.0 } else { 0.0 };
        let value = 250.0 + t as f64 * 3.0 + seasonal_dip;
        records.push(Record::new("Pokemon", year, month, value).expect("valid sample record"));
    }

    CleanedDataset::from_records(records)
}
