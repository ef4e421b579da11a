use card_analytics::narrative;
use card_analytics::{Analyzer, CleanedDataset, CompassConfig, Record};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Card Analytics: Category Comparison Example");
    println!("===========================================\n");

    let data = create_sample_data();
    let analyzer = Analyzer::new(CompassConfig::default());

    let basketball = analyzer.analyze(&data, "Basketball")?;
    let hockey = analyzer.analyze(&data, "Hockey")?;

    println!(
        "Basketball: {:+.2}% projected, momentum {}",
        basketball.pct_change, basketball.latest_trend
    );
    println!(
        "Hockey:     {:+.2}% projected, momentum {}",
        hockey.pct_change, hockey.latest_trend
    );

    let report = analyzer.compare(&basketball, &hockey);
    println!("\n{}", narrative::comparison_commentary(&report));

    Ok(())
}

fn create_sample_data() -> CleanedDataset {
    let mut records = Vec::new();

    for t in 0..36usize {
        let year = 2021 + (t / 12) as i32;
        let month = (t % 12) as u32 + 1;
        records.push(
            Record::new("Basketball", year, month, 400.0 + t as f64 * 4.0)
                .expect("valid sample record"),
        );
        records.push(
            Record::new("Hockey", year, month, 300.0 - t as f64 * 2.0)
                .expect("valid sample record"),
        );
    }

    CleanedDataset::from_records(records)
}
