//! Command-line presentation layer: loads the dataset once, runs the
//! pipeline for one or two categories, and renders tables and narrative
//! text.

use card_analytics::narrative;
use card_analytics::seasonal::month_name;
use card_analytics::{AnalysisBundle, Analyzer, CompassConfig, CompassError, DataLoader};
use tracing::error;

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("usage: compass <data.csv> <category> [second-category]");
        std::process::exit(2);
    }

    let second = args.get(3).map(String::as_str);
    if let Err(e) = run(&args[1], &args[2], second) {
        error!("analysis failed: {}", e);
        std::process::exit(1);
    }
}

fn run(path: &str, category: &str, second: Option<&str>) -> card_analytics::Result<()> {
    let config = CompassConfig::default();

    for selected in std::iter::once(category).chain(second) {
        if !config.is_known_category(selected) {
            return Err(CompassError::Data(format!(
                "unknown category '{}'; known categories: {}",
                selected,
                config.categories.join(", ")
            )));
        }
    }

    let loader = DataLoader::new(config.excluded_categories.clone());
    let data = loader.from_csv(path)?;

    let analyzer = Analyzer::new(config);
    let bundle = analyzer.analyze(&data, category)?;
    print_bundle(&bundle);

    if let Some(second) = second {
        let other = analyzer.analyze(&data, second)?;
        print_bundle(&other);

        let report = analyzer.compare(&bundle, &other);
        println!("Comparison: {} vs {}", report.first.category, report.second.category);
        println!("============================================\n");
        println!("{}\n", narrative::comparison_commentary(&report));
    }

    Ok(())
}

fn print_bundle(bundle: &AnalysisBundle) {
    println!("Analysis for {}", bundle.category);
    println!("============================================\n");

    println!("12-month forecast:");
    println!("{:<12} {:>12} {:>12} {:>12}", "Month", "Forecast", "Lower", "Upper");
    for (i, date) in bundle.forecast.dates.iter().enumerate() {
        println!(
            "{:<12} {:>12.2} {:>12.2} {:>12.2}",
            date.format("%Y-%m"),
            bundle.forecast.point[i],
            bundle.forecast.lower[i],
            bundle.forecast.upper[i]
        );
    }
    println!();

    let end_date = bundle.forecast.dates.last().copied().unwrap_or_default();
    println!("{}", narrative::forecast_commentary(&bundle.category, bundle.pct_change, end_date));
    println!();

    println!("Most recent momentum: {}", bundle.latest_trend);
    println!("{}", narrative::trend_commentary(&bundle.category, bundle.latest_trend));
    println!();

    println!("Average market value by calendar month:");
    for (&month, &mean) in &bundle.seasonal.by_month {
        println!("{:<12} {:>12.2}", month_name(month), mean);
    }
    println!();
    println!(
        "{}",
        narrative::best_month_commentary(&bundle.category, bundle.seasonal.best_month)
    );
    println!();
}
