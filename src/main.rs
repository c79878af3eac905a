//! driftbench binary - runs the reference comparison campaign.

use driftbench::output::terminal;
use driftbench::{AlgorithmKind, Config, Harness, NumericResult};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn setup_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn run() -> NumericResult<()> {
    let harness = Harness::new(Config::reference());
    let digits = harness.config().fractional_digits;

    let drift = harness.drift()?;
    print!("{}", terminal::format_drift(&drift, digits));

    println!(
        "Creating {} random numbers in [{}, {})...",
        harness.config().sample_count,
        harness.config().range_lower,
        harness.config().range_upper
    );
    let dataset = harness.build_dataset();

    for kind in AlgorithmKind::ALL {
        let report = harness.accumulate(kind, &dataset)?;
        print!("{}", terminal::format_report(&report, digits));
    }

    Ok(())
}

fn main() {
    setup_logging();
    if let Err(error) = run() {
        eprintln!("fatal: {error}");
        std::process::exit(1);
    }
}
