//! Log sorting example.
//!
//! Sorts a FIX log chronologically by its bracketed timestamps. Pass a file
//! path to sort that file; without arguments a built-in sample is used.

use fixlens::prelude::*;
use tracing::info;

/// Sample log with out-of-order lines and one missing timestamp.
const SAMPLE: &str = "\
[20240315-09:30:02.120] 8=FIX.4.4|35=8|39=2|55=EURUSD
[20240315-09:30:00.450] 8=FIX.4.4|35=D|55=EURUSD
recovered line without a timestamp
[20240315-09:30:01.000] 8=FIX.4.4|35=8|39=0|55=EURUSD";

/// Initializes logging for examples.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let (name, content) = match std::env::args().nth(1) {
        Some(path) => {
            let content = std::fs::read_to_string(&path)?;
            (path, content)
        }
        None => ("sample.log".to_string(), SAMPLE.to_string()),
    };

    let sorted = sort_file(name, &content, SortOrder::Ascending);
    info!("sorted {} ascending", sorted.name);
    println!("{}", sorted.content);

    Ok(())
}
