//! Message-set comparison example.
//!
//! Diffs two small order-flow captures line by line, prints the classified
//! report, and renders the first message as a markup block with dictionary
//! names.

use fixlens::prelude::*;
use tracing::info;

/// Yesterday's capture.
const LEFT: &str = "\
8=FIX.4.4|35=D|49=BUYSIDE|56=BROKER|55=EURUSD|54=1|38=1000000|44=1.0921
8=FIX.4.4|35=8|49=BROKER|56=BUYSIDE|55=EURUSD|39=2|150=F|31=1.0921|32=1000000";

/// Today's capture: a new TimeInForce, a price move, a partial fill.
const RIGHT: &str = "\
8=FIX.4.4|35=D|49=BUYSIDE|56=BROKER|55=EURUSD|54=1|38=1000000|44=1.0933|59=1
8=FIX.4.4|35=8|49=BROKER|56=BUYSIDE|55=EURUSD|39=1|150=F|31=1.0933|32=500000";

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

    let engine = DiffEngine::new();
    let rows = engine.compare_sets(LEFT, RIGHT);
    info!("{} of {} rows differ", differing_rows(&rows), rows.len());

    print!("{}", render_report(&rows));

    let first = parse_line(LEFT.lines().next().unwrap_or_default());
    let markup = MarkupWriter::new().render_with(&first, &EmbeddedDictionary::new());
    println!("{markup}");

    Ok(())
}
