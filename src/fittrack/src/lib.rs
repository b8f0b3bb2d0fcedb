#[macro_use]
extern crate log;

mod output;
pub use output::OutputFormat;

mod package;
pub use package::{BatchSummary, DEMO_PACKAGES, Package, run_batch};
