//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod generate;
mod output;

pub use generate::{GenerateReport, GenerationResult};
pub use output::{Report, TerminalOutput};
