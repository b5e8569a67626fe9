//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an [`Output`].

mod check;
mod explain;
mod generate;
mod output;
mod tree;

pub use check::CheckReport;
pub use explain::{ExplainReport, FamilyInfo, LintInfo, MultiPathInfo, PhaseInfo};
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
#[cfg(test)]
pub use output::render_to_string;
pub use tree::TreeReport;
