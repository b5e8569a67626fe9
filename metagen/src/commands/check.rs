use clap::Args;
use eyre::Result;

use super::SchemaArg;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub schema: SchemaArg,
}

impl CheckCommand {
    /// Validate the schema and print a summary, exiting 1 on errors
    pub fn run(&self) -> Result<()> {
        let report = ops::check(self.schema.load(), &self.schema.schema)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
