use clap::Args;
use eyre::Result;

use super::SchemaArg;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    #[command(flatten)]
    pub schema: SchemaArg,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::explain(self.schema.load(), &self.schema.schema)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
