use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::SchemaArg;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub schema: SchemaArg,

    /// Output directory for the generated module
    #[arg(short, long, default_value = "src/generated")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline snapshots to <output>/.metagen/debug
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let options = GenerateOptions {
            output_dir: self.output.clone(),
            dry_run: self.dry_run,
            visualize: self.visualize,
        };
        let report = ops::generate(self.schema.load(), &options)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
