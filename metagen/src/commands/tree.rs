use clap::{Args, ValueEnum};
use eyre::Result;
use metagen_codegen::schema::DisplayStyle;

use super::SchemaArg;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum TreeStyle {
    /// Family names only
    Simple,
    /// Family names with their index parameters
    Accessors,
    /// Box-drawing tree with property counts
    #[default]
    Box,
}

impl From<TreeStyle> for DisplayStyle {
    fn from(style: TreeStyle) -> Self {
        match style {
            TreeStyle::Simple => DisplayStyle::Simple,
            TreeStyle::Accessors => DisplayStyle::WithAccessors,
            TreeStyle::Box => DisplayStyle::TreeBox,
        }
    }
}

#[derive(Args)]
pub struct TreeCommand {
    #[command(flatten)]
    pub schema: SchemaArg,

    /// How to draw the tree
    #[arg(long, value_enum, default_value_t = TreeStyle::Box)]
    pub style: TreeStyle,
}

impl TreeCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::tree(self.schema.load(), self.style.into())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
