mod check;
mod completions;
mod explain;
mod generate;
mod tree;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use explain::ExplainCommand;
use generate::GenerateCommand;
use metagen_schema::{Schema, SchemaFile};
use tree::TreeCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for metagen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// The schema file argument shared by every command that reads one.
#[derive(Args)]
pub(crate) struct SchemaArg {
    /// Path to the schema (defaults to ./schema.toml)
    #[arg(short, long, default_value = "schema.toml")]
    pub schema: PathBuf,
}

impl SchemaArg {
    /// Load the schema, exiting with a rendered diagnostic on failure.
    pub fn load(&self) -> Schema {
        tracing::debug!(path = %self.schema.display(), "loading schema");
        SchemaFile::open(&self.schema).unwrap_or_exit().into_schema()
    }
}

#[derive(Parser)]
#[command(name = "metagen")]
#[command(version)]
#[command(about = "Generate delegating metadata accessors from a TOML schema")]
pub(crate) struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Tree(cmd) => cmd.run(),
            Commands::Explain(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a schema without generating code
    Check(CheckCommand),

    /// Generate Rust accessors from a schema
    Generate(GenerateCommand),

    /// Print the containment tree of a schema
    Tree(TreeCommand),

    /// Show what the pipeline does with a schema
    Explain(ExplainCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
