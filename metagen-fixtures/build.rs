use std::{env, path::PathBuf};

use eyre::{Result, WrapErr};
use metagen_codegen::pipeline::Pipeline;
use metagen_codegen_rust::{Generator, LanguageCodegen};
use metagen_schema::Schema;

const SCHEMA: &str = "schemas/screening.toml";

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed={SCHEMA}");

    let schema = Schema::from_file(SCHEMA)?;
    let ctx = Pipeline::new()
        .run(schema)
        .wrap_err_with(|| format!("failed to compile {SCHEMA}"))?;
    let (ir, model) = ctx.into_parts()?;

    let out_dir = PathBuf::from(env::var("OUT_DIR")?).join("screening");
    Generator::new(&ir, &model).generate(&out_dir)?;
    Ok(())
}
