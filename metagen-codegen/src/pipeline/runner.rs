//! Pipeline orchestrator.

use eyre::Result;
use metagen_schema::Schema;
use tracing::{debug, info_span};

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{ResolvePhase, SynthesizePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, resolve, synthesize) followed by any
/// user phases, calling plugin hooks before and after each one.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".metagen/debug"))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(schema)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The built-in phases in execution order.
    pub fn builtin_phases() -> Vec<Box<dyn Phase>> {
        vec![
            Box::new(ValidatePhase::new()),
            Box::new(ResolvePhase),
            Box::new(SynthesizePhase),
        ]
    }

    /// Names and descriptions of every phase this pipeline runs.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        Self::builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|p| p.info())
            .collect()
    }

    /// Run the pipeline on a schema.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin fails. Cycle and collision
    /// errors can be recovered with `Report::downcast_ref`.
    pub fn run(&self, schema: Schema) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema);

        for phase in Self::builtin_phases().iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        debug!(
            warnings = ctx.warning_count(),
            families = ctx.model.as_ref().map_or(0, |m| m.families.len()),
            "pipeline finished"
        );
        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        let _span = info_span!("phase", name = phase_name).entered();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        let diagnostics_before = ctx.diagnostics.len();
        phase.run(ctx)?;
        debug!(
            new_diagnostics = ctx.diagnostics.len() - diagnostics_before,
            "phase complete"
        );

        for plugin in &self.plugins {
            debug!(plugin = plugin.name(), "after-phase hook");
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::pipeline::phases::ResolveError;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_phases: Arc<Mutex<Vec<String>>>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_phases.lock().unwrap().push(phase.to_string());
            Ok(())
        }
    }

    fn make_test_schema() -> Schema {
        r#"
            [schema]
            name = "test"
            root = "Document"

            [entities.Plate]
            parents = ["Document"]
            description = "A plate"
            properties.Name = "string"

            [entities.Well]
            parents = ["Plate"]
            description = "A well"
            properties.Color = "int"
        "#
        .parse()
        .expect("Failed to parse test schema")
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(make_test_schema())
            .expect("pipeline should succeed");

        assert!(ctx.ir.is_some());
        let model = ctx.model().unwrap();
        assert_eq!(model.families.len(), 2);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let before_count = Arc::new(AtomicUsize::new(0));
        let after_phases = Arc::new(Mutex::new(Vec::new()));
        let plugin = CountingPlugin {
            before_count: before_count.clone(),
            after_phases: after_phases.clone(),
        };

        Pipeline::new()
            .plugin(plugin)
            .run(make_test_schema())
            .expect("pipeline should succeed");

        assert_eq!(before_count.load(Ordering::SeqCst), 3);
        assert_eq!(
            *after_phases.lock().unwrap(),
            ["validate", "resolve", "synthesize"]
        );
    }

    #[test]
    fn test_phase_info_lists_builtins() {
        let names: Vec<_> = Pipeline::new()
            .phase_info()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["validate", "resolve", "synthesize"]);
    }

    #[test]
    fn test_cycle_error_is_downcastable() {
        let schema: Schema = r#"
            [schema]
            name = "test"
            root = "Document"

            [entities.A]
            parents = ["B"]

            [entities.B]
            parents = ["A"]
        "#
        .parse()
        .unwrap();

        let report = Pipeline::new().run(schema).err().unwrap();
        assert!(matches!(
            report.downcast_ref::<ResolveError>(),
            Some(ResolveError::Cycle { .. })
        ));
    }
}
