//! Tree operation - containment tree rendering.

use eyre::{Context, Result};
use metagen_codegen::{
    pipeline::Pipeline,
    schema::{ContainmentTree, ContainmentTreeDisplay, DisplayStyle},
};
use metagen_schema::Schema;

use crate::reports::TreeReport;

/// Execute the tree operation.
pub fn tree(schema: Schema, style: DisplayStyle) -> Result<TreeReport> {
    let ctx = Pipeline::new().run(schema).wrap_err("Failed to compile schema")?;
    let ir = ctx.ir()?;
    let model = ctx.model()?;

    let tree = ContainmentTree::new(&ir.root, model);
    let rendered = ContainmentTreeDisplay::new(&tree).style(style).render();

    Ok(TreeReport {
        rendered: rendered.trim_end().to_string(),
        families: tree.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_schemas::{ANNOTATIONS, parse};

    #[test]
    fn test_multi_path_entity_under_each_parent() {
        let report = tree(parse(ANNOTATIONS), DisplayStyle::Simple).unwrap();

        assert_eq!(report.families, 4);
        assert_eq!(
            report.rendered,
            "Document\n  Instrument\n    LightSource\n      LightSourceAnnotationRef\n    InstrumentAnnotationRef"
        );
    }

    #[test]
    fn test_with_accessors_lists_index_params() {
        let report = tree(parse(ANNOTATIONS), DisplayStyle::WithAccessors).unwrap();

        assert!(report.rendered.contains(
            "    InstrumentAnnotationRef [AnnotationRef] (instrument_index, annotation_ref_index)"
        ));
    }
}
