//! Accessor families arranged as a containment tree.

use metagen_ir::{AccessorFamily, AccessorModel};

/// A family together with the families directly below it.
#[derive(Debug, Clone)]
pub struct TreeNode<'a> {
    pub family: &'a AccessorFamily,
    pub children: Vec<TreeNode<'a>>,
}

impl TreeNode<'_> {
    /// Number of nodes in this subtree, this node included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

/// Traversable view of the containment hierarchy.
///
/// Roots are root-level families; children follow the model's family order,
/// so a multi-path entity shows up once under each of its parents.
#[derive(Debug, Clone)]
pub struct ContainmentTree<'a> {
    root: &'a str,
    nodes: Vec<TreeNode<'a>>,
}

impl<'a> ContainmentTree<'a> {
    pub fn new(root: &'a str, model: &'a AccessorModel) -> Self {
        let nodes = model
            .families
            .iter()
            .enumerate()
            .filter(|(_, f)| f.parent.is_none())
            .map(|(i, f)| build_node(model, i, f))
            .collect();
        Self { root, nodes }
    }

    /// Name of the document root.
    pub fn root(&self) -> &'a str {
        self.root
    }

    /// Root-level nodes.
    pub fn nodes(&self) -> &[TreeNode<'a>] {
        &self.nodes
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().map(TreeNode::size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn build_node<'a>(model: &'a AccessorModel, index: usize, family: &'a AccessorFamily) -> TreeNode<'a> {
    let children = model
        .families
        .iter()
        .enumerate()
        .filter(|(_, f)| f.parent == Some(index))
        .map(|(i, f)| build_node(model, i, f))
        .collect();
    TreeNode { family, children }
}

#[cfg(test)]
pub(crate) mod tests {
    use metagen_schema::Schema;

    use super::*;
    use crate::pipeline::Pipeline;

    pub(crate) fn compile(body: &str) -> metagen_ir::AccessorModel {
        let content = format!("[schema]\nname = \"test\"\nroot = \"Document\"\n\n{body}");
        let schema: Schema = content.parse().expect("Failed to parse test schema");
        let ctx = Pipeline::new().run(schema).expect("pipeline should succeed");
        ctx.into_parts().unwrap().1
    }

    pub(crate) const INSTRUMENT: &str = r#"
[entities.Instrument]
parents = ["Document"]
description = "A microscope"

[entities.LightSource]
parents = ["Instrument"]
properties.Power = "float"

[entities.AnnotationRef]
parents = ["Instrument", "LightSource"]
properties.ID = "string"
"#;

    #[test]
    fn test_multi_path_entity_appears_under_each_parent() {
        let model = compile(INSTRUMENT);
        let tree = ContainmentTree::new("Document", &model);

        assert_eq!(tree.nodes().len(), 1);
        let instrument = &tree.nodes()[0];
        let children: Vec<_> = instrument
            .children
            .iter()
            .map(|n| n.family.name.as_str())
            .collect();
        assert_eq!(children, ["LightSource", "InstrumentAnnotationRef"]);
        assert_eq!(
            instrument.children[0].children[0].family.name,
            "LightSourceAnnotationRef"
        );
        assert_eq!(tree.len(), 4);
    }
}
