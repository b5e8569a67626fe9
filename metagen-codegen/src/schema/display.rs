//! Containment tree display formatting.
//!
//! # Example
//!
//! ```ignore
//! use metagen_codegen::schema::{ContainmentTree, ContainmentTreeDisplay, DisplayStyle};
//!
//! let tree = ContainmentTree::new(&ir.root, &model);
//! let display = ContainmentTreeDisplay::new(&tree).style(DisplayStyle::WithAccessors);
//!
//! println!("{}", display);
//! ```

use std::fmt;

use metagen_ir::AccessorFamily;

use super::{ContainmentTree, TreeNode};

/// Display style for containment trees.
#[derive(Debug, Clone, Copy, Default)]
pub enum DisplayStyle {
    /// Indented family names.
    ///
    /// ```text
    /// Document
    ///   Instrument
    ///     LightSource
    ///       LightSourceAnnotationRef
    ///     InstrumentAnnotationRef
    /// ```
    Simple,

    /// Family names with their entity and index parameters.
    ///
    /// ```text
    /// Document
    ///   Instrument (instrument_index)
    ///     InstrumentAnnotationRef [AnnotationRef] (instrument_index, annotation_ref_index)
    /// ```
    WithAccessors,

    /// Box-drawing tree with property counts.
    ///
    /// ```text
    /// Document
    /// ├─ Instrument
    /// │  ├─ LightSource (1 property)
    /// │  │  └─ LightSourceAnnotationRef [AnnotationRef] (1 property)
    /// │  └─ InstrumentAnnotationRef [AnnotationRef] (1 property)
    /// ```
    #[default]
    TreeBox,
}

/// Declarative containment tree display formatter.
#[derive(Debug, Clone)]
pub struct ContainmentTreeDisplay<'a> {
    tree: &'a ContainmentTree<'a>,
    style: DisplayStyle,
    indent_str: &'a str,
}

impl<'a> ContainmentTreeDisplay<'a> {
    pub fn new(tree: &'a ContainmentTree<'a>) -> Self {
        Self {
            tree,
            style: DisplayStyle::default(),
            indent_str: "  ",
        }
    }

    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation string (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str(self.tree.root());
        output.push('\n');

        let nodes = self.tree.nodes();
        match self.style {
            DisplayStyle::Simple | DisplayStyle::WithAccessors => {
                for node in nodes {
                    self.render_indented(&mut output, node, 1);
                }
            }
            DisplayStyle::TreeBox => {
                for (i, node) in nodes.iter().enumerate() {
                    self.render_tree_box(&mut output, node, "", i + 1 == nodes.len());
                }
            }
        }
        output
    }

    fn render_indented(&self, output: &mut String, node: &TreeNode<'_>, depth: usize) {
        output.push_str(&self.indent_str.repeat(depth));
        output.push_str(&node.family.name);

        if matches!(self.style, DisplayStyle::WithAccessors) {
            push_entity(output, node.family);
            let params: Vec<_> = node.family.params().into_iter().map(|p| p.name).collect();
            output.push_str(&format!(" ({})", params.join(", ")));
        }
        output.push('\n');

        for child in &node.children {
            self.render_indented(output, child, depth + 1);
        }
    }

    fn render_tree_box(&self, output: &mut String, node: &TreeNode<'_>, prefix: &str, is_last: bool) {
        let connector = if is_last { "└─" } else { "├─" };
        let child_prefix = if is_last { "   " } else { "│  " };

        output.push_str(prefix);
        output.push_str(connector);
        output.push(' ');
        output.push_str(&node.family.name);
        push_entity(output, node.family);

        let count = node.family.getters.len();
        if count > 0 {
            let plural = if count == 1 { "property" } else { "properties" };
            output.push_str(&format!(" ({count} {plural})"));
        }
        output.push('\n');

        let new_prefix = format!("{prefix}{child_prefix}");
        let total = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            self.render_tree_box(output, child, &new_prefix, i + 1 == total);
        }
    }
}

/// Show the entity when the family name differs from it.
fn push_entity(output: &mut String, family: &AccessorFamily) {
    if family.name != family.entity {
        output.push_str(&format!(" [{}]", family.entity));
    }
}

impl fmt::Display for ContainmentTreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tree::tests::{INSTRUMENT, compile};

    #[test]
    fn test_tree_box() {
        let model = compile(INSTRUMENT);
        let tree = ContainmentTree::new("Document", &model);
        let output = ContainmentTreeDisplay::new(&tree).to_string();

        assert_eq!(
            output,
            "Document\n\
             └─ Instrument\n   \
             ├─ LightSource (1 property)\n   \
             │  └─ LightSourceAnnotationRef [AnnotationRef] (1 property)\n   \
             └─ InstrumentAnnotationRef [AnnotationRef] (1 property)"
        );
    }

    #[test]
    fn test_simple() {
        let model = compile(INSTRUMENT);
        let tree = ContainmentTree::new("Document", &model);
        let output = ContainmentTreeDisplay::new(&tree)
            .style(DisplayStyle::Simple)
            .indent("  ")
            .render();

        assert_eq!(
            output,
            "Document\n  Instrument\n    LightSource\n      LightSourceAnnotationRef\n    InstrumentAnnotationRef\n"
        );
    }

    #[test]
    fn test_with_accessors() {
        let model = compile(INSTRUMENT);
        let tree = ContainmentTree::new("Document", &model);
        let output = ContainmentTreeDisplay::new(&tree)
            .style(DisplayStyle::WithAccessors)
            .render();

        assert!(output.contains(
            "    InstrumentAnnotationRef [AnnotationRef] (instrument_index, annotation_ref_index)\n"
        ));
    }
}
