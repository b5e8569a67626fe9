//! Rust trait builder.

use metagen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust trait definitions.
///
/// Methods are added in groups; groups are separated by a blank line and
/// may carry a leading `//` comment.
#[derive(Debug, Clone)]
pub struct Trait {
    name: String,
    doc: Option<String>,
    groups: Vec<Vec<CodeFragment>>,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            groups: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a single method as its own group.
    pub fn method(self, method: Fn) -> Self {
        self.group(None, [method])
    }

    /// Add methods that render together, optionally under a comment.
    pub fn group(mut self, comment: Option<&str>, methods: impl IntoIterator<Item = Fn>) -> Self {
        let mut fragments: Vec<CodeFragment> = comment.map(CodeFragment::comment).into_iter().collect();
        for method in methods {
            fragments.extend(method.to_fragments());
        }
        self.groups.push(fragments);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Trait {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }

        let header = format!("pub trait {} {{", self.name);
        if self.groups.is_empty() {
            fragments.push(CodeFragment::line(format!("{header}}}")));
            return fragments;
        }

        let mut body = Vec::new();
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(group.iter().cloned());
        }
        fragments.push(CodeFragment::braced(header, body));
        fragments
    }
}
