//! Rust impl block builder.

use metagen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    generics: Option<String>,
    trait_name: Option<String>,
    items: Vec<Vec<CodeFragment>>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            generics: None,
            trait_name: None,
            items: Vec::new(),
        }
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    /// Generic parameters of the impl, e.g. `S: MetadataStore`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.items.push(method.to_fragments());
        self
    }

    pub fn methods(self, methods: impl IntoIterator<Item = Fn>) -> Self {
        methods.into_iter().fold(self, Self::method)
    }

    /// Add a non-method item such as an associated type or constant.
    pub fn item(mut self, item: impl Renderable) -> Self {
        self.items.push(item.to_fragments());
        self
    }

    /// Build the impl block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }

    fn format_header(&self) -> String {
        let generics = self
            .generics
            .as_ref()
            .map(|g| format!("<{g}>"))
            .unwrap_or_default();
        match &self.trait_name {
            Some(trait_name) => format!("impl{generics} {trait_name} for {} {{", self.type_name),
            None => format!("impl{generics} {} {{", self.type_name),
        }
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.items.is_empty() {
            let header = self.format_header();
            return vec![CodeFragment::line(format!("{header}}}"))];
        }

        let mut body = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(item.iter().cloned());
        }
        vec![CodeFragment::braced(self.format_header(), body)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Param, Receiver};

    #[test]
    fn test_empty_impl() {
        assert_eq!(Impl::new("Foo").build(), "impl Foo {}\n");
    }

    #[test]
    fn test_impl_for_trait_with_generics() {
        let i = Impl::new("FilterMetadata<S>")
            .generics("S: MetadataStore")
            .for_trait("MetadataStore")
            .method(
                Fn::method("set_plate_name", Receiver::Mut)
                    .param(Param::new("name", "String"))
                    .body_line("self.store.set_plate_name(name);"),
            )
            .build();
        assert_eq!(
            i,
            "impl<S: MetadataStore> MetadataStore for FilterMetadata<S> {\n    \
             fn set_plate_name(&mut self, name: String) {\n        \
             self.store.set_plate_name(name);\n    \
             }\n}\n"
        );
    }

    #[test]
    fn test_methods_are_separated_by_blank_lines() {
        let i = Impl::new("Foo")
            .method(Fn::new("bar"))
            .method(Fn::new("baz"))
            .build();
        assert!(i.contains("    pub fn bar() {}\n\n    pub fn baz() {}\n"));
    }
}
