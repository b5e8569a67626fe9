//! Rust enum and match builders.

use metagen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A unit variant in a Rust enum.
#[derive(Debug, Clone)]
pub struct Variant {
    pub name: String,
    pub doc: Option<String>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Builder for fieldless Rust enums.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    doc: Option<String>,
    derives: Vec<String>,
    variants: Vec<Variant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            derives: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn derives(mut self, derives: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.derives.extend(derives.into_iter().map(Into::into));
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        if !self.derives.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        let header = format!("pub enum {}", self.name);
        if self.variants.is_empty() {
            fragments.push(CodeFragment::line(format!("{header} {{}}")));
            return fragments;
        }

        let body = self
            .variants
            .iter()
            .flat_map(|v| {
                v.doc
                    .as_ref()
                    .map(CodeFragment::doc)
                    .into_iter()
                    .chain([CodeFragment::line(format!("{},", v.name))])
            })
            .collect();
        fragments.push(CodeFragment::braced(format!("{header} {{"), body));
        fragments
    }
}

/// One arm of a [`Match`].
#[derive(Debug, Clone)]
pub struct Arm {
    pub pattern: String,
    pub body: String,
}

impl Arm {
    pub fn new(pattern: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            body: body.into(),
        }
    }
}

/// A `match` expression with single-expression arms.
#[derive(Debug, Clone)]
pub struct Match {
    scrutinee: String,
    arms: Vec<Arm>,
}

impl Match {
    pub fn new(scrutinee: impl Into<String>) -> Self {
        Self {
            scrutinee: scrutinee.into(),
            arms: Vec::new(),
        }
    }

    pub fn arm(mut self, arm: Arm) -> Self {
        self.arms.push(arm);
        self
    }

    pub fn arms(mut self, arms: impl IntoIterator<Item = Arm>) -> Self {
        self.arms.extend(arms);
        self
    }

    /// Render to text, for use as a function body.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Match {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let arms = self
            .arms
            .iter()
            .map(|arm| CodeFragment::line(format!("{} => {},", arm.pattern, arm.body)))
            .collect();
        vec![CodeFragment::braced(format!("match {} {{", self.scrutinee), arms)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum() {
        let e = Enum::new("DetectorType")
            .derives(["Debug", "Clone", "Copy"])
            .variant(Variant::new("CCD"))
            .variant(Variant::new("PMT").doc("Photomultiplier tube"))
            .build();
        assert_eq!(
            e,
            "#[derive(Debug, Clone, Copy)]\n\
             pub enum DetectorType {\n    \
             CCD,\n    \
             /// Photomultiplier tube\n    \
             PMT,\n\
             }\n"
        );
    }

    #[test]
    fn test_match() {
        let m = Match::new("self")
            .arm(Arm::new("DetectorType::CCD", "\"CCD\""))
            .arm(Arm::new("DetectorType::PMT", "\"PMT\""))
            .build();
        assert_eq!(
            m,
            "match self {\n    \
             DetectorType::CCD => \"CCD\",\n    \
             DetectorType::PMT => \"PMT\",\n\
             }\n"
        );
    }
}
