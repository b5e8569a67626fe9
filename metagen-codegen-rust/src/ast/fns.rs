//! Rust function builder.

use metagen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// How a method takes `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// `self`
    Value,
    /// `&self`
    Ref,
    /// `&mut self`
    Mut,
}

impl Receiver {
    fn as_str(&self) -> &'static str {
        match self {
            Receiver::Value => "self",
            Receiver::Ref => "&self",
            Receiver::Mut => "&mut self",
        }
    }
}

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// The same parameter marked as unused (`_name`).
    pub fn unused(&self) -> Self {
        let bare = self.name.strip_prefix("r#").unwrap_or(&self.name);
        Self::new(format!("_{bare}"), self.ty.clone())
    }
}

/// Builder for Rust functions and trait method declarations.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    receiver: Option<Receiver>,
    params: Vec<Param>,
    return_type: Option<String>,
    /// `None` renders a declaration ending in `;`.
    body: Option<Vec<String>>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            receiver: None,
            params: Vec::new(),
            return_type: None,
            body: Some(Vec::new()),
        }
    }

    /// A method inside a trait or trait impl: no visibility keyword.
    pub fn method(name: impl Into<String>, receiver: Receiver) -> Self {
        Self {
            is_public: false,
            receiver: Some(receiver),
            ..Self::new(name)
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    /// Mark every parameter as unused.
    pub fn unused_params(mut self) -> Self {
        self.params = self.params.iter().map(Param::unused).collect();
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Render as a declaration without a body.
    pub fn declaration(mut self) -> Self {
        self.body = None;
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.get_or_insert_with(Vec::new).push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        let body = self.body.get_or_insert_with(Vec::new);
        body.extend(content.into().lines().map(String::from));
        self
    }

    /// Function signature up to, not including, the body.
    pub fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let params = self
            .receiver
            .map(|r| r.as_str().to_string())
            .into_iter()
            .chain(self.params.iter().map(|p| format!("{}: {}", p.name, p.ty)))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!("{vis}fn {}({params}) -> {ret}", self.name),
            None => format!("{vis}fn {}({params})", self.name),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc));
        }
        fragments.extend(self.attrs.iter().map(|a| CodeFragment::line(format!("#[{a}]"))));

        let signature = self.signature();
        match &self.body {
            None => fragments.push(CodeFragment::line(format!("{signature};"))),
            Some(body) if body.is_empty() => {
                fragments.push(CodeFragment::line(format!("{signature} {{}}")));
            }
            Some(body) => fragments.push(CodeFragment::braced(
                format!("{signature} {{"),
                body.iter().map(CodeFragment::line).collect(),
            )),
        }
        fragments
    }
}
