//! Structured Rust file generation.
//!
//! A [`RustFile`] is a header comment, a block of `use` statements and a
//! list of body items separated by blank lines.

use metagen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use metagen_core::GENERATED_HEADER;

/// A `use` (or `pub use`) item importing zero or more names from one path.
#[derive(Debug, Clone)]
pub struct Use {
    path: String,
    names: Vec<String>,
    reexport: bool,
}

impl Use {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            names: Vec::new(),
            reexport: false,
        }
    }

    pub fn symbol(self, name: impl Into<String>) -> Self {
        self.symbols([name])
    }

    pub fn symbols(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Emit `pub use`.
    pub fn public(self) -> Self {
        Self {
            reexport: true,
            ..self
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let target = match &self.names[..] {
            [] => self.path.clone(),
            [name] => format!("{}::{}", self.path, name),
            names => format!("{}::{{{}}}", self.path, names.join(", ")),
        };
        let keyword = if self.reexport { "pub use" } else { "use" };
        vec![CodeFragment::line(format!("{keyword} {target};"))]
    }
}

/// A structured representation of a generated Rust file.
///
/// # Example
///
/// ```ignore
/// let file = RustFile::new()
///     .use_stmt(Use::new("metagen_runtime").symbols(["Root", "Unsupported"]))
///     .add(retrieve_trait)
///     .render();
/// ```
#[derive(Default)]
pub struct RustFile {
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body.extend(nodes.into_iter().map(|n| n.to_fragments()));
        self
    }

    /// Render the body without a header.
    ///
    /// The `use` block and every item are separated by one blank line.
    pub fn render(&self) -> String {
        let uses: Vec<CodeFragment> = self.uses.iter().flat_map(Use::to_fragments).collect();
        let sections = std::iter::once(uses.as_slice())
            .filter(|uses| !uses.is_empty())
            .chain(self.body.iter().map(Vec::as_slice));

        let mut builder = CodeBuilder::rust();
        for (i, section) in sections.enumerate() {
            if i > 0 {
                builder.blank_line();
            }
            builder.emit(section);
        }
        builder.build()
    }

    /// Render the file preceded by the generated-file header.
    pub fn render_generated(&self) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{GENERATED_HEADER}\n")
        } else {
            format!("{GENERATED_HEADER}\n\n{content}")
        }
    }

    pub fn is_empty(&self) -> bool {
        self.uses.is_empty() && self.body.is_empty()
    }
}

/// Raw code lines as a body element.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.lines().map(CodeFragment::line).collect()
    }
}
