//! Flattens code fragments into indented source text.

use super::{CodeFragment, Renderable};

/// Writes [`CodeFragment`]s as text, tracking the indentation depth.
///
/// ```
/// use metagen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::rust();
/// builder.write(CodeFragment::braced(
///     "pub trait MetadataRetrieve {",
///     vec![CodeFragment::line("fn plate_count(&self) -> Option<usize>;")],
/// ));
/// assert_eq!(
///     builder.build(),
///     "pub trait MetadataRetrieve {\n    fn plate_count(&self) -> Option<usize>;\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    unit: &'static str,
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    /// A builder indenting by `unit` per level.
    pub fn new(unit: &'static str) -> Self {
        Self {
            unit,
            depth: 0,
            buffer: String::new(),
        }
    }

    /// A builder with rustfmt's 4-space indentation.
    pub fn rust() -> Self {
        Self::new("    ")
    }

    /// Write every fragment of a node.
    pub fn emit<R: Renderable + ?Sized>(&mut self, node: &R) -> &mut Self {
        for fragment in node.to_fragments() {
            self.write(fragment);
        }
        self
    }

    pub fn blank_line(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn write(&mut self, fragment: CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(text) => self.indented(&text),
            CodeFragment::Blank => self.blank_line(),
            CodeFragment::Block { header, body } => {
                self.indented(&header);
                self.depth += 1;
                for inner in body {
                    self.write(inner);
                }
                self.depth -= 1;
                self.indented("}")
            }
            CodeFragment::Doc(text) => {
                for line in text.lines() {
                    self.comment("///", line.trim_end());
                }
                self
            }
            CodeFragment::Comment(text) => self.comment("//", &text),
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn indented(&mut self, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.buffer.push_str(&self.unit.repeat(self.depth));
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    fn comment(&mut self, marker: &str, text: &str) -> &mut Self {
        if text.is_empty() {
            self.indented(marker)
        } else {
            self.indented(&format!("{} {}", marker, text))
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(fragments: &[CodeFragment]) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(fragments);
        builder.build()
    }

    #[test]
    fn test_nested_blocks() {
        let code = render(&[CodeFragment::braced(
            "impl MetadataRetrieve for DummyMetadata {",
            vec![CodeFragment::braced(
                "fn plate_count(&self) -> Option<usize> {",
                vec![CodeFragment::line("None")],
            )],
        )]);

        assert_eq!(
            code,
            "impl MetadataRetrieve for DummyMetadata {\n    \
             fn plate_count(&self) -> Option<usize> {\n        None\n    }\n}\n"
        );
    }

    #[test]
    fn test_empty_line_has_no_trailing_indent() {
        let code = render(&[CodeFragment::braced(
            "mod m {",
            vec![CodeFragment::line(""), CodeFragment::Blank],
        )]);
        assert_eq!(code, "mod m {\n\n\n}\n");
    }

    #[test]
    fn test_doc_lines() {
        let code = render(&[CodeFragment::braced(
            "pub trait MetadataStore {",
            vec![
                CodeFragment::doc("Write access.\n\nOne setter per property."),
                CodeFragment::comment("Well: Plate/Well"),
            ],
        )]);

        assert_eq!(
            code,
            "pub trait MetadataStore {\n    /// Write access.\n    ///\n    \
             /// One setter per property.\n    // Well: Plate/Well\n}\n"
        );
    }

    #[test]
    fn test_custom_indent_unit() {
        let mut builder = CodeBuilder::new("\t");
        builder.write(CodeFragment::braced("{", vec![CodeFragment::line("x")]));
        assert_eq!(builder.build(), "{\n\tx\n}\n");
    }
}
