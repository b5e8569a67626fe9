//! Validation context and utilities for schema parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the schema, making it easier to pass validation context into
/// nested checks.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "schema.toml");
/// ctx.validate_name("Plate", "entity")?;
///
/// let nested = ctx.push("Plate");
/// nested.validate_name("Rows", "property")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Plate", "Rows"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "property in 'Plate'" or just "entity" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Find the span of a quoted string value in the source.
    pub fn find_value_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Validate that a schema name can be turned into generated identifiers.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        self.check_name(name, kind, self.find_span(name))
    }

    /// Like [`validate_name`](Self::validate_name), for names written as
    /// quoted values (enumeration values).
    pub fn validate_value_name(&self, name: &str, kind: &str) -> Result<()> {
        self.check_name(name, kind, self.find_value_span(name))
    }

    fn check_name(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        if is_reserved(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        Ok(())
    }
}

/// Names that cannot appear in generated code even as raw identifiers,
/// plus type names that generated enums would shadow or redefine.
pub(crate) const RESERVED_NAMES: &[&str] = &[
    "self",
    "Self",
    "super",
    "crate",
    "Option",
    "Result",
    "Vec",
    "String",
    "Box",
    "ParseEnumError",
];

/// Check if a name, or its snake_case form, is reserved.
pub(crate) fn is_reserved(name: &str) -> bool {
    let snake = metagen_core::to_snake_case(name);
    RESERVED_NAMES.contains(&name) || RESERVED_NAMES.contains(&snake.as_str())
}

/// Find the span of a name in the TOML source.
/// Searches for patterns like `.name]`, `.name.`, `.name =`, or `name =` at a
/// line start.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Pattern 1: Table header and dotted key patterns with leading dot
    // e.g., [entities.Plate], [entities.Plate.properties.Rows], properties.Rows =
    let patterns_skip_1 = [
        format!(".{}]", name),
        format!(".{}.", name),
        format!(".{} =", name),
        format!(".{}=", name),
    ];

    for pattern in &patterns_skip_1 {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            let start = pos + 1;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // Pattern 2: Inline table keys
    let inline_patterns = [
        (format!("{{ {} ", name), 2usize),
        (format!("{{ {}=", name), 2usize),
        (format!("{{{}=", name), 1usize),
        (format!(", {} ", name), 2usize),
        (format!(", {}=", name), 2usize),
    ];

    for (pattern, skip) in &inline_patterns {
        if let Some(pos) = src.find(pattern) {
            let start = pos + skip;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // Pattern 3: Bare key at the start of a line
    // e.g., `Rows = "uint"` inside [entities.Plate.properties]
    let line_pattern = format!("\n{} =", name);
    if let Some(pos) = src.find(&line_pattern) {
        let start = pos + 1;
        return Some(SourceSpan::from((start, name.len())));
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Find the span of a quoted string value, excluding the quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    [format!("\"{}\"", value), format!("'{}'", value)]
        .iter()
        .find_map(|pattern| src.find(pattern.as_str()))
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Validate that a name is a valid identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(_) => return Some("name must start with a letter"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
