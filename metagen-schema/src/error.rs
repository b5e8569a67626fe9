use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "schema.toml");
/// ctx.validation_error("enum 'Binning' declares no values");
/// ctx.unknown_parent_error("Well", "Plate", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an error for an entity that declares no parents.
    pub fn missing_parents_error(
        &self,
        entity: impl Into<String>,
        root: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MissingParents {
            src: self.named_source(),
            span,
            entity: entity.into(),
            root: root.into(),
        })
    }

    /// Create an error for a parent that names neither the root nor an entity.
    pub fn unknown_parent_error(
        &self,
        entity: impl Into<String>,
        parent: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownParent {
            src: self.named_source(),
            span: span.into(),
            entity: entity.into(),
            parent: parent.into(),
        })
    }

    /// Create an error for an entity that lists itself as a parent.
    pub fn self_parent_error(
        &self,
        entity: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::SelfParent {
            src: self.named_source(),
            span: span.into(),
            entity: entity.into(),
        })
    }

    /// Create an error for a parent listed twice on one entity.
    pub fn duplicate_parent_error(
        &self,
        entity: impl Into<String>,
        parent: impl Into<String>,
        first_span: impl Into<SourceSpan>,
        second_span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateParent {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            entity: entity.into(),
            parent: parent.into(),
        })
    }

    /// Create an error for an entity that reuses the root's name.
    pub fn root_collision_error(
        &self,
        root: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::RootCollision {
            src: self.named_source(),
            span,
            root: root.into(),
        })
    }

    /// Create an unknown property type error.
    pub fn invalid_type_error(
        &self,
        entity: impl Into<String>,
        property: impl Into<String>,
        ty: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPropertyType {
            src: self.named_source(),
            span,
            entity: entity.into(),
            property: property.into(),
            ty: ty.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the schema location with '--schema <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema")]
    #[diagnostic(code(metagen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("entity '{entity}' declares no parents")]
    #[diagnostic(
        code(metagen::missing_parents),
        help("add `parents = [\"{root}\"]` to place '{entity}' directly under the root")
    )]
    MissingParents {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        entity: String,
        root: String,
    },

    #[error("unknown parent '{parent}' on entity '{entity}'")]
    #[diagnostic(
        code(metagen::unknown_parent),
        help("declare [entities.{parent}] or use the schema root as the parent")
    )]
    UnknownParent {
        #[source_code]
        src: NamedSource<String>,
        #[label("not the root or a declared entity")]
        span: SourceSpan,
        entity: String,
        parent: String,
    },

    #[error("entity '{entity}' lists itself as a parent")]
    #[diagnostic(
        code(metagen::self_parent),
        help("a containment path must end at the root; remove '{entity}' from its own parents")
    )]
    SelfParent {
        #[source_code]
        src: NamedSource<String>,
        #[label("self-referential parent")]
        span: SourceSpan,
        entity: String,
    },

    #[error("duplicate parent '{parent}' on entity '{entity}'")]
    #[diagnostic(code(metagen::duplicate_parent), help("list each parent once"))]
    DuplicateParent {
        #[source_code]
        src: NamedSource<String>,
        #[label("first listed here")]
        first_span: SourceSpan,
        #[label("listed again here")]
        second_span: SourceSpan,
        entity: String,
        parent: String,
    },

    #[error("entity '{root}' has the same name as the schema root")]
    #[diagnostic(
        code(metagen::root_collision),
        help("the root is implicit and cannot carry properties; rename the entity")
    )]
    RootCollision {
        #[source_code]
        src: NamedSource<String>,
        #[label("collides with the root")]
        span: Option<SourceSpan>,
        root: String,
    },

    #[error("invalid type '{ty}' for property '{entity}.{property}'")]
    #[diagnostic(
        code(metagen::invalid_type),
        help(
            "valid types are: string, bool, int, uint, long, float, quantity, or the name of an enum declared under [enums]"
        )
    )]
    InvalidPropertyType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        entity: String,
        property: String,
        ty: String,
    },

    #[error("{message}")]
    #[diagnostic(code(metagen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is reserved in generated code")]
    #[diagnostic(help("rename the {context} '{name}' to something else"))]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved name used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, numbers, and underscores, starting with a letter."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}
