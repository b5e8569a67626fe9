//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Accessor names in the IR are PascalCase stems (`SetWellColor`); a
/// convention maps them to the target language's identifiers.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a stem into a type name (e.g., "DetectorType" -> "DetectorType")
    pub type_name: fn(&str) -> String,
    /// Transform a stem into a method name (e.g., "SetWellColor" -> "set_well_color")
    pub method_name: fn(&str) -> String,
    /// Transform a property or entity name into a parameter or field name
    pub field_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_ident(&self, name: &str) -> String {
        self.safe_name(&(self.type_name)(name))
    }

    pub fn method_ident(&self, name: &str) -> String {
        self.safe_name(&(self.method_name)(name))
    }

    pub fn field_ident(&self, name: &str) -> String {
        self.safe_name(&(self.field_name)(name))
    }
}
