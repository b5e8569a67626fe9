//! Schema types and parsing for metagen schema files.

mod file;
mod parse;
mod property;
mod validate;

pub use file::SchemaFile;
use indexmap::IndexMap;
pub use parse::parse_schema;
pub use property::{Primitive, Property};
use serde::Deserialize;
use toml::Spanned;
pub use validate::ParseContext;

/// Root of a schema file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// Schema metadata, including the name of the document root
    pub schema: SchemaMeta,

    /// Enumerations referenced by property types
    #[serde(default)]
    pub enums: IndexMap<String, EnumDef>,

    /// Entities in declaration order
    #[serde(default)]
    pub entities: IndexMap<String, Entity>,
}

/// The `[schema]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaMeta {
    pub name: String,
    pub version: Option<String>,
    /// Name of the implicit document root
    pub root: String,
    pub description: Option<String>,
}

/// A closed set of string values.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDef {
    pub values: Vec<String>,
    pub description: Option<String>,
}

/// A named schema node.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entity {
    /// Declared parents, in declaration order. Either the root or other entities.
    #[serde(default)]
    pub parents: Vec<Spanned<String>>,

    pub description: Option<String>,

    #[serde(default)]
    pub properties: IndexMap<String, Property>,
}

impl Entity {
    /// Declared parent names in declaration order.
    pub fn parent_names(&self) -> impl Iterator<Item = &str> {
        self.parents.iter().map(|p| p.get_ref().as_str())
    }

    /// Whether the entity is reachable through more than one declared parent.
    pub fn has_multiple_parents(&self) -> bool {
        self.parents.len() > 1
    }
}

impl Schema {
    /// Name of the document root.
    pub fn root(&self) -> &str {
        &self.schema.root
    }

    /// Check if a name refers to the document root.
    pub fn is_root(&self, name: &str) -> bool {
        self.schema.root == name
    }

    /// Look up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Check if an enumeration with the given name exists.
    pub fn has_enum(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    /// Entities that list `name` as one of their parents, in declaration order.
    pub fn children_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (&'a str, &'a Entity)> {
        self.entities
            .iter()
            .filter(move |(_, entity)| entity.parent_names().any(|p| p == name))
            .map(|(child, entity)| (child.as_str(), entity))
    }

    /// Total number of properties across all entities.
    pub fn property_count(&self) -> usize {
        self.entities.values().map(|e| e.properties.len()).sum()
    }
}
