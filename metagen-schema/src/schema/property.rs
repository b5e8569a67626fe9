use serde::Deserialize;

/// A property of an entity.
///
/// Accepts either a shorthand type string or a table:
///
/// ```toml
/// properties.Name = "string"
///
/// [entities.Plane.properties.PositionX]
/// type = "quantity"
/// unit = "Length"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PropertyField")]
pub struct Property {
    /// Raw type name: a primitive or the name of a declared enum
    pub ty: String,
    /// Unit kind for quantity properties
    pub unit: Option<String>,
    pub repeated: bool,
    pub description: Option<String>,
}

impl Property {
    /// The primitive type, or `None` when the type names an enumeration.
    pub fn primitive(&self) -> Option<Primitive> {
        Primitive::from_name(&self.ty)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PropertyField {
    Short(String),
    Full(PropertyTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyTable {
    #[serde(rename = "type")]
    ty: String,
    unit: Option<String>,
    #[serde(default)]
    repeated: bool,
    description: Option<String>,
}

impl From<PropertyField> for Property {
    fn from(field: PropertyField) -> Self {
        match field {
            PropertyField::Short(ty) => Self {
                ty,
                unit: None,
                repeated: false,
                description: None,
            },
            PropertyField::Full(table) => Self {
                ty: table.ty,
                unit: table.unit,
                repeated: table.repeated,
                description: table.description,
            },
        }
    }
}

/// Built-in property value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Bool,
    /// Signed 32-bit integer
    Int,
    /// Non-negative 32-bit integer
    UInt,
    /// Signed 64-bit integer
    Long,
    /// 64-bit float
    Float,
    /// Numeric value with a unit
    Quantity,
}

impl Primitive {
    pub const ALL: [Primitive; 7] = [
        Primitive::String,
        Primitive::Bool,
        Primitive::Int,
        Primitive::UInt,
        Primitive::Long,
        Primitive::Float,
        Primitive::Quantity,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Bool => "bool",
            Primitive::Int => "int",
            Primitive::UInt => "uint",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Quantity => "quantity",
        }
    }
}
