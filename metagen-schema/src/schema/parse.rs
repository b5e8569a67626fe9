//! Schema parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use super::{Entity, Schema, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.toml")
    }
}

impl Schema {
    /// Parse a schema file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_schema(&content, &path.display().to_string())
    }

    /// Parse a schema from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_schema(content, filename)
    }
}

/// Parse a schema from content with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    let source_ctx = SourceContext::new(content, filename);
    let schema: Schema = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_schema(&schema, content, filename)?;
    Ok(schema)
}

/// Validate the schema after parsing.
fn validate_schema(schema: &Schema, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.validate_name(schema.root(), "root")?;

    for (name, def) in &schema.enums {
        ctx.validate_name(name, "enum")?;

        if def.values.is_empty() {
            return Err(ctx.source_context().validation_error_at(
                format!("enum '{}' declares no values", name),
                ctx.find_span(name),
            ));
        }

        // Values become PascalCase variants, so "on" and "On" collide.
        let enum_ctx = ctx.push(name);
        let mut variants: HashMap<String, &str> = HashMap::new();
        for value in &def.values {
            enum_ctx.validate_value_name(value, "enum value")?;
            let variant = metagen_core::to_pascal_case(value);
            if let Some(first) = variants.insert(variant, value.as_str()) {
                let message = if first == value.as_str() {
                    format!("duplicate value '{}' in enum '{}'", value, name)
                } else {
                    format!(
                        "values '{}' and '{}' in enum '{}' map to the same variant",
                        first, value, name
                    )
                };
                return Err(ctx
                    .source_context()
                    .validation_error_at(message, ctx.find_value_span(value)));
            }
        }
    }

    for (name, entity) in &schema.entities {
        ctx.validate_name(name, "entity")?;

        if schema.is_root(name) {
            return Err(ctx
                .source_context()
                .root_collision_error(name, ctx.find_span(name)));
        }

        let entity_ctx = ctx.push(name);
        validate_parents(schema, name, entity, &entity_ctx)?;
        validate_properties(schema, name, entity, &entity_ctx)?;
    }

    Ok(())
}

fn validate_parents(
    schema: &Schema,
    name: &str,
    entity: &Entity,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    let source = ctx.source_context();

    if entity.parents.is_empty() {
        return Err(source.missing_parents_error(name, schema.root(), ctx.find_span(name)));
    }

    let mut seen = HashMap::new();
    for parent in &entity.parents {
        let parent_name = parent.get_ref().as_str();

        if parent_name == name {
            return Err(source.self_parent_error(name, parent.span()));
        }

        if !schema.is_root(parent_name) && schema.entity(parent_name).is_none() {
            return Err(source.unknown_parent_error(name, parent_name, parent.span()));
        }

        if let Some(first) = seen.insert(parent_name, parent.span()) {
            return Err(source.duplicate_parent_error(name, parent_name, first, parent.span()));
        }
    }

    Ok(())
}

fn validate_properties(
    schema: &Schema,
    entity_name: &str,
    entity: &Entity,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    for (name, property) in &entity.properties {
        ctx.validate_name(name, "property")?;

        let primitive = property.primitive();
        if primitive.is_none() && !schema.has_enum(&property.ty) {
            return Err(ctx.source_context().invalid_type_error(
                entity_name,
                name,
                &property.ty,
                ctx.find_value_span(&property.ty),
            ));
        }

        if property.unit.is_some() && primitive != Some(super::Primitive::Quantity) {
            return Err(ctx.source_context().validation_error_at(
                format!(
                    "property '{}.{}' has a unit but is not a quantity",
                    entity_name, name
                ),
                ctx.find_span(name),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "[schema]\nname = \"test\"\nroot = \"Document\"\n\n";

    fn parse(body: &str) -> Result<Schema> {
        Schema::from_str(&format!("{HEADER}{body}"))
    }

    fn parse_err(body: &str) -> Error {
        *parse(body).err().expect("expected a schema error")
    }

    #[test]
    fn test_parse_minimal_schema() {
        let schema = parse(
            r#"
[entities.Plate]
parents = ["Document"]
properties.Name = "string"
properties.Rows = "uint"

[entities.Well]
parents = ["Plate"]
properties.Color = "int"
"#,
        )
        .unwrap();

        assert_eq!(schema.root(), "Document");
        let names: Vec<_> = schema.entities.keys().map(String::as_str).collect();
        assert_eq!(names, ["Plate", "Well"]);

        let plate = schema.entity("Plate").unwrap();
        let props: Vec<_> = plate.properties.keys().map(String::as_str).collect();
        assert_eq!(props, ["Name", "Rows"]);
        assert_eq!(
            schema.entity("Well").unwrap().parent_names().collect::<Vec<_>>(),
            ["Plate"]
        );
    }

    #[test]
    fn test_parent_order_is_declaration_order() {
        let schema = parse(
            r#"
[entities.LightSource]
parents = ["Document"]

[entities.Instrument]
parents = ["Document"]

[entities.AnnotationRef]
parents = ["LightSource", "Instrument"]
"#,
        )
        .unwrap();

        let entity = schema.entity("AnnotationRef").unwrap();
        assert!(entity.has_multiple_parents());
        assert_eq!(
            entity.parent_names().collect::<Vec<_>>(),
            ["LightSource", "Instrument"]
        );
        let children: Vec<_> = schema.children_of("Instrument").map(|(n, _)| n).collect();
        assert_eq!(children, ["AnnotationRef"]);
    }

    #[test]
    fn test_enum_property_type() {
        let schema = parse(
            r#"
[enums.DetectorType]
values = ["CCD", "PMT"]

[entities.Detector]
parents = ["Document"]
properties.Type = "DetectorType"
"#,
        )
        .unwrap();

        let property = &schema.entity("Detector").unwrap().properties["Type"];
        assert_eq!(property.primitive(), None);
        assert!(schema.has_enum(&property.ty));
    }

    #[test]
    fn test_malformed_toml() {
        let err = parse_err("[entities.Plate\n");
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field() {
        let err = parse_err("[entities.Plate]\nparents = [\"Document\"]\nchildren = []\n");
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_parents() {
        let err = parse_err("[entities.Plate]\nproperties.Name = \"string\"\n");
        assert!(matches!(err, Error::MissingParents { ref entity, .. } if entity == "Plate"));
    }

    #[test]
    fn test_unknown_parent_points_at_reference() {
        let body = "[entities.Well]\nparents = [\"Plate\"]\n";
        let err = parse_err(body);
        match err {
            Error::UnknownParent {
                parent, span, src, ..
            } => {
                assert_eq!(parent, "Plate");
                let text = src.inner();
                let quoted = &text[span.offset()..span.offset() + span.len()];
                assert!(quoted.contains("Plate"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_self_parent() {
        let err = parse_err("[entities.Shape]\nparents = [\"Document\", \"Shape\"]\n");
        assert!(matches!(err, Error::SelfParent { ref entity, .. } if entity == "Shape"));
    }

    #[test]
    fn test_duplicate_parent() {
        let err = parse_err("[entities.Plate]\nparents = [\"Document\", \"Document\"]\n");
        assert!(matches!(err, Error::DuplicateParent { ref parent, .. } if parent == "Document"));
    }

    #[test]
    fn test_entity_named_like_root() {
        let err = parse_err("[entities.Document]\nparents = [\"Document\"]\n");
        assert!(matches!(err, Error::RootCollision { .. }));
    }

    #[test]
    fn test_invalid_property_type() {
        let err = parse_err("[entities.Plate]\nparents = [\"Document\"]\nproperties.Rows = \"integer\"\n");
        assert!(matches!(err, Error::InvalidPropertyType { ref ty, .. } if ty == "integer"));
    }

    #[test]
    fn test_unit_on_non_quantity() {
        let err = parse_err(
            "[entities.Plate]\nparents = [\"Document\"]\nproperties.Rows = { type = \"uint\", unit = \"Length\" }\n",
        );
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_enum() {
        let err = parse_err("[enums.Binning]\nvalues = []\n");
        assert!(matches!(err, Error::Validation { ref message, .. } if message.contains("no values")));
    }

    #[test]
    fn test_duplicate_enum_value() {
        let err = parse_err("[enums.Binning]\nvalues = [\"One\", \"One\"]\n");
        assert!(matches!(err, Error::Validation { ref message, .. } if message.contains("duplicate")));
    }

    #[test]
    fn test_enum_values_colliding_as_variants() {
        let err = parse_err("[enums.Mode]\nvalues = [\"on\", \"On\"]\n");
        assert!(
            matches!(err, Error::Validation { ref message, .. } if message.contains("'on' and 'On'"))
        );
    }

    #[test]
    fn test_enum_named_like_parse_error() {
        let err = parse_err("[enums.ParseEnumError]\nvalues = [\"A\", \"B\"]\n");
        assert!(matches!(err, Error::ReservedKeyword { ref name, .. } if name == "ParseEnumError"));
    }

    #[test]
    fn test_invalid_enum_value() {
        let err = parse_err("[enums.Binning]\nvalues = [\"2x2\"]\n");
        assert!(
            matches!(err, Error::InvalidIdentifier { ref name, ref context, .. } if name == "2x2" && context == "enum value in 'Binning'")
        );
    }

    #[test]
    fn test_invalid_entity_name() {
        let err = parse_err("[entities.my-entity]\nparents = [\"Document\"]\n");
        assert!(matches!(err, Error::InvalidIdentifier { ref context, .. } if context == "entity"));
    }

    #[test]
    fn test_reserved_property_name() {
        let err = parse_err("[entities.Plate]\nparents = [\"Document\"]\nproperties.Self = \"string\"\n");
        assert!(matches!(err, Error::ReservedKeyword { ref name, .. } if name == "Self"));
    }

    #[test]
    fn test_missing_file() {
        let err = Schema::from_file("definitely/not/here.toml").err().unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_filename_in_error_source() {
        let err = Schema::from_str_with_filename("[schema]\n", "screening.toml")
            .err()
            .unwrap();
        match *err {
            Error::Parse { src, .. } => assert_eq!(src.name(), "screening.toml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
