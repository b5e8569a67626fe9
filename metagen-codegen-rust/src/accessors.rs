//! Rust signatures for synthesized accessors.
//!
//! Every generated file implements the same accessor set; these helpers
//! produce the shared signatures so that only the bodies differ.

use metagen_codegen::language::TypeMapper;
use metagen_ir::{AccessorFamily, GetAccessor, IndexParam, SetAccessor};

use crate::{
    RUST_NAMING, RustTypeMapper,
    ast::{Fn, Param, Receiver},
};

pub(crate) fn method_name(stem: &str) -> String {
    RUST_NAMING.method_ident(stem)
}

pub(crate) fn index_params(params: &[IndexParam]) -> Vec<Param> {
    params.iter().map(|p| Param::new(&p.name, "usize")).collect()
}

/// Index arguments for forwarding a call: `plate_index, well_index`.
pub(crate) fn index_args(params: &[IndexParam]) -> String {
    params
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Index chain literal: `&[plate_index, well_index]`.
pub(crate) fn index_chain(params: &[IndexParam]) -> String {
    format!("&[{}]", index_args(params))
}

/// Name of the value parameter of a set accessor.
pub(crate) fn value_name(setter: &SetAccessor) -> String {
    RUST_NAMING.field_ident(&setter.value)
}

/// Arguments for forwarding a set call: `value, plate_index, well_index`.
pub(crate) fn set_args(setter: &SetAccessor, value: &str) -> String {
    if setter.params.is_empty() {
        value.to_string()
    } else {
        format!("{value}, {}", index_args(&setter.params))
    }
}

/// Comment heading an accessor family, with the path when it adds detail.
pub(crate) fn family_comment(family: &AccessorFamily) -> String {
    let path = family.path.display();
    if path == family.name {
        family.name.clone()
    } else {
        format!("{}: {}", family.name, path)
    }
}

/// `fn root(&self) -> Result<Option<Root>, Unsupported>`
pub(crate) fn root_fn() -> Fn {
    Fn::method("root", Receiver::Ref).returns("Result<Option<Root>, Unsupported>")
}

/// `fn set_root(&mut self, root: Root) -> Result<(), Unsupported>`
pub(crate) fn set_root_fn() -> Fn {
    Fn::method("set_root", Receiver::Mut)
        .param(Param::new("root", "Root"))
        .returns("Result<(), Unsupported>")
}

pub(crate) fn count_fn(family: &AccessorFamily) -> Fn {
    Fn::method(method_name(&family.count.name), Receiver::Ref)
        .params(index_params(&family.count.params))
        .returns("Option<usize>")
}

pub(crate) fn get_fn(getter: &GetAccessor) -> Fn {
    let mapper = RustTypeMapper;
    let ty = mapper.map_property(&getter.ty, getter.cardinality);
    Fn::method(method_name(&getter.name), Receiver::Ref)
        .params(index_params(&getter.params))
        .returns(mapper.map_optional(&ty))
}

pub(crate) fn set_fn(setter: &SetAccessor) -> Fn {
    let ty = RustTypeMapper.map_property(&setter.ty, setter.cardinality);
    Fn::method(method_name(&setter.name), Receiver::Mut)
        .param(Param::new(value_name(setter), ty))
        .params(index_params(&setter.params))
}

#[cfg(test)]
mod tests {
    use metagen_ir::{Cardinality, ValueType};

    use super::*;

    fn params(names: &[&str]) -> Vec<IndexParam> {
        names
            .iter()
            .map(|n| IndexParam {
                name: format!("{}_index", n.to_lowercase()),
                entity: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_get_signature() {
        let getter = GetAccessor {
            name: "WellColor".into(),
            property: "Color".into(),
            ty: ValueType::Int,
            cardinality: Cardinality::Scalar,
            params: params(&["Plate", "Well"]),
        };
        assert_eq!(
            get_fn(&getter).declaration().build(),
            "fn well_color(&self, plate_index: usize, well_index: usize) -> Option<i32>;\n"
        );
    }

    #[test]
    fn test_set_signature_escapes_value() {
        let setter = SetAccessor {
            name: "SetDetectorType".into(),
            property: "Type".into(),
            value: "type".into(),
            ty: ValueType::Enum {
                name: "DetectorType".into(),
            },
            cardinality: Cardinality::Scalar,
            params: params(&["Detector"]),
        };
        assert_eq!(
            set_fn(&setter).declaration().build(),
            "fn set_detector_type(&mut self, r#type: super::enums::DetectorType, detector_index: usize);\n"
        );
        assert_eq!(set_args(&setter, "r#type"), "r#type, detector_index");
    }

    #[test]
    fn test_index_chain() {
        assert_eq!(index_chain(&params(&["Plate", "Well"])), "&[plate_index, well_index]");
        assert_eq!(index_chain(&[]), "&[]");
    }
}
