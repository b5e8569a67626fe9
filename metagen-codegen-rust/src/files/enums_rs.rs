use std::path::{Path, PathBuf};

use metagen_core::GeneratedFile;
use metagen_ir::EnumIR;

use crate::{
    RUST_NAMING,
    ast::{Arm, Enum, Field, Fn, Impl, Match, Param, Receiver, Struct, Variant},
    rust_file::{RawCode, RustFile},
};

const PARSE_ERROR: &str = "ParseEnumError";

/// `enums.rs`: one Rust enum per schema enumeration.
pub struct EnumsRs<'a> {
    enums: &'a [EnumIR],
}

impl<'a> EnumsRs<'a> {
    pub fn new(enums: &'a [EnumIR]) -> Self {
        Self { enums }
    }
}

impl GeneratedFile for EnumsRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("enums.rs")
    }

    fn render(&self) -> String {
        if self.enums.is_empty() {
            return String::new();
        }

        let mut file = RustFile::new()
            .add(
                Struct::new(PARSE_ERROR)
                    .doc("Error returned when a string is not a value of an enumeration.")
                    .derives(["Debug", "Clone", "PartialEq", "Eq"])
                    .field(Field::new("enumeration", "&'static str").public())
                    .field(Field::new("value", "String").public()),
            )
            .add(Impl::new(PARSE_ERROR).for_trait("std::fmt::Display").method(fmt_fn(
                "write!(f, \"invalid {} value: {}\", self.enumeration, self.value)",
            )))
            .add(RawCode::new(format!("impl std::error::Error for {PARSE_ERROR} {{}}")));

        for def in self.enums {
            file = render_enum(file, def);
        }
        file.render()
    }
}

fn fmt_fn(body: &str) -> Fn {
    Fn::method("fmt", Receiver::Ref)
        .param(Param::new("f", "&mut std::fmt::Formatter<'_>"))
        .returns("std::fmt::Result")
        .body_line(body)
}

fn render_enum(file: RustFile, def: &EnumIR) -> RustFile {
    let name = RUST_NAMING.type_ident(&def.name);
    let variants: Vec<(String, &str)> = def
        .values
        .iter()
        .map(|v| (RUST_NAMING.type_ident(v), v.as_str()))
        .collect();

    let mut enumeration =
        Enum::new(&name).derives(["Debug", "Clone", "Copy", "PartialEq", "Eq", "Hash"]);
    if let Some(doc) = &def.description {
        enumeration = enumeration.doc(doc);
    }
    for (variant, _) in &variants {
        enumeration = enumeration.variant(Variant::new(variant));
    }

    let all = variants
        .iter()
        .map(|(v, _)| format!("{name}::{v}"))
        .collect::<Vec<_>>()
        .join(", ");

    let as_str = Match::new("self").arms(
        variants
            .iter()
            .map(|(v, value)| Arm::new(format!("{name}::{v}"), format!("{value:?}"))),
    );

    let from_str = Match::new("s")
        .arms(
            variants
                .iter()
                .map(|(v, value)| Arm::new(format!("{value:?}"), format!("Ok({name}::{v})"))),
        )
        .arm(Arm::new(
            "_",
            format!(
                "Err({PARSE_ERROR} {{ enumeration: {:?}, value: s.to_string() }})",
                def.name
            ),
        ));

    file.add(enumeration)
        .add(
            Impl::new(&name)
                .item(RawCode::new(format!(
                    "pub const ALL: [{name}; {}] = [{all}];",
                    variants.len()
                )))
                .method(
                    Fn::method("as_str", Receiver::Value)
                        .public()
                        .doc("The value as written in the schema.")
                        .returns("&'static str")
                        .body(as_str.build()),
                ),
        )
        .add(
            Impl::new(&name)
                .for_trait("std::fmt::Display")
                .method(fmt_fn("f.write_str(self.as_str())")),
        )
        .add(
            Impl::new(&name)
                .for_trait("std::str::FromStr")
                .item(RawCode::new(format!("type Err = {PARSE_ERROR};")))
                .method(
                    Fn::new("from_str")
                        .private()
                        .param(Param::new("s", "&str"))
                        .returns("Result<Self, Self::Err>")
                        .body(from_str.build()),
                ),
        )
}
