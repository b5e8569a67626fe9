//! Snapshot tests for Rust code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use metagen_codegen::pipeline::Pipeline;
use metagen_codegen_rust::{Generator, LanguageCodegen};
use metagen_schema::Schema;

const PLATES: &str = r#"
[schema]
name = "plates"
root = "Document"

[entities.Plate]
parents = ["Document"]
properties.Name = "string"

[entities.Well]
parents = ["Plate"]
properties.Color = "int"
"#;

const ANNOTATIONS: &str = r#"
[schema]
name = "annotations"
root = "Document"

[enums.Kind]
values = ["Plain", "Rich"]

[entities.Instrument]
parents = ["Document"]

[entities.LightSource]
parents = ["Instrument"]

[entities.AnnotationRef]
parents = ["Instrument", "LightSource"]
properties.Value = "string"
properties.Kind = "Kind"
"#;

/// Compile a schema and return the generated files by path.
fn generate_files(schema_toml: &str) -> Vec<(String, String)> {
    let schema: Schema = schema_toml.parse().expect("Failed to parse schema");
    let ctx = Pipeline::new().run(schema).expect("Failed to compile schema");
    let (ir, model) = ctx.into_parts().expect("Pipeline produced no model");
    Generator::new(&ir, &model)
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
        .unwrap_or_else(|| panic!("{path} not generated"))
}

#[test]
fn test_retrieve_trait() {
    let files = generate_files(PLATES);
    insta::assert_snapshot!("plates_retrieve", get_file(&files, "retrieve.rs"));
}

#[test]
fn test_mod_without_enums() {
    let files = generate_files(PLATES);
    insta::assert_snapshot!("plates_mod", get_file(&files, "mod.rs"));
}

#[test]
fn test_mod_with_enums() {
    let files = generate_files(ANNOTATIONS);
    assert!(get_file(&files, "mod.rs").contains("pub use enums::*;\n"));
    assert!(get_file(&files, "enums.rs").contains("pub enum Kind {\n    Plain,\n    Rich,\n}\n"));
}

#[test]
fn test_store_trait() {
    let files = generate_files(PLATES);
    let store = get_file(&files, "store.rs");

    assert!(store.contains("/// Write access to plates metadata.\npub trait MetadataStore {\n"));
    assert!(store.contains("    fn set_root(&mut self, root: Root) -> Result<(), Unsupported>;\n"));
    assert!(store.contains(
        "    // Well: Plate/Well\n    \
         fn set_well_color(&mut self, color: i32, plate_index: usize, well_index: usize);\n"
    ));
}

#[test]
fn test_aggregate_reads_first_and_writes_all() {
    let files = generate_files(PLATES);
    let aggregate = get_file(&files, "aggregate.rs");

    assert!(aggregate.contains("    delegates: Aggregate<dyn MetadataRetrieve, dyn MetadataStore>,\n"));
    assert!(aggregate.contains(
        "    fn root(&self) -> Result<Option<Root>, Unsupported> {\n        \
         Err(Unsupported::new(\"root\", \"AggregateMetadata\"))\n    }\n"
    ));
    assert!(aggregate.contains(
        "    fn well_count(&self, plate_index: usize) -> Option<usize> {\n        \
         self.delegates.first(|d| d.well_count(plate_index))\n    }\n"
    ));
    // Strings are cloned per delegate, copy values are not
    assert!(aggregate.contains(
        "self.delegates.broadcast(|d| d.set_plate_name(name.clone(), plate_index));"
    ));
    assert!(aggregate.contains(
        "self.delegates.broadcast(|d| d.set_well_color(color, plate_index, well_index));"
    ));
    assert!(aggregate.contains("impl<T: MetadataStore + 'static> Delegate<dyn MetadataRetrieve, dyn MetadataStore> for StoreOnly<T> {\n"));
}

#[test]
fn test_dummy_answers_nothing() {
    let files = generate_files(PLATES);
    let dummy = get_file(&files, "dummy.rs");

    assert!(dummy.contains("#[derive(Debug, Default, Clone, Copy)]\npub struct DummyMetadata;\n"));
    assert!(dummy.contains(
        "    fn well_color(&self, _plate_index: usize, _well_index: usize) -> Option<i32> {\n        \
         None\n    }\n"
    ));
    assert!(dummy.contains(
        "    fn set_plate_name(&mut self, _name: String, _plate_index: usize) {}\n"
    ));
    assert!(dummy.contains(
        "    fn set_root(&mut self, _root: Root) -> Result<(), Unsupported> {\n        \
         Ok(())\n    }\n"
    ));
}

#[test]
fn test_memory_registers_ancestors() {
    let files = generate_files(PLATES);
    let memory = get_file(&files, "memory.rs");

    assert!(memory.contains("    well_color: IndexedTable<i32>,\n"));
    assert!(memory.contains(
        "    fn set_well_color(&mut self, color: i32, plate_index: usize, well_index: usize) {\n        \
         self.well_color.set(&[plate_index, well_index], color);\n        \
         self.well_count.insert(&[plate_index, well_index]);\n        \
         self.plate_count.insert(&[plate_index]);\n    }\n"
    ));
    assert!(memory.contains("        self.plate_count.count(&[])\n"));
    assert!(memory.contains("        self.plate_name.get(&[plate_index]).cloned()\n"));
    assert!(memory.contains("        self.well_color.get(&[plate_index, well_index]).copied()\n"));
}

#[test]
fn test_multi_path_families() {
    let files = generate_files(ANNOTATIONS);
    let retrieve = get_file(&files, "retrieve.rs");

    assert!(retrieve.contains("    // InstrumentAnnotationRef: Instrument/AnnotationRef\n"));
    assert!(retrieve.contains(
        "    fn light_source_annotation_ref_kind(&self, instrument_index: usize, \
         light_source_index: usize, annotation_ref_index: usize) \
         -> Option<super::enums::Kind>;\n"
    ));

    let memory = get_file(&files, "memory.rs");
    assert!(memory.contains(
        "        self.light_source_annotation_ref_count.insert(&[instrument_index, light_source_index, annotation_ref_index]);\n        \
         self.light_source_count.insert(&[instrument_index, light_source_index]);\n        \
         self.instrument_count.insert(&[instrument_index]);\n"
    ));
}

#[test]
fn test_every_file_carries_header() {
    for (path, content) in generate_files(ANNOTATIONS) {
        assert!(
            content.starts_with(metagen_core::GENERATED_HEADER),
            "{path} is missing the generated header"
        );
        assert!(!content.contains("//!"), "{path} has an inner doc comment");
    }
}
