//! Copying one metadata view into another store.

use metagen_fixtures::{
    AggregateMetadata, DetectorType, FilterMetadata, InMemoryMetadata, MetadataRetrieve,
    MetadataStore, convert_metadata,
};
use metagen_runtime::{Delegate, Quantity};

fn populated() -> InMemoryMetadata {
    let mut store = InMemoryMetadata::new();
    store.set_plate_name("P1".into(), 0);
    store.set_plate_rows(8, 0);
    store.set_well_color(7, 0, 0);
    store.set_well_color(9, 0, 2);
    store.set_well_row(3, 1, 0);
    store.set_image_tags(vec!["a".into(), "b".into()], 0);
    store.set_plane_position_x(Quantity::new(1.5, "µm"), 0, 1);
    store.set_detector_type(DetectorType::CCD, 0, 0);
    store.set_instrument_annotation_ref_id("direct".into(), 0, 0);
    store.set_light_source_annotation_ref_id("nested".into(), 0, 1, 0);
    store
}

#[test]
fn test_round_trip_into_empty_store() {
    let src = populated();
    let mut dest = InMemoryMetadata::new();
    convert_metadata(&src, &mut dest);

    assert_eq!(dest.plate_name(0).as_deref(), Some("P1"));
    assert_eq!(dest.plate_rows(0), Some(8));
    assert_eq!(dest.plate_count(), Some(2));
    assert_eq!(dest.well_count(0), Some(3));
    assert_eq!(dest.well_color(0, 0), Some(7));
    assert_eq!(dest.well_color(0, 1), None);
    assert_eq!(dest.well_color(0, 2), Some(9));
    assert_eq!(dest.well_row(1, 0), Some(3));
    assert_eq!(dest.image_tags(0), Some(vec!["a".to_string(), "b".to_string()]));
    assert_eq!(dest.plane_position_x(0, 1), Some(Quantity::new(1.5, "µm")));
    assert_eq!(dest.detector_type(0, 0), Some(DetectorType::CCD));
}

#[test]
fn test_round_trip_follows_every_path() {
    let src = populated();
    let mut dest = InMemoryMetadata::new();
    convert_metadata(&src, &mut dest);

    assert_eq!(dest.instrument_annotation_ref_count(0), Some(1));
    assert_eq!(dest.instrument_annotation_ref_id(0, 0).as_deref(), Some("direct"));
    assert_eq!(dest.light_source_annotation_ref_count(0, 1), Some(1));
    assert_eq!(dest.light_source_annotation_ref_count(0, 0), None);
    assert_eq!(
        dest.light_source_annotation_ref_id(0, 1, 0).as_deref(),
        Some("nested")
    );
}

#[test]
fn test_empty_source_writes_nothing() {
    let mut dest = InMemoryMetadata::new();
    dest.set_plate_name("kept".into(), 0);
    convert_metadata(&InMemoryMetadata::new(), &mut dest);

    assert_eq!(dest.plate_name(0).as_deref(), Some("kept"));
    assert_eq!(dest.image_count(), None);
}

#[test]
fn test_convert_from_aggregate_into_filter() {
    let delegates: Vec<Box<dyn Delegate<dyn MetadataRetrieve, dyn MetadataStore>>> =
        vec![Box::new(populated())];
    let src = AggregateMetadata::new(delegates);

    let mut src_store = InMemoryMetadata::new();
    src_store.set_instrument_model("scope\u{1b}".into(), 0);
    let mut dest = FilterMetadata::new(InMemoryMetadata::new(), true);
    convert_metadata(&src, &mut dest);
    convert_metadata(&src_store, &mut dest);

    let dest = dest.into_inner();
    assert_eq!(dest.plate_name(0).as_deref(), Some("P1"));
    assert_eq!(dest.instrument_model(0).as_deref(), Some("scope"));
}
