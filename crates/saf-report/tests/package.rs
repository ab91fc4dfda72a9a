//! Package emission tests over temporary input and output trees.

use std::fs;
use std::io::Read;
use std::path::Path;

use saf_core::group_into;
use saf_ingest::Row;
use saf_model::layout::{ARCHIVE_FILE_NAME, UNZIPPED_DIR_NAME};
use saf_model::{Bitstream, BitstreamField, ConversionOptions, FieldSchema, Item, Namespace};
use saf_report::{
    DcValue, PackageEmitter, ReportError, emit_item, parse_metadata_xml, read_metadata_file,
    render_contents, render_metadata_xml,
};
use tempfile::TempDir;

fn input_dir(files: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    for name in files {
        fs::write(dir.path().join(name), format!("bytes of {name}")).expect("write input");
    }
    dir
}

fn item_with(fields: &[(&str, &str)], files: &[&str]) -> Item {
    let mut item = Item::new(&FieldSchema::default());
    for (name, value) in fields {
        item.set_field(name, *value).expect("set field");
    }
    for file in files {
        let mut bitstream = Bitstream::new();
        bitstream.set(BitstreamField::Filename, *file);
        item.add_bitstream(bitstream);
    }
    item
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn dublin_core_xml_layout() {
    let item = item_with(
        &[
            ("dc.title", "Harbour survey"),
            ("dc.contributor.author", "Hale, M."),
            ("dc.date.issued", "1921"),
        ],
        &[],
    );
    let xml = render_metadata_xml(&item, Namespace::DublinCore)
        .expect("render")
        .expect("primary file is always rendered");
    let xml = String::from_utf8(xml).expect("utf-8");
    assert!(xml.ends_with("</dublin_core>\n"));
    insta::assert_snapshot!(xml, @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <dublin_core>
      <dcvalue element="title">Harbour survey</dcvalue>
      <dcvalue element="contributor" qualifier="author">Hale, M.</dcvalue>
      <dcvalue element="date" qualifier="issued">1921</dcvalue>
    </dublin_core>
    "#);
}

#[test]
fn secondary_namespace_carries_schema_attribute() {
    let item = item_with(&[("dc.title", "A"), ("dspace.iiif.enabled", "true")], &[]);
    let xml = render_metadata_xml(&item, Namespace::Dspace)
        .expect("render")
        .expect("dspace field is set");
    let xml = String::from_utf8(xml).expect("utf-8");
    insta::assert_snapshot!(xml, @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <dublin_core schema="dspace">
      <dcvalue element="iiif" qualifier="enabled">true</dcvalue>
    </dublin_core>
    "#);
    assert!(
        render_metadata_xml(&item, Namespace::Iiif)
            .expect("render")
            .is_none()
    );
}

#[test]
fn metadata_round_trips_through_parser() {
    let item = item_with(
        &[
            ("dc.title", "Maps & <Charts>"),
            ("dc.description.abstract", "Coastal charts"),
            ("dc.subject", "Cartography"),
        ],
        &[],
    );
    let xml = render_metadata_xml(&item, Namespace::DublinCore)
        .expect("render")
        .expect("rendered");
    let doc = parse_metadata_xml(std::str::from_utf8(&xml).expect("utf-8")).expect("parse");

    assert_eq!(doc.schema, None);
    assert_eq!(
        doc.values,
        vec![
            DcValue {
                element: "title".to_string(),
                qualifier: None,
                value: "Maps & <Charts>".to_string(),
            },
            DcValue {
                element: "description".to_string(),
                qualifier: Some("abstract".to_string()),
                value: "Coastal charts".to_string(),
            },
            DcValue {
                element: "subject".to_string(),
                qualifier: None,
                value: "Cartography".to_string(),
            },
        ]
    );

    let padded = item_with(&[("dc.title", " Padded title "), ("dc.subject", "x\n")], &[]);
    let xml = render_metadata_xml(&padded, Namespace::DublinCore)
        .expect("render")
        .expect("rendered");
    let doc = parse_metadata_xml(std::str::from_utf8(&xml).expect("utf-8")).expect("parse");
    let values: Vec<&str> = doc.values.iter().map(|value| value.value.as_str()).collect();
    assert_eq!(values, vec![" Padded title ", "x\n"]);
}

#[test]
fn image_bitstreams_are_steered_to_alternate_bundle() {
    let item = item_with(&[("dc.title", "A")], &["x.PNG", "x.pdf"]);
    let options = ConversionOptions::default().with_alt_bundle(Some("illustrations".to_string()));
    assert_eq!(
        render_contents(&item, &options),
        "x.PNG\tbundle:illustrations\nx.pdf\n"
    );
    assert_eq!(
        render_contents(&item, &ConversionOptions::default()),
        "x.PNG\nx.pdf\n"
    );
}

#[test]
fn item_without_secondary_fields_writes_only_primary_files() {
    let input = input_dir(&["a.jpg"]);
    let output = TempDir::new().expect("tempdir");
    let item = item_with(&[("dc.title", "A")], &["a.jpg"]);

    let unit = emit_item(
        &item,
        input.path(),
        output.path(),
        1,
        &ConversionOptions::default(),
    )
    .expect("emit");

    assert_eq!(unit.dir, output.path().join("0001"));
    assert_eq!(
        file_names(&unit.dir),
        vec!["a.jpg", "contents", "dublin_core.xml"]
    );
    assert_eq!(unit.metadata_files.len(), 1);
    assert_eq!(
        fs::read_to_string(unit.dir.join("a.jpg")).expect("copied"),
        "bytes of a.jpg"
    );
}

#[test]
fn secondary_files_follow_set_fields() {
    let input = input_dir(&[]);
    let output = TempDir::new().expect("tempdir");
    let item = item_with(
        &[
            ("dc.title", "A"),
            ("dspace.iiif.enabled", "true"),
            ("iiif.canvas.naming", "Page"),
        ],
        &[],
    );

    let unit = emit_item(
        &item,
        input.path(),
        output.path(),
        7,
        &ConversionOptions::default(),
    )
    .expect("emit");

    assert_eq!(
        file_names(&unit.dir),
        vec![
            "contents",
            "dublin_core.xml",
            "metadata_dspace.xml",
            "metadata_iiif.xml"
        ]
    );
    let iiif = read_metadata_file(&unit.dir.join("metadata_iiif.xml")).expect("parse");
    assert_eq!(iiif.schema.as_deref(), Some("iiif"));
    assert_eq!(iiif.values[0].element, "canvas");
    assert_eq!(iiif.values[0].qualifier.as_deref(), Some("naming"));
    assert_eq!(
        fs::read_to_string(unit.dir.join("contents")).expect("contents"),
        ""
    );
}

#[test]
fn missing_source_file_is_fatal() {
    let input = input_dir(&[]);
    let output = TempDir::new().expect("tempdir");
    let item = item_with(&[("dc.title", "A")], &["absent.jpg"]);

    let err = emit_item(
        &item,
        input.path(),
        output.path(),
        1,
        &ConversionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::MissingSource { .. }));
}

#[test]
fn path_like_filenames_are_rejected() {
    let input = input_dir(&[]);
    let output = TempDir::new().expect("tempdir");
    let item = item_with(&[("dc.title", "A")], &["../escape.jpg"]);

    let err = emit_item(
        &item,
        input.path(),
        output.path(),
        1,
        &ConversionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::InvalidFilename { .. }));
}

#[test]
fn existing_item_directory_is_fatal() {
    let input = input_dir(&[]);
    let output = TempDir::new().expect("tempdir");
    fs::create_dir(output.path().join("0001")).expect("precreate");
    let item = item_with(&[("dc.title", "A")], &[]);

    let err = emit_item(
        &item,
        input.path(),
        output.path(),
        1,
        &ConversionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::DirectoryExists { .. }));
}

#[test]
fn emitter_refuses_existing_unzipped_tree() {
    let output = TempDir::new().expect("tempdir");
    fs::create_dir(output.path().join(UNZIPPED_DIR_NAME)).expect("precreate");
    let err = PackageEmitter::create(
        output.path(),
        output.path(),
        ConversionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::DirectoryExists { .. }));
}

#[test]
fn emitter_refuses_existing_archive() {
    let output = TempDir::new().expect("tempdir");
    fs::write(output.path().join(ARCHIVE_FILE_NAME), b"earlier run").expect("precreate");
    let err = PackageEmitter::create(
        output.path(),
        output.path(),
        ConversionOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::ArchiveExists { .. }));
    assert!(!output.path().join(UNZIPPED_DIR_NAME).exists());

    PackageEmitter::create(
        output.path(),
        output.path(),
        ConversionOptions::default().with_archive(false),
    )
    .expect("archive disabled");
}

fn sample_rows() -> Vec<Row> {
    let columns = ["dc.title", "Filename", "iiif.label"];
    [
        ["A", "a.jpg", ""],
        ["", "a2.jpg", "L"],
        ["B", "b.jpg", ""],
    ]
    .into_iter()
    .enumerate()
    .map(|(index, values)| Row::from_pairs(index, columns.into_iter().zip(values)))
    .collect()
}

fn run(input: &Path, output: &Path, options: ConversionOptions) -> saf_report::RunSummary {
    let mut emitter = PackageEmitter::create(input, output, options).expect("create emitter");
    let items = group_into(&sample_rows(), &FieldSchema::default(), &mut emitter).expect("group");
    assert_eq!(items, 2);
    emitter.finish().expect("finish")
}

#[test]
fn full_run_writes_items_and_archive() {
    let input = input_dir(&["a.jpg", "a2.jpg", "b.jpg"]);
    let output = TempDir::new().expect("tempdir");
    let out_root = output.path().join("out");

    let summary = run(input.path(), &out_root, ConversionOptions::default());
    assert_eq!(summary.items, 2);
    assert_eq!(summary.bitstreams, 3);
    assert_eq!(summary.metadata_files, 2);

    let items_dir = out_root.join(UNZIPPED_DIR_NAME);
    assert_eq!(file_names(&items_dir), vec!["0001", "0002"]);
    assert_eq!(
        fs::read_to_string(items_dir.join("0001").join("contents")).expect("contents"),
        "a.jpg\na2.jpg\tiiif-label:L\n"
    );

    let archive = summary.archive.expect("archive enabled by default");
    assert_eq!(archive.path, out_root.join(ARCHIVE_FILE_NAME));
    assert_eq!(
        archive.entries,
        vec![
            "saf-import/0001/a.jpg",
            "saf-import/0001/a2.jpg",
            "saf-import/0001/contents",
            "saf-import/0001/dublin_core.xml",
            "saf-import/0002/b.jpg",
            "saf-import/0002/contents",
            "saf-import/0002/dublin_core.xml",
        ]
    );

    let file = fs::File::open(&archive.path).expect("open archive");
    let mut zip = zip::ZipArchive::new(file).expect("read archive");
    assert_eq!(zip.len(), 7);
    let mut contents = String::new();
    zip.by_name("saf-import/0002/contents")
        .expect("entry")
        .read_to_string(&mut contents)
        .expect("read entry");
    assert_eq!(contents, "b.jpg\n");
}

#[test]
fn archive_can_be_disabled() {
    let input = input_dir(&["a.jpg", "a2.jpg", "b.jpg"]);
    let output = TempDir::new().expect("tempdir");

    let summary = run(
        input.path(),
        output.path(),
        ConversionOptions::default().with_archive(false),
    );
    assert!(summary.archive.is_none());
    assert!(!output.path().join(ARCHIVE_FILE_NAME).exists());
}

#[test]
fn identical_runs_produce_identical_trees() {
    let input = input_dir(&["a.jpg", "a2.jpg", "b.jpg"]);
    let first = TempDir::new().expect("tempdir");
    let second = TempDir::new().expect("tempdir");
    let options = ConversionOptions::default().with_alt_bundle(Some("illustrations".to_string()));

    run(input.path(), first.path(), options.clone());
    run(input.path(), second.path(), options);

    let left = first.path().join(UNZIPPED_DIR_NAME);
    let right = second.path().join(UNZIPPED_DIR_NAME);
    for unit in ["0001", "0002"] {
        let names = file_names(&left.join(unit));
        assert_eq!(names, file_names(&right.join(unit)));
        for name in names {
            assert_eq!(
                fs::read(left.join(unit).join(&name)).expect("left"),
                fs::read(right.join(unit).join(&name)).expect("right"),
                "{unit}/{name} differs"
            );
        }
    }
}
