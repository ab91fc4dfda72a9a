//! End-to-end runs over a temporary parent directory.

use std::fs;
use std::path::Path;

use saf_cli::pipeline::{build_schema, check, convert};
use saf_model::layout::{ARCHIVE_FILE_NAME, UNZIPPED_DIR_NAME};
use saf_model::{ConversionOptions, FieldSchema, ValidateOptions};
use tempfile::TempDir;

const INPUT: &str = "\
dc.title,dc.contributor.author,dspace.iiif.enabled,Filename,iiif.label,iiif.toc
Harbour survey,\"Hale, M.\",true,cover.jpg,Cover,
,,,plate1.png,Plate 1,Plates
,,,notes.pdf,,
Town plan,,,plan.tif,,
";

fn parent_dir(csv: &str, files: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("input.csv"), csv).expect("write csv");
    for name in files {
        fs::write(dir.path().join(name), name.as_bytes()).expect("write file");
    }
    dir
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read output")
}

#[test]
fn converts_a_parent_directory() {
    let parent = parent_dir(
        INPUT,
        &["cover.jpg", "plate1.png", "notes.pdf", "plan.tif"],
    );
    let output = TempDir::new().expect("tempdir");
    let out_root = output.path().join("batch");
    let options = ConversionOptions::default().with_alt_bundle(Some("illustrations".to_string()));

    let result = convert(parent.path(), &out_root, &FieldSchema::default(), options)
        .expect("convert");
    assert_eq!(result.rows, 4);
    assert_eq!(result.summary.items, 2);
    assert_eq!(result.summary.bitstreams, 4);

    let first = out_root.join(UNZIPPED_DIR_NAME).join("0001");
    assert_eq!(
        read(&first.join("contents")),
        "cover.jpg\tbundle:illustrations\tiiif-label:Cover\n\
         plate1.png\tbundle:illustrations\tiiif-label:Plate 1\tiiif-toc:Plates\n\
         notes.pdf\n"
    );
    insta::assert_snapshot!(read(&first.join("dublin_core.xml")), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <dublin_core>
      <dcvalue element="title">Harbour survey</dcvalue>
      <dcvalue element="contributor" qualifier="author">Hale, M.</dcvalue>
    </dublin_core>
    "#);
    assert!(first.join("metadata_dspace.xml").is_file());
    assert!(!first.join("metadata_iiif.xml").exists());

    let second = out_root.join(UNZIPPED_DIR_NAME).join("0002");
    assert_eq!(read(&second.join("contents")), "plan.tif\n");
    assert!(!second.join("metadata_dspace.xml").exists());

    assert!(out_root.join(ARCHIVE_FILE_NAME).is_file());
}

#[test]
fn missing_required_column_is_fatal() {
    let parent = parent_dir("dc.title,dc.subject\nA,Maps\n", &[]);
    let output = TempDir::new().expect("tempdir");
    let err = convert(
        parent.path(),
        output.path(),
        &FieldSchema::default(),
        ConversionOptions::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("Filename"));
}

#[test]
fn unknown_column_aborts_conversion() {
    let parent = parent_dir("dc.title,Filename,dc.bogus\nA,a.jpg,x\n", &["a.jpg"]);
    let output = TempDir::new().expect("tempdir");
    let err = convert(
        parent.path(),
        output.path(),
        &FieldSchema::default(),
        ConversionOptions::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("dc.bogus"));
}

#[test]
fn extra_fields_are_written_to_their_namespace() {
    let parent = parent_dir("dc.title,local.shelfmark,Filename\nA,MS 12,a.jpg\n", &["a.jpg"]);
    let output = TempDir::new().expect("tempdir");
    let schema = build_schema(&["local.shelfmark".to_string()]).expect("schema");

    convert(
        parent.path(),
        output.path(),
        &schema,
        ConversionOptions::default().with_archive(false),
    )
    .expect("convert");

    let unit = output.path().join(UNZIPPED_DIR_NAME).join("0001");
    insta::assert_snapshot!(read(&unit.join("metadata_local.xml")), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <dublin_core schema="local">
      <dcvalue element="shelfmark">MS 12</dcvalue>
    </dublin_core>
    "#);
    assert!(!output.path().join(ARCHIVE_FILE_NAME).exists());
}

#[test]
fn second_run_into_same_output_is_refused() {
    let parent = parent_dir("dc.title,Filename\nA,a.jpg\n", &["a.jpg"]);
    let output = TempDir::new().expect("tempdir");
    let run = || {
        convert(
            parent.path(),
            output.path(),
            &FieldSchema::default(),
            ConversionOptions::default(),
        )
    };
    run().expect("first run");
    let err = run().unwrap_err();
    assert!(format!("{err:#}").contains("already exists"));
}

#[test]
fn validation_reports_without_writing() {
    let parent = parent_dir(
        "dc.title,Filename,iiif.label\nA,a.jpg,L\n,b.pdf,\n",
        &["a.jpg"],
    );
    let result = check(
        parent.path(),
        &FieldSchema::default(),
        &ValidateOptions::default(),
    )
    .expect("validate");

    assert!(result.has_issues());
    insta::assert_json_snapshot!(result.report, @r#"
    {
      "rows_checked": 2,
      "issues": [
        {
          "kind": "missing_file",
          "row": 1,
          "filename": "b.pdf"
        }
      ]
    }
    "#);
    let entries: Vec<_> = fs::read_dir(parent.path()).expect("read dir").collect();
    assert_eq!(entries.len(), 2);
}

#[test]
fn missing_input_file_is_fatal_for_validation() {
    let parent = TempDir::new().expect("tempdir");
    let err = check(
        parent.path(),
        &FieldSchema::default(),
        &ValidateOptions::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("input.csv"));
}
