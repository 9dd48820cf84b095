use std::fs;
use std::io::{Cursor, Read};

use tempfile::TempDir;
use zip::ZipArchive;

use super::*;
use crate::archive::DirSink;
use crate::digest::{DigestKey, entry_path};

fn read_zip(bytes: Vec<u8>) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

fn entry_text(zip: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut file = zip.by_name(name).unwrap();
    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();
    text
}

#[test]
fn test_single_html_function_end_to_end() {
    let html = "<html><body><script>function foo(){return 1;}</script></body></html>";
    let output = process(html, "");

    assert_eq!(output.summary.html_functions, 1);
    assert_eq!(output.summary.js_functions, 0);
    assert_eq!(output.summary.references_dropped, 0);
    assert_eq!(output.summary.archive_entries, 2);

    let key = DigestKey::of("foo");
    let mut zip = read_zip(output.archive.into_zip_bytes().unwrap());

    let function = entry_text(&mut zip, &format!("{key}/foo.js"));
    assert_eq!(function, "function foo(){return 1;}");

    let updated = entry_text(&mut zip, UPDATED_HTML_NAME);
    assert_eq!(
        updated,
        format!("<html><body><script src=\"{key}/foo.js\"></script>\n</body></html>")
    );
}

#[test]
fn test_archive_paths_match_html_references() {
    let html = "<body><script>function alpha(){a();} function beta(){b();}</script></body>";
    let output = process(html, "");

    let archive_paths: Vec<String> = output
        .archive
        .paths()
        .filter(|p| *p != UPDATED_HTML_NAME)
        .map(str::to_string)
        .collect();

    let mut zip = read_zip(output.archive.into_zip_bytes().unwrap());
    let updated = entry_text(&mut zip, UPDATED_HTML_NAME);

    // Every folder created in the archive is referenced by the rewritten
    // HTML under exactly the same path, and vice versa.
    for path in &archive_paths {
        assert!(
            updated.contains(&format!("<script src=\"{path}\"></script>")),
            "archive entry `{path}` not referenced in rewritten HTML"
        );
    }
    assert_eq!(updated.matches("<script src=").count(), archive_paths.len());
}

#[test]
fn test_js_file_functions_archived_but_not_referenced() {
    let html = "<html><body></body></html>";
    let js = "function helper(){return 2;}";
    let output = process(html, js);

    assert_eq!(output.summary.html_functions, 0);
    assert_eq!(output.summary.js_functions, 1);

    let mut zip = read_zip(output.archive.into_zip_bytes().unwrap());
    let helper = entry_text(&mut zip, &entry_path("helper"));
    assert_eq!(helper, js);

    let updated = entry_text(&mut zip, UPDATED_HTML_NAME);
    assert!(!updated.contains("<script"));
}

#[test]
fn test_shared_name_last_write_wins_html_before_js() {
    let html = "<body><script>function f(){fromHtml();}</script></body>";
    let js = "function f(){fromJs();}";
    let output = process(html, js);

    let mut zip = read_zip(output.archive.into_zip_bytes().unwrap());
    let text = entry_text(&mut zip, &entry_path("f"));
    assert_eq!(text, "function f(){fromJs();}");
}

#[test]
fn test_missing_body_close_drops_references() {
    let html = "<div><script>function foo(){}</script></div>";
    let output = process(html, "");

    assert_eq!(output.summary.references_dropped, 1);

    let mut zip = read_zip(output.archive.into_zip_bytes().unwrap());
    // Function still archived, HTML stripped but unreferenced
    assert_eq!(entry_text(&mut zip, &entry_path("foo")), "function foo(){}");
    assert_eq!(entry_text(&mut zip, UPDATED_HTML_NAME), "<div></div>");
}

#[test]
fn test_empty_js_same_as_absent() {
    let temp = TempDir::new().unwrap();
    let html_path = temp.path().join("page.html");
    let js_path = temp.path().join("empty.js");
    fs::write(
        &html_path,
        "<html><body><script>function foo(){}</script></body></html>",
    )
    .unwrap();
    fs::write(&js_path, "").unwrap();

    let sink_a = DirSink::new(temp.path().join("a"));
    let sink_b = DirSink::new(temp.path().join("b"));

    let without_js = run(&html_path, None, DEFAULT_ARCHIVE_NAME, &sink_a).unwrap();
    let with_empty_js = run(&html_path, Some(&js_path), DEFAULT_ARCHIVE_NAME, &sink_b).unwrap();

    assert_eq!(without_js, with_empty_js);

    let bytes_a = fs::read(temp.path().join("a").join(DEFAULT_ARCHIVE_NAME)).unwrap();
    let bytes_b = fs::read(temp.path().join("b").join(DEFAULT_ARCHIVE_NAME)).unwrap();
    assert_eq!(bytes_a, bytes_b);
}

#[test]
fn test_run_emits_archive_through_sink() {
    let temp = TempDir::new().unwrap();
    let html_path = temp.path().join("page.html");
    fs::write(
        &html_path,
        "<html><body><script>function foo(){}</script></body></html>",
    )
    .unwrap();

    let sink = DirSink::new(temp.path().join("out"));
    let summary = run(&html_path, None, DEFAULT_ARCHIVE_NAME, &sink).unwrap();
    assert_eq!(summary.archive_entries, 2);

    let bytes = fs::read(temp.path().join("out").join(DEFAULT_ARCHIVE_NAME)).unwrap();
    let mut zip = read_zip(bytes);
    assert_eq!(zip.len(), 2);
    assert!(entry_text(&mut zip, UPDATED_HTML_NAME).contains("</body>"));
}

#[test]
fn test_missing_html_input_is_typed_error() {
    let temp = TempDir::new().unwrap();
    let sink = DirSink::new(temp.path());

    let err = run(
        &temp.path().join("missing.html"),
        None,
        DEFAULT_ARCHIVE_NAME,
        &sink,
    )
    .unwrap_err();

    assert!(matches!(err, PipelineError::HtmlInput { .. }));
}

#[test]
fn test_plain_html_produces_only_updated_file() {
    let output = process("<html><body><p>no scripts here</p></body></html>", "");

    assert_eq!(output.summary.html_functions, 0);
    assert_eq!(output.summary.archive_entries, 1);

    let mut zip = read_zip(output.archive.into_zip_bytes().unwrap());
    assert_eq!(
        entry_text(&mut zip, UPDATED_HTML_NAME),
        "<html><body><p>no scripts here</p></body></html>"
    );
}
