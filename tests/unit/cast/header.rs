use super::*;
use std::path::PathBuf;

#[test]
fn parses_v2_header() {
    let h = CastHeader::parse(
        r#"{"version": 2, "width": 120, "height": 30, "timestamp": 1700000000, "title": "demo"}"#,
    )
    .unwrap();
    assert_eq!(h.version, 2);
    assert_eq!(h.terminal_size(), Some((120, 30)));
    assert_eq!(h.title.as_deref(), Some("demo"));
}

#[test]
fn parses_v3_term_size() {
    let h = CastHeader::parse(r#"{"version": 3, "term": {"cols": 100, "rows": 40, "type": "xterm"}}"#)
        .unwrap();
    assert_eq!(h.terminal_size(), Some((100, 40)));
}

#[test]
fn missing_size_is_none() {
    let h = CastHeader::parse(r#"{"version": 2}"#).unwrap();
    assert_eq!(h.terminal_size(), None);
}

#[test]
fn empty_or_invalid_header_is_a_cast_error() {
    assert!(matches!(CastHeader::parse("  \n"), Err(DemoError::Cast(_))));
    assert!(matches!(CastHeader::parse("[0.5, \"o\", \"hi\"]"), Err(DemoError::Cast(_))));
    assert!(matches!(CastHeader::parse("not json"), Err(DemoError::Cast(_))));
}

#[test]
fn reads_only_the_first_line() {
    let dir = PathBuf::from("target").join("unit_cast_header");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("session.cast");
    std::fs::write(
        &path,
        "{\"version\": 2, \"width\": 80, \"height\": 24}\n[0.1, \"o\", \"$ ls\\r\\n\"]\nnot json at all\n",
    )
    .unwrap();

    let h = CastHeader::read_from(&path).unwrap();
    assert_eq!(h.terminal_size(), Some((80, 24)));
}

#[test]
fn missing_file_is_an_error() {
    let err = CastHeader::read_from(Path::new("target/no-such.cast")).unwrap_err();
    assert!(err.to_string().contains("no-such.cast"));
}
