use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DemoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DemoError::render("x").to_string().contains("render error:"));
    assert!(DemoError::encode("x").to_string().contains("encode error:"));
    assert!(DemoError::cast("x").to_string().contains("cast error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = DemoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn context_chain_converts_into_other() {
    use anyhow::Context as _;

    let res: Result<(), std::io::Error> = Err(std::io::Error::other("denied"));
    let err: DemoError = res.context("open output").unwrap_err().into();
    assert!(matches!(err, DemoError::Other(_)));
    assert_eq!(err.to_string(), "open output");
}
