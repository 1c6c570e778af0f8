use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(JetframeError::load("x").to_string().contains("load error:"));
    assert!(
        JetframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        JetframeError::present("x")
            .to_string()
            .contains("present error:")
    );
    assert_eq!(
        JetframeError::NotBound.to_string(),
        "no display surface bound"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = JetframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
