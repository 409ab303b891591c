use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BumperError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BumperError::config("x").to_string().contains("config error:"));
    assert!(
        BumperError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(BumperError::io("x").to_string().contains("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BumperError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
