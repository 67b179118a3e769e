use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HalftoneError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        HalftoneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        HalftoneError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HalftoneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
