use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(SonogridError::input("x").to_string().contains("input error:"));
    assert!(
        SonogridError::grid_size("x")
            .to_string()
            .contains("grid size error:")
    );
    assert!(
        SonogridError::cache_write("x")
            .to_string()
            .contains("path cache write error:")
    );
    assert!(
        SonogridError::synthesis("x")
            .to_string()
            .contains("synthesis error:")
    );
    assert!(
        SonogridError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SonogridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
