use super::*;

#[test]
fn hex_parses_with_and_without_hash() {
    assert_eq!(Rgb::from_hex("#FF0000").unwrap(), Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(Rgb::from_hex("00ff00").unwrap(), Rgb::new(0.0, 1.0, 0.0));
    assert_eq!(Rgb::from_hex("#231F20").unwrap(), Rgb::from_u8(0x23, 0x1F, 0x20));
}

#[test]
fn hex_rejects_malformed_input() {
    for bad in ["", "#FFF", "#GGGGGG", "#FF00FF00", "red"] {
        assert!(Rgb::from_hex(bad).is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn hex_roundtrips_through_to_hex() {
    let c = Rgb::from_hex("#59afc5").unwrap();
    assert_eq!(c.to_hex(), "#59AFC5");
}

#[test]
fn to_u8_clamps_and_rounds() {
    assert_eq!(Rgb::new(-0.5, 0.5, 2.0).to_u8(), [0, 128, 255]);
    assert_eq!(Rgb::new(f64::NAN, 1.0, 0.0).to_u8(), [0, 255, 0]);
}

#[test]
fn mix_endpoints() {
    let a = Rgb::new(0.2, 0.4, 0.6);
    let b = Rgb::WHITE;
    assert_eq!(a.mix(b, 0.0), a);
    assert_eq!(a.mix(b, 1.0), b);
}

#[test]
fn serde_accepts_hex_and_triples() {
    let c: Rgb = serde_json::from_str("\"#FFFFFF\"").unwrap();
    assert_eq!(c, Rgb::WHITE);
    let c: Rgb = serde_json::from_str("[0.25, 0.5, 0.75]").unwrap();
    assert_eq!(c, Rgb::new(0.25, 0.5, 0.75));
    assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
}

#[test]
fn serde_writes_hex_only_when_exact() {
    assert_eq!(
        serde_json::to_string(&Rgb::from_u8(0, 178, 255)).unwrap(),
        "\"#00B2FF\""
    );
    assert_eq!(
        serde_json::to_string(&Rgb::new(0.1, 0.2, 0.3)).unwrap(),
        "[0.1,0.2,0.3]"
    );
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 4).is_err());
    assert!(Canvas::new(4, 0).is_err());
    let c = Canvas::new(3, 2).unwrap();
    assert_eq!(c.rgba8_len().unwrap(), 24);
}
