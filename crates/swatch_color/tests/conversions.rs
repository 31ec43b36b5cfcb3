use swatch_color::{
    oklch_to_hex, oklch_to_rgb, oklch_to_string, parse_oklch_string, ColorFormat, ColorToken,
    Hsv, Oklch, Rgb,
};

#[test]
fn oklch_string_is_stable_through_parse() {
    let input = Oklch::new(0.5, 0.1, 180.0);
    let text = oklch_to_string(input);
    assert_eq!(text, "oklch(0.5000 0.1000 180.0000)");
    assert_eq!(parse_oklch_string(&text), Some(input));
    assert_eq!(oklch_to_string(parse_oklch_string(&text).unwrap()), text);
}

#[test]
fn malformed_perceptual_strings_are_absent_not_errors() {
    for text in [
        "oklch()",
        "oklch(0.5)",
        "oklch(0.5 0.2)",
        "oklch(0.5 0.2 hue)",
        "oklab(0.5 0.2 0.1)",
        "0.5 0.2 180",
    ] {
        assert_eq!(parse_oklch_string(text), None, "{text}");
    }
}

#[test]
fn converters_agree_with_each_other() {
    let color = Oklch::new(0.5586, 0.2255, 262.0866);
    let rgb = oklch_to_rgb(color);
    assert_eq!(rgb, Rgb::new(30, 102, 245));
    assert_eq!(oklch_to_hex(color), rgb.to_hex());
    assert_eq!(Hsv::from_rgb(rgb).to_rgb(), rgb);
}

#[test]
fn repeated_token_edits_do_not_drift() {
    let mut token = ColorToken::from_hex("primary", "#1e66f5").unwrap();
    let first = token.clone();
    for _ in 0..10 {
        let oklch = token.oklch;
        token.set_oklch(oklch);
        let hex = token.hex.clone();
        token.set_hex(&hex);
    }
    assert_eq!(token.hex, first.hex);
    assert_eq!(token.oklch, first.oklch);
    assert_eq!(token.hsv, first.hsv);
}

#[test]
fn every_format_renders_the_same_color() {
    let token = ColorToken::parse("accent", "oklch(0.6250 0.1772 140.4448)").unwrap();
    assert_eq!(token.format(ColorFormat::Hex), "#40a02b");
    assert_eq!(token.format(ColorFormat::Rgb), "rgb(64, 160, 43)");
    assert_eq!(
        token.format(ColorFormat::Oklch),
        "oklch(0.6250 0.1772 140.4448)"
    );
}
