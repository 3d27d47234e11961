//! Color resolution for the live preview.
//!
//! The formatter never looks at colors; stops are opaque strings there. The
//! preview, however, has to paint something, so it resolves the subset of CSS
//! colors a gradient builder typically produces: hex notation and a few
//! keywords. Anything else is reported as a [`ColorError`] and the preview
//! shows no gradient, the same way a browser drops an invalid `background`.

use crate::config::GradientConfig;
use crate::error::ColorError;

/// Straight-alpha sRGB color, 8 bits per channel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

const NAMED: &[(&str, Rgba)] = &[
    ("transparent", Rgba::new(0, 0, 0, 0)),
    ("black", Rgba::opaque(0x00, 0x00, 0x00)),
    ("silver", Rgba::opaque(0xc0, 0xc0, 0xc0)),
    ("gray", Rgba::opaque(0x80, 0x80, 0x80)),
    ("grey", Rgba::opaque(0x80, 0x80, 0x80)),
    ("white", Rgba::opaque(0xff, 0xff, 0xff)),
    ("maroon", Rgba::opaque(0x80, 0x00, 0x00)),
    ("red", Rgba::opaque(0xff, 0x00, 0x00)),
    ("purple", Rgba::opaque(0x80, 0x00, 0x80)),
    ("fuchsia", Rgba::opaque(0xff, 0x00, 0xff)),
    ("magenta", Rgba::opaque(0xff, 0x00, 0xff)),
    ("green", Rgba::opaque(0x00, 0x80, 0x00)),
    ("lime", Rgba::opaque(0x00, 0xff, 0x00)),
    ("olive", Rgba::opaque(0x80, 0x80, 0x00)),
    ("yellow", Rgba::opaque(0xff, 0xff, 0x00)),
    ("navy", Rgba::opaque(0x00, 0x00, 0x80)),
    ("blue", Rgba::opaque(0x00, 0x00, 0xff)),
    ("teal", Rgba::opaque(0x00, 0x80, 0x80)),
    ("aqua", Rgba::opaque(0x00, 0xff, 0xff)),
    ("cyan", Rgba::opaque(0x00, 0xff, 0xff)),
    ("orange", Rgba::opaque(0xff, 0xa5, 0x00)),
];

/// Resolves a single CSS color string.
pub fn parse_color(input: &str) -> Result<Rgba, ColorError> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(input, hex);
    }
    NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, c)| *c)
        .ok_or_else(|| ColorError::new(input, "not a hex color or known color name"))
}

/// Resolves every stop of `config`, failing on the first unresolvable one.
pub fn resolve_stops(config: &GradientConfig) -> Result<Vec<Rgba>, ColorError> {
    config.stops().iter().map(parse_color).collect()
}

fn parse_hex(input: &str, hex: &str) -> Result<Rgba, ColorError> {
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| ColorError::new(input, "invalid hex digit"))?;

    // Short forms repeat each digit: #abc == #aabbcc.
    let short = |d: u8| d * 17;
    let pair = |hi: u8, lo: u8| hi * 16 + lo;

    match digits.as_slice() {
        [r, g, b] => Ok(Rgba::opaque(short(*r), short(*g), short(*b))),
        [r, g, b, a] => Ok(Rgba::new(short(*r), short(*g), short(*b), short(*a))),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgba::opaque(pair(*r1, *r0), pair(*g1, *g0), pair(*b1, *b0))),
        [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Rgba::new(
            pair(*r1, *r0),
            pair(*g1, *g0),
            pair(*b1, *b0),
            pair(*a1, *a0),
        )),
        _ => Err(ColorError::new(
            input,
            format!("hex color must have 3, 4, 6 or 8 digits, got {}", digits.len()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(s: &str) -> Rgba { parse_color(s).unwrap() }
    fn err(s: &str) { parse_color(s).unwrap_err(); }

    #[test] fn hex6() { assert_eq!(ok("#ff0000"), Rgba::opaque(255, 0, 0)); }
    #[test] fn hex6_uppercase() { assert_eq!(ok("#00FF7F"), Rgba::opaque(0, 255, 127)); }
    #[test] fn hex3() { assert_eq!(ok("#0af"), Rgba::opaque(0x00, 0xaa, 0xff)); }
    #[test] fn hex4() { assert_eq!(ok("#f008"), Rgba::new(255, 0, 0, 0x88)); }
    #[test] fn hex8() { assert_eq!(ok("#11223344"), Rgba::new(0x11, 0x22, 0x33, 0x44)); }
    #[test] fn whitespace_is_ignored() { assert_eq!(ok("  #ffffff "), Rgba::opaque(255, 255, 255)); }
    #[test] fn named() { assert_eq!(ok("Teal"), Rgba::opaque(0, 0x80, 0x80)); }
    #[test] fn transparent() { assert_eq!(ok("transparent").a, 0); }

    #[test] fn err_bad_digit() { err("#ggg"); }
    #[test] fn err_bad_length() { err("#12345"); }
    #[test] fn err_bare_hash() { err("#"); }
    #[test] fn err_unknown_name() { err("banana"); }
    #[test] fn err_empty() { err(""); }

    #[test]
    fn error_keeps_the_input() {
        let e = parse_color("#12").unwrap_err();
        assert_eq!(e.input, "#12");
    }

    #[test]
    fn resolve_default_stops() {
        let colors = resolve_stops(&GradientConfig::default()).unwrap();
        assert_eq!(colors, [Rgba::opaque(255, 0, 0), Rgba::opaque(0, 0, 255)]);
    }

    #[test]
    fn one_bad_stop_spoils_the_gradient() {
        let c = GradientConfig::default().with_stop(1, "nope");
        assert!(resolve_stops(&c).is_err());
    }
}
