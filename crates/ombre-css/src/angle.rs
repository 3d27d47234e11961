use std::fmt;

/// Gradient angle in degrees.
///
/// Unbounded: negative values and values past 360 are kept as entered, and
/// unparseable input is stored as NaN rather than rejected. `Display` prints
/// the value the way the CSS text expects it (`90`, `-45`, `22.5`, `NaN`).
#[derive(Debug, Copy, Clone)]
pub struct Angle(f64);

impl Angle {
    /// Default angle for a fresh gradient.
    pub const DEFAULT: Angle = Angle(90.0);

    /// Placeholder stored when the angle input cannot be read as a number.
    pub const NAN: Angle = Angle(f64::NAN);

    #[inline]
    pub const fn degrees(deg: f64) -> Self {
        Self(deg)
    }

    /// Reads a user-typed angle.
    ///
    /// Surrounding whitespace is ignored. Empty or non-numeric text yields
    /// [`Angle::NAN`]; `Infinity` / `-Infinity` are accepted literally.
    pub fn from_input(text: &str) -> Self {
        let s = text.trim();
        let value = match s {
            "" => f64::NAN,
            "Infinity" | "+Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            // Rust also accepts "inf" / "nan" spellings; keep to plain numerals.
            _ if s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) => {
                s.parse().unwrap_or(f64::NAN)
            }
            _ => f64::NAN,
        };
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Angle shifted by `delta` degrees. NaN stays NaN.
    #[inline]
    pub fn offset(self, delta: f64) -> Self {
        Self(self.0 + delta)
    }

    /// Angle in radians, for geometry.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for Angle {
    fn from(deg: i32) -> Self {
        Self(deg as f64)
    }
}

impl From<f64> for Angle {
    fn from(deg: f64) -> Self {
        Self(deg)
    }
}

/// NaN compares equal to NaN so snapshots holding a bad angle still compare.
impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || (self.0.is_nan() && other.0.is_nan())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("NaN")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
        } else if v == 0.0 {
            // covers -0.0
            f.write_str("0")
        } else if (1e-6..1e21).contains(&v.abs()) {
            write!(f, "{v}")
        } else {
            // Exponent form, signed: 1e+21, 1.5e-7.
            let sci = format!("{v:e}");
            match sci.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
                _ => f.write_str(&sci),
            }
        }
    }
}
