//! Munsell notation: the HVC triple, hue names and string forms

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::munsell::{HUE_NAMES, MAX_HUE, MAX_VALUE, MONO_LIMIT_C};
use crate::error::{MunsellError, Result};

/// A Munsell color specification.
///
/// `hue` runs over [0, 100) with 0 at 10RP, `value` over [0, 10] and
/// `chroma` from 0 (neutral) upward without a fixed limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Munsell {
    pub hue: f64,
    pub value: f64,
    pub chroma: f64,
}

impl Munsell {
    pub fn new(hue: f64, value: f64, chroma: f64) -> Self {
        Self { hue, value, chroma }
    }

    /// The neutral gray of the given Value.
    pub fn achromatic(value: f64) -> Self {
        Self {
            hue: 0.0,
            value,
            chroma: 0.0,
        }
    }

    pub fn is_achromatic(&self) -> bool {
        self.chroma < MONO_LIMIT_C
    }

    /// Hue name such as `5R` or `7.5PB`, or `N` for neutrals.
    pub fn hue_name(&self) -> String {
        hue_value_to_hue_name(self.hue, self.chroma)
    }
}

impl fmt::Display for Munsell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_achromatic() {
            write!(f, "N {:.1}", self.value)
        } else {
            write!(f, "{} {:.1}/{:.1}", self.hue_name(), self.value, self.chroma)
        }
    }
}

impl FromStr for Munsell {
    type Err = MunsellError;

    /// Parses `"5R 4.0/14.0"` style notation, or `"N 5.0"` for neutrals.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = |reason: &str| MunsellError::InvalidNotation {
            notation: s.to_string(),
            reason: reason.to_string(),
        };

        let split = s
            .rfind(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| invalid("missing hue"))?;
        let (hue_part, rest) = s.split_at(split + 1);
        let hue_part = hue_part.trim();
        let rest = rest.trim();

        let number = |text: &str, what: &str| {
            text.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| invalid(&format!("{} '{}' is not a number", what, text.trim())))
        };

        let color = if hue_part.eq_ignore_ascii_case("N") {
            Munsell::achromatic(number(rest, "value")?)
        } else {
            let hue = hue_name_to_hue_value(hue_part)?;
            let (value, chroma) = rest
                .split_once('/')
                .ok_or_else(|| invalid("expected value/chroma"))?;
            Munsell::new(hue, number(value, "value")?, number(chroma, "chroma")?)
        };

        if !(0.0..=MAX_VALUE).contains(&color.value) {
            return Err(invalid("value out of range 0-10"));
        }
        if color.chroma < 0.0 {
            return Err(invalid("negative chroma"));
        }
        Ok(color)
    }
}

/// Numeric hue of a hue name: `"5R"` is 5, `"10RP"` is 0 and `"N"` is 0.
///
/// The hue number must lie in (0, 10]; the family code is matched without
/// regard to case.
pub fn hue_name_to_hue_value(name: &str) -> Result<f64> {
    let name = name.trim();
    let invalid = || MunsellError::InvalidHueName {
        name: name.to_string(),
    };

    if name.eq_ignore_ascii_case("N") {
        return Ok(0.0);
    }

    let split = name
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(invalid)?;
    let (number, family) = name.split_at(split);
    let number: f64 = number.trim().parse().map_err(|_| invalid())?;
    if !(number > 0.0 && number <= 10.0) {
        return Err(invalid());
    }
    let index = HUE_NAMES
        .iter()
        .position(|f| f.eq_ignore_ascii_case(family))
        .ok_or_else(invalid)?;

    Ok((index as f64 * 10.0 + number) % MAX_HUE)
}

/// Hue name of a numeric hue. Neutral chromas yield `"N"`.
///
/// The hue is rounded to one decimal; a hue on a family boundary is named
/// as 10 of the preceding family, so 0 is `10RP` and 10 is `10R`.
pub fn hue_value_to_hue_name(hue: f64, chroma: f64) -> String {
    if chroma < MONO_LIMIT_C {
        return "N".to_string();
    }

    let tenths = (hue.rem_euclid(MAX_HUE) * 10.0).round() as i64 % 1000;
    let (mut family, mut number) = (tenths / 100, tenths % 100);
    if number == 0 {
        family = (family + 9) % 10;
        number = 100;
    }

    let name = HUE_NAMES[family as usize];
    if number % 10 == 0 {
        format!("{}{}", number / 10, name)
    } else {
        format!("{}{}", number as f64 / 10.0, name)
    }
}
