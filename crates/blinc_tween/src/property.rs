//! Animatable properties, units and end-point bags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Result, TweenError};

/// Presentation properties a tween may drive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    Left,
    Top,
    Right,
    Bottom,
    Width,
    Height,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    FontSize,
    Opacity,
}

impl Property {
    pub const ALL: [Property; 16] = [
        Property::Left,
        Property::Top,
        Property::Right,
        Property::Bottom,
        Property::Width,
        Property::Height,
        Property::MarginTop,
        Property::MarginRight,
        Property::MarginBottom,
        Property::MarginLeft,
        Property::PaddingTop,
        Property::PaddingRight,
        Property::PaddingBottom,
        Property::PaddingLeft,
        Property::FontSize,
        Property::Opacity,
    ];

    /// CSS name of the property
    pub fn css_name(&self) -> &'static str {
        match self {
            Property::Left => "left",
            Property::Top => "top",
            Property::Right => "right",
            Property::Bottom => "bottom",
            Property::Width => "width",
            Property::Height => "height",
            Property::MarginTop => "margin-top",
            Property::MarginRight => "margin-right",
            Property::MarginBottom => "margin-bottom",
            Property::MarginLeft => "margin-left",
            Property::PaddingTop => "padding-top",
            Property::PaddingRight => "padding-right",
            Property::PaddingBottom => "padding-bottom",
            Property::PaddingLeft => "padding-left",
            Property::FontSize => "font-size",
            Property::Opacity => "opacity",
        }
    }

    /// Unit appended when the value is committed
    pub fn unit(&self) -> Unit {
        match self {
            Property::Opacity => Unit::None,
            _ => Unit::Px,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for Property {
    type Err = TweenError;

    /// Accepts both `margin-left` and `marginLeft`
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Property::ALL
            .iter()
            .copied()
            .find(|p| {
                let css = p.css_name();
                css == name || css.replace('-', "").eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| TweenError::UnknownProperty(name.to_string()))
    }
}

/// Unit suffix of a committed value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Px,
    None,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::None => "",
        }
    }
}

/// A numeric value plus the unit it is presented with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleValue {
    pub value: f32,
    pub unit: Unit,
}

impl StyleValue {
    pub fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Value in the unit the property expects
    pub fn for_property(property: Property, value: f32) -> Self {
        Self::new(value, property.unit())
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Parse the leading number of a computed style string
///
/// Units and any other trailing text are discarded, so `"12.5px"` is `12.5`
/// and `"-4em"` is `-4.0`. Returns `None` when the string does not start
/// with a number (`"auto"`, `""`).
pub fn parse_numeric(raw: &str) -> Option<f32> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
            digits += 1;
        }
        end = frac;
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it, so "3em" stays 3
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > exp_digits_start {
            end = exp;
        }
    }

    s[..end].parse().ok()
}

/// Destination values for one tween, in the order they were given
///
/// Setting the same property twice keeps the last value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EndPoints {
    entries: SmallVec<[(Property, f32); 4]>,
}

impl EndPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a destination value
    pub fn with(mut self, property: Property, value: f32) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Build from loosely typed `(name, value)` pairs such as `("left", "100px")`
    ///
    /// Names must be animatable properties and values must start with a number.
    pub fn parse<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut points = Self::new();
        for (name, raw) in pairs {
            let property: Property = name.as_ref().parse()?;
            let value = parse_numeric(raw.as_ref()).ok_or_else(|| TweenError::NotNumeric {
                property,
                value: raw.as_ref().to_string(),
            })?;
            points.set(property, value);
        }
        Ok(points)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<(Property, f32)> for EndPoints {
    fn from_iter<I: IntoIterator<Item = (Property, f32)>>(iter: I) -> Self {
        let mut points = Self::new();
        for (property, value) in iter {
            points.set(property, value);
        }
        points
    }
}

impl<const N: usize> From<[(Property, f32); N]> for EndPoints {
    fn from(entries: [(Property, f32); N]) -> Self {
        entries.into_iter().collect()
    }
}
