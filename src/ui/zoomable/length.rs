// SPDX-License-Identifier: MPL-2.0
//! Display lengths for the thumbnail box and the deferred expressions built
//! from them.
//!
//! A caller may size the thumbnail with a bare pixel count (`400`) or with a
//! pre-unit string (`"50%"`, `"calc(100% - 16px)"`). Pixel counts can be
//! combined with offsets immediately; everything else is only known at layout
//! time, so arithmetic on it produces a [`LengthExpr`] that is resolved later
//! against the container size.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the thumbnail box as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayLength {
    /// Absolute length in logical pixels.
    Pixels(f32),
    /// Pre-unit length string, e.g. `"50%"` or a `calc()` expression.
    Expr(String),
}

impl DisplayLength {
    /// Length that fills the containing box.
    #[must_use]
    pub fn full() -> Self {
        Self::Expr("100%".to_string())
    }

    /// Parses the length into an expression tree.
    #[must_use]
    pub fn to_expr(&self) -> LengthExpr {
        match self {
            Self::Pixels(px) => LengthExpr::Px(*px),
            Self::Expr(raw) => LengthExpr::parse(raw),
        }
    }

    /// Adds a pixel offset to this length.
    ///
    /// Pixel lengths are summed right away (`400` + `20` is `420px`). Any other
    /// length yields a deferred sum (`calc(50% + 20px)`).
    #[must_use]
    pub fn offset_by(&self, offset_px: f32) -> LengthExpr {
        match self {
            Self::Pixels(px) => LengthExpr::Px(px + offset_px),
            Self::Expr(_) => LengthExpr::Sum(
                Box::new(self.to_expr()),
                Box::new(LengthExpr::Px(offset_px)),
            ),
        }
    }

    /// Resolves the length against `basis` (the container extent on the same
    /// axis), falling back to the full basis when the string is not understood.
    #[must_use]
    pub fn resolve_or_fill(&self, basis: f32) -> f32 {
        self.to_expr().resolve(basis).unwrap_or(basis)
    }
}

impl Default for DisplayLength {
    fn default() -> Self {
        Self::full()
    }
}

impl From<f32> for DisplayLength {
    fn from(px: f32) -> Self {
        Self::Pixels(px)
    }
}

impl From<u16> for DisplayLength {
    fn from(px: u16) -> Self {
        Self::Pixels(f32::from(px))
    }
}

impl From<&str> for DisplayLength {
    fn from(raw: &str) -> Self {
        Self::Expr(raw.to_string())
    }
}

impl From<String> for DisplayLength {
    fn from(raw: String) -> Self {
        Self::Expr(raw)
    }
}

impl fmt::Display for DisplayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_expr())
    }
}

/// Length arithmetic that may only be evaluable at layout time.
#[derive(Debug, Clone, PartialEq)]
pub enum LengthExpr {
    Px(f32),
    Percent(f32),
    Sum(Box<LengthExpr>, Box<LengthExpr>),
    Difference(Box<LengthExpr>, Box<LengthExpr>),
    /// Unrecognised input, kept verbatim.
    Raw(String),
}

impl LengthExpr {
    /// Parses `px`, `%`, bare numbers and `calc()` sums/differences.
    ///
    /// Anything else becomes [`LengthExpr::Raw`]; validating such input is the
    /// caller's business.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        parse_term(trimmed).unwrap_or_else(|| Self::Raw(trimmed.to_string()))
    }

    /// Evaluates the expression against `basis`, the extent that percentages
    /// refer to. Returns `None` if any part is [`LengthExpr::Raw`].
    #[must_use]
    pub fn resolve(&self, basis: f32) -> Option<f32> {
        match self {
            Self::Px(px) => Some(*px),
            Self::Percent(percent) => Some(basis * percent / 100.0),
            Self::Sum(lhs, rhs) => Some(lhs.resolve(basis)? + rhs.resolve(basis)?),
            Self::Difference(lhs, rhs) => Some(lhs.resolve(basis)? - rhs.resolve(basis)?),
            Self::Raw(_) => None,
        }
    }

    /// Whether the expression can be evaluated without knowing the layout.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        match self {
            Self::Px(_) => true,
            Self::Percent(_) | Self::Raw(_) => false,
            Self::Sum(lhs, rhs) | Self::Difference(lhs, rhs) => {
                lhs.is_absolute() && rhs.is_absolute()
            }
        }
    }
}

impl fmt::Display for LengthExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{}px", format_number(*px)),
            Self::Percent(percent) => write!(f, "{}%", format_number(*percent)),
            Self::Sum(lhs, rhs) => write!(f, "calc({lhs} + {rhs})"),
            Self::Difference(lhs, rhs) => write!(f, "calc({lhs} - {rhs})"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

fn parse_term(input: &str) -> Option<LengthExpr> {
    let input = input.trim();

    if let Some(inner) = input
        .strip_prefix("calc(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_binary(inner);
    }
    if let Some(inner) = input.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        return parse_binary(inner);
    }
    if let Some(number) = input.strip_suffix("px") {
        return number.trim().parse().ok().map(LengthExpr::Px);
    }
    if let Some(number) = input.strip_suffix('%') {
        return number.trim().parse().ok().map(LengthExpr::Percent);
    }
    input.parse().ok().map(LengthExpr::Px)
}

/// Splits on the last top-level ` + ` / ` - ` so chains stay left-associative.
fn parse_binary(input: &str) -> Option<LengthExpr> {
    let bytes = input.as_bytes();
    let mut depth = 0_i32;
    let mut split = None;

    for (index, &byte) in bytes.iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b'+' | b'-'
                if depth == 0
                    && index > 0
                    && bytes[index - 1] == b' '
                    && bytes.get(index + 1) == Some(&b' ') =>
            {
                split = Some(index);
            }
            _ => {}
        }
    }

    let Some(index) = split else {
        return parse_term(input);
    };

    let lhs = Box::new(parse_binary(&input[..index])?);
    let rhs = Box::new(parse_term(&input[index + 1..])?);
    if bytes[index] == b'+' {
        Some(LengthExpr::Sum(lhs, rhs))
    } else {
        Some(LengthExpr::Difference(lhs, rhs))
    }
}

/// Formats a number without trailing zeros (`420.0` → `420`, `12.50` → `12.5`).
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i64;
        format!("{int_value}")
    } else {
        let formatted = format!("{value:.3}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}
