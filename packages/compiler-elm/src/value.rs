//! Classification of a single value token into an elm-css value.
//!
//! Shapes overlap (`0` is both an integer and a bare zero), so matchers are
//! tried in a fixed order and the first hit wins.

use crate::casing::to_identifier;
use crate::exemptions::is_zero_unitless;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// A classified value token, rendered through `Display`
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// `(Css.hex "#1a2b3c")`, literal kept verbatim
    Hex(String),
    /// `(Css.px 0)` for a unitless zero that elm-css won't accept
    ZeroPx,
    /// `(Css.num 0.25)`
    Num(String),
    /// `(Css.int 100)`, digits kept as written
    Int(String),
    /// `Css.auto`, a zero-argument elm-css constant
    Keyword(String),
    /// `(Css.pct 50)`
    Pct(String),
    /// `(Css.rem 1.5)`, constructor named after the unit
    Length { value: String, unit: String },
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Hex(hex) => write!(f, "(Css.hex \"{}\")", hex),
            StyleValue::ZeroPx => f.write_str("(Css.px 0)"),
            StyleValue::Num(n) => write!(f, "(Css.num {})", n),
            StyleValue::Int(digits) => write!(f, "(Css.int {})", digits),
            StyleValue::Keyword(ident) => write!(f, "Css.{}", ident),
            StyleValue::Pct(n) => write!(f, "(Css.pct {})", n),
            StyleValue::Length { value, unit } => write!(f, "(Css.{} {})", unit, value),
        }
    }
}

/// Tidy a matched numeric literal without touching its significant digits:
/// `.5` → `0.5`, `1.50` → `1.5`, `007` → `7`, `-0.0` → `0`.
///
/// Expects the `-?[0-9]*\.?[0-9]+` shape the matchers capture.
pub fn normalize_number(literal: &str) -> String {
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(literal.len() + 1);
    if negative && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

type Matcher = fn(&str, &str) -> Option<StyleValue>;

/// Precedence order for token shapes
const MATCHERS: &[(&str, Matcher)] = &[
    ("hex", match_hex),
    ("zero", match_bare_zero),
    ("num", match_num),
    ("int", match_int),
    ("keyword", match_keyword),
    ("pct", match_pct),
    ("length", match_length),
];

/// Classify one whitespace-free token of `property`'s value.
///
/// Returns `None` when the token has none of the recognised shapes (empty,
/// `rgba(...)`, fractions, ...); callers fall back to `Css.property`.
pub fn classify_token(property: &str, token: &str) -> Option<StyleValue> {
    MATCHERS
        .iter()
        .find_map(|(_, matcher)| matcher(property, token))
}

/// Name of the first matcher that accepts the token, for diagnostics
pub fn token_shape(property: &str, token: &str) -> Option<&'static str> {
    MATCHERS
        .iter()
        .find(|(_, matcher)| matcher(property, token).is_some())
        .map(|(name, _)| *name)
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#[0-9A-Za-z]+$").unwrap())
}

fn num_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]*\.[0-9]+$").unwrap())
}

fn int_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]+$").unwrap())
}

fn keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[A-Za-z][A-Za-z0-9-]*$").unwrap())
}

fn pct_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-?[0-9]*\.?[0-9]+)%$").unwrap())
}

fn length_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(-?[0-9]*\.?[0-9]+)([a-z]+)$").unwrap())
}

fn match_hex(_property: &str, token: &str) -> Option<StyleValue> {
    hex_re()
        .is_match(token)
        .then(|| StyleValue::Hex(token.to_string()))
}

fn match_bare_zero(property: &str, token: &str) -> Option<StyleValue> {
    (token == "0" && !is_zero_unitless(property)).then_some(StyleValue::ZeroPx)
}

fn match_num(_property: &str, token: &str) -> Option<StyleValue> {
    num_re()
        .is_match(token)
        .then(|| StyleValue::Num(normalize_number(token)))
}

fn match_int(_property: &str, token: &str) -> Option<StyleValue> {
    int_re()
        .is_match(token)
        .then(|| StyleValue::Int(token.to_string()))
}

fn match_keyword(_property: &str, token: &str) -> Option<StyleValue> {
    keyword_re()
        .is_match(token)
        .then(|| StyleValue::Keyword(to_identifier(token)))
}

fn match_pct(_property: &str, token: &str) -> Option<StyleValue> {
    let caps = pct_re().captures(token)?;
    Some(StyleValue::Pct(normalize_number(&caps[1])))
}

fn match_length(_property: &str, token: &str) -> Option<StyleValue> {
    let caps = length_re().captures(token)?;
    Some(StyleValue::Length {
        value: normalize_number(&caps[1]),
        unit: caps[2].to_string(),
    })
}
