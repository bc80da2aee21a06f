//! Utility class selector → Elm identifier.

use crate::declaration::Declaration;
use crate::emitter::ClassEntry;
use serde::{Deserialize, Serialize};

const RESERVED_WORDS: &[&str] = &[
    "alias", "as", "case", "else", "exposing", "if", "import", "in", "infix", "let", "module",
    "of", "port", "then", "type", "where",
];

/// How sanitized class names are spelled in the generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// `hover__bg_red_500`
    #[default]
    Snake,
    /// `hoverBgRed500`
    Camel,
}

/// Split a class selector into its unescaped class name and pseudo-class.
///
/// `.hover\:bg-red-500:hover` → (`hover:bg-red-500`, `Some("hover")`)
pub fn split_selector(selector: &str) -> (String, Option<String>) {
    let selector = selector.strip_prefix('.').unwrap_or(selector);
    let mut class = String::with_capacity(selector.len());
    let mut chars = selector.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, escaped)) = chars.next() {
                    class.push(escaped);
                }
            }
            ':' => {
                let pseudo = selector[i..].trim_start_matches(':');
                let pseudo = (!pseudo.is_empty()).then(|| pseudo.to_string());
                return (class, pseudo);
            }
            _ => class.push(c),
        }
    }

    (class, None)
}

/// Turn an unescaped utility class name into a valid Elm identifier
pub fn elm_name(class: &str, prefix: &str, style: NameStyle) -> String {
    let (negative, class) = match class.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, class),
    };

    let mut snake = String::with_capacity(class.len() + 8);
    if negative {
        snake.push_str("neg_");
    }
    for c in class.chars() {
        match c {
            ':' => snake.push_str("__"),
            '/' => snake.push_str("_over_"),
            '.' => snake.push_str("_dot_"),
            c if c.is_ascii_alphanumeric() || c == '_' => snake.push(c),
            _ => snake.push('_'),
        }
    }

    let name = match style {
        NameStyle::Snake => snake,
        NameStyle::Camel => camel_case(&snake),
    };
    let name = format!("{}{}", prefix, name);

    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        format!("x_{}", name)
    } else if RESERVED_WORDS.contains(&name.as_str()) {
        format!("{}_", name)
    } else {
        name
    }
}

fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    for (i, part) in snake.split('_').filter(|part| !part.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

impl ClassEntry {
    /// Build an entry from a raw class selector as found in the stylesheet
    pub fn from_selector(
        selector: &str,
        prefix: &str,
        style: NameStyle,
        declarations: Vec<Declaration>,
    ) -> Self {
        let (class, pseudo_selector) = split_selector(selector);
        Self {
            target_identifier: elm_name(&class, prefix, style),
            pseudo_selector,
            declarations,
        }
    }
}
