use crate::casing::to_identifier;
use crate::transpiler::{default_transpiler, Transpiler};
use crate::value::classify_token;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A single CSS property/value pair, already split out of its rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(alias = "prop")]
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn is_custom_property(&self) -> bool {
        self.property.starts_with("--")
    }
}

impl Transpiler {
    /// Turn one declaration into an elm-css expression.
    ///
    /// Never fails: anything without a typed equivalent comes out as
    /// `Css.property "<prop>" "<value>"`.
    pub fn transpile_declaration(&self, declaration: &Declaration) -> String {
        let Declaration { property, value } = declaration;

        if declaration.is_custom_property() || self.exemptions().is_exempt(property, value) {
            return property_expression(property, value);
        }

        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.is_empty() {
            debug!(property = %property, "Empty value, using Css.property");
            return property_expression(property, value);
        }

        if property == "display" && tokens == ["flex"] {
            return "Css.displayFlex".to_string();
        }

        let mut constructor = to_identifier(property);
        if tokens.len() > 1 {
            constructor.push_str(&tokens.len().to_string());
        }

        if let Some(vocabulary) = self.vocabulary() {
            if !vocabulary.contains(&constructor) {
                warn!(property = %property, constructor = %constructor, "Unknown elm-css constructor, using Css.property");
                return property_expression(property, value);
            }
        }

        let mut rendered = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match classify_token(property, token) {
                Some(style_value) => rendered.push(style_value.to_string()),
                None => {
                    debug!(property = %property, token = %token, "Unrecognised value token, using Css.property");
                    return property_expression(property, value);
                }
            }
        }

        format!("Css.{} {}", constructor, rendered.join(" "))
    }
}

/// `transpile_declaration` with the built-in exemption table
pub fn transpile_declaration(declaration: &Declaration) -> String {
    default_transpiler().transpile_declaration(declaration)
}

/// The untyped escape hatch: `Css.property "<prop>" "<value>"`
pub fn property_expression(property: &str, value: &str) -> String {
    format!(
        "Css.property {} {}",
        string_literal(property),
        string_literal(value)
    )
}

/// Quote `s` as an Elm string literal
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exemptions::{Exemption, ExemptionTable};
    use crate::vocabulary::Vocabulary;

    fn transpile(property: &str, value: &str) -> String {
        transpile_declaration(&Declaration::new(property, value))
    }

    #[test]
    fn test_single_token() {
        assert_eq!(transpile("color", "#fff"), "Css.color (Css.hex \"#fff\")");
        assert_eq!(transpile("margin-top", "0.25rem"), "Css.marginTop (Css.rem 0.25)");
        assert_eq!(transpile("opacity", "0.25"), "Css.opacity (Css.num 0.25)");
        assert_eq!(transpile("width", "auto"), "Css.width Css.auto");
    }

    #[test]
    fn test_zero_handling() {
        assert_eq!(transpile("margin", "0"), "Css.margin (Css.px 0)");
        assert_eq!(transpile("z-index", "0"), "Css.zIndex (Css.int 0)");
        assert_eq!(transpile("flex-grow", "0"), "Css.flexGrow (Css.int 0)");
    }

    #[test]
    fn test_multi_token_gets_arity_suffix() {
        assert_eq!(
            transpile("border", "1px solid red"),
            "Css.border3 (Css.px 1) Css.solid Css.red"
        );
        assert_eq!(
            transpile("padding", "0.5rem 1rem"),
            "Css.padding2 (Css.rem 0.5) (Css.rem 1)"
        );
    }

    #[test]
    fn test_display_flex_constant() {
        assert_eq!(transpile("display", "flex"), "Css.displayFlex");
        assert_eq!(transpile("display", "block"), "Css.display Css.block");
        assert_eq!(transpile("display", "inline-flex"), "Css.display Css.inlineFlex");
    }

    #[test]
    fn test_custom_property() {
        assert_eq!(transpile("--my-var", "10px"), "Css.property \"--my-var\" \"10px\"");
        assert_eq!(
            transpile("--tw-ring-inset", "var(--tw-empty,/*!*/ /*!*/)"),
            "Css.property \"--tw-ring-inset\" \"var(--tw-empty,/*!*/ /*!*/)\""
        );
    }

    #[test]
    fn test_custom_property_value_quotes_are_escaped() {
        assert_eq!(
            transpile("--x", "\"a\""),
            r#"Css.property "--x" "\"a\"""#
        );
        assert_eq!(
            transpile("--tw-content", "'\\201C'"),
            r#"Css.property "--tw-content" "'\\201C'""#
        );
    }

    #[test]
    fn test_exempt_declarations() {
        assert_eq!(transpile("float", "left"), "Css.property \"float\" \"left\"");
        assert_eq!(transpile("display", "grid"), "Css.property \"display\" \"grid\"");
        assert_eq!(transpile("outline", "0"), "Css.property \"outline\" \"0\"");
        assert_eq!(transpile("cursor", "pointer"), "Css.cursor Css.pointer");
    }

    #[test]
    fn test_exempt_value_quotes_are_escaped() {
        assert_eq!(
            transpile("content", "\"\""),
            r#"Css.property "content" "\"\"""#
        );
        assert_eq!(
            transpile("font-family", "\"Segoe UI\", Roboto"),
            r#"Css.property "font-family" "\"Segoe UI\", Roboto""#
        );
    }

    #[test]
    fn test_unrecognised_token_falls_back() {
        assert_eq!(
            transpile("background-color", "rgba(0, 0, 0, 0.5)"),
            "Css.property \"background-color\" \"rgba(0, 0, 0, 0.5)\""
        );
        assert_eq!(transpile("width", ""), "Css.property \"width\" \"\"");
    }

    #[test]
    fn test_idempotent() {
        let declaration = Declaration::new("border-width", "2px 0");
        let first = transpile_declaration(&declaration);
        let second = transpile_declaration(&declaration);
        assert_eq!(first, second);
        assert_eq!(first, "Css.borderWidth2 (Css.px 2) (Css.px 0)");
    }

    #[test]
    fn test_custom_exemption_table() {
        let table = ExemptionTable::empty().with("cursor", Exemption::All);
        let transpiler = Transpiler::new(table);

        assert_eq!(
            transpiler.transpile_declaration(&Declaration::new("cursor", "pointer")),
            "Css.property \"cursor\" \"pointer\""
        );
        // empty table no longer exempts float
        assert_eq!(
            transpiler.transpile_declaration(&Declaration::new("float", "left")),
            "Css.float Css.left"
        );
    }

    #[test]
    fn test_vocabulary_rejects_unknown_constructor() {
        let transpiler = Transpiler::default().with_vocabulary(Vocabulary::elm_css());

        assert_eq!(
            transpiler.transpile_declaration(&Declaration::new("gap", "1rem")),
            "Css.property \"gap\" \"1rem\""
        );
        assert_eq!(
            transpiler.transpile_declaration(&Declaration::new("margin", "0 auto")),
            "Css.margin2 (Css.px 0) Css.auto"
        );
    }

    #[test]
    fn test_deserialize_prop_alias() {
        let declaration: Declaration =
            serde_json::from_str(r#"{ "prop": "color", "value": "red" }"#).unwrap();
        assert_eq!(declaration, Declaration::new("color", "red"));
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("a\"b"), "\"a\\\"b\"");
        assert_eq!(string_literal("a\\b"), "\"a\\\\b\"");
    }
}
