/// Whole-string replacements where elm-css spells the identifier differently
/// from the mechanical camel-casing.
const OVERRIDES: &[(&str, &str)] = &[("nowrap", "noWrap")];

/// Convert a hyphenated CSS name into an elm-css identifier
/// (`background-color` → `backgroundColor`).
pub fn to_identifier(name: &str) -> String {
    if let Some((_, replacement)) = OVERRIDES.iter().find(|(from, _)| *from == name) {
        return (*replacement).to_string();
    }

    let mut ident = String::with_capacity(name.len());
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        if c == '-' {
            match chars.next() {
                Some(next) => ident.extend(next.to_uppercase()),
                None => ident.push('-'),
            }
        } else {
            ident.push(c);
        }
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_cases_hyphens() {
        assert_eq!(to_identifier("background-color"), "backgroundColor");
        assert_eq!(to_identifier("border-top-left-radius"), "borderTopLeftRadius");
    }

    #[test]
    fn test_plain_word_is_unchanged() {
        assert_eq!(to_identifier("auto"), "auto");
        assert_eq!(to_identifier("color"), "color");
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(to_identifier("nowrap"), "noWrap");
    }

    #[test]
    fn test_leading_hyphen() {
        assert_eq!(to_identifier("-webkit-box"), "WebkitBox");
    }

    #[test]
    fn test_trailing_hyphen_is_kept() {
        assert_eq!(to_identifier("a-"), "a-");
    }
}
