use elmcss_compiler::{ClassEntry, Declaration, ElmOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Transpile one CSS declaration to an elm-css expression
#[wasm_bindgen(js_name = transpileDeclaration)]
pub fn transpile_declaration_js(property: &str, value: &str) -> String {
    elmcss_compiler::transpile_declaration(&Declaration::new(property, value))
}

/// Emit the Elm definition for a class entry given as JSON
/// (`{ targetIdentifier, pseudoSelector?, declarations: [{ prop, value }] }`)
#[wasm_bindgen(js_name = emitFunction)]
pub fn emit_function_js(target_type: &str, entry_json: &str) -> Result<String, JsValue> {
    let entry: ClassEntry = serde_json::from_str(entry_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid class entry: {}", e)))?;

    Ok(elmcss_compiler::emit_function(target_type, &entry))
}

/// Generate a whole utilities module. `options_json` may be empty to use the
/// defaults.
#[wasm_bindgen(js_name = emitModule)]
pub fn emit_module_js(options_json: &str, entries_json: &str) -> Result<String, JsValue> {
    let options = if options_json.trim().is_empty() {
        ElmOptions::default()
    } else {
        ElmOptions::from_json_str(options_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    let entries: Vec<ClassEntry> = serde_json::from_str(entries_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid class entries: {}", e)))?;

    elmcss_compiler::emit_module(&options, &entries)
        .map_err(|e| JsValue::from_str(&format!("Generate error: {}", e)))
}

/// Sanitize a utility class name into an Elm identifier
#[wasm_bindgen(js_name = toElmName)]
pub fn to_elm_name_js(class: &str, prefix: &str, camel: bool) -> String {
    let style = if camel {
        elmcss_compiler::NameStyle::Camel
    } else {
        elmcss_compiler::NameStyle::Snake
    };
    elmcss_compiler::elm_name(class, prefix, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpile_declaration() {
        assert_eq!(
            transpile_declaration_js("padding", "0.5rem 1rem"),
            "Css.padding2 (Css.rem 0.5) (Css.rem 1)"
        );
    }

    #[test]
    fn test_emit_function() {
        let json = r#"{
            "targetIdentifier": "hover__opacity_50",
            "pseudoSelector": "hover",
            "declarations": [{ "prop": "opacity", "value": "0.5" }]
        }"#;

        let result = emit_function_js("Css.Style", json);
        assert!(result.is_ok());

        let code = result.unwrap();
        assert!(code.starts_with("hover__opacity_50 : Css.Style\n"));
        assert!(code.contains("[ Css.hover\n"));
        assert!(code.contains("[ Css.opacity (Css.num 0.5)\n"));
    }

    #[test]
    fn test_emit_module_with_defaults() {
        let entries = r#"[
            { "targetIdentifier": "block", "declarations": [{ "prop": "display", "value": "block" }] }
        ]"#;

        let result = emit_module_js("", entries);
        assert!(result.is_ok());
        assert!(result.unwrap().starts_with("module TW.Utilities exposing\n    ( block\n    )\n"));
    }

    #[test]
    fn test_to_elm_name() {
        assert_eq!(to_elm_name_js("-mx-2", "", false), "neg_mx_2");
        assert_eq!(to_elm_name_js("-mx-2", "", true), "negMx2");
    }
}
