use crate::casing::to_identifier;
use crate::declaration::Declaration;
use crate::transpiler::{default_transpiler, Transpiler};
use crate::writer::CodeWriter;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One utility class: the Elm name it is exposed under, an optional
/// pseudo-class scope and its declarations in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    pub target_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pseudo_selector: Option<String>,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl ClassEntry {
    pub fn new(target_identifier: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            target_identifier: target_identifier.into(),
            pseudo_selector: None,
            declarations,
        }
    }

    pub fn with_pseudo_selector(mut self, pseudo_selector: impl Into<String>) -> Self {
        self.pseudo_selector = Some(pseudo_selector.into());
        self
    }
}

impl Transpiler {
    /// Emit the Elm definition for one class entry:
    ///
    /// ```text
    /// name : Css.Style
    /// name =
    ///     Css.batch
    ///         [ Css.color (Css.hex "#fff")
    ///         ]
    /// ```
    pub fn emit_function(&self, target_type: &str, entry: &ClassEntry) -> String {
        let name = &entry.target_identifier;
        debug!(name = %name, declarations = entry.declarations.len(), "Emitting class function");

        let expressions: Vec<String> = entry
            .declarations
            .iter()
            .map(|declaration| self.transpile_declaration(declaration))
            .collect();

        let items = match &entry.pseudo_selector {
            Some(selector) => vec![pseudo_block(selector, &expressions)],
            None => expressions,
        };

        let mut writer = CodeWriter::new();
        writer.add_line(&format!("{} : {}", name, target_type));
        writer.add_line(&format!("{} =", name));
        writer.indent();
        writer.add_line("Css.batch");
        writer.indent();
        writer.add_list(&items);
        writer.into_output()
    }
}

/// `emit_function` with the built-in exemption table
pub fn emit_function(target_type: &str, entry: &ClassEntry) -> String {
    default_transpiler().emit_function(target_type, entry)
}

/// `Css.hover [ ... ]` around a set of declaration expressions
fn pseudo_block(selector: &str, expressions: &[String]) -> String {
    let mut writer = CodeWriter::new();
    writer.add_line(&format!(
        "Css.{}",
        to_identifier(selector.trim_start_matches(':'))
    ));
    writer.indent();
    writer.add_list(expressions);
    writer.into_output()
}
