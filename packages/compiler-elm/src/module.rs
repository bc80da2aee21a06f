use crate::emitter::ClassEntry;
use crate::error::{CompileError, CompileResult};
use crate::options::ElmOptions;
use crate::transpiler::Transpiler;
use crate::writer::CodeWriter;
use tracing::{info, instrument};

const IMPORTS: &[&str] = &["import Css", "import Css.Media"];

impl Transpiler {
    /// Assemble a complete Elm module exposing one definition per entry.
    ///
    /// The exposing list is sorted alphabetically; definitions keep their
    /// input order.
    #[instrument(skip(self, entries), fields(classes = entries.len()))]
    pub fn emit_module(
        &self,
        module_name: &str,
        target_type: &str,
        entries: &[ClassEntry],
    ) -> CompileResult<String> {
        if !is_valid_module_name(module_name) {
            return Err(CompileError::invalid_module_name(module_name));
        }

        let mut exports: Vec<&str> = entries
            .iter()
            .map(|entry| entry.target_identifier.as_str())
            .collect();
        exports.sort_unstable();

        let mut writer = CodeWriter::new();
        if exports.is_empty() {
            writer.add_line(&format!("module {} exposing (..)", module_name));
        } else {
            writer.add_line(&format!("module {} exposing", module_name));
            writer.indent();
            writer.add_delimited('(', ')', &exports);
            writer.dedent();
        }
        writer.blank_line();
        for import in IMPORTS {
            writer.add_line(import);
        }

        let mut output = writer.into_output();
        for entry in entries {
            output.push_str("\n\n");
            output.push_str(&self.emit_function(target_type, entry));
        }

        info!(module = %module_name, "Elm module generated");
        Ok(output)
    }
}

/// Generate the module described by `options`
pub fn emit_module(options: &ElmOptions, entries: &[ClassEntry]) -> CompileResult<String> {
    let format = options.format().ok_or(CompileError::MissingFormat)?;
    options
        .transpiler()
        .emit_module(&format.elm_module_name, &options.target_type, entries)
}

/// `Foo.Bar`: dot-separated segments, each starting with an uppercase letter
pub fn is_valid_module_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
