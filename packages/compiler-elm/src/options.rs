use crate::error::CompileResult;
use crate::exemptions::ExemptionTable;
use crate::naming::NameStyle;
use crate::transpiler::Transpiler;
use crate::vocabulary::Vocabulary;
use elmcss_common::CommonError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for generating the utilities module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElmOptions {
    /// Path of the generated `.elm` file
    pub elm_file: String,

    /// Module name declared in the generated file
    pub elm_module_name: String,

    /// Prepended to every generated identifier
    pub prefix: String,

    pub name_style: NameStyle,

    /// Type annotation for every generated definition
    #[serde(rename = "type")]
    pub target_type: String,

    /// Merged over the built-in exemption table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemptions: Option<ExemptionTable>,

    /// Route constructors missing from the elm-css vocabulary to `Css.property`
    pub strict_vocabulary: bool,
}

/// Where and under which module name output is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElmFormat {
    pub elm_file: PathBuf,
    pub elm_module_name: String,
}

impl Default for ElmOptions {
    fn default() -> Self {
        Self {
            elm_file: "src/TW/Utilities.elm".to_string(),
            elm_module_name: "TW.Utilities".to_string(),
            prefix: String::new(),
            name_style: NameStyle::Snake,
            target_type: "Css.Style".to_string(),
            exemptions: None,
            strict_vocabulary: false,
        }
    }
}

impl ElmOptions {
    pub fn from_json_str(json: &str) -> CompileResult<Self> {
        let options = serde_json::from_str(json).map_err(CommonError::from)?;
        Ok(options)
    }

    /// The output format, or `None` when the file or module name is blank
    pub fn format(&self) -> Option<ElmFormat> {
        if self.elm_file.trim().is_empty() || self.elm_module_name.trim().is_empty() {
            return None;
        }
        Some(ElmFormat {
            elm_file: PathBuf::from(&self.elm_file),
            elm_module_name: self.elm_module_name.clone(),
        })
    }

    /// Transpiler configured with these options' exemptions and vocabulary
    pub fn transpiler(&self) -> Transpiler {
        let mut exemptions = ExemptionTable::default();
        if let Some(overrides) = &self.exemptions {
            exemptions.extend(overrides.clone());
        }

        let transpiler = Transpiler::new(exemptions);
        if self.strict_vocabulary {
            transpiler.with_vocabulary(Vocabulary::elm_css())
        } else {
            transpiler
        }
    }
}
