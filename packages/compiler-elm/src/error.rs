use elmcss_common::CommonError;
use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

/// Failures around the transpiler core. Declarations themselves never fail.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid Elm module name '{name}'")]
    InvalidModuleName { name: String },

    #[error("Missing output format: both elmFile and elmModuleName must be set")]
    MissingFormat,

    #[error("Configuration error: {0}")]
    Config(#[from] CommonError),
}

impl CompileError {
    pub fn invalid_module_name(name: impl Into<String>) -> Self {
        Self::InvalidModuleName { name: name.into() }
    }
}
