//! Transpiles CSS declarations into elm-css style definitions.
//!
//! ```ignore
//! use elmcss_compiler::{emit_function, ClassEntry, Declaration};
//!
//! let entry = ClassEntry::new("mx_auto", vec![
//!     Declaration::new("margin-left", "auto"),
//!     Declaration::new("margin-right", "auto"),
//! ]);
//! let elm = emit_function("Css.Style", &entry);
//! ```

mod casing;
mod declaration;
mod emitter;
mod error;
mod exemptions;
mod module;
mod naming;
mod options;
mod transpiler;
mod value;
mod vocabulary;
mod writer;

pub use casing::to_identifier;
pub use declaration::{property_expression, string_literal, transpile_declaration, Declaration};
pub use emitter::{emit_function, ClassEntry};
pub use error::{CompileError, CompileResult};
pub use exemptions::{is_zero_unitless, Exemption, ExemptionTable, ZERO_UNITLESS_PROPERTIES};
pub use module::{emit_module, is_valid_module_name};
pub use naming::{elm_name, split_selector, NameStyle};
pub use options::{ElmFormat, ElmOptions};
pub use transpiler::{default_transpiler, Transpiler};
pub use value::{classify_token, normalize_number, token_shape, StyleValue};
pub use vocabulary::Vocabulary;
