pub mod compile;
pub mod declaration;
pub mod init;

pub use compile::{compile, CompileArgs};
pub use declaration::{declaration, DeclarationArgs};
pub use init::{init, InitArgs};
