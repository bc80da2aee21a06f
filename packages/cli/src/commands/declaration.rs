use crate::config::Config;
use anyhow::Result;
use clap::Args;
use elmcss_compiler::Declaration;

#[derive(Debug, Args)]
pub struct DeclarationArgs {
    /// CSS property, e.g. `margin-top`
    pub property: String,

    /// CSS value, e.g. `0.25rem` or `1px solid red`
    pub value: String,
}

/// Print the elm-css expression for a single declaration
pub fn declaration(args: DeclarationArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let transpiler = config.elm.transpiler();

    let declaration = Declaration::new(args.property, args.value.trim());
    println!("{}", transpiler.transpile_declaration(&declaration));
    Ok(())
}
