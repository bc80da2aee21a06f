use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use elmcss_compiler::{emit_module, ClassEntry, Declaration, ElmOptions, NameStyle};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Class input file (overrides config)
    pub input: Option<String>,

    /// Elm module name (overrides config)
    #[arg(short, long)]
    pub module: Option<String>,

    /// Output .elm file (overrides config)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Prefix for generated identifiers
    #[arg(long)]
    pub prefix: Option<String>,

    /// Identifier style (snake, camel)
    #[arg(long)]
    pub name_style: Option<String>,

    /// Type annotation for generated definitions
    #[arg(long = "type")]
    pub target_type: Option<String>,

    /// Fall back to Css.property for constructors elm-css doesn't export
    #[arg(long)]
    pub strict: bool,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

/// One utility class as produced by the stylesheet extraction step
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInput {
    /// Raw selector, e.g. `.hover\:bg-white:hover`
    pub class: String,

    /// Overrides the pseudo-class parsed from the selector
    #[serde(default)]
    pub pseudo_selector: Option<String>,

    pub declarations: Vec<Declaration>,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let options = apply_overrides(config.elm.clone(), &args)?;

    let input_path = match &args.input {
        Some(input) => PathBuf::from(cwd).join(input),
        None => config.get_input_path(cwd),
    };
    if !input_path.exists() {
        return Err(anyhow!("Class input does not exist: {:?}", input_path));
    }

    let format = options.format().ok_or_else(|| {
        anyhow!("Both elmFile and elmModuleName must be set to generate a module")
    })?;

    if !args.stdout {
        println!("{}", "🔨 Generating elm-css utilities...".bright_blue().bold());
    }

    let source = fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;
    let entries = parse_classes(&source, &options)
        .with_context(|| format!("Invalid class input in {}", input_path.display()))?;

    let output = emit_module(&options, &entries)?;

    if args.stdout {
        println!("{}", output);
        return Ok(());
    }

    let output_file = PathBuf::from(cwd).join(&format.elm_file);
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, output)?;

    println!(
        "  {} {} classes → {} ({})",
        "✓".green(),
        entries.len(),
        output_file.display(),
        format.elm_module_name
    );
    Ok(())
}

fn apply_overrides(mut options: ElmOptions, args: &CompileArgs) -> Result<ElmOptions> {
    if let Some(module) = &args.module {
        options.elm_module_name = module.clone();
    }
    if let Some(out) = &args.out {
        options.elm_file = out.clone();
    }
    if let Some(prefix) = &args.prefix {
        options.prefix = prefix.clone();
    }
    if let Some(style) = &args.name_style {
        options.name_style = parse_name_style(style)?;
    }
    if let Some(target_type) = &args.target_type {
        options.target_type = target_type.clone();
    }
    if args.strict {
        options.strict_vocabulary = true;
    }
    Ok(options)
}

fn parse_name_style(style: &str) -> Result<NameStyle> {
    match style {
        "snake" => Ok(NameStyle::Snake),
        "camel" => Ok(NameStyle::Camel),
        other => Err(anyhow!("Unknown name style: {}. Use: snake or camel", other)),
    }
}

/// Turn the JSON class list into entries named per `options`
pub fn parse_classes(source: &str, options: &ElmOptions) -> Result<Vec<ClassEntry>> {
    let classes: Vec<ClassInput> = serde_json::from_str(source)?;

    Ok(classes
        .into_iter()
        .map(|class| {
            let mut entry = ClassEntry::from_selector(
                &class.class,
                &options.prefix,
                options.name_style,
                class.declarations,
            );
            if class.pseudo_selector.is_some() {
                entry.pseudo_selector = class.pseudo_selector;
            }
            entry
        })
        .collect())
}
