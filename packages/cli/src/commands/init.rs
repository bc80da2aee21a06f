use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Elm module name for the generated utilities
    #[arg(short, long, default_value = "TW.Utilities")]
    pub module: String,

    /// Output .elm file
    #[arg(short, long, default_value = "src/TW/Utilities.elm")]
    pub out: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing elmcss config...".bright_blue().bold());

    let mut config = Config::default();
    config.elm.elm_module_name = args.module;
    config.elm.elm_file = args.out;

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Ready!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Export your utility classes to {}", config.input.bright_white());
    println!("  2. Run {} to generate {}", "elmcss compile".bright_cyan(), config.elm.elm_file.bright_white());

    Ok(())
}
