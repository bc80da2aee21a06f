use elmcss_common::CommonResult;
use elmcss_compiler::ElmOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "elmcss.config.json";

/// elmcss configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON file listing the utility classes and their declarations
    #[serde(default = "default_input")]
    pub input: String,

    /// Generator options (elmFile, elmModuleName, prefix, ...)
    #[serde(flatten)]
    pub elm: ElmOptions,
}

fn default_input() -> String {
    "tailwind.classes.json".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> CommonResult<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to the class input file
    pub fn get_input_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.input)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            elm: ElmOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elmcss_common::CommonError;
    use elmcss_compiler::NameStyle;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("elmcss-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "input": "build/classes.json",
            "elmFile": "src/Tw.elm",
            "elmModuleName": "Tw",
            "nameStyle": "camel",
            "exemptions": { "cursor": ["wait"] },
            "strictVocabulary": true
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.input, "build/classes.json");
        assert_eq!(config.elm.elm_file, "src/Tw.elm");
        assert_eq!(config.elm.elm_module_name, "Tw");
        assert_eq!(config.elm.name_style, NameStyle::Camel);
        assert!(config.elm.strict_vocabulary);
        assert!(config.elm.transpiler().exemptions().is_exempt("cursor", "wait"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, "tailwind.classes.json");
        assert_eq!(config.elm.elm_module_name, "TW.Utilities");
        assert_eq!(config.elm.target_type, "Css.Style");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.input, "tailwind.classes.json");
        assert_eq!(config.elm, ElmOptions::default());
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let dir = scratch_dir("no-config");
        let config = Config::load(dir.to_str().unwrap()).unwrap();
        assert_eq!(config.input, "tailwind.classes.json");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_reads_config_file() {
        let dir = scratch_dir("with-config");
        fs::write(dir.join(DEFAULT_CONFIG_NAME), r#"{ "elmModuleName": "Tw" }"#).unwrap();
        let config = Config::load(dir.to_str().unwrap()).unwrap();
        assert_eq!(config.elm.elm_module_name, "Tw");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_errors_are_typed() {
        let dir = scratch_dir("bad-config");
        // a directory where the config file should be can't be read
        fs::create_dir(dir.join(DEFAULT_CONFIG_NAME)).unwrap();
        assert!(matches!(
            Config::load(dir.to_str().unwrap()),
            Err(CommonError::Io(_))
        ));
        fs::remove_dir_all(&dir).unwrap();

        let dir = scratch_dir("broken-config");
        fs::write(dir.join(DEFAULT_CONFIG_NAME), "{ not json").unwrap();
        assert!(matches!(
            Config::load(dir.to_str().unwrap()),
            Err(CommonError::Json(_))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}
