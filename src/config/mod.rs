use crate::theme::Palette;
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub paths: PathsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key the last applied palette index is stored under.
    pub storage_key: String,
    /// Replaces the built-in catalog when non-empty.
    pub palettes: Vec<Palette>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write the stylesheet here instead of stdout.
    pub css_path: Option<PathBuf>,
    /// CSS selector the variables are declared on.
    pub selector: String,
}

impl PathsConfig {
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("local_storage.sqlite3")
    }
}

impl Default for Config {
    fn default() -> Self {
        defaults::defaults()
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        defaults::theme()
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        defaults::paths()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        defaults::output()
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "tint", "tint").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let cfg = defaults::defaults();
        let raw = toml::to_string_pretty(&cfg).context("serialize default config")?;
        fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg =
        toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tint-config-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("config.toml")
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = defaults::defaults();
        assert_eq!(cfg.theme.storage_key, "lastThemeIndex");
        assert!(cfg.theme.palettes.is_empty());
        assert_eq!(cfg.output.selector, ":root");
        assert_eq!(cfg.output.css_path, None);
        assert!(cfg.paths.storage_path().ends_with("local_storage.sqlite3"));
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let path = scratch("missing");

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.theme.storage_key, "lastThemeIndex");
        assert!(cfg.theme.palettes.is_empty());
        assert_eq!(cfg.output.selector, ":root");
        assert!(path.exists());

        let again = load(Some(&path)).unwrap();
        assert_eq!(again.paths.data_dir, cfg.paths.data_dir);

        cleanup(&path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = scratch("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            "[output]\nselector = \"html\"\n\n[paths]\ndata_dir = \"/tmp/tint-data\"\n",
        )
        .unwrap();

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.output.selector, "html");
        assert_eq!(cfg.output.css_path, None);
        assert_eq!(cfg.theme.storage_key, "lastThemeIndex");
        assert_eq!(
            cfg.paths.storage_path(),
            PathBuf::from("/tmp/tint-data/local_storage.sqlite3")
        );

        cleanup(&path);
    }

    #[test]
    fn test_bad_palette_is_a_parse_error() {
        let path = scratch("bad");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"
[[theme.palettes]]
name = "Off"
primary = "400 10% 10%"
accent = "0 0% 0%"
ring = "0 0% 0%"
bg_base_dark = "0 0% 0%"
bg_base_light = "0 0% 0%"
grads_dark = ["0 0% 0%", "0 0% 0%", "0 0% 0%", "0 0% 0%", "0 0% 0%"]
grads_light = ["0 0% 0%", "0 0% 0%", "0 0% 0%", "0 0% 0%", "0 0% 0%"]
"#,
        )
        .unwrap();

        assert!(load(Some(&path)).is_err());

        cleanup(&path);
    }
}
