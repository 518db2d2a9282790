use super::{Config, OutputConfig, PathsConfig, ThemeConfig};
use crate::storage::last_choice::DEFAULT_KEY;
use directories::ProjectDirs;

/// Config written out on first run.
pub fn defaults() -> Config {
    Config {
        theme: theme(),
        paths: paths(),
        output: output(),
    }
}

/// Built-in catalog, stored under the local-storage key the site used.
pub fn theme() -> ThemeConfig {
    ThemeConfig {
        storage_key: DEFAULT_KEY.to_string(),
        palettes: Vec::new(),
    }
}

pub fn paths() -> PathsConfig {
    let proj = ProjectDirs::from("dev", "tint", "tint");
    let data_dir = proj
        .as_ref()
        .map(|p| p.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("tint"));
    PathsConfig { data_dir }
}

/// Stylesheet on stdout, variables declared on `:root`.
pub fn output() -> OutputConfig {
    OutputConfig {
        css_path: None,
        selector: ":root".to_string(),
    }
}
