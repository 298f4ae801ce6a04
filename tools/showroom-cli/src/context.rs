//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use showroom_core::SiteConfig;

use crate::output::Output;

/// File names searched for, in order, in each directory up the tree.
const CONFIG_NAMES: [&str; 3] = ["showroom.toml", ".showroom.toml", "showroom.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Site configuration, with environment variables applied. Not
    /// validated: offline renders need no credentials.
    pub config: SiteConfig,
    /// Where the configuration came from.
    pub config_source: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let source = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => find_config(&cwd),
        };
        let file_config = match &source {
            Some(path) => SiteConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SiteConfig::default(),
        };
        let config = file_config
            .with_overrides(|key| std::env::var(key).ok())
            .context("Invalid configuration in environment")?;

        if let Some(path) = &source {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_source: source,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Nearest config file in `start` or one of its ancestors.
fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .flat_map(|dir| CONFIG_NAMES.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("showroom.toml"), "").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, root.path().join("showroom.toml"));
    }

    #[test]
    fn test_find_config_prefers_toml() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("showroom.json"), "{}").unwrap();
        std::fs::write(root.path().join("showroom.toml"), "").unwrap();

        let found = find_config(root.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "showroom.toml");
    }

    #[test]
    fn test_resolve_relative() {
        let cwd = Path::new("/srv/site");
        assert_eq!(resolve(cwd, "fixtures.json"), cwd.join("fixtures.json"));
        assert_eq!(resolve(cwd, "/tmp/x.json"), PathBuf::from("/tmp/x.json"));
    }
}
