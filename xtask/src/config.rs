//! Configuration loading from workspace metadata.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file used when the workspace does not name one.
const DEFAULT_CODEGEN_CONFIG: &str = "codegen.toml";

/// Endeavour workspace metadata from Cargo.toml.
#[derive(Debug, Deserialize)]
struct EndeavourMetadata {
    /// Batch codegen config, relative to the workspace root.
    #[serde(rename = "codegen-config")]
    codegen_config: Option<PathBuf>,
}

/// Workspace configuration.
#[derive(Debug, Deserialize)]
struct WorkspaceConfig {
    workspace: WorkspaceSection,
}

#[derive(Debug, Deserialize)]
struct WorkspaceSection {
    metadata: Option<MetadataSection>,
}

#[derive(Debug, Deserialize)]
struct MetadataSection {
    endeavour: Option<EndeavourMetadata>,
}

/// Workspace configuration for xtask commands.
#[derive(Debug, Clone)]
pub struct Config {
    /// Workspace root directory.
    pub workspace_root: PathBuf,
    /// Path to the batch codegen config.
    pub codegen_config: PathBuf,
}

impl Config {
    /// Load configuration from the enclosing workspace.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let workspace_root = find_workspace_root(&cwd)?;
        Self::from_root(workspace_root)
    }

    /// Load configuration for a known workspace root.
    pub fn from_root(workspace_root: PathBuf) -> Result<Self> {
        let cargo_toml = workspace_root.join("Cargo.toml");
        let content = std::fs::read_to_string(&cargo_toml)
            .with_context(|| format!("Failed to read {}", cargo_toml.display()))?;

        let config: WorkspaceConfig =
            toml::from_str(&content).context("Failed to parse Cargo.toml")?;

        let codegen_config = config
            .workspace
            .metadata
            .and_then(|m| m.endeavour)
            .and_then(|e| e.codegen_config)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CODEGEN_CONFIG));

        Ok(Self {
            codegen_config: workspace_root.join(codegen_config),
            workspace_root,
        })
    }
}

/// Find the workspace root by looking for Cargo.toml with [workspace].
fn find_workspace_root(start: &Path) -> Result<PathBuf> {
    let mut dir = start.to_path_buf();

    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists() {
            let content = std::fs::read_to_string(&cargo_toml)
                .with_context(|| format!("Failed to read {}", cargo_toml.display()))?;
            if content.contains("[workspace]") {
                return Ok(dir);
            }
        }

        if !dir.pop() {
            anyhow::bail!("Could not find workspace root (no Cargo.toml with [workspace] found)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_root_from_member() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join("Cargo.toml"),
            "[workspace]\nmembers = [\"tool\"]\n",
        )
        .unwrap();
        let member = root.path().join("tool/src");
        std::fs::create_dir_all(&member).unwrap();
        std::fs::write(root.path().join("tool/Cargo.toml"), "[package]\nname = \"tool\"\n")
            .unwrap();

        assert_eq!(find_workspace_root(&member).unwrap(), root.path());
    }

    #[test]
    fn test_default_codegen_config() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("Cargo.toml"), "[workspace]\n").unwrap();

        let config = Config::from_root(root.path().to_path_buf()).unwrap();
        assert_eq!(config.codegen_config, root.path().join("codegen.toml"));
    }

    #[test]
    fn test_codegen_config_from_metadata() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join("Cargo.toml"),
            "[workspace]\n\n[workspace.metadata.endeavour]\ncodegen-config = \"bios/codegen.toml\"\n",
        )
        .unwrap();

        let config = Config::from_root(root.path().to_path_buf()).unwrap();
        assert_eq!(config.workspace_root, root.path());
        assert_eq!(config.codegen_config, root.path().join("bios/codegen.toml"));
    }
}
