use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RosterConfig {
    pub snapshot: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("roster.toml")
}

pub fn default_snapshot_path() -> PathBuf {
    PathBuf::from("roster.json")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<RosterConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: RosterConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &RosterConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Pick the snapshot path: CLI flag wins, then config, then the default.
pub fn resolve_snapshot_path(
    cli_override: Option<PathBuf>,
    config: Option<&RosterConfig>,
) -> PathBuf {
    cli_override
        .or_else(|| {
            config
                .and_then(|c| c.snapshot.as_deref())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_snapshot_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("roster.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        let config = RosterConfig {
            snapshot: Some("data/roster.json".to_string()),
        };

        write_config(&path, &config, false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.snapshot.as_deref(), Some("data/roster.json"));

        // A second write without force must refuse
        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &config, true).unwrap();
    }

    #[test]
    fn test_resolve_snapshot_path_precedence() {
        let config = RosterConfig {
            snapshot: Some("from_config.json".to_string()),
        };

        let cli = resolve_snapshot_path(Some(PathBuf::from("cli.json")), Some(&config));
        assert_eq!(cli, PathBuf::from("cli.json"));

        let from_config = resolve_snapshot_path(None, Some(&config));
        assert_eq!(from_config, PathBuf::from("from_config.json"));

        let fallback = resolve_snapshot_path(None, None);
        assert_eq!(fallback, default_snapshot_path());
    }
}
