use crate::error::{CricketError, Result};
use crate::types::config::CrichitConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "crichit.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".crichit/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/crichit/config.toml";

pub fn load_config(root: &Path) -> Result<Option<CrichitConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges global, project and local layers in that order. Returns `None`
/// when none of them exist.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CrichitConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    if !found {
        return Ok(None);
    }

    let cfg: CrichitConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CricketError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CricketError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

/// Joins relative paths onto `root`; absolute paths are kept as-is.
pub fn resolve_path(root: &Path, path: &str) -> PathBuf {
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        root.join(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::FormatSetting;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[store]
ready_timeout_ms = 9000

[logging]
level = "info"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[store]
path = "league.json"

[output]
format = "md"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".crichit")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[output]
format = "json"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let settings = cfg.store_settings();
        assert_eq!(settings.path, "league.json");
        assert_eq!(settings.ready_timeout, Duration::from_millis(9000));
        assert_eq!(cfg.output_format(), Some(FormatSetting::Json));
        assert_eq!(cfg.log_level(), Some("info"));
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[store]
poll_interval_ms = 0
"#,
        )
        .expect("repo config should write");

        let result = load_config_with_global(root.path(), None);
        assert!(matches!(result, Err(CricketError::ConfigParse(_))));
    }

    #[test]
    fn resolve_path_keeps_absolute_paths() {
        let root = Path::new("/srv/cricket");
        assert_eq!(
            resolve_path(root, "data/store.json"),
            PathBuf::from("/srv/cricket/data/store.json")
        );
        assert_eq!(resolve_path(root, "/tmp/x.json"), PathBuf::from("/tmp/x.json"));
    }
}
