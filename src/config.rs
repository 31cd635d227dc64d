use crate::error::{LeadScoreError, Result};
use crate::types::config::AppConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "leadscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".leadscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/leadscore/config.toml";

/// Effective application settings and the files that contributed to them,
/// lowest precedence first.
#[derive(Debug, Clone, Default)]
pub struct LayeredConfig {
    pub config: AppConfig,
    pub layers: Vec<PathBuf>,
}

/// Loads `~/.config/leadscore/config.toml`, `leadscore.toml` and
/// `.leadscore/local.toml` under `root`, later files winning key by key.
/// Missing files are skipped; with none present the defaults apply.
pub fn load_config(root: &Path) -> Result<LayeredConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<LayeredConfig> {
    let candidates = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)]);

    let mut merged = Table::new();
    let mut layers = Vec::new();
    for path in candidates.filter(|path| path.is_file()) {
        overlay(&mut merged, read_layer(&path)?);
        layers.push(path);
    }

    let config: AppConfig = Value::Table(merged).try_into()?;
    config.validate()?;
    Ok(LayeredConfig { config, layers })
}

fn read_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| LeadScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

// Nested tables merge key by key; any other value replaces what was there.
fn overlay(base: &mut Table, upper: Table) {
    for (key, value) in upper {
        match value {
            Value::Table(section) => {
                if let Some(Value::Table(existing)) = base.get_mut(&key) {
                    overlay(existing, section);
                } else {
                    base.insert(key, Value::Table(section));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
