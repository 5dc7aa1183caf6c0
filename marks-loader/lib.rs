//! Locating and loading register settings for a host.
//!
//! Settings come from the built-in defaults, overlaid by the user's
//! `marks.toml` in the config directory and then by a `.marks.toml` in the
//! current directory. Missing files are skipped.

use std::{
  io,
  path::{
    Path,
    PathBuf,
  },
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use eyre::{
  Context,
  Result,
};
use marks_lib::{
  RegisterSettings,
  RegisterSpace,
};

pub const CONFIG_FILE_NAME: &str = "marks.toml";
pub const WORKSPACE_CONFIG_FILE_NAME: &str = ".marks.toml";

pub fn config_dir() -> Result<PathBuf> {
  if let Ok(dir) = std::env::var("MARKS_CONFIG_DIR") {
    return Ok(PathBuf::from(dir));
  }
  let strategy = choose_base_strategy().wrap_err("unable to find the config directory")?;
  let mut path = strategy.config_dir();
  path.push("marks");
  Ok(path)
}

pub fn config_file() -> Result<PathBuf> {
  Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

pub fn workspace_config_file() -> Result<PathBuf> {
  let cwd = std::env::current_dir().wrap_err("unable to read the current directory")?;
  Ok(cwd.join(WORKSPACE_CONFIG_FILE_NAME))
}

/// Built-in settings as a TOML table.
pub fn default_config() -> Result<toml::Value> {
  toml::Value::try_from(RegisterSettings::default())
    .wrap_err("failed to serialize default register settings")
}

/// Merge `right` onto `left`.
///
/// Tables are merged key by key down to `merge_depth` levels; below that, and
/// for every other kind of value, `right` replaces `left`.
pub fn merge_toml_values(left: toml::Value, right: toml::Value, merge_depth: usize) -> toml::Value {
  use toml::Value;

  match (left, right) {
    (Value::Table(mut left_map), Value::Table(right_map)) if merge_depth > 0 => {
      for (rname, rvalue) in right_map {
        let merged = match left_map.remove(&rname) {
          Some(lvalue) => merge_toml_values(lvalue, rvalue, merge_depth - 1),
          None => rvalue,
        };
        left_map.insert(rname, merged);
      }
      Value::Table(left_map)
    },
    (_, value) => value,
  }
}

fn read_config(path: &Path) -> Result<Option<toml::Value>> {
  let text = match std::fs::read_to_string(path) {
    Ok(text) => text,
    Err(err) if err.kind() == io::ErrorKind::NotFound => {
      tracing::debug!("no register settings at {}", path.display());
      return Ok(None);
    },
    Err(err) => {
      return Err(err).wrap_err_with(|| format!("failed to read {}", path.display()));
    },
  };
  let table: toml::Table =
    toml::from_str(&text).wrap_err_with(|| format!("failed to parse {}", path.display()))?;
  Ok(Some(toml::Value::Table(table)))
}

/// Defaults overlaid by each existing file in `paths`, later files winning.
pub fn load_settings<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<RegisterSettings> {
  let mut config = default_config()?;
  for path in paths {
    if let Some(user) = read_config(path.as_ref())? {
      config = merge_toml_values(config, user, 1);
    }
  }

  let settings: RegisterSettings = config
    .try_into()
    .wrap_err("invalid register settings")?;
  settings.validate()?;

  for space in [RegisterSpace::Primary, RegisterSpace::Harpoon] {
    let duplicates = settings.duplicate_registers(space);
    if !duplicates.is_empty() {
      tracing::warn!(
        ?space,
        "duplicate registers {duplicates:?}; only the first occurrence sets the order"
      );
    }
  }
  Ok(settings)
}

/// Settings from the user config file and the workspace config file.
pub fn user_settings() -> Result<RegisterSettings> {
  load_settings([config_file()?, workspace_config_file()?])
}
