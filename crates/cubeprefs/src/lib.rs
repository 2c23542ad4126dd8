//! User preferences.
//!
//! Preferences are layered: the built-in defaults from `default.yaml` are
//! loaded first and then overridden by the user's preferences file, if any.

#![allow(missing_docs)] // too many things to document

#[macro_use]
extern crate lazy_static;

use std::path::Path;

mod animation;
mod interaction;
mod keybinds;
pub mod persist;
mod schema;

pub use animation::*;
pub use interaction::*;
pub use keybinds::*;
pub use schema::current::Preferences;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
pub const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}

impl Preferences {
    /// Loads preferences from the file at `path`, layered over the defaults.
    /// If `path` is `None` or does not exist, returns the defaults. If
    /// loading fails, the file is backed up and the defaults are returned.
    pub fn load(path: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let Some(path) = path else {
            return Self::default();
        };

        Self::load_layered(Some(persist::user_config_source(path))).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            persist::backup_prefs_file(path);
            Self::default()
        })
    }

    /// Parses preferences from a YAML string, layered over the defaults.
    pub fn from_yaml_str(s: &str) -> eyre::Result<Self> {
        let source = config::File::from_str(s, PREFS_FILE_FORMAT);
        Self::load_layered(Some(source)).map_err(eyre::Report::from)
    }

    fn load_layered<S>(user_config_source: Option<S>) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut config = config::Config::builder()
            .set_default("version", schema::CURRENT_VERSION)?
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(source) = user_config_source {
            config = config.add_source(source);
        }
        config
            .build()?
            .try_deserialize::<schema::AnyVersion>()
            .map(schema::AnyVersion::into_current)
    }

    /// Saves preferences to the file at `path`, including the schema version.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        persist::save(path, &schema::AnyVersion::from(self.clone()))
    }

    /// Serializes preferences to YAML, including the schema version.
    pub fn to_yaml_string(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(&schema::AnyVersion::from(self.clone()))?)
    }

    /// Returns the command bound to `key`, if any. If a key is bound more than
    /// once, the last binding wins.
    pub fn command_for_key(&self, key: Key) -> Option<Command> {
        self.keybinds
            .iter()
            .rev()
            .find(|bind| bind.key == key)
            .map(|bind| bind.command)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_prefs() {
        let prefs = Preferences::default();
        assert_eq!(prefs.animation.rotation_speed, 5.0);
        assert_eq!(prefs.interaction.view_rotation_quarter_turns, 1.0);
        assert_eq!(prefs.interaction.scramble_length, 0);
        assert_eq!(prefs.command_for_key(Key::Digit1), Some(Command::TurnFront));
        assert_eq!(prefs.command_for_key(Key::Enter), Some(Command::NextStage));
        assert_eq!(prefs.command_for_key(Key::Space), None);

        assert_eq!(Preferences::load(None), prefs);
        let layered = Preferences::from_yaml_str("").expect("empty preferences");
        assert_eq!(layered, prefs);
    }

    #[test]
    fn test_user_prefs_override_defaults() {
        let prefs = Preferences::from_yaml_str(
            "
animation:
  rotation_speed: 10
interaction:
  scramble_length: 25
  scramble_seed: abc
",
        )
        .expect("valid preferences");
        assert_eq!(prefs.animation.rotation_speed, 10.0);
        assert_eq!(prefs.interaction.scramble_length, 25);
        assert_eq!(prefs.interaction.scramble_seed.as_deref(), Some("abc"));
        assert_eq!(prefs.interaction.view_rotation_quarter_turns, 1.0);
        assert_eq!(prefs.keybinds, DEFAULT_PREFS.keybinds);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("prefs").join("rubik.yaml");

        let mut prefs = Preferences::default();
        prefs.animation.rotation_speed = 2.5;
        prefs.keybinds.push(Keybind {
            key: Key::Space,
            command: Command::NextStage,
        });
        prefs.save(&path).expect("saving preferences");

        let contents = std::fs::read_to_string(&path).expect("reading preferences");
        assert!(contents.starts_with("version: v1"));
        assert_eq!(Preferences::load(Some(&path)), prefs);
    }

    #[test]
    fn test_invalid_prefs_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("rubik.yaml");
        std::fs::write(&path, "animation: [this is not valid").expect("writing preferences");

        assert_eq!(Preferences::load(Some(&path)), Preferences::default());
        assert!(!path.exists());
        assert!(persist::backup_path(&path).exists());
    }

    #[test]
    fn test_missing_prefs_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("does_not_exist.yaml");
        assert_eq!(Preferences::load(Some(&path)), Preferences::default());
    }

    #[test]
    fn test_key_names() {
        assert_eq!("enter".parse::<Key>(), Ok(Key::Enter));
        assert_eq!("1".parse::<Key>(), Ok(Key::Digit1));
        assert_eq!(Key::Digit0.to_string(), "0");
        assert!("F13".parse::<Key>().is_err());
    }
}
