use std::{collections::HashMap, path::PathBuf};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{Deserialize, de::Deserializer};
use tracing::warn;

use crate::{
  action::Action,
  mode::Mode,
  utils::{get_config_dir, get_data_dir},
};

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub _data_dir: PathBuf,
  #[serde(default)]
  pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
  #[serde(default, flatten)]
  pub config: AppConfig,
  #[serde(default)]
  pub viewer_id: String,
  #[serde(default)]
  pub renters_file: Option<PathBuf>,
  #[serde(default)]
  pub keybindings: KeyBindings,
}

impl Config {
  /// The configuration compiled into the binary, before user files and the environment are layered on.
  pub fn embedded() -> Result<Self, config::ConfigError> {
    json5::from_str(CONFIG).map_err(|e| config::ConfigError::Foreign(Box::new(e)))
  }

  pub fn new() -> Result<Self, config::ConfigError> {
    let default_config = Self::embedded()?;
    let data_dir = get_data_dir();
    let config_dir = get_config_dir();
    let mut builder = config::Config::builder()
      .set_default("_data_dir", data_dir.display().to_string())?
      .set_default("_config_dir", config_dir.display().to_string())?
      .set_default("viewer_id", default_config.viewer_id.clone())?;

    let config_files = [
      ("config.json5", config::FileFormat::Json5),
      ("config.json", config::FileFormat::Json),
      ("config.yaml", config::FileFormat::Yaml),
      ("config.toml", config::FileFormat::Toml),
      ("config.ini", config::FileFormat::Ini),
    ];
    let mut found_config = false;
    for (file, format) in &config_files {
      let path = config_dir.join(file);
      found_config |= path.exists();
      builder = builder.add_source(config::File::from(path).format(*format).required(false));
    }
    if !found_config {
      warn!("No configuration file found in {}, using defaults", config_dir.display());
    }
    builder = builder.add_source(config::Environment::with_prefix("RENTER_BOARD").prefix_separator("_").separator("__"));

    let mut cfg: Self = builder.build()?.try_deserialize()?;
    cfg.merge_default_keybindings(default_config.keybindings);
    Ok(cfg)
  }

  /// User bindings win; defaults only fill the keys the user left unbound.
  fn merge_default_keybindings(&mut self, defaults: KeyBindings) {
    for (mode, default_bindings) in defaults.0 {
      let user_bindings = self.keybindings.entry(mode).or_default();
      for (key, action) in default_bindings {
        user_bindings.entry(key).or_insert(action);
      }
    }
  }

  pub fn action_for(&self, mode: Mode, key: KeyEvent) -> Option<Action> {
    let normalized = KeyEvent::new(key.code, key.modifiers);
    self.keybindings.get(&mode)?.get(&normalized).cloned()
  }
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Mode, HashMap<KeyEvent, Action>>);

impl<'de> Deserialize<'de> for KeyBindings {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let parsed_map = HashMap::<Mode, HashMap<String, Action>>::deserialize(deserializer)?;

    let mut keybindings = HashMap::new();
    for (mode, inner_map) in parsed_map {
      let mut converted = HashMap::new();
      for (key_str, action) in inner_map {
        let key = parse_key_binding(&key_str).map_err(serde::de::Error::custom)?;
        converted.insert(key, action);
      }
      keybindings.insert(mode, converted);
    }

    Ok(KeyBindings(keybindings))
  }
}

/// Parses a binding written as `<ctrl-c>`, `<q>` or `<backspace>`.
pub fn parse_key_binding(raw: &str) -> Result<KeyEvent, String> {
  let inner = raw
    .strip_prefix('<')
    .and_then(|s| s.strip_suffix('>'))
    .ok_or_else(|| format!("Key binding must be wrapped in angle brackets: {raw}"))?;
  parse_key_event(inner)
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
  let raw_lower = raw.to_ascii_lowercase();
  let (remaining, modifiers) = extract_modifiers(&raw_lower);
  parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
  let mut modifiers = KeyModifiers::empty();
  let mut current = raw;

  loop {
    match current {
      rest if rest.starts_with("ctrl-") => {
        modifiers.insert(KeyModifiers::CONTROL);
        current = &rest[5..];
      },
      rest if rest.starts_with("alt-") => {
        modifiers.insert(KeyModifiers::ALT);
        current = &rest[4..];
      },
      rest if rest.starts_with("shift-") => {
        modifiers.insert(KeyModifiers::SHIFT);
        current = &rest[6..];
      },
      _ => break,
    };
  }

  (current, modifiers)
}

fn parse_key_code_with_modifiers(raw: &str, mut modifiers: KeyModifiers) -> Result<KeyEvent, String> {
  let c = match raw {
    "esc" => KeyCode::Esc,
    "enter" => KeyCode::Enter,
    "left" => KeyCode::Left,
    "right" => KeyCode::Right,
    "up" => KeyCode::Up,
    "down" => KeyCode::Down,
    "home" => KeyCode::Home,
    "end" => KeyCode::End,
    "pageup" => KeyCode::PageUp,
    "pagedown" => KeyCode::PageDown,
    "backtab" => {
      modifiers.insert(KeyModifiers::SHIFT);
      KeyCode::BackTab
    },
    "backspace" => KeyCode::Backspace,
    "delete" => KeyCode::Delete,
    "insert" => KeyCode::Insert,
    "f1" => KeyCode::F(1),
    "f2" => KeyCode::F(2),
    "f3" => KeyCode::F(3),
    "f4" => KeyCode::F(4),
    "f5" => KeyCode::F(5),
    "f6" => KeyCode::F(6),
    "f7" => KeyCode::F(7),
    "f8" => KeyCode::F(8),
    "f9" => KeyCode::F(9),
    "f10" => KeyCode::F(10),
    "f11" => KeyCode::F(11),
    "f12" => KeyCode::F(12),
    "space" => KeyCode::Char(' '),
    "hyphen" | "minus" => KeyCode::Char('-'),
    "tab" => KeyCode::Tab,
    c if c.chars().count() == 1 => {
      let mut c = c.chars().next().unwrap_or_default();
      if modifiers.contains(KeyModifiers::SHIFT) {
        c = c.to_ascii_uppercase();
      }
      KeyCode::Char(c)
    },
    _ => return Err(format!("Unable to parse {raw}")),
  };
  Ok(KeyEvent::new(c, modifiers))
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn test_default_config_parses() {
    let c: Config = json5::from_str(CONFIG).unwrap();

    assert_eq!(c.viewer_id, "guest");
    assert_eq!(
      c.keybindings.get(&Mode::Default).unwrap().get(&parse_key_binding("<q>").unwrap()).unwrap(),
      &Action::Quit
    );
    assert_eq!(
      c.keybindings.get(&Mode::Default).unwrap().get(&parse_key_binding("<backspace>").unwrap()).unwrap(),
      &Action::NavigateBack
    );
  }

  #[test]
  fn test_action_for_normalizes_event_kind() {
    let c: Config = json5::from_str(CONFIG).unwrap();
    let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    key.state = crossterm::event::KeyEventState::NUM_LOCK;

    assert_eq!(c.action_for(Mode::Input, key), Some(Action::Quit));
    assert_eq!(c.action_for(Mode::Input, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)), None);
  }

  #[test]
  fn test_user_bindings_take_precedence() {
    let mut c: Config = json5::from_str(r#"{ "keybindings": { "Default": { "<q>": "Refresh" } } }"#).unwrap();
    let defaults: Config = json5::from_str(CONFIG).unwrap();
    c.merge_default_keybindings(defaults.keybindings);

    let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(c.action_for(Mode::Default, q), Some(Action::Refresh));
    assert_eq!(c.action_for(Mode::Default, ctrl_c), Some(Action::Quit));
  }

  #[test]
  fn test_simple_keys() {
    assert_eq!(parse_key_event("a").unwrap(), KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty()));
    assert_eq!(parse_key_event("enter").unwrap(), KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));
    assert_eq!(parse_key_event("esc").unwrap(), KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()));
  }

  #[test]
  fn test_with_modifiers() {
    assert_eq!(parse_key_event("ctrl-a").unwrap(), KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
    assert_eq!(parse_key_event("alt-enter").unwrap(), KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
    assert_eq!(parse_key_event("shift-esc").unwrap(), KeyEvent::new(KeyCode::Esc, KeyModifiers::SHIFT));
    assert_eq!(
      parse_key_event("ctrl-alt-a").unwrap(),
      KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL | KeyModifiers::ALT)
    );
  }

  #[test]
  fn test_invalid_keys() {
    assert!(parse_key_event("invalid-key").is_err());
    assert!(parse_key_binding("q").is_err());
  }

  #[test]
  fn test_case_insensitivity() {
    assert_eq!(parse_key_event("CTRL-a").unwrap(), KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
    assert_eq!(parse_key_event("AlT-eNtEr").unwrap(), KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
  }
}
