use std::path::PathBuf;

use config::ConfigError;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

use crate::{
    domain::widget::WidgetConfig,
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Connection settings of the managed backend used by the account gateway
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_secret")]
    pub anon_key: Option<SecretString>,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|key| !key.is_empty()).map(SecretString::from))
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub widget: WidgetConfig,
    /// Testimonials JSON file; the bundled sample is used when unset
    #[serde(default)]
    pub testimonials: Option<PathBuf>,
    #[serde(default)]
    pub backend: BackendConfig,
}

impl Config {
    /// Built-in configuration only
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Layer the user's config files and `PLAUDIT_*` environment variables
    /// over the built-in defaults. Missing user files are not an error.
    pub fn new() -> Result<Self, ConfigError> {
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = layered_on_defaults()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(utils::paths::PROJECT_NAME.as_str())
                .prefix_separator("_")
                .separator("__"),
        );

        builder.build()?.try_deserialize()
    }
}

/// Builder whose first source is the embedded default configuration, so
/// user sources only need to name what they change.
fn layered_on_defaults() -> config::ConfigBuilder<config::builder::DefaultState> {
    config::Config::builder().add_source(config::File::from_str(CONFIG, config::FileFormat::Json5))
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{domain::widget::WidgetType, presentation::config::keybindings::Action};

    #[test]
    fn test_defaults_parse() -> Result<(), ConfigError> {
        let cfg = Config::defaults()?;

        assert_eq!(cfg.widget.widget_type, WidgetType::Wall);
        assert_eq!(cfg.widget.settings.max_testimonials, 9);
        assert!(cfg.backend.anon_key.is_none());
        assert!(cfg.styles.contains_key("star"));
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)]),
            Some(&Action::Quit)
        );
        Ok(())
    }

    #[test]
    fn test_user_source_overrides_defaults() -> Result<(), ConfigError> {
        let cfg: Config = layered_on_defaults()
            .add_source(config::File::from_str(
                r#"{ "keybindings": { "<q>": "CycleLayout" }, "widget": { "widget_type": "carousel" } }"#,
                config::FileFormat::Json5,
            ))
            .build()?
            .try_deserialize()?;

        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)]),
            Some(&Action::CycleLayout)
        );
        assert_eq!(
            cfg.keybindings
                .get(&vec![KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)]),
            Some(&Action::Next)
        );
        assert_eq!(cfg.widget.widget_type, WidgetType::Carousel);
        assert_eq!(cfg.widget.settings.max_testimonials, 9);
        Ok(())
    }

    #[test]
    fn test_empty_anon_key_is_absent() -> Result<(), ConfigError> {
        let cfg: Config = json5::from_str(r#"{ "backend": { "url": "https://x.supabase.co", "anon_key": "" } }"#)
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        assert_eq!(cfg.backend.url, "https://x.supabase.co");
        assert!(cfg.backend.anon_key.is_none());
        Ok(())
    }
}
