use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const ENV_FPS: &str = "FIRLIGHT_FPS";
pub const ENV_SPRITE_DIR: &str = "FIRLIGHT_SPRITE_DIR";

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub sprites: SpriteConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SceneConfig {
    #[serde(default = "default_true")]
    pub snow: bool,
    #[serde(default = "default_true")]
    pub lights: bool,
    #[serde(default = "default_snowflakes")]
    pub snowflakes: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnimationConfig {
    #[serde(default = "default_fps")]
    pub fps: u64,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct SpriteConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

pub fn default_snowflakes() -> u16 {
    60
}

pub fn default_fps() -> u64 {
    30
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            snow: true,
            lights: true,
            snowflakes: default_snowflakes(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { fps: default_fps() }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let mut config = Self::default();
            config.apply_env_overrides()?;
            return Ok(config);
        }

        let mut config = Self::load_from_path(&config_path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(ENV_FPS) {
            let fps = val
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: ENV_FPS,
                    value: val.clone(),
                })?;
            self.animation.fps = fps;
        }

        if let Ok(val) = env::var(ENV_SPRITE_DIR) {
            self.sprites.dir = Some(PathBuf::from(val));
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.fps == 0 || self.animation.fps > 120 {
            return Err(ConfigError::InvalidFps(self.animation.fps));
        }

        if self.scene.snowflakes == 0 || self.scene.snowflakes > 500 {
            return Err(ConfigError::InvalidSnowflakeCount(self.scene.snowflakes));
        }

        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        toml::from_str(&content).map_err(ConfigError::ParseError)
    }

    pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else {
            dirs::config_dir()
                .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
                .ok_or(ConfigError::NoConfigDir)?
        };

        Ok(config_dir.join("firlight"))
    }

    pub fn get_config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.display().to_string(),
            source: e,
        })
    }
}
