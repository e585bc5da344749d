use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("failed to write config file {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine a config directory")]
    NoConfigDir,

    #[error("invalid value {value:?} for environment variable {name}")]
    InvalidEnvVar { name: &'static str, value: String },

    #[error("invalid fps {0}, expected 1..=120")]
    InvalidFps(u64),

    #[error("invalid snowflake count {0}, expected 1..=500")]
    InvalidSnowflakeCount(u16),
}

impl ConfigError {
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigError::ReadError { .. } => "ReadError",
            ConfigError::ParseError(_) => "ParseError",
            ConfigError::SerializeError(_) => "SerializeError",
            ConfigError::WriteError { .. } => "WriteError",
            ConfigError::NoConfigDir => "NoConfigDir",
            ConfigError::InvalidEnvVar { .. } => "InvalidEnvVar",
            ConfigError::InvalidFps(_) => "InvalidFps",
            ConfigError::InvalidSnowflakeCount(_) => "InvalidSnowflakeCount",
        }
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read sprite file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("sprite file {path} is empty")]
    Empty { path: String },
}

impl AssetError {
    pub fn kind(&self) -> &'static str {
        match self {
            AssetError::ReadError { .. } => "ReadError",
            AssetError::Empty { .. } => "Empty",
        }
    }
}

#[derive(Debug, Error)]
pub enum OnboardError {
    #[error("setup prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
