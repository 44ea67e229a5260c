use thiserror::Error;

/// Errors raised while loading or addressing theme configuration.
///
/// Resolution itself never fails; these only come from parsing names and
/// documents supplied from outside.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown color role `{0}`")]
    UnknownColorRole(String),

    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),

    #[error("unknown {kind} `{value}`")]
    UnknownKeyword { kind: &'static str, value: String },

    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid theme TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to write theme TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
