use thiserror::Error;

#[derive(Error, Debug)]
#[error("error in configuration: {0}")]
pub struct ConfigError(pub String);

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(format!("file error: {}", e))
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(format!("toml document error: {}", e))
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}
