use thiserror::Error;

pub type DemoResult<T, E = DemoError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DemoError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("config error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("other: {0}")]
  Other(String),
}
