use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable the application needs is not set.
    ///
    /// `.env.example` lists every variable the application reads and which of
    /// them are required.
    #[error("required environment variable {0} is not set")]
    MissingEnvVar(String),
}
