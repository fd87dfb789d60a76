use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JokeError {
    #[error("Config unreadable: {0}")]
    ConfigUnreadable(String),

    #[error("API key cannot be empty")]
    EmptyCredential,

    #[error("Failed to save API key to {}: {message}", path.display())]
    ConfigWrite { path: PathBuf, message: String },

    #[error("Failed to create DeepSeek client: {0}")]
    ClientConstruction(String),

    #[error("DeepSeek API call failed: {0}")]
    Api(String),

    #[error("DeepSeek API call failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No joke received from DeepSeek API")]
    EmptyResponse,

    #[error(transparent)]
    Flags(#[from] clap::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JokeError {
    /// Process exit status for a fatal error. Flag errors are left to clap.
    pub fn exit_code(&self) -> i32 {
        match self {
            JokeError::Flags(e) => e.exit_code(),
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, JokeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_fatal_errors_exit_with_one() {
        assert_eq!(JokeError::EmptyCredential.exit_code(), 1);
        assert_eq!(JokeError::EmptyResponse.exit_code(), 1);
        assert_eq!(JokeError::Api("boom".to_string()).exit_code(), 1);
        assert_eq!(
            JokeError::ClientConstruction("bad key".to_string()).exit_code(),
            1
        );
    }

    #[test]
    fn test_flag_errors_use_clap_exit_code() {
        let err = JokeError::Flags(clap::Error::new(ErrorKind::UnknownArgument));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_write_message_names_path() {
        let err = JokeError::ConfigWrite {
            path: PathBuf::from("/nowhere/.jokeapp.yaml"),
            message: "permission denied".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/.jokeapp.yaml"));
        assert!(msg.contains("permission denied"));
    }
}
