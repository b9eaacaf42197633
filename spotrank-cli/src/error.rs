use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("HOME environment variable not set")]
    HomeNotSet,

    #[error("failed to read config at {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config file already exists at {0}")]
    ConfigExists(PathBuf),

    #[error("failed to read items from {source_name}")]
    InputRead {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("items input is not valid JSON")]
    InputJson(#[from] serde_json::Error),

    #[error("expected a JSON array of records, or an object with a list under \"content\", \"items\" or \"data\"")]
    InputShape,

    #[error("no items provided; use --items <file> or pipe JSON via stdin")]
    NoInput,

    #[error("--title-field must not be empty")]
    EmptyTitleField,
}
