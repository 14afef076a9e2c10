use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported icon format {}: only .png and .svg are accepted", .path.display())]
    UnsupportedIcon { path: PathBuf },

    #[error("existing entry is named '{existing}' but '{requested}' was requested; check the file by hand")]
    NameMismatch { existing: String, requested: String },

    #[error("no desktop entry named '{0}'")]
    EntryNotFound(String),

    #[error("could not resolve the data directory: neither XDG_DATA_HOME nor HOME is set")]
    NoDataHome,

    #[error("json output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
