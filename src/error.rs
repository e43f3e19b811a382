use std::path::PathBuf;

use alloy::hex::FromHexError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirdropError {
    /// Input missing or unreadable, output unwritable, or the salt prompt failed.
    #[error("failed to access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// `what` never carries the salt text.
    #[error("malformed hex in {what}: {source}")]
    MalformedHex {
        what: String,
        #[source]
        source: FromHexError,
    },
}

impl AirdropError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn malformed_hex(what: impl Into<String>, source: FromHexError) -> Self {
        Self::MalformedHex {
            what: what.into(),
            source,
        }
    }
}
