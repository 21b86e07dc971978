use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the persistence layer. The view-model logs and swallows
/// every one of them; the variants only exist so the log and the footer can
/// say which operation went wrong.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not create data directory {}", path.display())]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not open database")]
    Open(#[source] rusqlite::Error),
    #[error("could not create the shoplist table")]
    Schema(#[source] rusqlite::Error),
    #[error("could not get items")]
    Read(#[source] rusqlite::Error),
    #[error("could not add item")]
    Write(#[source] rusqlite::Error),
    #[error("could not delete item")]
    Delete(#[source] rusqlite::Error),
    #[error("database is not available")]
    NotConnected,
}

impl StoreError {
    /// True for the failures that leave the store unusable for the rest of
    /// the session.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::DataDir { .. }
                | StoreError::Open(_)
                | StoreError::Schema(_)
                | StoreError::NotConnected
        )
    }

    /// Flatten the error and its sources into one line, e.g.
    /// `could not add item: no such table: shoplist`.
    pub fn describe(&self) -> String {
        let mut text = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_walks_the_source_chain() {
        let err = StoreError::DataDir {
            path: PathBuf::from("/nowhere"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.describe(),
            "could not create data directory /nowhere: denied"
        );
    }

    #[test]
    fn not_connected_has_no_source() {
        assert_eq!(StoreError::NotConnected.describe(), "database is not available");
        assert!(StoreError::NotConnected.is_unavailable());
    }
}
