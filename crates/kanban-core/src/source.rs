//! Where the board comes from: the one `GET` against the board endpoint, or
//! the same JSON document read from disk.

use crate::error::ErrorCode;
use crate::model::BoardData;
use std::path::{Path, PathBuf};

/// Endpoint used when neither config nor environment overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Errors raised while fetching or decoding a board payload.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode board from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Request { .. } | Self::Body { .. } => ErrorCode::SourceUnreachable,
            Self::Read { .. } => ErrorCode::SourceReadFailed,
            Self::Decode { .. } => ErrorCode::SourceDecodeFailed,
        }
    }

    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        self.code().hint()
    }
}

/// A provider of the board payload.
pub trait BoardSource {
    /// Short description for logs (URL or path).
    fn describe(&self) -> String;

    /// Fetch and decode the payload once.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the payload cannot be obtained or decoded.
    fn fetch(&self) -> Result<BoardData, SourceError>;
}

/// Plain unauthenticated `GET` of the board endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl BoardSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<BoardData, SourceError> {
        tracing::debug!(url = %self.url, "fetching board");
        let response = ureq::get(&self.url)
            .set("Accept", "application/json")
            .set("User-Agent", "kanban-cli")
            .call()
            .map_err(|err| SourceError::Request {
                url: self.url.clone(),
                source: Box::new(err),
            })?;

        let body = response.into_string().map_err(|source| SourceError::Body {
            url: self.url.clone(),
            source,
        })?;

        decode(&body, &self.url)
    }
}

/// Board payload stored in a local JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<BoardData, SourceError> {
        tracing::debug!(path = %self.path.display(), "reading board");
        let body = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;
        decode(&body, &self.describe())
    }
}

fn decode(body: &str, origin: &str) -> Result<BoardData, SourceError> {
    serde_json::from_str(body).map_err(|source| SourceError::Decode {
        origin: origin.to_string(),
        source,
    })
}

/// Fetch the board, degrading to an empty payload on any failure.
///
/// The failure is logged; the caller always gets something renderable.
pub fn load_board(source: &dyn BoardSource) -> BoardData {
    match source.fetch() {
        Ok(data) => {
            tracing::info!(
                source = %source.describe(),
                tickets = data.tickets.len(),
                users = data.users.len(),
                "loaded board"
            );
            data
        }
        Err(err) => {
            tracing::error!(
                code = %err.code(),
                kind = err.code().message(),
                hint = err.hint().unwrap_or_default(),
                source = %source.describe(),
                "error fetching tickets: {err}"
            );
            BoardData::default()
        }
    }
}
