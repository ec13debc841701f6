use thiserror::Error;

/// Failure while retrieving region geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("fetch error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("no {0} available")]
    Dom(&'static str),
    #[error("could not create {element}: {reason}")]
    Create {
        element: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
