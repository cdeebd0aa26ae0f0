use thiserror::Error;

/// Feed failures are logged and degrade to an empty event set; they are
/// never fatal to the visualization.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed document malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
