use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("invalid URL pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
