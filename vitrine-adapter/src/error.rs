use thiserror::Error;

/// A page component that could not be set up. The rest of the page keeps working.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InitError {
    #[error("carousel: {0}")]
    Carousel(#[source] vitrine::Error),

    #[error("counter {key}: {source}")]
    Counter {
        key: String,
        #[source]
        source: vitrine::Error,
    },

    #[error("counter {key}: unparsable target {raw:?}")]
    UnparsableTarget { key: String, raw: String },
}
