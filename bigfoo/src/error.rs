use goose::GooseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BigfooError {
    #[error("Unable to read payload {}: {source}", path.display())]
    Payload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Load test failed: {0}")]
    Goose(#[from] GooseError),
}
