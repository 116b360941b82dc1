use std::path::PathBuf;

use thiserror::Error;

pub type HeaderResult<T> = Result<T, HeaderError>;

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("avatar decode failed: {0}")]
    AvatarDecode(#[from] image::ImageError),

    #[error("catalog {path} unreadable: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {path} malformed: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
