use std::io;
use std::path::PathBuf;

/// Startup failures. None of these are recovered from; `main` reports them and exits.
#[derive(Debug, thiserror::Error)]
pub enum KioskError {
    #[error("Failed to read bin-type file {}", path.display())]
    BinTypeFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Bin-type file {} is empty", path.display())]
    EmptyBinType { path: PathBuf },

    #[error("Asset directory {} not found", path.display())]
    AssetDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No image files found in directory: {}", dir.display())]
    NoImages { dir: PathBuf },

    #[error("Failed to load texture {}: {message}", path.display())]
    Texture { path: PathBuf, message: String },

    #[error("The {list} list has no usable images")]
    EmptyList { list: &'static str },
}

pub type Result<T> = std::result::Result<T, KioskError>;
