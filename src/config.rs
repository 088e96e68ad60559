use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::constants::*;
use crate::error::{KioskError, Result};

/// Kiosk display for a smart waste bin.
#[derive(Debug, Parser)]
#[command(name = "binkiosk", version, about)]
pub struct Config {
    /// File holding the bin type (compost, recycle, landfill...)
    #[arg(long, default_value = DEFAULT_BIN_TYPE_FILE)]
    pub bin_type_file: PathBuf,

    /// Root directory containing one asset folder per bin type
    #[arg(long = "images", default_value = DEFAULT_IMAGES_ROOT)]
    pub images_root: PathBuf,

    /// Run in a window instead of fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Target frame rate
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}

/// Which themed asset set to load. Read once at startup and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinType(String);

impl BinType {
    pub fn new(id: &str) -> Option<Self> {
        let id = id.trim();
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn read_bin_type(path: &Path) -> Result<BinType> {
    let contents = fs::read_to_string(path).map_err(|source| KioskError::BinTypeFile {
        path: path.to_path_buf(),
        source,
    })?;
    BinType::new(&contents).ok_or_else(|| KioskError::EmptyBinType {
        path: path.to_path_buf(),
    })
}
