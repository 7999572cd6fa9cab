//! Writing rendered logos to disk as PNG files.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::Result;
use crate::logo::{Logo, LogoSet};

impl Logo {
    /// Writes the base image and every variant into `dir`.
    ///
    /// `dir` must already exist. Returns the written paths, base first.
    pub fn save(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.files()
            .map(|(name, image)| -> Result<PathBuf> {
                let path = dir.join(name);
                image.save_with_format(&path, ImageFormat::Png)?;
                log::info!("saved {}", path.display());
                Ok(path)
            })
            .collect()
    }
}

impl LogoSet {
    /// Writes every logo of the set into `dir`, creating it if needed.
    ///
    /// Existing files with the same names are overwritten.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(self.file_count());
        for logo in self {
            written.extend(logo.save(dir)?);
        }
        log::info!("wrote {} file(s) to {}", written.len(), dir.display());
        Ok(written)
    }
}
