use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use emu8_core::{Chip8, Fault};

/// Why a ROM couldn't be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("ROM not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unable to read ROM {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Rejected(#[from] Fault),
}

/// Reads the ROM at `path` and loads it into `chip8`.
pub fn load(chip8: &mut Chip8, path: &Path) -> Result<(), LoadError> {
    let rom = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    chip8.load_program(&rom)?;
    Ok(())
}
