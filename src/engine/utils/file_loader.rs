use std::path::Path;

use crate::engine::error::{ EngineError, EngineResult };

/// Read a whole file into an owned buffer.
pub fn read_file(path: impl AsRef<Path>) -> EngineResult<Vec<u8>> {
    let path = path.as_ref();
    let buf = std::fs::read(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("[ASSETS] Read {} ({} bytes)", path.display(), buf.len());
    Ok(buf)
}
