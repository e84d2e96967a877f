//! Binary persistence of a [`super::SimDataKind`] via `bincode`, mirroring
//! the teacher's `io/bin.rs::save_file`/`load_file` pair.

use super::SimDataKind;
use std::path::Path;

pub fn save_file<T: SimDataKind>(stem: &str, data: &T) -> Result<(), crate::error::SimError> {
    let path = T::binary_path(stem);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let bytes = bincode::serialize(data).map_err(|e| crate::error::SimError::Serialize(e.to_string()))?;
    std::fs::write(&path, bytes)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

pub fn load_file<T: SimDataKind>(path: &Path) -> Result<T, crate::error::SimError> {
    let bytes = std::fs::read(path)?;
    bincode::deserialize(&bytes).map_err(|e| crate::error::SimError::Serialize(e.to_string()))
}
