//! JSON export of a [`super::SimDataKind`] via `serde_json`, mirroring the
//! teacher's `io/json.rs::export_json`. Used for the human-inspectable
//! copy of a run alongside the binary one.

use super::SimDataKind;

pub fn export_json<T: SimDataKind>(stem: &str, data: &T) -> Result<(), crate::error::SimError> {
    let path = T::json_path(stem);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(data)
        .map_err(|e| crate::error::SimError::Serialize(e.to_string()))?;
    std::fs::write(&path, text)?;
    log::info!("wrote {}", path.display());
    Ok(())
}
