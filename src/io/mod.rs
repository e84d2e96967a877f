//! # IO Module - Persistence and the External Event Stream
//!
//! This module covers everything spec §6 calls the "external interface":
//! the `SimEvent` channel contract consumers stream snapshots over (see
//! [`event_stream`]), plus ambient persistence of a completed
//! `SnapshotHistory` to disk — the teacher's `DataPersistence`-shaped
//! save/load pair, renamed [`SimDataKind`] and pointed at this crate's
//! own data directories.

pub mod bin;
pub mod event_stream;
pub mod json;

use std::fs;
use std::path::PathBuf;

/// Which `./data/<folder>/` an artifact of kind `Self` belongs in. The
/// file name itself is the caller's choice (see [`bin::save_file`]),
/// mirroring the teacher's `{tag}-{id}` naming left to its own call
/// sites rather than baked into the data type.
pub trait SimDataKind: serde::Serialize + serde::de::DeserializeOwned {
    fn folder() -> &'static str;

    fn binary_path(stem: &str) -> PathBuf {
        PathBuf::from("./data").join(Self::folder()).join(format!("{stem}.bin"))
    }

    fn json_path(stem: &str) -> PathBuf {
        PathBuf::from("./data").join(Self::folder()).join(format!("{stem}.json"))
    }
}

impl SimDataKind for crate::snapshot::SnapshotHistory {
    fn folder() -> &'static str {
        "runs"
    }
}

/// Ensures every directory a completed run might write into exists.
pub fn ensure_data_directories() -> Result<(), std::io::Error> {
    fs::create_dir_all("./data/runs")?;
    fs::create_dir_all("./data/snapshots")?;
    fs::create_dir_all("./data/sec_reports")?;
    Ok(())
}
