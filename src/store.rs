use eframe::Storage;
use thiserror::Error;

use crate::models::Workout;

/// Single key holding the full workout history as JSON.
pub const STORAGE_KEY: &str = "gym-tracker:v2";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored workout history under {key:?} is corrupt: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode workout history: {0}")]
    Encode(#[source] serde_json::Error),
}

pub fn load<S: Storage + ?Sized>(storage: &S) -> Result<Vec<Workout>, StoreError> {
    let raw = match storage.get_string(STORAGE_KEY) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(Vec::new()),
    };
    serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
        key: STORAGE_KEY,
        source,
    })
}

pub fn save<S: Storage + ?Sized>(storage: &mut S, workouts: &[Workout]) -> Result<(), StoreError> {
    let serialized = serde_json::to_string(workouts).map_err(StoreError::Encode)?;
    storage.set_string(STORAGE_KEY, serialized);
    storage.flush();
    tracing::debug!(workouts = workouts.len(), key = STORAGE_KEY, "persisted workout history");
    Ok(())
}
