use chrono::{DateTime, Utc};
use eframe::Storage;
use thiserror::Error;

use crate::form::{ExerciseForm, InvalidExercise};
use crate::models::{Exercise, Workout};
use crate::store::{self, StoreError};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Add at least one exercise before saving a workout.")]
    EmptyWorkout,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Saved history (newest first) plus the exercises staged for the next workout.
#[derive(Debug, Default)]
pub struct WorkoutSession {
    history: Vec<Workout>,
    staging: Vec<Exercise>,
}

impl WorkoutSession {
    pub fn new(history: Vec<Workout>) -> Self {
        WorkoutSession {
            history,
            staging: Vec::new(),
        }
    }

    /// Without a storage backend the session starts empty and nothing is persisted.
    pub fn load<S: Storage + ?Sized>(storage: Option<&S>) -> Result<Self, StoreError> {
        let history = match storage {
            Some(storage) => store::load(storage)?,
            None => {
                tracing::warn!("no persistent storage available, starting with empty history");
                Vec::new()
            }
        };
        tracing::info!(workouts = history.len(), "loaded workout history");
        Ok(WorkoutSession::new(history))
    }

    pub fn history(&self) -> &[Workout] {
        &self.history
    }

    pub fn staging(&self) -> &[Exercise] {
        &self.staging
    }

    pub fn submit_exercise(&mut self, form: &ExerciseForm) -> Result<(), InvalidExercise> {
        let exercise = form.parse().inspect_err(|err| {
            tracing::debug!("rejected exercise submission: {err}");
        })?;
        self.staging.push(exercise);
        Ok(())
    }

    pub fn save_workout<S: Storage + ?Sized>(
        &mut self,
        storage: Option<&mut S>,
        saved_at: DateTime<Utc>,
    ) -> Result<&Workout, SaveError> {
        if self.staging.is_empty() {
            return Err(SaveError::EmptyWorkout);
        }

        let workout = Workout::new(std::mem::take(&mut self.staging), saved_at);
        if self.history.iter().any(|saved| saved.id == workout.id) {
            tracing::warn!(id = %workout.id, "workout id collides with an earlier save");
        }
        tracing::info!(id = %workout.id, exercises = workout.exercises.len(), "saved workout");
        self.history.insert(0, workout);

        match storage {
            Some(storage) => store::save(storage, &self.history)?,
            None => tracing::warn!("no persistent storage available, workout kept in memory only"),
        }
        Ok(&self.history[0])
    }
}
