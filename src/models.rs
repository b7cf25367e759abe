//models.rs
use std::fmt;

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: Option<f64>,
    pub notes: Option<String>,
}

/// One line of the staging or history list: `Squat — 3×8 @ 60kg (paused)`.
impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}×{}", self.exercise, self.sets, self.reps)?;
        if let Some(weight) = self.weight {
            write!(f, " @ {weight}kg")?;
        }
        if let Some(notes) = &self.notes {
            write!(f, " ({notes})")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Ids are the save time in epoch milliseconds, so two saves within the
    /// same millisecond share an id.
    pub fn new(exercises: Vec<Exercise>, saved_at: DateTime<Utc>) -> Self {
        Workout {
            id: saved_at.timestamp_millis().to_string(),
            created_at: saved_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            exercises,
        }
    }

    pub fn saved_at_label(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(saved_at) => saved_at
                .with_timezone(&Local)
                .format("%d/%m/%Y, %H:%M:%S")
                .to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}
