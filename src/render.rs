//! Pure views of the session state. The app rebuilds these after every
//! transition and only paints what they contain.

use crate::models::{Exercise, Workout};

pub const NO_EXERCISES: &str = "No exercises added yet.";
pub const NO_WORKOUTS: &str = "No workouts saved yet.";

#[derive(Clone, Debug, PartialEq)]
pub enum ListView<T> {
    Placeholder(&'static str),
    Items(Vec<T>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub header: String,
    pub lines: Vec<String>,
}

pub fn staging(exercises: &[Exercise]) -> ListView<String> {
    if exercises.is_empty() {
        return ListView::Placeholder(NO_EXERCISES);
    }
    ListView::Items(exercises.iter().map(Exercise::to_string).collect())
}

pub fn history(workouts: &[Workout]) -> ListView<HistoryEntry> {
    if workouts.is_empty() {
        return ListView::Placeholder(NO_WORKOUTS);
    }
    ListView::Items(workouts.iter().map(history_entry).collect())
}

fn history_entry(workout: &Workout) -> HistoryEntry {
    let count = workout.exercises.len();
    let noun = if count == 1 { "exercise" } else { "exercises" };
    HistoryEntry {
        id: workout.id.clone(),
        header: format!("Workout — {} ({count} {noun})", workout.saved_at_label()),
        lines: workout.exercises.iter().map(Exercise::to_string).collect(),
    }
}
