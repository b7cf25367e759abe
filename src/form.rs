use thiserror::Error;

use crate::models::Exercise;

pub const DEFAULT_SETS: &str = "3";
pub const DEFAULT_REPS: &str = "8";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidExercise {
    #[error("exercise name is empty")]
    MissingName,
    #[error("sets must be a positive whole number, got {0:?}")]
    Sets(String),
    #[error("reps must be a positive whole number, got {0:?}")]
    Reps(String),
}

/// Raw text of the exercise form, exactly as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseForm {
    pub exercise: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub notes: String,
}

impl Default for ExerciseForm {
    fn default() -> Self {
        ExerciseForm {
            exercise: String::new(),
            sets: DEFAULT_SETS.to_string(),
            reps: DEFAULT_REPS.to_string(),
            weight: String::new(),
            notes: String::new(),
        }
    }
}

impl ExerciseForm {
    pub fn parse(&self) -> Result<Exercise, InvalidExercise> {
        let exercise = self.exercise.trim();
        if exercise.is_empty() {
            return Err(InvalidExercise::MissingName);
        }
        let sets = positive_count(&self.sets)
            .ok_or_else(|| InvalidExercise::Sets(self.sets.clone()))?;
        let reps = positive_count(&self.reps)
            .ok_or_else(|| InvalidExercise::Reps(self.reps.clone()))?;
        let notes = self.notes.trim();

        Ok(Exercise {
            exercise: exercise.to_string(),
            sets,
            reps,
            weight: optional_number(&self.weight),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }

    pub fn reset(&mut self) {
        *self = ExerciseForm::default();
    }
}

fn positive_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|count| *count > 0)
}

// Unparsable weight counts as not supplied, like an invalid number input.
fn optional_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|weight| weight.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{ExerciseForm, InvalidExercise};

    fn filled(exercise: &str, sets: &str, reps: &str) -> ExerciseForm {
        ExerciseForm {
            exercise: exercise.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
            ..ExerciseForm::default()
        }
    }

    #[test]
    fn defaults_to_three_sets_of_eight() {
        let form = ExerciseForm::default();
        assert_eq!(form.sets, "3");
        assert_eq!(form.reps, "8");
        assert!(form.exercise.is_empty());
        assert!(form.weight.is_empty());
        assert!(form.notes.is_empty());
    }

    #[test]
    fn parses_trimmed_fields_and_blank_optionals() {
        let form = ExerciseForm {
            weight: " 60 ".to_string(),
            notes: "   ".to_string(),
            ..filled("  Squat ", " 3", "8 ")
        };
        let exercise = form.parse().expect("valid form should parse");

        assert_eq!(exercise.exercise, "Squat");
        assert_eq!(exercise.sets, 3);
        assert_eq!(exercise.reps, 8);
        assert_eq!(exercise.weight, Some(60.0));
        assert_eq!(exercise.notes, None);
    }

    #[test]
    fn keeps_trimmed_notes() {
        let form = ExerciseForm {
            notes: "  slow eccentric ".to_string(),
            ..filled("Bench", "5", "5")
        };
        let exercise = form.parse().expect("valid form should parse");
        assert_eq!(exercise.notes.as_deref(), Some("slow eccentric"));
        assert_eq!(exercise.weight, None);
    }

    #[test]
    fn rejects_missing_name() {
        assert_eq!(filled("   ", "3", "8").parse(), Err(InvalidExercise::MissingName));
    }

    #[test]
    fn rejects_non_positive_or_non_numeric_counts() {
        for sets in ["0", "-1", "", "three", "2.5"] {
            assert_eq!(
                filled("Squat", sets, "8").parse(),
                Err(InvalidExercise::Sets(sets.to_string())),
                "sets {sets:?} should be rejected"
            );
        }
        for reps in ["0", "-3", " ", "x"] {
            assert_eq!(
                filled("Squat", "3", reps).parse(),
                Err(InvalidExercise::Reps(reps.to_string())),
                "reps {reps:?} should be rejected"
            );
        }
    }

    #[test]
    fn unparsable_weight_is_treated_as_absent() {
        let form = ExerciseForm {
            weight: "heavy".to_string(),
            ..filled("Deadlift", "1", "5")
        };
        let exercise = form.parse().expect("weight is optional");
        assert_eq!(exercise.weight, None);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = ExerciseForm {
            weight: "20".to_string(),
            notes: "warmup".to_string(),
            ..filled("Press", "4", "12")
        };
        form.reset();
        assert_eq!(form, ExerciseForm::default());
    }
}
