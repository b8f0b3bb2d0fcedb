use fittrack_types::InfoMessage;

use crate::TrainingError;

/// Raw sensor quantities shared by every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    /// Steps or strokes
    pub action: f64,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

impl Training {
    /// Meters covered by a single step
    pub const LEN_STEP: f64 = 0.65;
    pub const M_IN_KM: f64 = 1000.0;
    pub const MIN_IN_HOUR: f64 = 60.0;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    pub fn duration_min(&self) -> f64 {
        self.duration * Self::MIN_IN_HOUR
    }
}

/// Distance, speed and calorie formulas of a workout.
///
/// Only `training`, `training_type` and `spent_calories` have to be provided,
/// the step length and speed defaults cover walking-like workouts.
pub trait Workout {
    fn training(&self) -> &Training;

    fn training_type(&self) -> &'static str;

    fn step_length(&self) -> f64 {
        Training::LEN_STEP
    }

    /// Kilometers
    fn distance(&self) -> f64 {
        self.training().action * self.step_length() / Training::M_IN_KM
    }

    /// Km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.training().duration
    }

    fn spent_calories(&self) -> Result<f64, TrainingError>;

    fn show_training_info(&self) -> Result<InfoMessage, TrainingError> {
        Ok(InfoMessage {
            training_type: self.training_type().to_owned(),
            duration: self.training().duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories()?,
        })
    }
}

impl Workout for Training {
    fn training(&self) -> &Training {
        self
    }

    fn training_type(&self) -> &'static str {
        "Training"
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        Err(TrainingError::NotImplemented {
            training_type: self.training_type(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_in_minutes() {
        assert_eq!(Training::new(0.0, 1.5, 70.0).duration_min(), 90.0);
    }

    #[test]
    fn default_distance_and_speed() {
        let training = Training::new(10000.0, 2.0, 70.0);
        // 10000 steps x 0.65m = 6.5km
        assert!((training.distance() - 6.5).abs() < 1e-9);
        assert!((training.mean_speed() - 3.25).abs() < 1e-9);
    }

    #[test]
    fn base_training_has_no_calories() {
        let training = Training::new(10000.0, 1.0, 70.0);
        assert_eq!(
            training.spent_calories(),
            Err(TrainingError::NotImplemented {
                training_type: "Training"
            })
        );
    }

    #[test]
    fn base_training_cannot_report() {
        let training = Training::new(10000.0, 1.0, 70.0);
        let err = training.show_training_info().unwrap_err();
        assert!(matches!(err, TrainingError::NotImplemented { .. }));
        assert_eq!(err.to_string(), "Training does not define spent calories");
    }
}
