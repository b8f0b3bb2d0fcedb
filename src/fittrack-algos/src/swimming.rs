use fittrack_types::WorkoutType;

use crate::{Training, TrainingError, Workout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub training: Training,
    /// Meters
    pub length_pool: f64,
    /// Laps
    pub count_pool: f64,
}

impl Swimming {
    /// Meters covered by a single stroke
    pub const LEN_STEP: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: f64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            training: Training::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Workout for Swimming {
    fn training(&self) -> &Training {
        &self.training
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::Swimming.name()
    }

    fn step_length(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Speed comes from the laps, not from the stroke count.
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / Training::M_IN_KM / self.training.duration
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        Ok((self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.training.weight)
    }
}
