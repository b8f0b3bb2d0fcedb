use fittrack_types::WorkoutType;

use crate::{Training, TrainingError, Workout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub training: Training,
    /// Centimeters
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            training: Training::new(action, duration, weight),
            height,
        }
    }
}

impl Workout for SportsWalking {
    fn training(&self) -> &Training {
        &self.training
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::SportsWalking.name()
    }

    /// (0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x minutes
    ///
    /// The speed/height ratio is floor-divided, reference outputs depend on it.
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        let weight = self.training.weight;
        let speed_height_ratio = floor_div(self.mean_speed().powi(2), self.height);

        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height_ratio * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.training.duration_min())
    }
}

/// Floor division that rounds like integer-valued float division.
///
/// `(a / b).floor()` is off by one when the quotient rounds up to a whole
/// number (`1.0 / 0.1` is exactly 10 but the remainder is not zero), so the
/// quotient is taken from `a - a % b` instead. `b` must be nonzero.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}
