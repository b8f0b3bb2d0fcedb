use fittrack_types::WorkoutType;

use crate::{Training, TrainingError, Workout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub training: Training,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            training: Training::new(action, duration, weight),
        }
    }
}

impl Workout for Running {
    fn training(&self) -> &Training {
        &self.training
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::Running.name()
    }

    /// (18 x speed - 20) x weight / 1000 x minutes
    fn spent_calories(&self) -> Result<f64, TrainingError> {
        Ok((Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.training.weight
            / Training::M_IN_KM
            * self.training.duration_min())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_package() {
        let running = Running::new(15000.0, 1.0, 75.0);
        assert!((running.distance() - 9.75).abs() < 1e-9);
        assert!((running.mean_speed() - 9.75).abs() < 1e-9);
        // (18 x 9.75 - 20) x 75 / 1000 x 60 = 699.75
        let calories = running.spent_calories().unwrap();
        assert!((calories - 699.75).abs() < 1e-9, "got {}", calories);
    }

    #[test]
    fn report() {
        let info = Running::new(15000.0, 1.0, 75.0).show_training_info().unwrap();
        assert_eq!(
            info.get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn slow_running_burns_negative_calories() {
        // below 20/18 km/h the shift dominates, the formula is kept as is
        let running = Running::new(1000.0, 1.0, 75.0);
        assert!(running.spent_calories().unwrap() < 0.0);
    }

    #[test]
    fn calories_scale_with_weight() {
        let light = Running::new(15000.0, 1.0, 50.0).spent_calories().unwrap();
        let heavy = Running::new(15000.0, 1.0, 100.0).spent_calories().unwrap();
        assert!((heavy - 2.0 * light).abs() < 1e-9);
    }
}
