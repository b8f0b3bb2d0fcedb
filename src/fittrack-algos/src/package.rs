use fittrack_types::WorkoutType;

use crate::{Running, SportsWalking, Swimming, Training, TrainingError, Workout};

/// Workout built from a sensor package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedWorkout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl ParsedWorkout {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            ParsedWorkout::Swimming(_) => WorkoutType::Swimming,
            ParsedWorkout::Running(_) => WorkoutType::Running,
            ParsedWorkout::SportsWalking(_) => WorkoutType::SportsWalking,
        }
    }

    fn as_workout(&self) -> &dyn Workout {
        match self {
            ParsedWorkout::Swimming(swimming) => swimming,
            ParsedWorkout::Running(running) => running,
            ParsedWorkout::SportsWalking(walking) => walking,
        }
    }
}

impl Workout for ParsedWorkout {
    fn training(&self) -> &Training {
        self.as_workout().training()
    }

    fn training_type(&self) -> &'static str {
        self.workout_type().name()
    }

    fn step_length(&self) -> f64 {
        self.as_workout().step_length()
    }

    fn distance(&self) -> f64 {
        self.as_workout().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_workout().mean_speed()
    }

    fn spent_calories(&self) -> Result<f64, TrainingError> {
        self.as_workout().spent_calories()
    }
}

/// Builds the workout described by a sensor package.
///
/// `data` holds the positional values listed by [`WorkoutType::parameters`].
/// Unknown codes and wrong value counts are rejected before any workout is
/// built, non-finite values and zero divisors before any formula runs.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<ParsedWorkout, TrainingError> {
    let workout: WorkoutType = workout_type
        .parse()
        .map_err(|_| TrainingError::UnknownWorkoutType {
            code: workout_type.to_owned(),
            valid: WorkoutType::codes(),
        })?;

    debug!("Reading {} package: {:?}", workout.name(), data);

    let parsed = match (workout, data) {
        (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            ParsedWorkout::Swimming(Swimming::new(
                action,
                duration,
                weight,
                length_pool,
                count_pool,
            ))
        }
        (WorkoutType::Running, &[action, duration, weight]) => {
            ParsedWorkout::Running(Running::new(action, duration, weight))
        }
        (WorkoutType::SportsWalking, &[action, duration, weight, height]) => {
            ParsedWorkout::SportsWalking(SportsWalking::new(action, duration, weight, height))
        }
        _ => {
            warn!(
                "{} package carries {} values, expected {}",
                workout,
                data.len(),
                workout.arity()
            );
            return Err(TrainingError::ArgumentCountMismatch {
                workout,
                expected: workout.arity(),
                received: data.len(),
                arguments: workout.parameters(),
            });
        }
    };

    if let Some(parameter) = workout
        .parameters()
        .iter()
        .zip(data)
        .find_map(|(parameter, value)| (!value.is_finite()).then_some(*parameter))
    {
        return Err(TrainingError::NonFiniteValue { parameter });
    }

    if parsed.training().duration == 0.0 {
        return Err(TrainingError::ZeroDivisor {
            parameter: "duration",
        });
    }

    if let ParsedWorkout::SportsWalking(walking) = &parsed {
        if walking.height == 0.0 {
            return Err(TrainingError::ZeroDivisor { parameter: "height" });
        }
    }

    Ok(parsed)
}

/// Reads a package and renders its report line.
pub fn process(workout_type: &str, data: &[f64]) -> Result<String, TrainingError> {
    let workout = read_package(workout_type, data)?;
    Ok(workout.show_training_info()?.get_message())
}
