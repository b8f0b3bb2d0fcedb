use fittrack_types::WorkoutType;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrainingError {
    #[error("Entered training type: {code}, proceed only: {}", .valid.join(", "))]
    UnknownWorkoutType {
        code: String,
        valid: Vec<&'static str>,
    },
    #[error(
        "Allowed number of arguments for {workout}: {expected}; \
         received number of arguments: {received}; allowed arguments: {}",
        .arguments.join(", ")
    )]
    ArgumentCountMismatch {
        workout: WorkoutType,
        expected: usize,
        received: usize,
        arguments: &'static [&'static str],
    },
    #[error("{parameter} must be a finite number")]
    NonFiniteValue { parameter: &'static str },
    #[error("{parameter} must be nonzero")]
    ZeroDivisor { parameter: &'static str },
    #[error("{training_type} does not define spent calories")]
    NotImplemented { training_type: &'static str },
}
