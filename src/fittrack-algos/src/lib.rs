#[macro_use]
extern crate log;

mod error;
pub use error::TrainingError;

pub(crate) mod training;
pub use training::{Training, Workout};

pub(crate) mod running;
pub use running::Running;

pub(crate) mod walking;
pub use walking::SportsWalking;

pub(crate) mod swimming;
pub use swimming::Swimming;

pub(crate) mod package;
pub use package::{ParsedWorkout, process, read_package};
