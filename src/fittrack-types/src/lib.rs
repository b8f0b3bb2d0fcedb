#[macro_use]
extern crate serde;

mod workout_type;
pub use workout_type::WorkoutType;

mod info_message;
pub use info_message::InfoMessage;
