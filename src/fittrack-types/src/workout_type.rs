use strum::{Display, EnumIter, EnumString, IntoEnumIterator as _, IntoStaticStr};

/// Workout kinds a sensor package can carry, keyed by their short code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum WorkoutType {
    #[serde(rename = "SWM")]
    #[strum(serialize = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    #[strum(serialize = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    #[strum(serialize = "WLK")]
    SportsWalking,
}

impl WorkoutType {
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Name reported as the training type.
    pub fn name(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
        }
    }

    /// Positional arguments a package of this type carries, in order.
    pub fn parameters(self) -> &'static [&'static str] {
        match self {
            WorkoutType::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutType::Running => &["action", "duration", "weight"],
            WorkoutType::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    pub fn arity(self) -> usize {
        self.parameters().len()
    }

    pub fn codes() -> Vec<&'static str> {
        Self::iter().map(Self::code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes() {
        assert_eq!("SWM".parse::<WorkoutType>().unwrap(), WorkoutType::Swimming);
        assert_eq!("RUN".parse::<WorkoutType>().unwrap(), WorkoutType::Running);
        assert_eq!("WLK".parse::<WorkoutType>().unwrap(), WorkoutType::SportsWalking);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!("XYZ".parse::<WorkoutType>().is_err());
        // codes are case sensitive
        assert!("run".parse::<WorkoutType>().is_err());
        assert!("".parse::<WorkoutType>().is_err());
    }

    #[test]
    fn codes_keep_declaration_order() {
        assert_eq!(WorkoutType::codes(), vec!["SWM", "RUN", "WLK"]);
    }

    #[test]
    fn arity_matches_parameters() {
        assert_eq!(WorkoutType::Running.arity(), 3);
        assert_eq!(WorkoutType::SportsWalking.arity(), 4);
        assert_eq!(WorkoutType::Swimming.arity(), 5);
        for workout in WorkoutType::iter() {
            assert_eq!(&workout.parameters()[..3], &["action", "duration", "weight"]);
        }
    }

    #[test]
    fn display_and_serde_use_code() {
        assert_eq!(WorkoutType::SportsWalking.to_string(), "WLK");
        assert_eq!(
            serde_json::to_string(&WorkoutType::Swimming).unwrap(),
            "\"SWM\""
        );
        let parsed: WorkoutType = serde_json::from_str("\"RUN\"").unwrap();
        assert_eq!(parsed, WorkoutType::Running);
    }
}
