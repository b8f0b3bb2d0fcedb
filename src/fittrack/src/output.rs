use clap::ValueEnum;
use fittrack_types::InfoMessage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed report line
    #[default]
    Text,
    /// One JSON object per report
    Json,
}

impl OutputFormat {
    pub fn render(self, info: &InfoMessage) -> anyhow::Result<String> {
        match self {
            OutputFormat::Text => Ok(info.get_message()),
            OutputFormat::Json => Ok(serde_json::to_string(info)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> InfoMessage {
        InfoMessage {
            training_type: "Running".to_owned(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        }
    }

    #[test]
    fn text_is_report_line() {
        let info = running();
        assert_eq!(OutputFormat::Text.render(&info).unwrap(), info.get_message());
    }

    #[test]
    fn json_round_trips() {
        let info = running();
        let json = OutputFormat::Json.render(&info).unwrap();
        let parsed: InfoMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }
}
