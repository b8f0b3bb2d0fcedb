use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::anyhow;
use fittrack_algos::{Workout as _, read_package};

use crate::OutputFormat;

/// Sample sensor packages, one per workout type.
pub const DEMO_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Raw sensor package: a workout code and its positional values.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    pub fn report(&self, format: OutputFormat) -> anyhow::Result<String> {
        let workout = read_package(&self.code, &self.data)?;
        let info = workout.show_training_info()?;
        format.render(&info)
    }
}

/// Parses `CODE v1 v2 ...`, whitespace separated.
impl FromStr for Package {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let code = fields.next().ok_or(anyhow!("Empty package"))?;
        let data = fields
            .map(|value| {
                value
                    .parse::<f64>()
                    .map_err(|_| anyhow!("Invalid value `{}` in {} package", value, code))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self::new(code, data))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Reports every package line of `input` into `output`.
///
/// Blank lines and `#` comments are skipped. A package that fails is logged
/// and skipped, the remaining lines are still processed.
pub fn run_batch<R, W>(
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> anyhow::Result<BatchSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        summary.processed += 1;
        let report = line
            .parse::<Package>()
            .and_then(|package| package.report(format));

        match report {
            Ok(report) => writeln!(output, "{}", report)?,
            Err(e) => {
                error!("Line {}: {}", index + 1, e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
