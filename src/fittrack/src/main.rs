#[macro_use]
extern crate log;

use std::io;

use anyhow::anyhow;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use fittrack::{DEMO_PACKAGES, OutputFormat, Package, run_batch};
use fittrack_types::WorkoutType;
use strum::IntoEnumIterator as _;

#[derive(Parser)]
#[command(name = "fittrack", about = "Training reports from raw sensor packages")]
pub struct FitTrackCli {
    #[arg(env = "FITTRACK_FORMAT", long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub subcommand: FitTrackCommand,
}

#[derive(Subcommand)]
pub enum FitTrackCommand {
    ///
    /// Report the bundled sample packages
    ///
    Demo,
    ///
    /// Report a single package, e.g. `process RUN 15000 1 75`
    ///
    Process {
        workout_type: String,
        #[arg(num_args = 0.., allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    ///
    /// Report packages read from stdin, one `CODE v1 v2 ...` per line
    ///
    Batch,
    ///
    /// List workout codes and their arguments
    ///
    Types,
    ///
    /// Print shell completions
    ///
    Completions { shell: Shell },
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = FitTrackCli::parse();

    match cli.subcommand {
        FitTrackCommand::Demo => {
            for (code, data) in DEMO_PACKAGES {
                let report = Package::new(code, data).report(cli.format)?;
                println!("{}", report);
            }
            Ok(())
        }
        FitTrackCommand::Process {
            workout_type,
            values,
        } => {
            let report = Package::new(workout_type, values).report(cli.format)?;
            println!("{}", report);
            Ok(())
        }
        FitTrackCommand::Batch => {
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            let summary = run_batch(stdin, &mut stdout, cli.format)?;
            info!(
                "Processed {} packages, {} failed",
                summary.processed, summary.failed
            );

            if summary.failed > 0 {
                return Err(anyhow!(
                    "{} of {} packages failed",
                    summary.failed,
                    summary.processed
                ));
            }
            Ok(())
        }
        FitTrackCommand::Types => {
            for workout in WorkoutType::iter() {
                println!(
                    "{}: {} ({})",
                    workout.code(),
                    workout.name(),
                    workout.parameters().join(", ")
                );
            }
            Ok(())
        }
        FitTrackCommand::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut FitTrackCli::command(),
                "fittrack",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_consistent() {
        FitTrackCli::command().debug_assert();
    }

    #[test]
    fn parses_process() {
        let cli = FitTrackCli::try_parse_from([
            "fittrack", "process", "SWM", "720", "1", "80", "25", "40",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        let FitTrackCommand::Process {
            workout_type,
            values,
        } = cli.subcommand
        else {
            panic!("expected process command");
        };
        assert_eq!(workout_type, "SWM");
        assert_eq!(values, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
    }

    #[test]
    fn parses_format() {
        let cli = FitTrackCli::try_parse_from(["fittrack", "--format", "json", "demo"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.subcommand, FitTrackCommand::Demo));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert!(FitTrackCli::try_parse_from(["fittrack", "process", "RUN", "fast"]).is_err());
    }
}
