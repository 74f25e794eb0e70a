// SPDX-License-Identifier: MIT

//!
//! Print the date labels of a JSON file of dated records
//!

use clap::{Parser, ValueEnum};
use heritage_dates_core::{
    CalendarDate, DateEstimate, HasDateEstimate, events_on_day, format_date_estimate,
    sort_by_date_estimate,
};
use serde::Deserialize;
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::path::{Path, PathBuf};

#[macro_use]
extern crate log;
extern crate simplelog;

/// A dated record as held by the calling application (only the fields needed
/// here are read)
#[derive(Deserialize, Debug)]
struct Record {
    name: Option<String>,
    date: Option<DateEstimate>,
}

impl HasDateEstimate for Record {
    fn date_estimate(&self) -> Option<&DateEstimate> {
        self.date.as_ref()
    }
}

/// Entry point for the date labels tool
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("heritage_dates")
        .add_filter_allow_str("date_labels")
        .build();

    CombinedLogger::init(vec![TermLogger::new(
        args.log_level.into(),
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .map_err(|error| error.to_string())?;

    let mut records = read_records(&args.input)?;
    info!("read {} records from {:?}", records.len(), args.input);

    if args.sort {
        sort_by_date_estimate(&mut records, |record| record.date_estimate());
    }

    let shown = match args.day {
        Some(day) => events_on_day(&records, &day),
        None => records.iter().collect(),
    };
    debug!("showing {} of {} records", shown.len(), records.len());

    for record in shown {
        println!(
            "{}\t{}",
            format_date_estimate(record.date_estimate()),
            record.name.as_deref().unwrap_or_default()
        );
    }

    Ok(())
}

/// Read a JSON array of records.  Lines beginning with `//` are dropped first
/// so commented `.jsonc` files can be read too
fn read_records(path: &Path) -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let json: String = content
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .map(|line| format!("{line}\n"))
        .collect();
    Ok(serde_json::from_str(&json)?)
}

/// How much to log (to stderr)
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Date labels CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Print the date label of each record in a JSON file",
    after_help = "Each record is an object with an optional `name` and an optional `date` \
                  (date_known, date, date_precision, date_estimate_start, date_estimate_end)"
)]
pub struct Cli {
    /// Path to a JSON (or JSONC) file holding an array of records
    #[arg(long)]
    pub input: PathBuf,

    /// Sort the records by date (undated records last)
    #[arg(long)]
    pub sort: bool,

    /// Only show records whose date is known to fall on this day (YYYY-MM-DD).
    /// Estimated dates never match a day
    #[arg(long)]
    pub day: Option<CalendarDate>,

    /// How much to log
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn day_option() {
        let args = Cli::try_parse_from(["date-labels", "--input", "x.json", "--day", "1066-10-14"])
            .unwrap();
        assert_eq!(args.day, Some(CalendarDate::from(14, 10, 1066).unwrap()));

        let args = Cli::try_parse_from(["date-labels", "--input", "x.json"]).unwrap();
        assert_eq!(args.day, None);

        // Rejected by clap itself, with a usage error
        let error = Cli::try_parse_from(["date-labels", "--input", "x.json", "--day", "1066-02-30"])
            .unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(error.to_string().contains("1066-02-30"));
    }
}
