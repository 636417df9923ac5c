use std::fmt;

use clap::{builder::PossibleValue, ArgMatches, ValueEnum};

static LEVEL_STR: [&str; 6] = ["error", "warn", "info", "debug", "trace", "none"];

/// Minimum severity of messages that will be logged. `None` silences
/// logging entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    None,
}

impl LogLevel {
    fn verbosity(&self) -> Option<usize> {
        match self {
            Self::None => None,
            lvl => Some(*lvl as usize),
        }
    }
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
            Self::None,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(LEVEL_STR[*self as usize]))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(LEVEL_STR[*self as usize])
    }
}

/// Initialize stderr logging from the parsed command line
pub fn init_log(m: &ArgMatches) {
    let level = m
        .get_one::<LogLevel>("loglevel")
        .copied()
        .expect("missing default log level");

    stderrlog::new()
        .quiet(level.verbosity().is_none())
        .verbosity(level.verbosity().unwrap_or(0))
        .init()
        .unwrap();
}
