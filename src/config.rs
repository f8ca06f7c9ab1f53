// Configuration: command-line settings for the calculator binary.

use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use log::LevelFilter;

/// When to colour error and notice lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug, Clone)]
#[clap(name = "console-calc", version, about = "Interactive integer calculator")]
pub struct Settings {
    #[clap(
        long,
        help = "Give up after this many invalid inputs in a row for one prompt (default: retry forever)"
    )]
    pub max_retries: Option<u32>,

    #[clap(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    #[clap(
        long,
        short,
        default_value = "warn",
        help = "Diagnostic log level: off, error, warn, info, debug or trace"
    )]
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_retries: None,
            color: ColorChoice::Auto,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Settings {
    /// Parse settings from the process arguments.
    pub fn from_args() -> Self {
        Settings::parse()
    }

    /// Resolve `--color` against the actual stdout.
    pub fn use_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_tty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_retry_forever() {
        let settings = Settings::try_parse_from(["console-calc"]).unwrap();
        assert_eq!(settings.max_retries, None);
        assert_eq!(settings.color, ColorChoice::Auto);
        assert_eq!(settings.log_level, LevelFilter::Warn);
    }

    #[test]
    fn parses_flags() {
        let settings = Settings::try_parse_from([
            "console-calc",
            "--max-retries",
            "3",
            "--color",
            "never",
            "-l",
            "debug",
        ])
        .unwrap();
        assert_eq!(settings.max_retries, Some(3));
        assert!(!settings.use_color());
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(Settings::try_parse_from(["console-calc", "--color", "pink"]).is_err());
        assert!(Settings::try_parse_from(["console-calc", "-l", "loud"]).is_err());
        assert!(Settings::try_parse_from(["console-calc", "--log-level", "verbose"]).is_err());
        assert!(Settings::try_parse_from(["console-calc", "--max-retries", "-1"]).is_err());
    }
}
