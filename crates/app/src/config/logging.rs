//! Diagnostics settings for the dashboard CLI.
//!
//! Diagnostics are written to stderr so they never interleave with the
//! promotion tables and advisories printed on stdout.

use clap::Args;

/// How diagnostic lines are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One short line per event, for a terminal.
    Compact,

    /// One JSON object per event, for log collectors.
    Json,
}

/// Verbosity and rendering of gateway and dashboard diagnostics.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Filter directive such as `info` or `promodesk_app=debug`
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Rendering of diagnostic lines
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        logging: LoggingConfig,
    }

    #[test]
    fn parses_directive_and_json_format() -> TestResult {
        let harness = Harness::try_parse_from([
            "promodesk",
            "--log-level",
            "promodesk_app=debug",
            "--log-format",
            "json",
        ])?;

        assert_eq!(harness.logging.log_level, "promodesk_app=debug");
        assert_eq!(harness.logging.log_format, LogFormat::Json);

        Ok(())
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Harness::try_parse_from(["promodesk", "--log-format", "pretty"]);

        assert!(result.is_err());
    }
}
