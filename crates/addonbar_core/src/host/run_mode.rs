//! Host run-mode declarations for the interactive-UI gate.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Host process run mode.
///
/// Read once at startup and fixed for the process lifetime; the host never
/// switches mode while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// No interactive UI surface exists; menu work is suppressed entirely.
    Headless,
    /// An interactive UI surface is, or will become, available.
    Interactive,
}

impl RunMode {
    /// Stable string id used in host configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Headless => RUN_MODE_HEADLESS,
            Self::Interactive => RUN_MODE_INTERACTIVE,
        }
    }

    /// Returns whether menu registration may run in this mode.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive)
    }
}

/// Configuration string value for headless mode.
pub const RUN_MODE_HEADLESS: &str = "headless";
/// Configuration string value for interactive mode.
pub const RUN_MODE_INTERACTIVE: &str = "interactive";

const SUPPORTED_RUN_MODE_STRINGS: &[&str] = &[RUN_MODE_HEADLESS, RUN_MODE_INTERACTIVE];

/// Returns supported run-mode configuration strings.
pub fn supported_run_mode_strings() -> &'static [&'static str] {
    SUPPORTED_RUN_MODE_STRINGS
}

/// Parses one run mode from a host configuration string.
pub fn parse_run_mode(value: &str) -> Result<RunMode, RunModeError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(RunModeError::EmptyRunMode);
    }

    match normalized {
        RUN_MODE_HEADLESS => Ok(RunMode::Headless),
        RUN_MODE_INTERACTIVE => Ok(RunMode::Interactive),
        other => Err(RunModeError::UnsupportedRunMode(other.to_string())),
    }
}

/// Run-mode parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunModeError {
    EmptyRunMode,
    UnsupportedRunMode(String),
}

impl Display for RunModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRunMode => write!(f, "run mode value must not be empty"),
            Self::UnsupportedRunMode(value) => {
                write!(f, "run mode is unsupported: {value}")
            }
        }
    }
}

impl Error for RunModeError {}

#[cfg(test)]
mod tests {
    use super::{parse_run_mode, supported_run_mode_strings, RunMode, RunModeError};

    #[test]
    fn parses_supported_run_modes() {
        assert_eq!(
            parse_run_mode("headless").expect("headless parse"),
            RunMode::Headless
        );
        assert_eq!(
            parse_run_mode("interactive").expect("interactive parse"),
            RunMode::Interactive
        );
    }

    #[test]
    fn rejects_empty_run_mode() {
        let err = parse_run_mode("   ").expect_err("empty run mode must fail");
        assert_eq!(err, RunModeError::EmptyRunMode);
    }

    #[test]
    fn rejects_unsupported_run_mode() {
        let err = parse_run_mode("server").expect_err("unsupported run mode must fail");
        assert_eq!(
            err,
            RunModeError::UnsupportedRunMode("server".to_string())
        );
    }

    #[test]
    fn rejects_non_lowercase_run_mode_variants() {
        let err = parse_run_mode("Headless").expect_err("capitalized run mode must fail");
        assert_eq!(
            err,
            RunModeError::UnsupportedRunMode("Headless".to_string())
        );
    }

    #[test]
    fn only_interactive_mode_allows_registration() {
        assert!(RunMode::Interactive.is_interactive());
        assert!(!RunMode::Headless.is_interactive());
    }

    #[test]
    fn returns_supported_run_mode_strings() {
        let values = supported_run_mode_strings();
        assert!(values.contains(&"headless"));
        assert!(values.contains(&"interactive"));
    }
}
