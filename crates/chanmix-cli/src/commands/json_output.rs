//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`. Output is a single object with a
//! `success` flag, an `errors` array and (on success) a `result`.

use chanmix::MixError;
use serde::Serialize;

/// Error codes for CLI operations.
///
/// Mixing failures pass through the library's `MIX_XXX` codes; these cover
/// everything around them.
pub mod error_codes {
    /// Input WAV could not be read or decoded
    pub const WAV_READ: &str = "CLI_001";
    /// Output WAV could not be written
    pub const WAV_WRITE: &str = "CLI_002";
    /// Required option missing for the chosen layouts
    pub const MISSING_OPTION: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "MIX_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&MixError> for JsonError {
    fn from(err: &MixError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

impl From<MixError> for JsonError {
    fn from(err: MixError) -> Self {
        Self::from(&err)
    }
}

/// Envelope shared by every command's JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput<T: Serialize> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command-specific payload (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// Prints the output as pretty JSON and returns the matching exit code.
    pub fn emit(&self) -> anyhow::Result<std::process::ExitCode> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(if self.success {
            std::process::ExitCode::SUCCESS
        } else {
            std::process::ExitCode::from(1)
        })
    }
}
