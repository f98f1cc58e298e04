//! Usage errors raised while dispatching command-line arguments.

/// Errors a dispatch loop reports when the user misuses the command line.
///
/// The tokenizer and the consumption tracker never fail on their own; these
/// values are produced by the loop that interprets their state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    /// The option name is not recognized.
    #[error("Unknown argument: {0}")]
    UnknownOption(String),

    /// A value was attached to an option that takes none (`--flag=x`).
    #[error("The option '{0}' does not accept a value.")]
    UnexpectedValue(String),

    /// A value-taking option was given without a value.
    #[error("The option '{0}' requires a value.")]
    MissingValue(String),

    /// The value could not be parsed as an integer.
    #[error("Invalid value for '{name}': '{value}' is not an integer.")]
    InvalidInteger { name: String, value: String },

    /// The value is not one of the accepted choices.
    #[error("Invalid value for '{name}': '{value}' (expected one of: {expected})")]
    InvalidChoice {
        name: String,
        value: String,
        expected: String,
    },

    /// More positional arguments than the program accepts.
    #[error("Unexpected extra argument: {0}")]
    TooManyPositionals(String),
}

impl ArgError {
    /// Create an unknown-option error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownOption(name.into())
    }

    /// Create an invalid-integer error.
    pub fn invalid_integer(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInteger {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create an invalid-choice error listing the accepted values.
    pub fn invalid_choice(
        name: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::InvalidChoice {
            name: name.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_display() {
        let err = ArgError::unknown("--bogus");
        assert_eq!(err.to_string(), "Unknown argument: --bogus");
    }

    #[test]
    fn test_invalid_choice_lists_expected_values() {
        let err = ArgError::invalid_choice("--color", "sometimes", &["auto", "always", "never"]);
        assert!(err.to_string().contains("sometimes"));
        assert!(err.to_string().contains("auto, always, never"));
    }
}
