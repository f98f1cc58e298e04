//! Classification of a single command-line token.
//!
//! A [`Token`] is the immutable view of one `argv` slot: its name, the value
//! associated with it at parse time, and where that value came from. It never
//! changes after [`Token::parse`] returns; consumption state lives in
//! [`Argument`](crate::Argument).

/// Where the value of a token was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueSource {
    /// Embedded in the token itself: `--option=value`.
    Embedded,
    /// Borrowed from the following slot: `--option value`.
    NextArgument,
}

/// One parsed command-line entry.
///
/// # Example
///
/// ```rust
/// use cktools_args::{Token, ValueSource};
///
/// let argv = ["ckshow", "--prefix=model.", "file.safetensors"];
///
/// let token = Token::parse(&argv, 1);
/// assert_eq!(token.name(), "--prefix");
/// assert_eq!(token.raw_value(), "=model.");
/// assert_eq!(token.source(), Some(ValueSource::Embedded));
///
/// let positional = Token::parse(&argv, 2);
/// assert_eq!(positional.name(), "file.safetensors");
/// assert_eq!(positional.raw_value(), "");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    name: &'a str,
    value: &'a str,
    source: Option<ValueSource>,
}

impl<'a> Token<'a> {
    /// Classify the token at `index`, looking ahead at `index + 1`.
    ///
    /// An index past the end of `args` yields an empty positional token.
    pub fn parse<S: AsRef<str>>(args: &'a [S], index: usize) -> Self {
        let curr: &'a str = args.get(index).map(|s| s.as_ref()).unwrap_or("");
        let mut token = Token {
            name: curr,
            value: "",
            source: None,
        };

        // by default the value is the next slot, unless it looks like an option
        let next = index.checked_add(1).and_then(|next| args.get(next));
        if let Some(next) = next.map(|s| s.as_ref()) {
            if !next.starts_with('-') {
                token.value = next;
                token.source = Some(ValueSource::NextArgument);
            }
        }

        // "--option=value" keeps the '=' in the value until it is consumed
        if curr.starts_with("--") {
            if let Some(eq) = curr.find('=') {
                token.name = &curr[..eq];
                token.value = &curr[eq..];
                token.source = Some(ValueSource::Embedded);
            }
        }

        // positional tokens never carry a value
        if !curr.starts_with('-') {
            token.value = "";
            token.source = None;
        }

        token
    }

    /// The name of the token (the option without any embedded value).
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The value as stored at parse time.
    ///
    /// Embedded values still include their leading `=`.
    pub fn raw_value(&self) -> &'a str {
        self.value
    }

    /// Where the value came from, if the token has one.
    pub fn source(&self) -> Option<ValueSource> {
        self.source
    }

    /// True if the value was written as `--option=value`.
    pub fn is_embedded(&self) -> bool {
        self.source == Some(ValueSource::Embedded)
    }

    /// True if the token starts with `-`.
    pub fn is_option(&self) -> bool {
        self.name.starts_with('-')
    }

    /// True if the token name equals `name`.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// True if the token name equals any of `names` (e.g. `&["-n", "--name"]`).
    pub fn is_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.name == *name)
    }
}
