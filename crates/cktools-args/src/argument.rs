//! Value consumption tracking on top of [`Token`].
//!
//! An [`Argument`] pairs an immutable [`Token`] with the small amount of
//! mutable state a dispatch loop needs: whether the value has been taken yet.
//! After a flag handler has run, [`Argument::was_value_consumed`] tells the
//! loop whether the user attached a value (`--flag=x`) to a flag that never
//! asked for one.
//!
//! # Example
//!
//! ```rust
//! use cktools_args::{ArgError, Argument};
//!
//! fn parse(argv: &[&str]) -> Result<(String, bool), ArgError> {
//!     let mut output = String::new();
//!     let mut verbose = false;
//!
//!     let mut i = 1;
//!     while i < argv.len() {
//!         let mut arg = Argument::new(argv, i);
//!         if arg.is_any(&["-o", "--output"]) {
//!             output = arg.require_value(&mut i)?.to_string();
//!         } else if arg.is("--verbose") {
//!             verbose = true;
//!         } else {
//!             return Err(ArgError::unknown(arg.name()));
//!         }
//!         arg.ensure_consumed()?;
//!         i += 1;
//!     }
//!     Ok((output, verbose))
//! }
//!
//! assert_eq!(parse(&["app", "-o", "out.txt"]).unwrap(), (String::from("out.txt"), false));
//! assert_eq!(parse(&["app", "--output=x", "--verbose"]).unwrap(), (String::from("x"), true));
//! assert!(matches!(parse(&["app", "--verbose=yes"]), Err(ArgError::UnexpectedValue(_))));
//! ```

use crate::error::ArgError;
use crate::token::{Token, ValueSource};

/// A [`Token`] plus its consumption state, owned by the dispatch loop.
#[derive(Clone, Debug)]
pub struct Argument<'a> {
    token: Token<'a>,
    pending: &'a str,
    consumed: bool,
}

impl<'a> Argument<'a> {
    /// Parse the argument at `index` of `args`.
    pub fn new<S: AsRef<str>>(args: &'a [S], index: usize) -> Self {
        Self::from_token(Token::parse(args, index))
    }

    /// Start tracking consumption of an already parsed token.
    pub fn from_token(token: Token<'a>) -> Self {
        Self {
            token,
            pending: token.raw_value(),
            consumed: false,
        }
    }

    /// The underlying immutable token.
    pub fn token(&self) -> &Token<'a> {
        &self.token
    }

    /// The argument name (for positionals, the argument itself).
    pub fn name(&self) -> &'a str {
        self.token.name()
    }

    /// True if the argument starts with `-`.
    pub fn is_option(&self) -> bool {
        self.token.is_option()
    }

    /// True if the argument name equals `name`.
    pub fn is(&self, name: &str) -> bool {
        self.token.is(name)
    }

    /// True if the argument name equals any of `names`.
    pub fn is_any(&self, names: &[&str]) -> bool {
        self.token.is_any(names)
    }

    /// True while an unconsumed, non-empty value is available.
    pub fn has_value(&self) -> bool {
        !self.payload().is_empty()
    }

    /// Take the value, advancing `index` past the slot it was borrowed from.
    ///
    /// Embedded values leave `index` untouched. The value is cleared once
    /// taken, so a second call returns an empty string and does not move the
    /// index again.
    pub fn value(&mut self, index: &mut usize) -> &'a str {
        if self.consumed {
            return "";
        }
        let payload = self.payload();
        if self.token.source() == Some(ValueSource::NextArgument) {
            *index += 1;
        }
        self.consumed = true;
        self.pending = "";
        payload
    }

    /// Take the value, failing with [`ArgError::MissingValue`] if there is none.
    ///
    /// The index is only advanced when a value is actually present, so a
    /// following option is never swallowed.
    pub fn require_value(&mut self, index: &mut usize) -> Result<&'a str, ArgError> {
        if !self.has_value() {
            return Err(ArgError::MissingValue(self.name().to_string()));
        }
        Ok(self.value(index))
    }

    /// Take the value and parse it as an integer.
    pub fn int_value(&mut self, index: &mut usize) -> Result<i64, ArgError> {
        let name = self.name();
        let text = self.require_value(index)?;
        text.trim()
            .parse::<i64>()
            .map_err(|_| ArgError::invalid_integer(name, text))
    }

    /// False only when the argument owns an embedded value nobody took.
    ///
    /// A value borrowed from the next slot is not owned: if the handler
    /// leaves it, the loop simply processes that slot as the next token.
    pub fn was_value_consumed(&self) -> bool {
        self.consumed || !self.token.is_embedded()
    }

    /// Fail with [`ArgError::UnexpectedValue`] if an embedded value was ignored.
    pub fn ensure_consumed(&self) -> Result<(), ArgError> {
        if self.was_value_consumed() {
            Ok(())
        } else {
            Err(ArgError::UnexpectedValue(self.name().to_string()))
        }
    }

    fn payload(&self) -> &'a str {
        match self.token.source() {
            Some(ValueSource::Embedded) => self.pending.strip_prefix('=').unwrap_or(self.pending),
            _ => self.pending,
        }
    }
}
