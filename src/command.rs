//! Text command replay.
//!
//! Drives a cache from lines of text, the way a command file is processed:
//!
//! ```text
//!   key                 → get(key)
//!   key value flag      → put(key, value, flag == "true")
//!   anything else       → format error, cache untouched
//! ```
//!
//! Tokens are separated by whitespace and blank lines are skipped. The reset
//! flag is compared case-insensitively against `true`; any other third token
//! means no reset.
//!
//! This module sits outside the engine: it only talks to a
//! [`CoreCache<String>`] and owns all parsing and rendering.
//!
//! ```
//! use lrukit::command::{render_snapshot, replay};
//! use lrukit::policy::lru::LruCache;
//! use lrukit::traits::CoreCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! let outcomes = replay(&mut cache, ["1 1 false", "2 -2 true", "1"]);
//!
//! assert_eq!(outcomes[2].to_string(), "get(1) returns: 1");
//! assert_eq!(render_snapshot(&cache.describe()), "[1:1]");
//! ```

use std::fmt;

use tracing::{trace, warn};

use crate::error::ValidationError;
use crate::traits::CoreCache;
use crate::value::RawValue;

/// One parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Get {
        key: String,
    },
    Put {
        key: String,
        value: RawValue,
        reset: bool,
        /// The value token as written, used when reporting a rejection.
        text: String,
    },
}

/// A line that is neither a `get` nor a `put`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    line: String,
    tokens: usize,
}

impl CommandError {
    /// The offending line, trimmed.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// How many tokens the line split into.
    pub fn tokens(&self) -> usize {
        self.tokens
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid command format -> {}", self.line)
    }
}

impl std::error::Error for CommandError {}

/// Turns a value token into a [`RawValue`].
///
/// Every numeric token becomes `Int`: integer literals are clamped to the
/// `i64` range, decimal and exponent forms are truncated toward zero
/// (`2.5` is 2, `1e3` is 1000). Tokens that are not numbers stay `Text`.
pub fn coerce_value(token: &str) -> RawValue {
    if let Ok(n) = token.parse::<i64>() {
        return RawValue::Int(n);
    }
    if let Ok(wide) = token.parse::<i128>() {
        let clamped = wide.clamp(i128::from(i64::MIN), i128::from(i64::MAX));
        return RawValue::Int(clamped as i64);
    }
    // f64 parsing also accepts words like "inf" and "NaN"; those are text.
    if token.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(x) = token.parse::<f64>() {
            // `as` truncates toward zero and saturates at the i64 bounds.
            return RawValue::Int(x as i64);
        }
    }
    RawValue::Text(token.to_owned())
}

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(None),
        [key] => Ok(Some(Command::Get {
            key: (*key).to_owned(),
        })),
        [key, value, flag] => Ok(Some(Command::Put {
            key: (*key).to_owned(),
            value: coerce_value(value),
            reset: flag.eq_ignore_ascii_case("true"),
            text: (*value).to_owned(),
        })),
        _ => Err(CommandError {
            line: line.trim().to_owned(),
            tokens: tokens.len(),
        }),
    }
}

/// Result of running one line against a cache.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A `get`; `value` is `None` when the key was absent.
    Got { key: String, value: Option<u64> },
    /// A `put` that was applied. `snapshot` is the cache afterwards.
    Stored {
        key: String,
        value: u64,
        reset: bool,
        snapshot: Vec<(String, u64)>,
    },
    /// A `put` whose value was refused before reaching the cache.
    Rejected {
        key: String,
        reset: bool,
        error: ValidationError,
        snapshot: Vec<(String, u64)>,
    },
    Malformed(CommandError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Got {
                key,
                value: Some(value),
            } => write!(f, "get({key}) returns: {value}"),
            Outcome::Got { key, value: None } => write!(f, "get({key}) returns: not found"),
            Outcome::Stored {
                key,
                value,
                reset,
                snapshot,
            } => write!(
                f,
                "after put({key}, {value}, {reset}): {}",
                render_snapshot(snapshot)
            ),
            Outcome::Rejected {
                key,
                reset,
                error,
                snapshot,
            } => write!(
                f,
                "rejected put({key}, {}, {reset}): {error}; cache: {}",
                error.value(),
                render_snapshot(snapshot)
            ),
            Outcome::Malformed(err) => write!(f, "error: {err}"),
        }
    }
}

/// Runs one command.
///
/// A `put` value is checked with the same validator the cache uses before
/// the cache is called, so a refused value never triggers the reset that
/// came with it. A rejection names the token as written, not its coerced
/// form.
pub fn execute<C>(cache: &mut C, command: Command) -> Outcome
where
    C: CoreCache<String>,
{
    match command {
        Command::Get { key } => {
            let value = cache.get(&key);
            trace!(%key, hit = value.is_some(), "get");
            Outcome::Got { key, value }
        },
        Command::Put {
            key,
            value,
            reset,
            text,
        } => {
            let checked = value
                .validate()
                .and_then(|accepted| cache.put(key.clone(), value, reset).map(|()| accepted))
                .map_err(|err| ValidationError::new(text, err.kind()));
            match checked {
                Ok(value) => Outcome::Stored {
                    key,
                    value,
                    reset,
                    snapshot: cache.describe(),
                },
                Err(error) => Outcome::Rejected {
                    key,
                    reset,
                    error,
                    snapshot: cache.describe(),
                },
            }
        },
    }
}

/// Parses and runs every line in order, reporting each result.
///
/// Malformed lines are reported and skipped; processing continues.
pub fn replay<C, I, S>(cache: &mut C, lines: I) -> Vec<Outcome>
where
    C: CoreCache<String>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcomes = Vec::new();
    for line in lines {
        match parse_line(line.as_ref()) {
            Ok(Some(command)) => outcomes.push(execute(cache, command)),
            Ok(None) => {},
            Err(err) => {
                warn!(line = err.line(), tokens = err.tokens(), "skipping malformed command");
                outcomes.push(Outcome::Malformed(err));
            },
        }
    }
    outcomes
}

/// Formats entries as `[key:value, key:value]`, most recent first.
pub fn render_snapshot<K: fmt::Display>(entries: &[(K, u64)]) -> String {
    let body = entries
        .iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}
