//! Field-level lexing of directive payloads, and the crate's error type.
use thiserror::Error;

use crate::callbacks::CallbackError;
use crate::directive::DirectiveType;

/// Everything that can stop a parse.
#[derive(Debug, Error)]
pub enum ParseError {
  /// The bounded line buffer could not be allocated.
  #[error("could not allocate the line buffer")]
  MemoryFailure,
  /// The parser was configured with unusable options.
  #[error("invalid parser options: {0}")]
  InvalidOptions(String),
  /// `execute` was handed an empty source.
  #[error("invalid source: the buffer is empty")]
  InvalidSource,
  /// A scalar token is outside of the values its directive accepts.
  #[error("line {line_number}: `{token}` is not a valid value for `{}`", .directive.keyword())]
  OutOfBounds {
    /// Line the token was found on.
    line_number: usize,
    /// Directive whose payload was rejected.
    directive: DirectiveType,
    /// The rejected token.
    token: String,
  },
  /// A directive's payload does not fit in the line buffer.
  #[error("line {line_number}: payload is longer than {limit} bytes")]
  LineTooLong {
    /// Line that overflowed.
    line_number: usize,
    /// Configured maximum line length.
    limit: usize,
  },
  /// A text payload is not valid UTF-8.
  #[error("line {line_number}: payload is not valid UTF-8")]
  Encoding {
    /// Line with the bad payload.
    line_number: usize,
  },
  /// A callback returned an error, which stopped the scan.
  #[error("line {line_number}: `{}` callback aborted the parse: {source}", .directive.keyword())]
  CallbackAborted {
    /// Line being dispatched when the callback failed.
    line_number: usize,
    /// Directive being dispatched.
    directive: DirectiveType,
    /// The error returned by the callback.
    source: CallbackError,
  },
}

impl ParseError {
  /// The 1-based line the error was raised on, if it relates to a line.
  pub fn line_number(&self) -> Option<usize> {
    match *self {
      ParseError::OutOfBounds { line_number, .. }
      | ParseError::LineTooLong { line_number, .. }
      | ParseError::Encoding { line_number }
      | ParseError::CallbackAborted { line_number, .. } => Some(line_number),
      ParseError::MemoryFailure | ParseError::InvalidOptions(_) | ParseError::InvalidSource => None,
    }
  }
}

#[inline]
pub(crate) fn is_blank(c: u8) -> bool {
  matches!(c, b' ' | b'\t' | b'\r' | b'\x0b' | b'\x0c')
}

/// Strips trailing blanks (and the `\r` of CRLF input).
pub(crate) fn trim_end(bytes: &[u8]) -> &[u8] {
  let end = bytes.iter().rposition(|&c| !is_blank(c)).map_or(0, |i| i + 1);
  &bytes[..end]
}

/// Reads up to four whitespace separated floats, the way `"%f %f %f %f"`
/// would: scanning stops at the first field that does not start with a
/// number, and every field not read stays `0.0`.
pub(crate) fn parse_floats(payload: &[u8]) -> [f32; 4] {
  let mut fields = [0.0f32; 4];

  for (slot, token) in fields.iter_mut().zip(split_blank(payload)) {
    match lexical::parse_partial::<f32, _>(token) {
      Ok((value, consumed)) => {
        *slot = value;
        if consumed < token.len() {
          break;
        }
      }
      Err(_) => break,
    }
  }

  fields
}

/// Reads the leading digit run of the payload as an unsigned integer, `0` if
/// there is none. `d 0.5` therefore reads as `0`. A digit run too large for
/// `u32` saturates to `u32::MAX`.
pub(crate) fn parse_scalar(payload: &[u8]) -> u32 {
  let token = match split_blank(payload).next() {
    Some(token) => token,
    None => return 0,
  };

  match lexical::parse_partial::<u32, _>(token) {
    Ok((value, _)) => value,
    Err(ref e) if e.code == lexical::ErrorCode::Overflow => u32::MAX,
    Err(_) => 0,
  }
}

/// Parses a signed face index component. `None` when the token holds no number.
pub(crate) fn parse_index(token: &[u8]) -> Option<i32> {
  lexical::parse_partial::<i32, _>(token)
    .ok()
    .filter(|&(_, consumed)| consumed > 0)
    .map(|(value, _)| value)
}

/// Reads an `on`/`off` toggle. Anything else is rejected.
pub(crate) fn parse_toggle(payload: &[u8]) -> Option<bool> {
  match trim_end(payload) {
    b"on" => Some(true),
    b"off" => Some(false),
    _ => None,
  }
}

fn split_blank(payload: &[u8]) -> impl Iterator<Item = &[u8]> {
  payload
    .split(|&c| is_blank(c))
    .filter(|token| !token.is_empty())
}
