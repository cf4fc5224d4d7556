//! The line classifier and dispatcher.
//!
//! A `Parser` makes one forward pass over a source buffer. Every line is
//! classified by its leading keyword, its payload is copied into a bounded
//! line buffer, decoded, and handed to the matching callback before the next
//! line is looked at.
use std::str;

use crate::callbacks::CallbackTable;
use crate::context::{LineState, ParserState, Payload};
use crate::directive::DirectiveType;
use crate::face;
use crate::lex::{self, is_blank, ParseError};

/// Default capacity of the line buffer, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8192;

/// Parser configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserOptions {
  max_line_length: usize,
}

impl ParserOptions {
  /// Options with every default applied.
  pub fn new() -> ParserOptions {
    ParserOptions {
      max_line_length: DEFAULT_MAX_LINE_LENGTH,
    }
  }

  /// Sets the longest payload, in bytes, a dispatched line may carry. The
  /// buffer is reserved once, up front; longer lines fail with
  /// `ParseError::LineTooLong`.
  pub fn with_max_line_length(mut self, max_line_length: usize) -> ParserOptions {
    self.max_line_length = max_line_length;
    self
  }

  /// The configured maximum payload length.
  pub fn max_line_length(&self) -> usize {
    self.max_line_length
  }
}

impl Default for ParserOptions {
  fn default() -> ParserOptions {
    ParserOptions::new()
  }
}

/// Where the scanner is within the current line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scan {
  /// Skipping blanks before the keyword.
  LineStart,
  /// Reading the keyword, which started at the given offset.
  Keyword(usize),
  /// Buffering the payload.
  Payload,
}

/// A single-owner, reusable OBJ/MTL parser.
///
/// `T` is the caller's context, handed to every callback and recoverable with
/// `data`, `data_mut` or `into_data` once the scan is over. Independent
/// parses need independent parsers; a callback that wants to parse another
/// source (say, a material library) records what it needs in the context and
/// the caller runs a fresh parser afterwards.
pub struct Parser<T> {
  callbacks: CallbackTable<T>,
  data: T,
  options: ParserOptions,
  line: Vec<u8>,
}

impl<T> Parser<T> {
  /// Creates a parser with default options.
  pub fn new(callbacks: CallbackTable<T>, data: T) -> Result<Parser<T>, ParseError> {
    Parser::with_options(callbacks, data, ParserOptions::new())
  }

  /// Creates a parser. Fails with `InvalidOptions` when no callback is
  /// registered or the line length is zero, and with `MemoryFailure` when the
  /// line buffer cannot be reserved.
  pub fn with_options(
    callbacks: CallbackTable<T>,
    data: T,
    options: ParserOptions,
  ) -> Result<Parser<T>, ParseError> {
    if callbacks.is_empty() {
      return Err(ParseError::InvalidOptions(
        "no callback is registered".to_owned(),
      ));
    }
    if options.max_line_length == 0 {
      return Err(ParseError::InvalidOptions(
        "max_line_length must be at least 1".to_owned(),
      ));
    }

    let mut line = Vec::new();
    line
      .try_reserve_exact(options.max_line_length)
      .map_err(|_| ParseError::MemoryFailure)?;

    Ok(Parser {
      callbacks,
      data,
      options,
      line,
    })
  }

  /// The caller's context.
  pub fn data(&self) -> &T {
    &self.data
  }

  /// The caller's context, mutably.
  pub fn data_mut(&mut self) -> &mut T {
    &mut self.data
  }

  /// Consumes the parser, returning the caller's context.
  pub fn into_data(self) -> T {
    self.data
  }

  /// The options this parser was built with.
  pub fn options(&self) -> &ParserOptions {
    &self.options
  }

  /// Scans `source` from start to end, dispatching one callback per
  /// recognized, non-empty line, in order.
  ///
  /// Stops at the first error: a payload the parser rejects, or an `Err`
  /// returned by a callback (wrapped in `ParseError::CallbackAborted`).
  /// Callbacks that already ran are not undone. Line numbers restart at 1
  /// on every call.
  pub fn execute<S: AsRef<[u8]>>(&mut self, source: S) -> Result<(), ParseError> {
    let source = source.as_ref();
    if source.is_empty() {
      return Err(ParseError::InvalidSource);
    }

    let Parser {
      ref mut callbacks,
      ref mut data,
      ref options,
      ref mut line,
    } = *self;
    let limit = options.max_line_length;

    log::debug!("parsing {} bytes", source.len());

    let mut line_number = 1;
    let mut dispatched = 0usize;
    let mut scan = Scan::LineStart;
    let mut directive = DirectiveType::Null;
    let mut spelled = "";
    line.clear();

    for (i, &c) in source.iter().enumerate() {
      if c == b'\n' {
        if let Scan::Keyword(start) = scan {
          directive = DirectiveType::from_keyword(&source[start..i]);
          spelled = spelling(&source[start..i], directive);
          directive = handled(callbacks, directive);
        }
        if scan != Scan::LineStart
          && dispatch(callbacks, data, directive, spelled, line_number, &line[..])?
        {
          dispatched += 1;
        }

        line.clear();
        line_number += 1;
        scan = Scan::LineStart;
        directive = DirectiveType::Null;
        continue;
      }

      match scan {
        Scan::LineStart => {
          if is_blank(c) {
            continue;
          }
          if c == b'#' {
            directive = handled(callbacks, DirectiveType::Comment);
            spelled = "#";
            scan = Scan::Payload;
          } else {
            scan = Scan::Keyword(i);
          }
        }
        Scan::Keyword(start) => {
          if is_blank(c) {
            directive = DirectiveType::from_keyword(&source[start..i]);
            spelled = spelling(&source[start..i], directive);
            directive = handled(callbacks, directive);
            scan = Scan::Payload;
          }
        }
        Scan::Payload => {
          if directive == DirectiveType::Null || (line.is_empty() && is_blank(c)) {
            continue;
          }
          if line.len() == limit {
            return Err(ParseError::LineTooLong { line_number, limit });
          }
          line.push(c);
        }
      }
    }

    // Last line, when the source does not end with a newline.
    if let Scan::Keyword(start) = scan {
      directive = DirectiveType::from_keyword(&source[start..]);
      spelled = spelling(&source[start..], directive);
      directive = handled(callbacks, directive);
    }
    if scan != Scan::LineStart
      && dispatch(callbacks, data, directive, spelled, line_number, &line[..])?
    {
      dispatched += 1;
    }
    line.clear();

    log::debug!(
      "parsed {} lines, dispatched {} callbacks",
      line_number,
      dispatched
    );
    Ok(())
  }
}

/// Demotes a directive nobody listens to to `Null`, so its payload is neither
/// buffered nor decoded. `s` is always decoded: a bad toggle fails the parse
/// whether or not a handler is registered.
fn handled<T>(callbacks: &CallbackTable<T>, directive: DirectiveType) -> DirectiveType {
  if directive == DirectiveType::Smooth || callbacks.has(directive) {
    directive
  } else {
    DirectiveType::Null
  }
}

/// The keyword as it appeared in the source.
fn spelling(keyword: &[u8], directive: DirectiveType) -> &'static str {
  match keyword {
    b"Tr" => "Tr",
    _ => directive.keyword(),
  }
}

/// Decodes one finished line and calls its handler. Returns whether a
/// callback ran.
fn dispatch<T>(
  callbacks: &mut CallbackTable<T>,
  data: &mut T,
  directive: DirectiveType,
  spelled: &'static str,
  line_number: usize,
  line: &[u8],
) -> Result<bool, ParseError> {
  use crate::directive::DirectiveType::*;

  let raw = lex::trim_end(line);
  if directive == Null {
    log::trace!("line {}: unrecognized or unhandled directive, skipped", line_number);
    return Ok(false);
  }
  if raw.is_empty() {
    return Ok(false);
  }

  let payload = match directive {
    Null => return Ok(false),
    Comment | UseMaterial | MaterialLib | MaterialNew => Payload::Text(
      str::from_utf8(raw).map_err(|_| ParseError::Encoding { line_number })?,
    ),
    Vertex | VertexTexture | VertexNormal | MaterialAmbient | MaterialDiffuse
    | MaterialSpecular => Payload::Floats(lex::parse_floats(raw)),
    Face => Payload::Face(face::decode(raw, line_number)),
    Smooth => match lex::parse_toggle(raw) {
      Some(on) => Payload::Scalar(u32::from(on)),
      None => {
        return Err(ParseError::OutOfBounds {
          line_number,
          directive,
          token: String::from_utf8_lossy(raw).into_owned(),
        })
      }
    },
    MaterialIllum | MaterialShininess | MaterialTransparency => {
      Payload::Scalar(lex::parse_scalar(raw))
    }
  };

  let handler = match callbacks.get_mut(directive) {
    Some(handler) => handler,
    None => return Ok(false),
  };

  let line = LineState {
    directive_type: directive,
    directive: spelled,
    line_number,
    raw,
    payload,
  };
  log::trace!("line {}: dispatching `{}`", line_number, spelled);

  handler(&mut ParserState::new(data, &line)).map_err(|source| ParseError::CallbackAborted {
    line_number,
    directive,
    source,
  })?;
  Ok(true)
}
