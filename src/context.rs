//! The per-line view handed to callbacks.
//!
//! Everything here borrows the parser's line buffer and lives only for the
//! duration of one callback invocation. A consumer that wants to keep any of
//! it copies it out before returning.
use crate::directive::DirectiveType;
use crate::face::FaceRecord;

/// The decoded payload of a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Payload<'l> {
  /// `v`, `vt`, `vn` (x y z w) and `Ka`, `Kd`, `Ks` (r g b a). Fields
  /// missing from the source are `0.0`.
  Floats([f32; 4]),
  /// `f`.
  Face(FaceRecord),
  /// `#`, `usemtl`, `mtllib`, `newmtl`. Trimmed.
  Text(&'l str),
  /// `illum`, `Ns`, `d`/`Tr`, and `s` (`1` for `on`, `0` for `off`).
  Scalar(u32),
}

impl<'l> Payload<'l> {
  /// The float fields, if this is a float payload.
  pub fn as_floats(&self) -> Option<[f32; 4]> {
    match *self {
      Payload::Floats(fields) => Some(fields),
      _ => None,
    }
  }

  /// The index grid, if this is a face payload.
  pub fn as_face(&self) -> Option<&FaceRecord> {
    match *self {
      Payload::Face(ref face) => Some(face),
      _ => None,
    }
  }

  /// The text, if this is a string payload.
  pub fn as_text(&self) -> Option<&'l str> {
    match *self {
      Payload::Text(text) => Some(text),
      _ => None,
    }
  }

  /// The scalar, if this is a scalar payload.
  pub fn as_scalar(&self) -> Option<u32> {
    match *self {
      Payload::Scalar(value) => Some(value),
      _ => None,
    }
  }
}

/// The line currently being dispatched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineState<'l> {
  /// What kind of line this is.
  pub directive_type: DirectiveType,
  /// The keyword as read from the source, e.g. `Tr` rather than `d`.
  pub directive: &'static str,
  /// 1-based physical line number.
  pub line_number: usize,
  /// Everything after the keyword, leading and trailing blanks removed.
  pub raw: &'l [u8],
  /// The decoded payload.
  pub payload: Payload<'l>,
}

impl<'l> LineState<'l> {
  /// Length of the raw payload in bytes.
  pub fn len(&self) -> usize {
    self.raw.len()
  }

  /// Whether the raw payload is empty. Dispatched lines never are.
  pub fn is_empty(&self) -> bool {
    self.raw.is_empty()
  }
}

/// What a callback gets to see: the caller's context and the current line.
#[derive(Debug)]
pub struct ParserState<'p, 'l, T> {
  data: &'p mut T,
  line: &'p LineState<'l>,
}

impl<'p, 'l, T> ParserState<'p, 'l, T> {
  pub(crate) fn new(data: &'p mut T, line: &'p LineState<'l>) -> ParserState<'p, 'l, T> {
    ParserState { data, line }
  }

  /// The caller-owned context.
  pub fn data(&self) -> &T {
    self.data
  }

  /// The caller-owned context, mutably.
  pub fn data_mut(&mut self) -> &mut T {
    self.data
  }

  /// The line being dispatched.
  pub fn line(&self) -> &LineState<'l> {
    self.line
  }
}
