//! Decoding of `f` lines into a grid of vertex/texture/normal indices.
//!
//! Only triangles are supported: a face line is expected to carry exactly
//! three vertex groups. Groups past the third are ignored (and logged), they
//! are not triangulated.
use std::ops::Index;

use crate::lex::{is_blank, parse_index};

/// Number of corners in a face.
pub const FACE_CORNERS: usize = 3;

/// Value of an index component that was not supplied.
pub const MISSING: i32 = -1;

/// Which component of a `v/t/n` triplet an index belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
  /// Geometric vertex index, before the first slash.
  Vertex,
  /// Texture vertex index, after the first slash.
  Texture,
  /// Normal index, after the second slash.
  Normal,
}

impl Scope {
  fn next(self) -> Option<Scope> {
    match self {
      Scope::Vertex => Some(Scope::Texture),
      Scope::Texture => Some(Scope::Normal),
      Scope::Normal => None,
    }
  }
}

/// A triangle as a 3x3 grid of indices, `[scope][slot]`. Indices are kept
/// exactly as written in the source (1-based, possibly negative); a component
/// that was not supplied is `MISSING`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceRecord {
  grid: [[i32; FACE_CORNERS]; 3],
}

impl FaceRecord {
  /// A face with every component missing.
  pub fn empty() -> FaceRecord {
    FaceRecord {
      grid: [[MISSING; FACE_CORNERS]; 3],
    }
  }

  /// Builds a face from its three rows.
  pub fn from_rows(
    vertices: [i32; FACE_CORNERS],
    textures: [i32; FACE_CORNERS],
    normals: [i32; FACE_CORNERS],
  ) -> FaceRecord {
    FaceRecord {
      grid: [vertices, textures, normals],
    }
  }

  /// The index of one component of one corner.
  pub fn get(&self, scope: Scope, slot: usize) -> Option<i32> {
    self.grid[scope as usize].get(slot).copied()
  }

  /// The three vertex indices.
  pub fn vertices(&self) -> [i32; FACE_CORNERS] {
    self[Scope::Vertex]
  }

  /// The three texture vertex indices.
  pub fn textures(&self) -> [i32; FACE_CORNERS] {
    self[Scope::Texture]
  }

  /// The three normal indices.
  pub fn normals(&self) -> [i32; FACE_CORNERS] {
    self[Scope::Normal]
  }

  /// The `(vertex, texture, normal)` triplet of one corner.
  ///
  /// # Panics
  ///
  /// If `slot` is not below `FACE_CORNERS`.
  pub fn corner(&self, slot: usize) -> (i32, i32, i32) {
    (
      self.grid[0][slot],
      self.grid[1][slot],
      self.grid[2][slot],
    )
  }
}

impl Default for FaceRecord {
  fn default() -> FaceRecord {
    FaceRecord::empty()
  }
}

impl Index<Scope> for FaceRecord {
  type Output = [i32; FACE_CORNERS];

  fn index(&self, scope: Scope) -> &[i32; FACE_CORNERS] {
    &self.grid[scope as usize]
  }
}

/// Fills a `FaceRecord` one token at a time. Each scope keeps its own fill
/// counter, so an empty component (`1//3`) still consumes its slot.
struct Decoder {
  face: FaceRecord,
  filled: [usize; 3],
}

impl Decoder {
  fn new() -> Decoder {
    Decoder {
      face: FaceRecord::empty(),
      filled: [0; 3],
    }
  }

  fn flush(&mut self, scope: Option<Scope>, token: &[u8]) {
    let scope = match scope {
      Some(scope) => scope,
      // Past the third slash of a group.
      None => return,
    };

    let slot = self.filled[scope as usize];
    self.filled[scope as usize] += 1;

    if slot < FACE_CORNERS {
      if let Some(index) = parse_index(token) {
        self.face.grid[scope as usize][slot] = index;
      }
    }
  }

  fn overflowed(&self) -> bool {
    self.filled.iter().any(|&n| n > FACE_CORNERS)
  }
}

/// Decodes the payload of an `f` line (everything after the keyword).
///
/// Digits accumulate into a token until a separator: `/` flushes the token
/// and moves to the next scope of the same corner; whitespace flushes it and
/// starts the next corner back at `Scope::Vertex`. Malformed tokens leave
/// their slot at `MISSING`; the line itself is never rejected.
pub(crate) fn decode(payload: &[u8], line_number: usize) -> FaceRecord {
  let mut decoder = Decoder::new();
  let mut scope = Some(Scope::Vertex);
  let mut in_group = false;
  let mut start = 0;

  for (i, &c) in payload.iter().enumerate() {
    if c == b'/' {
      decoder.flush(scope, &payload[start..i]);
      scope = scope.and_then(Scope::next);
      in_group = true;
      start = i + 1;
    } else if is_blank(c) || c == b'\n' {
      if in_group {
        decoder.flush(scope, &payload[start..i]);
      }
      scope = Some(Scope::Vertex);
      in_group = false;
      start = i + 1;
    } else {
      in_group = true;
    }
  }

  if in_group {
    decoder.flush(scope, &payload[start..]);
  }

  if decoder.overflowed() {
    log::warn!(
      "line {}: face has more than {} vertex groups, extra groups ignored",
      line_number,
      FACE_CORNERS
    );
  }

  decoder.face
}
