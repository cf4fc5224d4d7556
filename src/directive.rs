//! Directive keywords recognized at the start of a line.

/// The kind of a line, selected by its leading keyword.
///
/// OBJ directives (see <http://www.martinreddy.net/gfx/3d/OBJ.spec>):
///
///   - `v` geometric vertices (x y z w)
///   - `vt` texture vertices (u v w)
///   - `vn` vertex normals (x y z w)
///   - `f` face (v/t/n v/t/n v/t/n)
///   - `s` smooth shading (on/off)
///   - `usemtl` material name
///   - `mtllib` material library
///
/// MTL directives share the same line syntax:
///
///   - `newmtl` starts the definition of a new material
///   - `Ka`, `Kd`, `Ks` ambient, diffuse and specular colors (r g b a)
///   - `illum` illumination model (0 none, 1 flat, 2 specular highlights)
///   - `Ns` shininess
///   - `d` or `Tr` transparency
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveType {
  /// Anything unrecognized. Never dispatched.
  Null,
  /// `#`
  Comment,
  /// `v`
  Vertex,
  /// `vt`
  VertexTexture,
  /// `vn`
  VertexNormal,
  /// `f`
  Face,
  /// `s`
  Smooth,
  /// `usemtl`
  UseMaterial,
  /// `mtllib`
  MaterialLib,
  /// `newmtl`
  MaterialNew,
  /// `Ka`
  MaterialAmbient,
  /// `Kd`
  MaterialDiffuse,
  /// `Ks`
  MaterialSpecular,
  /// `illum`
  MaterialIllum,
  /// `Ns`
  MaterialShininess,
  /// `d` or `Tr`
  MaterialTransparency,
}

/// Number of `DirectiveType` variants, `Null` included.
pub(crate) const DIRECTIVE_COUNT: usize = 16;

impl DirectiveType {
  /// Every directive that can be dispatched to a callback, in declaration order.
  pub const DISPATCHABLE: [DirectiveType; DIRECTIVE_COUNT - 1] = [
    DirectiveType::Comment,
    DirectiveType::Vertex,
    DirectiveType::VertexTexture,
    DirectiveType::VertexNormal,
    DirectiveType::Face,
    DirectiveType::Smooth,
    DirectiveType::UseMaterial,
    DirectiveType::MaterialLib,
    DirectiveType::MaterialNew,
    DirectiveType::MaterialAmbient,
    DirectiveType::MaterialDiffuse,
    DirectiveType::MaterialSpecular,
    DirectiveType::MaterialIllum,
    DirectiveType::MaterialShininess,
    DirectiveType::MaterialTransparency,
  ];

  /// Classifies a whole keyword token. Comments are recognized by their
  /// lead character alone and never reach this function.
  pub fn from_keyword(keyword: &[u8]) -> DirectiveType {
    use self::DirectiveType::*;

    match keyword {
      b"v" => Vertex,
      b"vt" => VertexTexture,
      b"vn" => VertexNormal,
      b"f" => Face,
      b"s" => Smooth,
      b"usemtl" => UseMaterial,
      b"mtllib" => MaterialLib,
      b"newmtl" => MaterialNew,
      b"Ka" => MaterialAmbient,
      b"Kd" => MaterialDiffuse,
      b"Ks" => MaterialSpecular,
      b"illum" => MaterialIllum,
      b"Ns" => MaterialShininess,
      b"d" | b"Tr" => MaterialTransparency,
      _ => Null,
    }
  }

  /// The canonical keyword of this directive. `MaterialTransparency` reports
  /// `d`; the keyword actually read is available on `LineState::directive`.
  pub fn keyword(self) -> &'static str {
    use self::DirectiveType::*;

    match self {
      Null => "",
      Comment => "#",
      Vertex => "v",
      VertexTexture => "vt",
      VertexNormal => "vn",
      Face => "f",
      Smooth => "s",
      UseMaterial => "usemtl",
      MaterialLib => "mtllib",
      MaterialNew => "newmtl",
      MaterialAmbient => "Ka",
      MaterialDiffuse => "Kd",
      MaterialSpecular => "Ks",
      MaterialIllum => "illum",
      MaterialShininess => "Ns",
      MaterialTransparency => "d",
    }
  }

  pub(crate) fn index(self) -> usize {
    self as usize
  }
}

#[cfg(test)]
mod tests {
  use super::DirectiveType::{self, *};

  #[test]
  fn test_from_keyword() {
    assert_eq!(DirectiveType::from_keyword(b"v"), Vertex);
    assert_eq!(DirectiveType::from_keyword(b"vt"), VertexTexture);
    assert_eq!(DirectiveType::from_keyword(b"vn"), VertexNormal);
    assert_eq!(DirectiveType::from_keyword(b"Tr"), MaterialTransparency);
    assert_eq!(DirectiveType::from_keyword(b"d"), MaterialTransparency);
    assert_eq!(DirectiveType::from_keyword(b"Kd"), MaterialDiffuse);

    // Prefixes of real keywords are not keywords.
    assert_eq!(DirectiveType::from_keyword(b"vp"), Null);
    assert_eq!(DirectiveType::from_keyword(b"map_Kd"), Null);
    assert_eq!(DirectiveType::from_keyword(b"usemtlx"), Null);
    assert_eq!(DirectiveType::from_keyword(b"o"), Null);
    assert_eq!(DirectiveType::from_keyword(b""), Null);
  }

  #[test]
  fn test_keyword_round_trips_through_classification() {
    for &directive in DirectiveType::DISPATCHABLE.iter() {
      if directive == Comment {
        continue;
      }
      assert_eq!(
        DirectiveType::from_keyword(directive.keyword().as_bytes()),
        directive
      );
    }
  }

  #[test]
  fn test_indices_are_dense() {
    assert_eq!(Null.index(), 0);
    for (i, &directive) in DirectiveType::DISPATCHABLE.iter().enumerate() {
      assert_eq!(directive.index(), i + 1);
    }
  }
}
