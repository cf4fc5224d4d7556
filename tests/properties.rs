use proptest::prelude::*;

use sop::{CallbackTable, DirectiveType, FaceRecord, Parser, MISSING};

fn coord() -> impl Strategy<Value = String> {
  (-1000.0f32..1000.0).prop_map(|x| format!("{}", x))
}

fn obj_line() -> impl Strategy<Value = String> {
  prop_oneof![
    (coord(), coord(), coord()).prop_map(|(x, y, z)| format!("v {} {} {}", x, y, z)),
    (coord(), coord()).prop_map(|(u, v)| format!("vt {} {}", u, v)),
    (coord(), coord(), coord()).prop_map(|(x, y, z)| format!("vn {} {} {}", x, y, z)),
    (1..100i32, 1..100i32, 1..100i32).prop_map(|(a, b, c)| format!("f {} {} {}", a, b, c)),
    "[a-z][a-z0-9 ]{0,16}".prop_map(|text| format!("# {}", text)),
    "[a-z]{1,6}".prop_map(|name| format!("usemtl {}", name)),
    Just(String::new()),
    Just(" ".to_owned()),
    Just("o Object".to_owned()),
  ]
}

fn all_directives() -> CallbackTable<Vec<DirectiveType>> {
  let mut table = CallbackTable::<Vec<DirectiveType>>::new();
  for &directive in DirectiveType::DISPATCHABLE.iter() {
    table = table.on(directive, |state| {
      let directive = state.line().directive_type;
      state.data_mut().push(directive);
      Ok(())
    });
  }
  table
}

fn run(source: &str) -> Vec<DirectiveType> {
  let mut parser = Parser::new(all_directives(), Vec::new()).unwrap();
  parser.execute(source).unwrap();
  parser.into_data()
}

/// One corner as `(vertex, texture, normal)`, `MISSING` where absent.
fn corner() -> impl Strategy<Value = (i32, i32, i32)> {
  (
    1..100_000i32,
    prop_oneof![Just(MISSING), 1..100_000i32],
    prop_oneof![Just(MISSING), 1..100_000i32],
  )
}

fn format_corner(&(v, t, n): &(i32, i32, i32)) -> String {
  match (t == MISSING, n == MISSING) {
    (true, true) => format!("{}", v),
    (false, true) => format!("{}/{}", v, t),
    (true, false) => format!("{}//{}", v, n),
    (false, false) => format!("{}/{}/{}", v, t, n),
  }
}

proptest! {
  #[test]
  fn vertex_callbacks_match_v_lines(lines in prop::collection::vec(obj_line(), 1..64)) {
    let source = lines.join("\n") + "\n";
    let fired = run(&source);

    let expected = lines.iter().filter(|l| l.starts_with("v ")).count();
    let vertices = fired.iter().filter(|&&d| d == DirectiveType::Vertex).count();
    prop_assert_eq!(vertices, expected);

    let dispatched = lines
      .iter()
      .filter(|l| !l.trim().is_empty() && !l.starts_with("o "))
      .count();
    prop_assert_eq!(fired.len(), dispatched);
  }

  #[test]
  fn comments_only_fire_comment(texts in prop::collection::vec("[a-zA-Z0-9/ ]{0,12}[a-z]", 1..32)) {
    let source: String = texts.iter().map(|t| format!("# v f {}\n", t)).collect();
    let fired = run(&source);

    prop_assert_eq!(fired.len(), texts.len());
    prop_assert!(fired.iter().all(|&d| d == DirectiveType::Comment));
  }

  #[test]
  fn faces_decode_their_triplets(corners in prop::array::uniform3(corner())) {
    let source = format!(
      "f {} {} {}\n",
      format_corner(&corners[0]),
      format_corner(&corners[1]),
      format_corner(&corners[2])
    );

    let table = CallbackTable::<Option<FaceRecord>>::new().on_face(|state| {
      let face = *state.line().payload.as_face().unwrap();
      *state.data_mut() = Some(face);
      Ok(())
    });
    let mut parser = Parser::new(table, None).unwrap();
    parser.execute(&source).unwrap();
    let face = parser.into_data().unwrap();

    // Each scope fills its own slots in order. `v//n` still takes a
    // texture slot (left missing); a bare `v` takes none.
    let mut textures = Vec::new();
    let mut normals = Vec::new();
    for &(_, t, n) in corners.iter() {
      if t != MISSING || n != MISSING {
        textures.push(t);
      }
      if n != MISSING {
        normals.push(n);
      }
    }

    prop_assert_eq!(face.vertices(), [corners[0].0, corners[1].0, corners[2].0]);
    for (i, &t) in face.textures().iter().enumerate() {
      prop_assert_eq!(t, textures.get(i).copied().unwrap_or(MISSING));
    }
    for (i, &n) in face.normals().iter().enumerate() {
      prop_assert_eq!(n, normals.get(i).copied().unwrap_or(MISSING));
    }
  }
}
