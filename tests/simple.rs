use sop::{CallbackTable, DirectiveType, ParseError, Parser};

const SIMPLE: &str = include_str!("fixtures/simple.obj");

#[derive(Debug, Default)]
struct Counters {
  comments: usize,
  vertices: usize,
  normals: usize,
  textures: usize,
  faces: usize,
  order: Vec<DirectiveType>,
}

fn counting_table() -> CallbackTable<Counters> {
  CallbackTable::<Counters>::new()
    .on_comment(|state| {
      let line = state.line();
      assert!(!line.is_empty());
      assert_eq!(line.payload.as_text(), Some("# This is a comment"));
      let data = state.data_mut();
      data.comments += 1;
      data.order.push(DirectiveType::Comment);
      Ok(())
    })
    .on_vertex(|state| {
      let v = state.line().payload.as_floats().expect("vertex payload");
      // (x y z); w is not present in this source.
      assert!(v[0] != 0.0 && v[1] != 0.0 && v[2] != 0.0);
      assert_eq!(v[3], 0.0);
      let data = state.data_mut();
      data.vertices += 1;
      data.order.push(DirectiveType::Vertex);
      Ok(())
    })
    .on_texture(|state| {
      state.data_mut().textures += 1;
      Ok(())
    })
    .on_normal(|state| {
      state.data_mut().normals += 1;
      Ok(())
    })
    .on_face(|state| {
      let face = *state.line().payload.as_face().expect("face payload");
      for &index in face.vertices().iter() {
        assert!((0..=7).contains(&index));
      }
      assert_eq!(face.textures(), [-1, -1, -1]);
      assert_eq!(face.normals(), [-1, -1, -1]);
      let data = state.data_mut();
      data.faces += 1;
      data.order.push(DirectiveType::Face);
      Ok(())
    })
}

fn init_logger() {
  let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn simple() {
  init_logger();

  let mut parser = Parser::new(counting_table(), Counters::default()).unwrap();
  parser.execute(SIMPLE).unwrap();

  let counters = parser.into_data();
  assert_eq!(counters.comments, 1);
  assert_eq!(counters.vertices, 8);
  assert_eq!(counters.faces, 12);
  assert_eq!(counters.textures, 0);
  assert_eq!(counters.normals, 0);

  let mut expected = vec![DirectiveType::Comment];
  expected.extend(std::iter::repeat(DirectiveType::Vertex).take(8));
  expected.extend(std::iter::repeat(DirectiveType::Face).take(12));
  assert_eq!(counters.order, expected);
}

#[test]
fn simple_first_face() {
  init_logger();

  let table = CallbackTable::<Vec<sop::FaceRecord>>::new().on_face(|state| {
    let face = *state.line().payload.as_face().unwrap();
    state.data_mut().push(face);
    Ok(())
  });
  let mut parser = Parser::new(table, Vec::new()).unwrap();
  parser.execute(SIMPLE).unwrap();

  let faces = parser.data();
  assert_eq!(faces.len(), 12);
  assert_eq!(faces[0].vertices(), [0, 1, 3]);
  assert_eq!(faces[11].vertices(), [2, 7, 6]);
}

#[test]
fn abort_from_callback_stops_the_scan() {
  init_logger();

  let table = CallbackTable::<Counters>::new()
    .on_vertex(|state| {
      let data = state.data_mut();
      data.vertices += 1;
      if data.vertices == 3 {
        return Err("enough vertices".into());
      }
      Ok(())
    })
    .on_face(|state| {
      state.data_mut().faces += 1;
      Ok(())
    });
  let mut parser = Parser::new(table, Counters::default()).unwrap();

  match parser.execute(SIMPLE) {
    Err(ParseError::CallbackAborted { line_number, .. }) => assert_eq!(line_number, 4),
    other => panic!("expected CallbackAborted, got {:?}", other),
  }
  assert_eq!(parser.data().vertices, 3);
  assert_eq!(parser.data().faces, 0);
}
