//! The table of user callbacks, one optional handler per directive.
use std::error::Error;
use std::fmt;

use crate::context::ParserState;
use crate::directive::{DirectiveType, DIRECTIVE_COUNT};

/// The error a callback returns to stop the parse.
pub type CallbackError = Box<dyn Error + Send + Sync>;

/// What a callback returns. Any `Err` halts `Parser::execute` immediately.
pub type Status = Result<(), CallbackError>;

/// A line handler.
pub type Callback<T> = Box<dyn FnMut(&mut ParserState<'_, '_, T>) -> Status>;

/// Maps each directive to an optional handler.
pub struct CallbackTable<T> {
  handlers: [Option<Callback<T>>; DIRECTIVE_COUNT],
}

impl<T> CallbackTable<T> {
  /// An empty table.
  pub fn new() -> CallbackTable<T> {
    CallbackTable {
      handlers: std::array::from_fn(|_| None),
    }
  }

  /// Registers `handler` for `directive`, replacing any previous one.
  /// Handlers for `DirectiveType::Null` are never called and are dropped.
  pub fn on<F>(mut self, directive: DirectiveType, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    if directive == DirectiveType::Null {
      log::debug!("ignoring a callback registered for unrecognized lines");
      return self;
    }
    self.handlers[directive.index()] = Some(Box::new(handler));
    self
  }

  /// Whether a handler is registered for `directive`.
  pub fn has(&self, directive: DirectiveType) -> bool {
    self.handlers[directive.index()].is_some()
  }

  /// Whether no handler at all is registered.
  pub fn is_empty(&self) -> bool {
    self.handlers.iter().all(Option::is_none)
  }

  pub(crate) fn get_mut(&mut self, directive: DirectiveType) -> Option<&mut Callback<T>> {
    self.handlers[directive.index()].as_mut()
  }

  /// `#` lines.
  pub fn on_comment<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::Comment, handler)
  }

  /// `v` lines.
  pub fn on_vertex<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::Vertex, handler)
  }

  /// `vt` lines.
  pub fn on_texture<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::VertexTexture, handler)
  }

  /// `vn` lines.
  pub fn on_normal<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::VertexNormal, handler)
  }

  /// `f` lines.
  pub fn on_face<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::Face, handler)
  }

  /// `s` lines.
  pub fn on_smooth<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::Smooth, handler)
  }

  /// `usemtl` lines.
  pub fn on_material_use<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::UseMaterial, handler)
  }

  /// `mtllib` lines.
  pub fn on_material_lib<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::MaterialLib, handler)
  }

  /// `newmtl` lines.
  pub fn on_material_new<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::MaterialNew, handler)
  }

  /// `Ka` lines.
  pub fn on_material_ambient<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::MaterialAmbient, handler)
  }

  /// `Kd` lines.
  pub fn on_material_diffuse<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::MaterialDiffuse, handler)
  }

  /// `Ks` lines.
  pub fn on_material_specular<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::MaterialSpecular, handler)
  }

  /// `illum` lines.
  pub fn on_material_illum<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::MaterialIllum, handler)
  }

  /// `Ns` lines.
  pub fn on_material_shininess<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::MaterialShininess, handler)
  }

  /// `d` and `Tr` lines.
  pub fn on_material_transparency<F>(self, handler: F) -> CallbackTable<T>
  where
    F: FnMut(&mut ParserState<'_, '_, T>) -> Status + 'static,
  {
    self.on(DirectiveType::MaterialTransparency, handler)
  }
}

impl<T> Default for CallbackTable<T> {
  fn default() -> CallbackTable<T> {
    CallbackTable::new()
  }
}

impl<T> fmt::Debug for CallbackTable<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let registered: Vec<DirectiveType> = DirectiveType::DISPATCHABLE
      .iter()
      .copied()
      .filter(|&d| self.has(d))
      .collect();
    f.debug_struct("CallbackTable")
      .field("registered", &registered)
      .finish()
  }
}
