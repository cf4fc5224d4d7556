//! A single-pass, callback-driven parser for Wavefront's `.obj` and `.mtl`
//! formats.
//!
//! The parser never builds a mesh. It classifies every line of an in-memory
//! source, decodes its payload and hands it to the callback registered for
//! that directive, in source order:
//!
//! ```
//! use sop::{CallbackTable, Parser};
//!
//! let callbacks = CallbackTable::<Vec<[f32; 3]>>::new().on_vertex(|state| {
//!   let v = state.line().payload.as_floats().unwrap_or_default();
//!   state.data_mut().push([v[0], v[1], v[2]]);
//!   Ok(())
//! });
//!
//! let mut parser = Parser::new(callbacks, Vec::new()).unwrap();
//! parser.execute("# a triangle\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
//! assert_eq!(parser.data().len(), 3);
//! ```
#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]

pub use callbacks::{Callback, CallbackError, CallbackTable, Status};
pub use context::{LineState, ParserState, Payload};
pub use directive::DirectiveType;
pub use face::{FaceRecord, Scope, FACE_CORNERS, MISSING};
pub use lex::ParseError;
pub use parser::{Parser, ParserOptions, DEFAULT_MAX_LINE_LENGTH};

mod callbacks;
mod context;
mod directive;
mod face;
mod lex;
mod parser;
