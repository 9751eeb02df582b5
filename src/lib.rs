//! Step-by-step sorting visualizer.
//!
//! Each algorithm is a resumable state machine ([`engine::StepEngine`]) that
//! does one bounded unit of work per call, so a frame loop can draw the
//! values between steps. [`session::Session`] owns the values and the active
//! algorithm, renderers only ever see a [`render::Frame`].

pub mod buffer;
pub mod command;
pub mod engine;
pub mod render;
pub mod session;
pub mod size;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod cli;

pub use buffer::{ArrayBuffer, BufferError, Value, ValueRange};
pub use command::{Command, KeyBindings};
pub use engine::{Algorithm, Cursor, Highlight, Step, StepEngine};
pub use session::{Phase, Session, SessionConfig};
