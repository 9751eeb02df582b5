pub mod bubble;
pub mod insertion;
pub mod quick;
pub mod selection;

use core::fmt;
use core::str::FromStr;

use enum_map::Enum;

use crate::buffer::{ArrayBuffer, BufferError};

pub use bubble::BubbleCursor;
pub use insertion::InsertionCursor;
pub use quick::QuickCursor;
pub use selection::SelectionCursor;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Enum)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Selection => "Selection",
            Algorithm::Insertion => "Insertion",
            Algorithm::Quick => "Quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or(format!("unknown algorithm: {}", s))
    }
}

/// Pair of indices touched by the last step.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Highlight(pub usize, pub usize);

impl Highlight {
    pub fn contains(&self, index: usize) -> bool {
        self.0 == index || self.1 == index
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Step {
    pub highlight: Option<Highlight>,
    pub done: bool,
}

impl Step {
    pub fn touched(a: usize, b: usize) -> Self {
        Self {
            highlight: Some(Highlight(a, b)),
            done: false,
        }
    }

    pub fn done() -> Self {
        Self {
            highlight: None,
            done: true,
        }
    }
}

/// A sorting algorithm that can be paused after every unit of work.
///
/// A step that reports `done` leaves the buffer untouched. Stepping again
/// after `done` keeps reporting `done`.
pub trait StepEngine {
    fn step(&mut self, buffer: &mut ArrayBuffer) -> Result<Step, BufferError>;
}

/// Saved progress of whichever algorithm is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    Bubble(BubbleCursor),
    Selection(SelectionCursor),
    Insertion(InsertionCursor),
    Quick(QuickCursor),
}

impl Cursor {
    /// Initial state of `algorithm` for a buffer of `len` values.
    pub fn new(algorithm: Algorithm, len: usize) -> Self {
        match algorithm {
            Algorithm::Bubble => Cursor::Bubble(BubbleCursor::default()),
            Algorithm::Selection => Cursor::Selection(SelectionCursor::default()),
            Algorithm::Insertion => Cursor::Insertion(InsertionCursor::default()),
            Algorithm::Quick => Cursor::Quick(QuickCursor::new(len)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Cursor::Bubble(_) => Algorithm::Bubble,
            Cursor::Selection(_) => Algorithm::Selection,
            Cursor::Insertion(_) => Algorithm::Insertion,
            Cursor::Quick(_) => Algorithm::Quick,
        }
    }
}

impl StepEngine for Cursor {
    fn step(&mut self, buffer: &mut ArrayBuffer) -> Result<Step, BufferError> {
        match self {
            Cursor::Bubble(cursor) => cursor.step(buffer),
            Cursor::Selection(cursor) => cursor.step(buffer),
            Cursor::Insertion(cursor) => cursor.step(buffer),
            Cursor::Quick(cursor) => cursor.step(buffer),
        }
    }
}
