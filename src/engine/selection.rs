use log::trace;

use super::{Step, StepEngine};
use crate::buffer::{ArrayBuffer, BufferError};

/// A whole outer pass per step: find the minimum of the unsorted tail and
/// swap it into place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    i: usize,
    min_index: usize,
}

impl SelectionCursor {
    pub fn outer(&self) -> usize {
        self.i
    }

    /// Position the last pass took its minimum from.
    pub fn min_index(&self) -> usize {
        self.min_index
    }
}

impl StepEngine for SelectionCursor {
    fn step(&mut self, buffer: &mut ArrayBuffer) -> Result<Step, BufferError> {
        let len = buffer.len();

        if self.i + 1 >= len {
            return Ok(Step::done());
        }

        let i = self.i;
        let mut min_value = buffer.get(i)?;

        self.min_index = i;

        for j in (i + 1)..len {
            let value = buffer.get(j)?;

            if value < min_value {
                min_value = value;
                self.min_index = j;
            }
        }

        buffer.swap(i, self.min_index)?;
        trace!("selection: placed minimum from {} at {}", self.min_index, i);

        self.i += 1;

        Ok(Step::touched(i, self.min_index))
    }
}
