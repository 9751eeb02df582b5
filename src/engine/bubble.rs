use log::trace;

use super::{Step, StepEngine};
use crate::buffer::{ArrayBuffer, BufferError};

/// One comparison of adjacent values per step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BubbleCursor {
    i: usize,
    j: usize,
}

impl BubbleCursor {
    pub fn outer(&self) -> usize {
        self.i
    }

    pub fn inner(&self) -> usize {
        self.j
    }
}

impl StepEngine for BubbleCursor {
    fn step(&mut self, buffer: &mut ArrayBuffer) -> Result<Step, BufferError> {
        let len = buffer.len();

        // finished passes roll over into the next comparison
        while self.i + 1 < len && self.j + self.i + 1 >= len {
            self.j = 0;
            self.i += 1;
        }

        if self.i + 1 >= len {
            return Ok(Step::done());
        }

        let j = self.j;

        // strict: equal neighbours keep their order
        if buffer.get(j)? > buffer.get(j + 1)? {
            buffer.swap(j, j + 1)?;
            trace!("bubble: swapped {} and {}", j, j + 1);
        }

        self.j += 1;

        Ok(Step::touched(j, j + 1))
    }
}
