use log::trace;

use super::{Step, StepEngine};
use crate::buffer::{ArrayBuffer, BufferError, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Held {
    /// Slot left open by the shifts so far, `j + 1` in the textbook loop.
    hole: usize,
    key: Value,
}

/// One shift per step, then one step to drop the held key into its slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertionCursor {
    i: usize,
    held: Option<Held>,
}

impl InsertionCursor {
    pub fn outer(&self) -> usize {
        self.i
    }

    /// Current scan index, `None` before the first element is examined.
    pub fn inner(&self) -> Option<usize> {
        self.held.and_then(|held| held.hole.checked_sub(1))
    }

    pub fn key(&self) -> Option<Value> {
        self.held.map(|held| held.key)
    }
}

impl StepEngine for InsertionCursor {
    fn step(&mut self, buffer: &mut ArrayBuffer) -> Result<Step, BufferError> {
        let held = match self.held {
            Some(held) => held,
            None => {
                if self.i >= buffer.len() {
                    return Ok(Step::done());
                }

                Held {
                    hole: self.i,
                    key: buffer.get(self.i)?,
                }
            }
        };

        if held.hole > 0 {
            let j = held.hole - 1;
            let value = buffer.get(j)?;

            if value > held.key {
                buffer.set(held.hole, value)?;
                self.held = Some(Held { hole: j, ..held });

                return Ok(Step::touched(j, held.hole));
            }
        }

        buffer.set(held.hole, held.key)?;
        trace!("insertion: inserted {} at {}", held.key, held.hole);

        let i = self.i;

        self.held = None;
        self.i += 1;

        Ok(Step::touched(i, held.hole))
    }
}
