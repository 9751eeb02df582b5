use log::trace;

use super::{Highlight, Step, StepEngine};
use crate::buffer::{ArrayBuffer, BufferError};

/// Inclusive index range still waiting to be partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub low: usize,
    pub high: usize,
}

/// Quicksort driven by an explicit stack of ranges.
///
/// A step pops one range and runs a full Lomuto partition over it. The
/// following step holds that partition on screen without doing any work, so
/// each partition is shown for two frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickCursor {
    stack: Vec<Partition>,
    partitioned: Option<Highlight>,
}

impl QuickCursor {
    pub fn new(len: usize) -> Self {
        let mut stack = Vec::new();

        if len > 1 {
            stack.push(Partition {
                low: 0,
                high: len - 1,
            });
        }

        Self {
            stack,
            partitioned: None,
        }
    }

    pub fn pending(&self) -> &[Partition] {
        &self.stack
    }

    /// True between a partition and its hold frame.
    pub fn mid_partition(&self) -> bool {
        self.partitioned.is_some()
    }

    fn partition(buffer: &mut ArrayBuffer, range: Partition) -> Result<usize, BufferError> {
        let pivot = buffer.get(range.high)?;
        let mut store = range.low;

        for j in range.low..range.high {
            if buffer.get(j)? < pivot {
                buffer.swap(store, j)?;
                store += 1;
            }
        }

        buffer.swap(store, range.high)?;

        Ok(store)
    }
}

impl StepEngine for QuickCursor {
    fn step(&mut self, buffer: &mut ArrayBuffer) -> Result<Step, BufferError> {
        if let Some(highlight) = self.partitioned.take() {
            return Ok(Step {
                highlight: Some(highlight),
                done: false,
            });
        }

        let range = match self.stack.pop() {
            Some(range) => range,
            None => return Ok(Step::done()),
        };

        let pi = Self::partition(buffer, range)?;

        trace!(
            "quick: partitioned {}..={} around {}",
            range.low,
            range.high,
            pi
        );

        // only ranges of two or more values need another partition
        if pi > range.low + 1 {
            self.stack.push(Partition {
                low: range.low,
                high: pi - 1,
            });
        }

        if pi + 1 < range.high {
            self.stack.push(Partition {
                low: pi + 1,
                high: range.high,
            });
        }

        let highlight = Highlight(pi, range.high);

        self.partitioned = Some(highlight);

        Ok(Step {
            highlight: Some(highlight),
            done: false,
        })
    }
}
