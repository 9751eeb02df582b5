use log::{debug, info, trace};
use rand::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::buffer::{ArrayBuffer, BufferError, Value, ValueRange};
use crate::command::Command;
use crate::engine::{Algorithm, Cursor, Highlight, StepEngine};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Running,
    Sorted,
}

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub size: usize,
    pub range: ValueRange,
    pub algorithm: Algorithm,
    pub seed: u64,
}

/// Owns the values, the active algorithm and its saved progress.
pub struct Session {
    buffer: ArrayBuffer,
    cursor: Cursor,
    phase: Phase,
    size: usize,
    range: ValueRange,
    steps: usize,
    resets: usize,
    rng: Box<dyn RngCore>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let mut rng: Box<dyn RngCore> = Box::new(XorShiftRng::seed_from_u64(config.seed));
        let mut buffer = ArrayBuffer::new();

        buffer.reset(config.size, config.range, rng.as_mut());

        Self {
            buffer,
            cursor: Cursor::new(config.algorithm, config.size),
            phase: Phase::Running,
            size: config.size,
            range: config.range,
            steps: 0,
            resets: 0,
            rng,
        }
    }

    /// Sorts `values` instead of random data, until the next reset.
    pub fn with_values(algorithm: Algorithm, values: Vec<Value>, seed: u64) -> Result<Self, String> {
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        let size = values.len();

        Ok(Self {
            cursor: Cursor::new(algorithm, size),
            buffer: ArrayBuffer::from(values),
            phase: Phase::Running,
            size,
            range: ValueRange::new(min, max)?,
            steps: 0,
            resets: 0,
            rng: Box::new(XorShiftRng::seed_from_u64(seed)),
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.cursor.algorithm()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_sorted(&self) -> bool {
        self.phase == Phase::Sorted
    }

    pub fn values(&self) -> &[Value] {
        self.buffer.as_slice()
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Steps taken since the last reset.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Advances the active algorithm by one step and returns the indices it
    /// touched. Does nothing once sorted.
    pub fn tick(&mut self) -> Result<Option<Highlight>, BufferError> {
        if self.phase == Phase::Sorted {
            return Ok(None);
        }

        let step = self.cursor.step(&mut self.buffer)?;

        if step.done {
            self.phase = Phase::Sorted;
            info!("{} sort finished after {} steps", self.algorithm(), self.steps);
        } else {
            self.steps += 1;
            trace!("step {}: {:?}", self.steps, step.highlight);
        }

        Ok(step.highlight)
    }

    pub fn reset(&mut self) {
        self.restart(self.algorithm());
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        debug!("Selected {} sort", algorithm);

        self.restart(algorithm);
    }

    /// Fresh values and the initial cursor of `algorithm`.
    fn restart(&mut self, algorithm: Algorithm) {
        self.buffer.reset(self.size, self.range, self.rng.as_mut());
        self.cursor = Cursor::new(algorithm, self.size);
        self.phase = Phase::Running;
        self.steps = 0;
        self.resets += 1;

        debug!("Reset {} values for {} sort", self.size, algorithm);
    }

    pub fn apply(&mut self, command: Command) {
        match command.algorithm() {
            Some(algorithm) => self.select_algorithm(algorithm),
            None => self.reset(),
        }
    }

    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::Running => format!("{} sort, {} steps", self.algorithm(), self.steps),
            Phase::Sorted => format!("{} sort, sorted in {} steps", self.algorithm(), self.steps),
        }
    }
}
