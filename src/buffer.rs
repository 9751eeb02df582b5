use core::fmt;
use core::str::FromStr;

use rand::{Rng, RngCore};

pub type Value = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for buffer of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// Inclusive range the random values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    min: Value,
    max: Value,
}

impl ValueRange {
    pub fn new(min: Value, max: Value) -> Result<Self, String> {
        if min > max {
            Err(format!("invalid range: {} > {}", min, max))?
        }

        Ok(Self { min, max })
    }

    /// Bars between 50px and 20px short of the window top.
    pub fn for_height(height: usize) -> Result<Self, String> {
        let max = height
            .checked_sub(20)
            .ok_or(format!("window height {} too small", height))?;

        Self::new(50, max as Value)
    }

    pub fn min(&self) -> Value {
        self.min
    }

    pub fn max(&self) -> Value {
        self.max
    }

    pub fn contains(&self, value: Value) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl FromStr for ValueRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (raw_min, raw_max) = s.split_once("..").ok_or(format!("invalid format: {}", s))?;

        let min = raw_min
            .parse::<Value>()
            .map_err(|_| format!("invalid minimum: {}", raw_min))?;
        let max = raw_max
            .parse::<Value>()
            .map_err(|_| format!("invalid maximum: {}", raw_max))?;

        Self::new(min, max)
    }
}

/// The values being sorted. Length only changes on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayBuffer {
    data: Vec<Value>,
}

impl ArrayBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self, size: usize, range: ValueRange, rng: &mut dyn RngCore) {
        self.data.clear();
        self.data.reserve_exact(size);

        for _ in 0..size {
            self.data.push(rng.gen_range(range.min..=range.max));
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.data
    }

    pub fn get(&self, index: usize) -> Result<Value, BufferError> {
        self.data.get(index).copied().ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn set(&mut self, index: usize, value: Value) -> Result<(), BufferError> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(BufferError::IndexOutOfBounds { index, len })?;

        *slot = value;

        Ok(())
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), BufferError> {
        for index in [a, b] {
            if index >= self.data.len() {
                Err(self.out_of_bounds(index))?
            }
        }

        self.data.swap(a, b);

        Ok(())
    }

    pub fn is_sorted(&self) -> bool {
        self.data.windows(2).all(|w| w[0] <= w[1])
    }

    fn out_of_bounds(&self, index: usize) -> BufferError {
        BufferError::IndexOutOfBounds {
            index,
            len: self.data.len(),
        }
    }
}

impl From<Vec<Value>> for ArrayBuffer {
    fn from(data: Vec<Value>) -> Self {
        Self { data }
    }
}
