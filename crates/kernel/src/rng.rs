use rand::Rng;

/// Source of uniform random draws in `[0, 1)`.
///
/// Every `rand::Rng` is a source; `DrawSequence` replays fixed draws so a
/// generation can be reproduced exactly.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

/// Scripted random source that replays a fixed list of draws.
///
/// Wraps around to the first draw once the list is used up. An empty list
/// yields `0.0` forever.
#[derive(Debug, Clone, Default)]
pub struct DrawSequence {
    draws: Vec<f64>,
    consumed: usize,
}

impl DrawSequence {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            consumed: 0,
        }
    }

    /// A sequence that yields the same value every time.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Total number of draws taken so far, counting wrap-arounds.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for DrawSequence {
    fn next_unit(&mut self) -> f64 {
        let value = if self.draws.is_empty() {
            0.0
        } else {
            self.draws[self.consumed % self.draws.len()]
        };
        self.consumed += 1;
        value
    }
}
