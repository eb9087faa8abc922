use rand::Rng;

/// Source of the uniform draws used by the vibration and fault models.
///
/// Production code wraps a `rand` generator in [`RngSource`]; tests can
/// implement this trait directly to script exact draws.
pub trait RandomSource {
    /// A uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;
    /// A uniform draw in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self { Self(rng) }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 { self.0.random::<f64>() }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.0.random_range(low..=high)
    }
}

/// Replays queued draws; once a queue runs dry it falls back to a fixed value
/// (`unit`) or the midpoint of the requested range (`uniform`).
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedDraws {
    unit: std::collections::VecDeque<f64>,
    uniform: std::collections::VecDeque<f64>,
    unit_fallback: f64,
}

#[cfg(test)]
impl ScriptedDraws {
    pub(crate) fn new(unit: &[f64], uniform: &[f64]) -> Self {
        Self {
            unit: unit.iter().copied().collect(),
            uniform: uniform.iter().copied().collect(),
            unit_fallback: 0.5,
        }
    }

    pub(crate) fn with_unit_fallback(mut self, value: f64) -> Self {
        self.unit_fallback = value;
        self
    }
}

#[cfg(test)]
impl RandomSource for ScriptedDraws {
    fn unit(&mut self) -> f64 { self.unit.pop_front().unwrap_or(self.unit_fallback) }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.uniform.pop_front().map_or((low + high) / 2.0, |v| v.clamp(low, high))
    }
}
