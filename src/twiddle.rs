//! Twiddle-factor tables for radix-2 FFT stages.
//!
//! A [`TwiddleTable`] holds one [`Stage`] per power-of-two transform size from
//! 2 up to the validated maximum. The stage of size `N` stores the `N/2`
//! factors `exp(-2πi k / N)` for `k = 0..N/2`, the same layout an FFT planner
//! caches per butterfly size.

use core::f64::consts::PI;

use log::debug;

use crate::num::Complex64;
use crate::size::MaxSize;

/// Identifier of the per-stage array for a transform of size `n`.
pub fn stage_name(n: usize) -> String {
    format!("W{n}")
}

/// Hook for snapping components that sit within rounding noise of 0 or ±1.
///
/// Every generated factor passes through here. It returns its input
/// unchanged; no snapping policy is applied.
#[inline(always)]
pub fn clamp(factor: Complex64) -> Complex64 {
    factor
}

/// Twiddle factors for a single power-of-two transform size.
#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    size: usize,
    factors: Vec<Complex64>,
}

impl Stage {
    /// Compute the `size / 2` factors for a stage of length `size`.
    ///
    /// The angle is taken relative to the half size, `exp(-iπ k / half)`,
    /// which is `exp(-2πi k / size)` without the extra doubling. Factor 0 is
    /// the exact unit so its imaginary part is a positive zero.
    fn compute(size: usize) -> Self {
        let half = size / 2;
        let mut factors = Vec::with_capacity(half);
        factors.push(clamp(Complex64::ONE));
        for k in 1..half {
            let theta = PI * k as f64 / half as f64;
            factors.push(clamp(Complex64::expi(-theta)));
        }
        Self { size, factors }
    }

    /// Transform size `N` this stage serves.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn half_size(&self) -> usize {
        self.size / 2
    }

    pub fn factors(&self) -> &[Complex64] {
        &self.factors
    }

    /// Array identifier used when the stage is emitted, e.g. `W8`.
    pub fn name(&self) -> String {
        stage_name(self.size)
    }
}

/// All stages from size 2 up to a maximum, in ascending order.
#[derive(Clone, Debug, PartialEq)]
pub struct TwiddleTable {
    max: MaxSize,
    stages: Vec<Stage>,
}

impl TwiddleTable {
    /// Generate every stage for sizes `2, 4, …, max`.
    pub fn generate(max: MaxSize) -> Self {
        let mut stages = Vec::with_capacity(max.stage_count());
        let mut size = MaxSize::MIN;
        while size <= max.get() {
            let stage = Stage::compute(size);
            debug!(
                "generated stage {} with {} factors",
                stage.name(),
                stage.half_size()
            );
            stages.push(stage);
            // max may be the top bit of usize
            match size.checked_mul(2) {
                Some(next) => size = next,
                None => break,
            }
        }
        Self { max, stages }
    }

    pub fn max(&self) -> MaxSize {
        self.max
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Number of stages, equal to `log2(max)`.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Look up the stage serving transform size `size`.
    pub fn stage(&self, size: usize) -> Option<&Stage> {
        if !size.is_power_of_two() || size < MaxSize::MIN {
            return None;
        }
        self.stages.get(size.trailing_zeros() as usize - 1)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Stage> {
        self.stages.iter()
    }
}

impl<'a> IntoIterator for &'a TwiddleTable {
    type Item = &'a Stage;
    type IntoIter = core::slice::Iter<'a, Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}
