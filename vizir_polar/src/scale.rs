// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scale used for the radial axis.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Upper bound on the number of ticks any tick generator returns.
pub const MAX_TICKS: usize = 10_000;

/// A linear mapping from a continuous domain to a continuous range.
///
/// A degenerate domain (`d0 == d1`) maps every value to the start of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// The domain, as configured.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The range, as configured.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns `true` if the domain has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }

    /// Returns `count` domain values evenly spaced from `d0` to `d1`, endpoints included.
    ///
    /// A degenerate domain yields its single value. `count` is capped at [`MAX_TICKS`].
    pub fn even_ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        match count.min(MAX_TICKS) {
            0 => Vec::new(),
            _ if self.is_degenerate() => alloc::vec![d0],
            1 => alloc::vec![d0],
            count => {
                let step = (d1 - d0) / (count - 1) as f64;
                (0..count).map(|i| d0 + step * i as f64).collect()
            }
        }
    }

    /// Returns “nice” tick values lying inside the domain.
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let eps = (hi - lo) * 1e-9;
        nice_ticks(lo, hi, count)
            .into_iter()
            .filter(|v| *v >= lo - eps && *v <= hi + eps)
            .collect()
    }
}

/// Extends `(min, max)` outward to the nearest “nice” tick boundaries.
pub(crate) fn nice_domain(domain: (f64, f64), count: usize) -> (f64, f64) {
    let ticks = nice_ticks(domain.0, domain.1, count);
    match (ticks.first(), ticks.last()) {
        (Some(first), Some(last)) if ticks.len() >= 2 => (*first, *last),
        _ => domain,
    }
}

/// Returns “nice” round tick values covering `[min, max]`.
///
/// The first and last ticks may lie outside the input interval; they are the interval
/// rounded outward to the tick step.
/// At most [`MAX_TICKS`] + 1 values are returned.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(MAX_TICKS as f64);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at MAX_TICKS"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn maps_endpoints_to_range() {
        let s = ScaleLinear::new((10.0, 20.0), (0.0, 150.0));
        assert_eq!(s.map(10.0), 0.0);
        assert_eq!(s.map(20.0), 150.0);
        assert_eq!(s.map(15.0), 75.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((4.0, 4.0), (30.0, 150.0));
        assert!(s.is_degenerate());
        assert_eq!(s.map(4.0), 30.0);
        assert_eq!(s.map(1000.0), 30.0);
        assert_eq!(s.even_ticks(5), alloc::vec![4.0]);
    }

    #[test]
    fn even_ticks_include_both_ends() {
        let s = ScaleLinear::new((0.0, 100.0), (0.0, 1.0));
        assert_eq!(s.even_ticks(5), alloc::vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert!(s.even_ticks(0).is_empty());
    }

    #[test]
    fn nice_ticks_round_outward() {
        assert_eq!(
            nice_ticks(3.0, 97.0, 5),
            alloc::vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
        assert_eq!(nice_domain((3.0, 97.0), 5), (0.0, 100.0));
    }

    #[test]
    fn huge_tick_counts_are_capped() {
        let s = ScaleLinear::new((0.0, 150.0), (0.0, 1.0));
        let ticks = s.even_ticks(1 << 40);
        assert_eq!(ticks.len(), MAX_TICKS);
        assert_eq!(ticks.first(), Some(&0.0));
        let last = ticks[MAX_TICKS - 1];
        assert!((last - 150.0).abs() < 1e-9, "last tick {last}");
        assert!(nice_ticks(0.0, 150.0, usize::MAX).len() <= MAX_TICKS + 1);
    }

    #[test]
    fn scale_nice_ticks_stay_inside_domain() {
        let s = ScaleLinear::new((3.0, 97.0), (0.0, 1.0));
        assert_eq!(s.nice_ticks(5), alloc::vec![20.0, 40.0, 60.0, 80.0]);
    }
}
