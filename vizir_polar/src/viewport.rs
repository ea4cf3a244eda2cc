// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport resolution and clip-region identifiers.
//!
//! The viewport is the declared chart size minus its margins. Each chart instance also owns a
//! clip-region id, minted once from a [`ClipIdAllocator`] when the instance is constructed.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use kurbo::{Point, Rect};

use crate::LayoutError;

/// Per-side margins around the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margin {
    /// Space above the viewport.
    pub top: f64,
    /// Space right of the viewport.
    pub right: f64,
    /// Space below the viewport.
    pub bottom: f64,
    /// Space left of the viewport.
    pub left: f64,
}

impl Margin {
    /// The same margin on every side.
    pub fn uniform(m: f64) -> Self {
        Self {
            top: m,
            right: m,
            bottom: m,
            left: m,
        }
    }

    /// No margin at all.
    pub fn zero() -> Self {
        Self::uniform(0.0)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(5.0)
    }
}

/// The pixel rectangle available to chart content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Left edge (the left margin).
    pub x: f64,
    /// Top edge (the top margin).
    pub y: f64,
    /// Width after subtracting horizontal margins.
    pub width: f64,
    /// Height after subtracting vertical margins.
    pub height: f64,
}

impl Viewport {
    /// Resolves the viewport for a chart of `width` x `height` with `margin`.
    ///
    /// Fails if any input is non-finite or if the margins leave a negative width or height.
    pub fn resolve(width: f64, height: f64, margin: Margin) -> Result<Self, LayoutError> {
        LayoutError::check_finite("width", width)?;
        LayoutError::check_finite("height", height)?;
        LayoutError::check_finite("margin.top", margin.top)?;
        LayoutError::check_finite("margin.right", margin.right)?;
        LayoutError::check_finite("margin.bottom", margin.bottom)?;
        LayoutError::check_finite("margin.left", margin.left)?;

        let vw = width - margin.left - margin.right;
        let vh = height - margin.top - margin.bottom;
        if vw < 0.0 || vh < 0.0 {
            return Err(LayoutError::NegativeViewport {
                width: vw,
                height: vh,
            });
        }
        Ok(Self {
            x: margin.left,
            y: margin.top,
            width: vw,
            height: vh,
        })
    }

    /// The viewport as a `kurbo` rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// The center of the viewport.
    pub fn center(&self) -> Point {
        Point::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }
}

/// Identifier of the clip region restricting a chart's drawing to its viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClipId(pub u64);

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vizir-polar-clip-{}", self.0)
    }
}

/// Mints monotonically increasing [`ClipId`]s.
///
/// Share one allocator between chart instances that render into the same document so their
/// clip regions never collide. The allocator is atomic; instances on different threads may
/// use it concurrently.
#[derive(Debug, Default)]
pub struct ClipIdAllocator {
    next: AtomicU64,
}

static GLOBAL_CLIP_IDS: ClipIdAllocator = ClipIdAllocator::new();

impl ClipIdAllocator {
    /// Creates an allocator whose first id is `0`.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// The process-wide allocator used by [`crate::RadarChart::new`].
    pub fn global() -> &'static Self {
        &GLOBAL_CLIP_IDS
    }

    /// Returns a fresh id, distinct from every id this allocator returned before.
    pub fn allocate(&self) -> ClipId {
        ClipId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn subtracts_margins() {
        let vp = Viewport::resolve(
            600.0,
            500.0,
            Margin {
                top: 10.0,
                right: 20.0,
                bottom: 30.0,
                left: 40.0,
            },
        )
        .unwrap();
        assert_eq!(
            vp,
            Viewport {
                x: 40.0,
                y: 10.0,
                width: 540.0,
                height: 460.0
            }
        );
        assert_eq!(vp.center(), Point::new(310.0, 240.0));
    }

    #[test]
    fn negative_size_is_a_configuration_error() {
        let err = Viewport::resolve(20.0, 500.0, Margin::uniform(15.0)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::NegativeViewport {
                width: -10.0,
                height: 470.0
            }
        );
    }

    #[test]
    fn non_finite_size_is_rejected() {
        let err = Viewport::resolve(f64::NAN, 500.0, Margin::zero()).unwrap_err();
        assert_eq!(err, LayoutError::NonFinite { field: "width" });
    }

    #[test]
    fn allocator_ids_are_distinct_and_increasing() {
        let ids = ClipIdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert!(a < b, "{a:?} should precede {b:?}");
        assert_eq!(a.to_string(), "vizir-polar-clip-0");
    }

    #[test]
    fn allocator_is_shareable_across_threads() {
        let ids = std::sync::Arc::new(ClipIdAllocator::new());
        let handles: std::vec::Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || ids.allocate())
            })
            .collect();
        let mut got: std::vec::Vec<ClipId> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        got.sort();
        got.dedup();
        assert_eq!(got.len(), 4);
    }
}
