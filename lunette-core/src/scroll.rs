//! Viewport scroll state and scroll-driven visual values.
//!
//! [`region_progress`], [`fade_opacity`] and [`depth_scale`] are pure
//! functions of the live scroll offset: they are recomputed on every frame
//! rather than cached, since progress changes continuously while the user
//! scrolls.

use crate::anim::{Easing, Transition};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long an animated (smooth) scroll takes.
pub const GLIDE_DURATION: Duration = Duration::from_millis(350);

/// Scroll state for one page's content.
///
/// A page is "mounted" once its first layout pass has reported a content
/// height; anchors registered during layout are only meaningful from then
/// on. Registration is idempotent, so pages re-register on every frame.
#[derive(Debug, Default)]
pub struct Viewport {
    offset: f32,
    glide: Option<Transition>,
    viewport_rows: u16,
    content_rows: u16,
    anchors: HashMap<String, f32>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this frame's layout: visible height and total content height.
    /// The first call marks the page as mounted.
    pub fn set_layout(&mut self, viewport_rows: u16, content_rows: u16) {
        self.viewport_rows = viewport_rows;
        self.content_rows = content_rows;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Register (or re-register) an anchor's target row.
    pub fn register_anchor(&mut self, name: impl Into<String>, row: f32) {
        self.anchors.insert(name.into(), row);
    }

    /// Row an anchor points at, if the anchor exists on this page.
    pub fn anchor_row(&self, name: &str) -> Option<f32> {
        self.anchors.get(name).copied()
    }

    pub fn is_mounted(&self) -> bool {
        self.content_rows > 0
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    pub fn max_offset(&self) -> f32 {
        f32::from(self.content_rows.saturating_sub(self.viewport_rows))
    }

    /// Current offset, advancing any in-flight glide.
    pub fn offset(&mut self, now: Instant) -> f32 {
        if let Some(glide) = &self.glide {
            self.offset = glide.sample(now);
            if glide.is_done(now) {
                self.glide = None;
            }
        }
        self.offset
    }

    /// Offset as of the last sample, without advancing a glide.
    pub fn last_offset(&self) -> f32 {
        self.offset
    }

    /// Target of the in-flight glide, if any.
    pub fn glide_target(&self) -> Option<f32> {
        self.glide.as_ref().map(Transition::target)
    }

    /// Smoothly scroll so `row` sits at the top of the viewport.
    pub fn glide_to(&mut self, row: f32) {
        let to = row.clamp(0.0, self.max_offset());
        self.glide = Some(Transition::new(self.offset, to, GLIDE_DURATION, Easing::EaseOut));
    }

    /// Jump to the top immediately, cancelling any glide.
    pub fn jump_to_top(&mut self) {
        self.glide = None;
        self.offset = 0.0;
    }

    /// Nudge by `delta` rows (keyboard or mouse wheel), cancelling any
    /// glide in favor of the user's direct input.
    pub fn scroll_by(&mut self, delta: f32) {
        let base = self.glide.take().map_or(self.offset, |g| g.target());
        self.offset = (base + delta).clamp(0.0, self.max_offset());
    }
}

/// Progress of a content region through the viewport, clamped to `[0, 1]`.
///
/// 0 while the region's top edge is still below the bottom of the viewport,
/// 1 once its bottom edge has passed the top: the full traversal a section
/// makes while the user scrolls it into view and out again.
pub fn region_progress(offset: f32, viewport_rows: u16, region_top: f32, region_rows: u16) -> f32 {
    let span = f32::from(viewport_rows) + f32::from(region_rows);
    if span <= 0.0 {
        return 0.0;
    }
    let travelled = offset + f32::from(viewport_rows) - region_top;
    (travelled / span).clamp(0.0, 1.0)
}

/// Opacity of a region as it traverses the viewport: fades in over the
/// first 30% of the traversal, holds fully visible, fades out over the
/// last 30%.
pub fn fade_opacity(progress: f32) -> f32 {
    piecewise_linear(&[(0.0, 0.0), (0.3, 1.0), (0.7, 1.0), (1.0, 0.0)], progress)
}

/// Scale of a region's content: slightly shrunk entering and leaving,
/// full size at the midpoint of the traversal.
pub fn depth_scale(progress: f32) -> f32 {
    piecewise_linear(&[(0.0, 0.8), (0.5, 1.0), (1.0, 0.8)], progress)
}

/// Linear interpolation over sorted `(input, output)` control points.
/// Inputs outside the covered range clamp to the endpoint outputs.
fn piecewise_linear(points: &[(f32, f32)], x: f32) -> f32 {
    debug_assert!(points.len() >= 2);
    if x <= points[0].0 {
        return points[0].1;
    }
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 <= x0 {
                return y1;
            }
            let t = (x - x0) / (x1 - x0);
            return y0 + (y1 - y0) * t;
        }
    }
    points[points.len() - 1].1
}
