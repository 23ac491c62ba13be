// File: crates/pulse-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms used by the bar and line layouts.

/// Vertical value scale mapping a data range to [top, bottom] pixels (higher value, smaller y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    /// A zero-width range is widened to one unit so every value maps to `bottom_px`.
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        // Tolerance also catches spans too small to divide by, not only an exact zero.
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn span(&self) -> f64 { self.vmax - self.vmin }
    /// Position of `v` within the range, 0 at `vmin`, 1 at `vmax`.
    #[inline]
    pub fn normalize(&self, v: f64) -> f64 { (v - self.vmin) / self.span() }
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.bottom_px - self.normalize(v) * (self.bottom_px - self.top_px)
    }
    /// Screen y of a fraction of the range (0 = bottom, 1 = top).
    #[inline]
    pub fn ratio_to_px(&self, ratio: f64) -> f64 {
        self.bottom_px - ratio * (self.bottom_px - self.top_px)
    }
    #[inline]
    pub fn from_px(&self, py: f64) -> f64 {
        self.vmin + (self.bottom_px - py) / (self.bottom_px - self.top_px) * self.span()
    }
}

/// Evenly spaced positions for ordinal points: `left + i * step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f64,
    pub step: f64,
}

impl IndexScale {
    pub fn new(left_px: f64, step: f64) -> Self { Self { left_px, step } }

    /// Spread `count` points across [left, right] with the first and last on the edges.
    /// Returns `None` for fewer than two points, where the step is undefined.
    pub fn spanning(left_px: f64, right_px: f64, count: usize) -> Option<Self> {
        if count < 2 { return None; }
        Some(Self::new(left_px, (right_px - left_px) / (count - 1) as f64))
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 { self.left_px + index as f64 * self.step }
}
