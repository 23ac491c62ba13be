// File: crates/pulse-core/src/geometry.rs
// Summary: Lightweight geometry helpers for viewport math.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Point at `angle_deg` (0° = 3 o'clock, clockwise in screen space) and `radius` from `self`.
    pub fn polar(&self, radius: f64, angle_deg: f64) -> Point {
        let rad = angle_deg.to_radians();
        Point::new(self.x + radius * rad.cos(), self.y + radius * rad.sin())
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point { Point::new(self.x + dx, self.y + dy) }

    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { left: x, top: y, right: x + width, bottom: y + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
