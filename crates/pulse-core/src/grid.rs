// File: crates/pulse-core/src/grid.rs
// Summary: Horizontal guide lines drawn behind bar and line data.

use crate::format::group_thousands;

/// Fractions of the value scale that get a guide line.
pub const GUIDE_RATIOS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// One horizontal guide line with its scale label.
#[derive(Clone, Debug, PartialEq)]
pub struct GuideLine {
    pub ratio: f64,
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
    /// Value at this fraction of the scale, before rounding.
    pub value: f64,
    pub label: String,
}

/// Build the four guides; `y_at` maps a ratio to screen y and `value_at` a ratio to a data value.
pub fn guides(
    x1: f64,
    x2: f64,
    y_at: impl Fn(f64) -> f64,
    value_at: impl Fn(f64) -> f64,
) -> Vec<GuideLine> {
    GUIDE_RATIOS
        .iter()
        .map(|&ratio| {
            let value = value_at(ratio);
            GuideLine {
                ratio,
                y: y_at(ratio),
                x1,
                x2,
                value,
                label: group_thousands(value.round()),
            }
        })
        .collect()
}
