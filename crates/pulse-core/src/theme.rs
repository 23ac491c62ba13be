// File: crates/pulse-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome (guides, labels, shadows, pie center).

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Raster background; SVG output stays transparent.
    pub background: Color,
    pub guide: Color,
    pub guide_label: Color,
    pub category_label: Color,
    pub value_label: Color,
    pub shadow: Color,
    pub pie_backdrop: Color,
    pub center_disc: Color,
    pub total_text: Color,
    pub caption: Color,
    pub tooltip_fill: Color,
    pub tooltip_text: Color,
    pub slice_label: Color,
    pub marker_fill: Color,
    pub placeholder_text: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(0xff, 0xff, 0xff),
            guide: Color::rgba(0x9c, 0xa3, 0xaf, 26),          // gray-400 @ 10%
            guide_label: Color::rgb(0x6b, 0x72, 0x80),         // gray-500
            category_label: Color::rgb(0x4b, 0x55, 0x63),      // gray-600
            value_label: Color::rgb(0x37, 0x41, 0x51),         // gray-700
            shadow: Color::rgba(0, 0, 0, 26),
            pie_backdrop: Color::rgba(0, 0, 0, 13),
            center_disc: Color::WHITE,
            total_text: Color::rgb(0x11, 0x18, 0x27),          // gray-900
            caption: Color::rgb(0x6b, 0x72, 0x80),
            tooltip_fill: Color::rgba(0, 0, 0, 204),
            tooltip_text: Color::WHITE,
            slice_label: Color::WHITE,
            marker_fill: Color::WHITE,
            placeholder_text: Color::rgb(0x6b, 0x72, 0x80),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(0x11, 0x18, 0x27),
            guide: Color::rgba(0x9c, 0xa3, 0xaf, 26),
            guide_label: Color::rgb(0x9c, 0xa3, 0xaf),         // gray-400
            category_label: Color::rgb(0x9c, 0xa3, 0xaf),
            value_label: Color::rgb(0xd1, 0xd5, 0xdb),         // gray-300
            shadow: Color::rgba(0, 0, 0, 26),
            pie_backdrop: Color::rgb(0x37, 0x41, 0x51),        // gray-700
            center_disc: Color::rgb(0x1f, 0x29, 0x37),         // gray-800
            total_text: Color::WHITE,
            caption: Color::rgb(0x9c, 0xa3, 0xaf),
            tooltip_fill: Color::rgba(0, 0, 0, 204),
            tooltip_text: Color::WHITE,
            slice_label: Color::WHITE,
            marker_fill: Color::WHITE,
            placeholder_text: Color::rgb(0x9c, 0xa3, 0xaf),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::BLACK,
            guide: Color::rgb(0x44, 0x44, 0x44),
            guide_label: Color::WHITE,
            category_label: Color::WHITE,
            value_label: Color::WHITE,
            shadow: Color::TRANSPARENT,
            pie_backdrop: Color::rgb(0x22, 0x22, 0x22),
            center_disc: Color::BLACK,
            total_text: Color::WHITE,
            caption: Color::rgb(0xcc, 0xcc, 0xcc),
            tooltip_fill: Color::rgb(0x22, 0x22, 0x22),
            tooltip_text: Color::rgb(0xff, 0xff, 0x00),
            slice_label: Color::WHITE,
            marker_fill: Color::BLACK,
            placeholder_text: Color::WHITE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
