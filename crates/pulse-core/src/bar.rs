// File: crates/pulse-core/src/bar.rs
// Summary: Bar chart layout: one rounded rect per point scaled to the series maximum, plus guides and labels.

use crate::color::Color;
use crate::format::group_thousands;
use crate::geometry::{clamp, Point, Rect};
use crate::grid::{guides, GuideLine};
use crate::layout::{EmptyReason, Layout};
use crate::scene::{Anchor, Group, Node, Paint, Scene, TextStyle, Weight};
use crate::series::{sanitize, BarPoint, ChartKind};
use crate::theme::Theme;
use crate::types::{
    BAR_GAP, BAR_MARGIN, BAR_WIDTH_BUDGET, BAR_WIDTH_MAX, BAR_WIDTH_MIN, DEFAULT_COLOR, DEFAULT_HEIGHT,
    LINE_VIEW_WIDTH,
};

const CORNER_RADIUS: f64 = 4.0;
const SHADOW_OFFSET: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarOptions {
    pub height: f64,
    pub color: Color,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self { height: DEFAULT_HEIGHT, color: DEFAULT_COLOR }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub rect: Rect,
    pub color: Color,
    pub value_label: String,
    /// Anchor of the value label above the bar.
    pub value_at: Point,
    /// Anchor of the category label under the plot.
    pub label_at: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub width: f64,
    pub height: f64,
    pub bar_width: f64,
    pub max_value: f64,
    pub bars: Vec<Bar>,
    pub guides: Vec<GuideLine>,
}

/// Width of each bar for `count` bars: the width budget split evenly, clamped to [40, 80].
pub fn bar_width(count: usize) -> f64 {
    clamp(BAR_WIDTH_BUDGET / count.max(1) as f64, BAR_WIDTH_MIN, BAR_WIDTH_MAX)
}

pub fn layout(points: &[BarPoint], opts: &BarOptions) -> Layout<BarGeometry> {
    if points.is_empty() {
        log::debug!("bar layout: empty series");
        return Layout::Empty(EmptyReason::NoData);
    }

    let height = opts.height.max(0.0);
    let values: Vec<f64> = points.iter().map(|p| sanitize(&p.label, p.value)).collect();
    let max_value = values.iter().copied().fold(0.0, f64::max);
    let full = (height - BAR_MARGIN).max(0.0);
    let bw = bar_width(points.len());
    let width = points.len() as f64 * (bw + BAR_GAP);

    let bars = points
        .iter()
        .zip(&values)
        .enumerate()
        .map(|(i, (p, &value))| {
            // All-zero series: nothing to scale against, every bar is flat.
            let bar_height = if max_value > 0.0 { value / max_value * full } else { 0.0 };
            let x = i as f64 * (bw + BAR_GAP) + BAR_GAP / 2.0;
            let y = height - bar_height - BAR_MARGIN / 2.0;
            Bar {
                label: p.label.clone(),
                value,
                rect: Rect::from_xywh(x, y, bw, bar_height),
                color: p.color.unwrap_or(opts.color),
                value_label: group_thousands(value),
                value_at: Point::new(x + bw / 2.0, y - 8.0),
                label_at: Point::new(x + bw / 2.0, height - 5.0),
            }
        })
        .collect();

    let guides = guides(0.0, width, |r| height * (1.0 - r), |r| max_value * r);

    Layout::Ready(BarGeometry { width, height, bar_width: bw, max_value, bars, guides })
}

impl BarGeometry {
    /// Height of a bar whose value equals the series maximum.
    pub fn full_scale_height(&self) -> f64 { (self.height - BAR_MARGIN).max(0.0) }

    pub fn to_scene(&self, theme: &Theme) -> Scene {
        let mut scene = Scene::new(self.width, self.height);

        for g in &self.guides {
            scene.push(Node::Group(Group::new(vec![
                Node::Line {
                    from: Point::new(g.x1, g.y),
                    to: Point::new(g.x2, g.y),
                    paint: Paint::stroke(theme.guide, 1.0).dashed(2.0, 2.0),
                },
                Node::text(Point::new(-10.0, g.y + 4.0), &g.label, TextStyle::small(theme.guide_label, Anchor::End)),
            ])));
        }

        for b in &self.bars {
            let shadow = Rect::from_xywh(b.rect.left + SHADOW_OFFSET, b.rect.top + SHADOW_OFFSET, b.rect.width(), b.rect.height());
            scene.push(Node::Group(
                Group::new(vec![
                    Node::Rect { rect: shadow, radius: CORNER_RADIUS, paint: Paint::fill(theme.shadow) },
                    Node::Rect { rect: b.rect, radius: CORNER_RADIUS, paint: Paint::fill(b.color) },
                    Node::text(
                        b.value_at,
                        &b.value_label,
                        TextStyle::small(theme.value_label, Anchor::Middle).weight(Weight::Medium),
                    ),
                    Node::text(b.label_at, &b.label, TextStyle::small(theme.category_label, Anchor::Middle)),
                ])
                .class("bar"),
            ));
        }
        scene
    }
}

/// Lay out and draw in one step; empty input yields the placeholder scene.
pub fn render(points: &[BarPoint], opts: &BarOptions, theme: &Theme) -> Scene {
    match layout(points, opts) {
        Layout::Ready(g) => g.to_scene(theme),
        Layout::Empty(_) => Scene::placeholder(ChartKind::Bar, LINE_VIEW_WIDTH, opts.height, theme),
    }
}
