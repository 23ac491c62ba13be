// File: crates/pulse-core/src/pie.rs
// Summary: Pie chart layout: consecutive sectors from 12 o'clock, share labels, center total disc.

use crate::color::Color;
use crate::format::group_thousands;
use crate::geometry::Point;
use crate::layout::{EmptyReason, Layout};
use crate::scene::{Anchor, Group, Node, Paint, PathData, Scene, TextStyle, Weight};
use crate::series::{sanitize, ChartKind, PiePoint};
use crate::theme::Theme;
use crate::types::{DEFAULT_PIE_SIZE, PIE_RING_MARGIN};

/// Sectors start at 12 o'clock.
pub const START_ANGLE: f64 = -90.0;
/// Share labels sit at this fraction of the radius.
const LABEL_RADIUS: f64 = 0.7;
/// Shares at or below this percentage get no label.
const MIN_LABELED_PERCENT: f64 = 5.0;
const CENTER_DISC: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieOptions {
    pub size: f64,
}

impl Default for PieOptions {
    fn default() -> Self { Self { size: DEFAULT_PIE_SIZE } }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    pub label: String,
    pub value: f64,
    pub color: Color,
    /// Share of the total, 0..=100.
    pub percentage: f64,
    /// Share with one decimal, e.g. `40.0`.
    pub percentage_label: String,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: PathData,
    pub label_at: Point,
    pub show_label: bool,
}

impl Sector {
    pub fn sweep(&self) -> f64 { self.end_angle - self.start_angle }
}

/// One row of the distribution legend next to the pie.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub label: String,
    pub color: Color,
    pub value_label: String,
    pub percentage_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieGeometry {
    pub size: f64,
    pub center: Point,
    pub radius: f64,
    pub total: f64,
    pub total_label: String,
    pub sectors: Vec<Sector>,
}

/// Outline of one sector: center, out along the start radius, arc, back to center.
pub fn sector_path(center: Point, radius: f64, start_angle: f64, sweep: f64) -> PathData {
    let from = center.polar(radius, start_angle);
    let path = PathData::new().move_to(center).line_to(from);
    // An arc whose endpoints coincide draws nothing, so a full circle is two halves.
    let path = if sweep >= 360.0 - 1e-9 {
        let opposite = center.polar(radius, start_angle + 180.0);
        path.arc_to(radius, false, true, opposite).arc_to(radius, false, true, from)
    } else {
        path.arc_to(radius, sweep > 180.0, true, center.polar(radius, start_angle + sweep))
    };
    path.close()
}

pub fn layout(points: &[PiePoint], opts: &PieOptions) -> Layout<PieGeometry> {
    if points.is_empty() {
        log::debug!("pie layout: empty series");
        return Layout::Empty(EmptyReason::NoData);
    }
    let values: Vec<f64> = points.iter().map(|p| sanitize(&p.label, p.value)).collect();
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        log::debug!("pie layout: {} points sum to zero", points.len());
        return Layout::Empty(EmptyReason::ZeroTotal);
    }

    let center = Point::new(opts.size / 2.0, opts.size / 2.0);
    let radius = (opts.size / 2.0 - PIE_RING_MARGIN).max(0.0);

    let mut angle = START_ANGLE;
    let sectors = points
        .iter()
        .zip(&values)
        .map(|(p, &value)| {
            let share = value / total;
            let sweep = share * 360.0;
            let start_angle = angle;
            angle += sweep;
            let percentage = share * 100.0;
            let percentage_label = format!("{percentage:.1}");
            let shown = percentage_label.parse::<f64>().map_or(false, |v| v > MIN_LABELED_PERCENT);
            Sector {
                label: p.label.clone(),
                value,
                color: p.color,
                percentage,
                show_label: shown,
                percentage_label,
                start_angle,
                end_angle: start_angle + sweep,
                path: sector_path(center, radius, start_angle, sweep),
                label_at: center.polar(radius * LABEL_RADIUS, start_angle + sweep / 2.0),
            }
        })
        .collect();

    Layout::Ready(PieGeometry { size: opts.size, center, radius, total, total_label: group_thousands(total), sectors })
}

impl PieGeometry {
    pub fn legend(&self) -> Vec<LegendRow> {
        self.sectors
            .iter()
            .map(|s| LegendRow {
                label: s.label.clone(),
                color: s.color,
                value_label: group_thousands(s.value),
                percentage_label: format!("{}%", s.percentage_label),
            })
            .collect()
    }

    pub fn to_scene(&self, theme: &Theme) -> Scene {
        let mut scene = Scene::new(self.size, self.size);
        scene.push(Node::Circle { center: self.center, radius: self.radius, paint: Paint::fill(theme.pie_backdrop) });

        for s in &self.sectors {
            let mut children = vec![
                Node::Group(
                    Group::new(vec![Node::Path { data: s.path.clone(), paint: Paint::fill(theme.shadow) }])
                        .translated(2.0, 2.0),
                ),
                Node::Path { data: s.path.clone(), paint: Paint::fill(s.color) },
            ];
            if s.show_label {
                children.push(Node::text(
                    s.label_at,
                    format!("{}%", s.percentage_label),
                    TextStyle::small(theme.slice_label, Anchor::Middle).weight(Weight::Medium).central(),
                ));
            }
            scene.push(Node::Group(Group::new(children).class("sector")));
        }

        scene.push(Node::Circle {
            center: self.center,
            radius: self.radius * CENTER_DISC,
            paint: Paint::fill(theme.center_disc),
        });
        scene.push(Node::text(
            self.center.offset(0.0, -5.0),
            &self.total_label,
            TextStyle::small(theme.total_text, Anchor::Middle).sized(18.0).weight(Weight::Bold).central(),
        ));
        scene.push(Node::text(
            self.center.offset(0.0, 15.0),
            "Total",
            TextStyle::small(theme.caption, Anchor::Middle).central(),
        ));
        scene
    }
}

/// Lay out and draw in one step; empty or zero-total input yields the placeholder scene.
pub fn render(points: &[PiePoint], opts: &PieOptions, theme: &Theme) -> Scene {
    match layout(points, opts) {
        Layout::Ready(g) => g.to_scene(theme),
        Layout::Empty(_) => Scene::placeholder(ChartKind::Pie, opts.size, opts.size, theme),
    }
}
