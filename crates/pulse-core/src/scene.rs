// File: crates/pulse-core/src/scene.rs
// Summary: Backend-neutral scene graph produced by the chart layouts and consumed by the SVG and Skia writers.

use std::fmt;

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::series::ChartKind;
use crate::theme::Theme;

/// One SVG-style path command. Arcs are circular (rx == ry) with no axis rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    Arc { radius: f64, large_arc: bool, sweep: bool, to: Point },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    pub cmds: Vec<PathCmd>,
}

impl PathData {
    pub fn new() -> Self { Self::default() }
    pub fn move_to(mut self, p: Point) -> Self { self.cmds.push(PathCmd::MoveTo(p)); self }
    pub fn line_to(mut self, p: Point) -> Self { self.cmds.push(PathCmd::LineTo(p)); self }
    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> Self {
        self.cmds.push(PathCmd::Arc { radius, large_arc, sweep, to });
        self
    }
    pub fn close(mut self) -> Self { self.cmds.push(PathCmd::Close); self }

    pub fn is_empty(&self) -> bool { self.cmds.is_empty() }

    /// Every on-path point, in command order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cmds.iter().filter_map(|c| match *c {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) => Some(p),
            PathCmd::Arc { to, .. } => Some(to),
            PathCmd::Close => None,
        })
    }
}

impl fmt::Display for PathData {
    /// SVG `d` attribute syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.cmds.iter().enumerate() {
            if i > 0 { f.write_str(" ")?; }
            match *cmd {
                PathCmd::MoveTo(p) => write!(f, "M {} {}", num(p.x), num(p.y))?,
                PathCmd::LineTo(p) => write!(f, "L {} {}", num(p.x), num(p.y))?,
                PathCmd::Arc { radius, large_arc, sweep, to } => write!(
                    f,
                    "A {r} {r} 0 {} {} {} {}",
                    large_arc as u8,
                    sweep as u8,
                    num(to.x),
                    num(to.y),
                    r = num(radius),
                )?,
                PathCmd::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Fill and stroke of a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    /// Dash on/off lengths.
    pub dash: Option<(f64, f64)>,
    pub round_joins: bool,
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self { fill: Some(color), stroke: None, stroke_width: 0.0, dash: None, round_joins: false }
    }
    pub fn stroke(color: Color, width: f64) -> Self {
        Self { fill: None, stroke: Some(color), stroke_width: width, dash: None, round_joins: false }
    }
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }
    pub fn dashed(mut self, on: f64, off: f64) -> Self { self.dash = Some((on, off)); self }
    pub fn rounded(mut self) -> Self { self.round_joins = true; self }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    Central,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Medium,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub anchor: Anchor,
    pub baseline: Baseline,
    pub weight: Weight,
}

impl TextStyle {
    /// 12px label (Tailwind `text-xs`).
    pub fn small(color: Color, anchor: Anchor) -> Self {
        Self { size: 12.0, color, anchor, baseline: Baseline::Alphabetic, weight: Weight::Normal }
    }
    pub fn sized(mut self, size: f64) -> Self { self.size = size; self }
    pub fn weight(mut self, weight: Weight) -> Self { self.weight = weight; self }
    pub fn central(mut self) -> Self { self.baseline = Baseline::Central; self }
}

/// Whether a node is drawn up front or revealed by pointer hover (SVG only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Always,
    OnHover,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub class: Option<&'static str>,
    pub translate: Option<Point>,
    pub visibility: Visibility,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(children: Vec<Node>) -> Self { Self { children, ..Self::default() } }
    pub fn class(mut self, class: &'static str) -> Self { self.class = Some(class); self }
    pub fn translated(mut self, dx: f64, dy: f64) -> Self { self.translate = Some(Point::new(dx, dy)); self }
    pub fn on_hover(mut self) -> Self { self.visibility = Visibility::OnHover; self }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Line { from: Point, to: Point, paint: Paint },
    Rect { rect: Rect, radius: f64, paint: Paint },
    Circle { center: Point, radius: f64, paint: Paint },
    Path { data: PathData, paint: Paint },
    Text { at: Point, text: String, style: TextStyle },
}

impl Node {
    pub fn text(at: Point, text: impl Into<String>, style: TextStyle) -> Self {
        Node::Text { at, text: text.into(), style }
    }

    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a Node)) {
        f(self);
        if let Node::Group(g) = self {
            for c in &g.children { c.visit(f); }
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            Node::Group(g) => g.translate.map_or(true, |p| p.is_finite()),
            Node::Line { from, to, .. } => from.is_finite() && to.is_finite(),
            Node::Rect { rect, radius, .. } => {
                [rect.left, rect.top, rect.right, rect.bottom, *radius].iter().all(|v| v.is_finite())
            }
            Node::Circle { center, radius, .. } => center.is_finite() && radius.is_finite(),
            Node::Path { data, .. } => data.cmds.iter().all(|c| match *c {
                PathCmd::Arc { radius, to, .. } => radius.is_finite() && to.is_finite(),
                _ => true,
            }) && data.points().all(|p| p.is_finite()),
            Node::Text { at, .. } => at.is_finite(),
        }
    }
}

/// A drawable chart: a view box in chart units plus the nodes inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub view_box: Rect,
    pub nodes: Vec<Node>,
    /// Set when the scene is the "no data" state rather than a chart.
    pub placeholder: bool,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, view_box: Rect::from_ltrb(0.0, 0.0, width, height), nodes: Vec::new(), placeholder: false }
    }

    /// The "no data" state: a glyph for the chart kind over a caption, centered.
    pub fn placeholder(kind: ChartKind, width: f64, height: f64, theme: &Theme) -> Self {
        let center = Point::new(width * 0.5, height * 0.5);
        let mut scene = Scene::new(width, height);
        scene.placeholder = true;
        scene.nodes.push(Node::Group(
            Group::new(vec![
                Node::text(
                    center.offset(0.0, -14.0),
                    kind.placeholder_glyph(),
                    TextStyle::small(theme.placeholder_text, Anchor::Middle).sized(36.0).central(),
                ),
                Node::text(
                    center.offset(0.0, 24.0),
                    "No data available",
                    TextStyle::small(theme.placeholder_text, Anchor::Middle).sized(14.0).central(),
                ),
            ])
            .class("placeholder"),
        ));
        scene
    }

    pub fn push(&mut self, node: Node) { self.nodes.push(node); }

    /// Depth-first walk over every node, groups included.
    pub fn walk<'a>(&'a self, mut f: impl FnMut(&'a Node)) {
        for n in &self.nodes { n.visit(&mut f); }
    }

    /// All text content, depth-first.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(|n| if let Node::Text { text, .. } = n { out.push(text.as_str()); });
        out
    }

    /// True when no coordinate anywhere in the scene is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        let mut ok = self.width.is_finite() && self.height.is_finite();
        self.walk(|n| ok &= n.is_finite());
        ok
    }
}

/// Compact number for markup: three decimals at most, no `-0`.
pub(crate) fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".to_string() } else { r.to_string() }
}
