// File: crates/pulse-core/src/svg.rs
// Summary: Serialize a `Scene` to standalone SVG markup.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::scene::{num, Anchor, Baseline, Group, Node, Paint, Scene, TextStyle, Visibility, Weight};

/// Reveals `OnHover` groups while the pointer is over their parent group.
const HOVER_STYLE: &str = ".on-hover{opacity:0;transition:opacity .2s}g:hover>.on-hover{opacity:1}";
const FONT_FAMILY: &str = "system-ui, -apple-system, Segoe UI, Roboto, sans-serif";

pub fn to_string(scene: &Scene) -> String {
    let vb = scene.view_box;
    let mut svg = String::with_capacity(4096);
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\" overflow=\"visible\" font-family=\"{FONT_FAMILY}\">",
        num(scene.width),
        num(scene.height),
        num(vb.left),
        num(vb.top),
        num(vb.width()),
        num(vb.height()),
    );
    let _ = writeln!(svg, "  <style>{HOVER_STYLE}</style>");
    for node in &scene.nodes {
        write_node(&mut svg, node, 1);
    }
    svg.push_str("</svg>\n");
    svg
}

/// Write the scene as an `.svg` file, creating parent directories as needed.
pub fn write(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_string(scene))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

fn write_node(svg: &mut String, node: &Node, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Group(g) => write_group(svg, g, depth),
        Node::Line { from, to, paint } => {
            let _ = writeln!(
                svg,
                "{pad}<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                paint_attrs(paint),
            );
        }
        Node::Rect { rect, radius, paint } => {
            let _ = writeln!(
                svg,
                "{pad}<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\"{}/>",
                num(rect.left),
                num(rect.top),
                num(rect.width()),
                num(rect.height()),
                num(*radius),
                paint_attrs(paint),
            );
        }
        Node::Circle { center, radius, paint } => {
            let _ = writeln!(
                svg,
                "{pad}<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
                num(center.x),
                num(center.y),
                num(*radius),
                paint_attrs(paint),
            );
        }
        Node::Path { data, paint } => {
            let _ = writeln!(svg, "{pad}<path d=\"{data}\"{}/>", paint_attrs(paint));
        }
        Node::Text { at, text, style } => {
            let _ = writeln!(
                svg,
                "{pad}<text x=\"{}\" y=\"{}\"{}>{}</text>",
                num(at.x),
                num(at.y),
                text_attrs(style),
                escape_text(text),
            );
        }
    }
}

fn write_group(svg: &mut String, g: &Group, depth: usize) {
    let pad = "  ".repeat(depth);
    let mut attrs = String::new();
    let class = match (g.class, g.visibility) {
        (Some(c), Visibility::OnHover) => Some(format!("{c} on-hover")),
        (None, Visibility::OnHover) => Some("on-hover".to_string()),
        (Some(c), Visibility::Always) => Some(c.to_string()),
        (None, Visibility::Always) => None,
    };
    if let Some(class) = class {
        let _ = write!(attrs, " class=\"{class}\"");
    }
    if let Some(t) = g.translate {
        let _ = write!(attrs, " transform=\"translate({},{})\"", num(t.x), num(t.y));
    }
    let _ = writeln!(svg, "{pad}<g{attrs}>");
    for child in &g.children {
        write_node(svg, child, depth + 1);
    }
    let _ = writeln!(svg, "{pad}</g>");
}

fn paint_attrs(p: &Paint) -> String {
    let mut out = String::new();
    match p.fill {
        Some(c) => {
            let _ = write!(out, " fill=\"{}\"", c.to_hex());
            if !c.is_opaque() { let _ = write!(out, " fill-opacity=\"{}\"", num(c.opacity())); }
        }
        None => out.push_str(" fill=\"none\""),
    }
    if let Some(c) = p.stroke {
        let _ = write!(out, " stroke=\"{}\" stroke-width=\"{}\"", c.to_hex(), num(p.stroke_width));
        if !c.is_opaque() { let _ = write!(out, " stroke-opacity=\"{}\"", num(c.opacity())); }
        if let Some((on, off)) = p.dash {
            let _ = write!(out, " stroke-dasharray=\"{},{}\"", num(on), num(off));
        }
        if p.round_joins {
            out.push_str(" stroke-linecap=\"round\" stroke-linejoin=\"round\"");
        }
    }
    out
}

fn text_attrs(s: &TextStyle) -> String {
    let mut out = format!(" font-size=\"{}\" fill=\"{}\"", num(s.size), s.color.to_hex());
    if !s.color.is_opaque() { let _ = write!(out, " fill-opacity=\"{}\"", num(s.color.opacity())); }
    match s.anchor {
        Anchor::Start => {}
        Anchor::Middle => out.push_str(" text-anchor=\"middle\""),
        Anchor::End => out.push_str(" text-anchor=\"end\""),
    }
    if s.baseline == Baseline::Central {
        out.push_str(" dominant-baseline=\"central\"");
    }
    match s.weight {
        Weight::Normal => {}
        Weight::Medium => out.push_str(" font-weight=\"500\""),
        Weight::Bold => out.push_str(" font-weight=\"700\""),
    }
    out
}

pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
