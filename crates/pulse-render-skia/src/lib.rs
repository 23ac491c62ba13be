// File: crates/pulse-render-skia/src/lib.rs
// Summary: Headless raster export: walks a pulse-core `Scene` onto a Skia CPU surface and encodes PNG.

use anyhow::Result;
use pulse_core::scene::{Group, Paint, PathCmd, PathData, Visibility};
use pulse_core::{Color, Insets, Node, Scene};
use skia_safe as skia;

pub mod text;

pub use text::TextShaper;

pub struct RasterOptions {
    /// Device pixels per scene unit.
    pub scale: f32,
    /// Margins around the scene's view box, in device pixels. Bars hang guide labels left of x = 0.
    pub insets: Insets,
    pub background: Color,
    /// Turn off to keep pixel tests independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0, insets: Insets::default(), background: Color::WHITE, draw_labels: true }
    }
}

impl RasterOptions {
    /// Defaults with the theme's raster background.
    pub fn themed(theme: &pulse_core::Theme) -> Self {
        Self { background: theme.background, ..Self::default() }
    }

    /// Output size in device pixels for `scene`.
    pub fn pixel_size(&self, scene: &Scene) -> (i32, i32) {
        let w = (scene.view_box.width() as f32 * self.scale).ceil() as i32 + self.insets.hsum() as i32;
        let h = (scene.view_box.height() as f32 * self.scale).ceil() as i32 + self.insets.vsum() as i32;
        (w, h)
    }
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self { Self { shaper: TextShaper::new() } }

    /// Render into a fresh CPU raster surface.
    pub fn render_surface(&self, scene: &Scene, opts: &RasterOptions) -> Result<skia::Surface> {
        anyhow::ensure!(opts.scale.is_finite() && opts.scale > 0.0, "raster scale must be positive, got {}", opts.scale);
        let (w, h) = opts.pixel_size(scene);
        anyhow::ensure!(w > 0 && h > 0, "scene has no area ({w}x{h})");
        log::debug!("rasterizing {}x{} scene at {}x -> {w}x{h}px", scene.width, scene.height, opts.scale);

        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(opts.background));

        canvas.save();
        canvas.translate((opts.insets.left as f32, opts.insets.top as f32));
        canvas.scale((opts.scale, opts.scale));
        canvas.translate((-scene.view_box.left as f32, -scene.view_box.top as f32));
        for node in &scene.nodes {
            self.draw_node(canvas, node, opts);
        }
        canvas.restore();
        Ok(surface)
    }

    /// Render to an RGBA8 (unpremultiplied) buffer: (pixels, width, height, stride).
    pub fn render_rgba8(&self, scene: &Scene, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(scene, opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back raster pixels");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn render_png_bytes(&self, scene: &Scene, opts: &RasterOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(scene, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render `scene` to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        scene: &Scene,
        opts: &RasterOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(scene, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw_node(&self, canvas: &skia::Canvas, node: &Node, opts: &RasterOptions) {
        match node {
            Node::Group(group) => self.draw_group(canvas, group, opts),
            Node::Line { from, to, paint } => {
                if let Some(stroke) = stroke_paint(paint) {
                    canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &stroke);
                }
            }
            Node::Rect { rect, radius, paint } => {
                let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                for p in fill_then_stroke(paint) {
                    canvas.draw_round_rect(r, *radius as f32, *radius as f32, &p);
                }
            }
            Node::Circle { center, radius, paint } => {
                for p in fill_then_stroke(paint) {
                    canvas.draw_circle((center.x as f32, center.y as f32), *radius as f32, &p);
                }
            }
            Node::Path { data, paint } => {
                let path = to_skia_path(data);
                for p in fill_then_stroke(paint) {
                    canvas.draw_path(&path, &p);
                }
            }
            Node::Text { at, text, style } => {
                if opts.draw_labels {
                    self.shaper.draw(canvas, text, at.x as f32, at.y as f32, style);
                }
            }
        }
    }

    fn draw_group(&self, canvas: &skia::Canvas, group: &Group, opts: &RasterOptions) {
        // Hover-only content has no pointer to reveal it in a still image.
        if group.visibility == Visibility::OnHover {
            return;
        }
        canvas.save();
        if let Some(t) = group.translate {
            canvas.translate((t.x as f32, t.y as f32));
        }
        for child in &group.children {
            self.draw_node(canvas, child, opts);
        }
        canvas.restore();
    }
}

pub(crate) fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(paint: &Paint) -> Option<skia::Paint> {
    let color = paint.fill?;
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(to_skia_color(color));
    Some(p)
}

fn stroke_paint(paint: &Paint) -> Option<skia::Paint> {
    let color = paint.stroke?;
    if paint.stroke_width <= 0.0 {
        return None;
    }
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(paint.stroke_width as f32);
    p.set_color(to_skia_color(color));
    if paint.round_joins {
        p.set_stroke_cap(skia::paint::Cap::Round);
        p.set_stroke_join(skia::paint::Join::Round);
    }
    if let Some((on, off)) = paint.dash {
        p.set_path_effect(skia::PathEffect::dash(&[on as f32, off as f32], 0.0));
    }
    Some(p)
}

fn fill_then_stroke(paint: &Paint) -> impl Iterator<Item = skia::Paint> {
    fill_paint(paint).into_iter().chain(stroke_paint(paint))
}

/// Same geometry as the SVG `d` string: circular arcs, sweep flag 1 = clockwise on screen.
fn to_skia_path(data: &PathData) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in &data.cmds {
        match *cmd {
            PathCmd::MoveTo(p) => {
                path.move_to((p.x as f32, p.y as f32));
            }
            PathCmd::LineTo(p) => {
                path.line_to((p.x as f32, p.y as f32));
            }
            PathCmd::Arc { radius, large_arc, sweep, to } => {
                let size = if large_arc { skia::path::ArcSize::Large } else { skia::path::ArcSize::Small };
                let dir = if sweep { skia::PathDirection::CW } else { skia::PathDirection::CCW };
                path.arc_to_rotated((radius as f32, radius as f32), 0.0, size, dir, (to.x as f32, to.y as f32));
            }
            PathCmd::Close => {
                path.close();
            }
        }
    }
    path
}
