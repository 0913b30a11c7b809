// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG bytes/file, RGBA buffer) on Skia CPU raster surfaces.

use anyhow::Result;
use log::debug;
use skia_safe as skia;

use crate::geometry::{PlotRect, Projection};
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::legend::draw_legend;
use crate::series::Series;
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::{Insets, AXIS_LABEL_FONT_SIZE, HEIGHT, TICK_FONT_SIZE, TITLE_FONT_SIZE, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const X_TICK_TARGET: usize = 8;
const Y_TICK_TARGET: usize = 6;
const TICK_LEN: f32 = 4.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// When false no text is shaped at all (title, labels, ticks, legend text).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Option<String>,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            title: None,
            show_grid: true,
            show_legend: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Fit both axis ranges to the data, padded by `margin` (fraction of the span).
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render into a fresh CPU raster surface.
    pub fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            anyhow::bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        debug!(
            "rendering {} series on {}x{} surface",
            self.series.len(),
            opts.width,
            opts.height
        );
        self.paint(surface.canvas(), opts);
        Ok(surface)
    }

    /// Render the chart and encode it as PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {}x{} pixels", w, h);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let rect = PlotRect::inside(opts.width, opts.height, &opts.insets);
        let proj = Projection::new(rect, &self.x_axis, &self.y_axis);
        let shaper = opts.draw_labels.then(TextShaper::new);

        canvas.clear(theme.background);
        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(to_sk(&rect), &bg);

        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, X_TICK_TARGET);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, Y_TICK_TARGET);

        if self.show_grid {
            draw_grid(canvas, &rect, &proj, &x_ticks, &y_ticks, theme);
        }

        canvas.save();
        canvas.clip_rect(to_sk(&rect), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &proj, s, theme.series_color(i));
        }
        canvas.restore();

        draw_axes(canvas, &rect, &proj, &x_ticks, &y_ticks, theme);

        if let Some(shaper) = shaper.as_ref() {
            let x_step = nice_step(self.x_axis.max - self.x_axis.min, X_TICK_TARGET);
            let y_step = nice_step(self.y_axis.max - self.y_axis.min, Y_TICK_TARGET);
            for &x in &x_ticks {
                let label = format_tick(x, x_step);
                shaper.draw(canvas, &label, proj.x(x), rect.bottom + TICK_LEN + 2.0, TICK_FONT_SIZE, theme.tick, HAlign::Center, VAlign::Top);
            }
            for &y in &y_ticks {
                let label = format_tick(y, y_step);
                shaper.draw(canvas, &label, rect.left - TICK_LEN - 4.0, proj.y(y), TICK_FONT_SIZE, theme.tick, HAlign::Right, VAlign::Middle);
            }

            if let Some(title) = &self.title {
                shaper.draw(canvas, title, rect.center_x(), rect.top - 12.0, TITLE_FONT_SIZE, theme.title, HAlign::Center, VAlign::Bottom);
            }
            shaper.draw(canvas, &self.x_axis.label, rect.center_x(), opts.height as f32 - 10.0, AXIS_LABEL_FONT_SIZE, theme.axis_label, HAlign::Center, VAlign::Bottom);
            shaper.draw_vertical(canvas, &self.y_axis.label, 18.0, rect.center_y(), AXIS_LABEL_FONT_SIZE, theme.axis_label);
        }

        if self.show_legend {
            let entries: Vec<(&str, skia::Color)> = self
                .series
                .iter()
                .enumerate()
                .map(|(i, s)| (s.label.as_str(), theme.series_color(i)))
                .collect();
            draw_legend(canvas, &rect, &entries, theme, shaper.as_ref());
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_sk(r: &PlotRect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn draw_grid(
    canvas: &skia::Canvas,
    rect: &PlotRect,
    proj: &Projection,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    for &x in x_ticks {
        let px = proj.x(x);
        canvas.draw_line((px, rect.top), (px, rect.bottom), &paint);
    }
    for &y in y_ticks {
        let py = proj.y(y);
        canvas.draw_line((rect.left, py), (rect.right, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    rect: &PlotRect,
    proj: &Projection,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut frame = skia::Paint::default();
    frame.set_color(theme.axis_line);
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(1.0);
    canvas.draw_rect(to_sk(rect), &frame);

    let mut tick = skia::Paint::default();
    tick.set_color(theme.tick);
    tick.set_anti_alias(true);
    tick.set_stroke_width(1.0);
    for &x in x_ticks {
        let px = proj.x(x);
        canvas.draw_line((px, rect.bottom), (px, rect.bottom + TICK_LEN), &tick);
    }
    for &y in y_ticks {
        let py = proj.y(y);
        canvas.draw_line((rect.left - TICK_LEN, py), (rect.left, py), &tick);
    }
}

fn draw_line_series(canvas: &skia::Canvas, proj: &Projection, series: &Series, color: skia::Color) {
    let mut points = series
        .data_xy
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&p| proj.point(p));
    let Some(first) = points.next() else { return };

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_color(color);

    let mut path = skia::Path::new();
    path.move_to(first);
    let mut segments = 0usize;
    for p in points {
        path.line_to(p);
        segments += 1;
    }

    if segments == 0 {
        // a lone sample has no segment to stroke; mark it instead
        stroke.set_style(skia::paint::Style::Fill);
        canvas.draw_circle(first, series.stroke_width + 1.5, &stroke);
        return;
    }

    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    canvas.draw_path(&path, &stroke);
}
