// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the per-series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; 10],
}

// Category palette shared by both themes (the familiar "tab10" set).
fn tab10() -> [skia::Color; 10] {
    [
        skia::Color::from_rgb(0x1f, 0x77, 0xb4), // blue
        skia::Color::from_rgb(0xff, 0x7f, 0x0e), // orange
        skia::Color::from_rgb(0x2c, 0xa0, 0x2c), // green
        skia::Color::from_rgb(0xd6, 0x27, 0x28), // red
        skia::Color::from_rgb(0x94, 0x67, 0xbd), // purple
        skia::Color::from_rgb(0x8c, 0x56, 0x4b), // brown
        skia::Color::from_rgb(0xe3, 0x77, 0xc2), // pink
        skia::Color::from_rgb(0x7f, 0x7f, 0x7f), // gray
        skia::Color::from_rgb(0xbc, 0xbd, 0x22), // olive
        skia::Color::from_rgb(0x17, 0xbe, 0xcf), // cyan
    ]
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 176, 176, 176),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: tab10(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 52, 52, 58),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_background: skia::Color::from_argb(204, 30, 30, 36),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            palette: tab10(),
        }
    }

    /// Colour for the series at `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
