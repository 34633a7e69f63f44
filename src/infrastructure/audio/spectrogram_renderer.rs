use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, RgbaImage};
use resvg::tiny_skia::{Color, Pixmap, Transform};
use usvg::fontdb::Database;

use crate::application::ports::{AudioError, SpectrogramRenderer};
use crate::domain::DecibelSpectrogram;

const CANVAS_WIDTH: u32 = 1000;
const CANVAS_HEIGHT: u32 = 400;

#[derive(Debug, Clone, Copy)]
struct Rect {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl Rect {
    fn width(&self) -> u32 {
        self.right - self.left
    }

    fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

const PLOT: Rect = Rect {
    left: 125,
    top: 48,
    right: 745,
    bottom: 356,
};

const COLORBAR: Rect = Rect {
    left: 775,
    top: 48,
    right: 806,
    bottom: 356,
};

/// Magma colour map anchors, low to high, evenly spaced.
const MAGMA: [[u8; 3]; 9] = [
    [0x00, 0x00, 0x04],
    [0x1c, 0x10, 0x44],
    [0x4f, 0x12, 0x7b],
    [0x81, 0x25, 0x81],
    [0xb5, 0x36, 0x7a],
    [0xe5, 0x50, 0x64],
    [0xfb, 0x87, 0x61],
    [0xfe, 0xc2, 0x87],
    [0xfc, 0xfd, 0xbf],
];

/// Draws a decibel spectrogram as a 1000x400 PNG: magma heatmap with time on
/// the x axis and linear frequency on the y axis, plus a labelled colour bar.
///
/// The heatmap is written straight into the pixel buffer; axes, ticks and
/// labels are an SVG overlay rasterized with `resvg`. Text is only drawn for
/// fonts present in the supplied database.
pub struct SvgSpectrogramRenderer {
    fontdb: Arc<Database>,
}

impl SvgSpectrogramRenderer {
    pub fn new(fontdb: Arc<Database>) -> Self {
        Self { fontdb }
    }

    pub fn with_system_fonts() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "Loaded system fonts for spectrogram labels");
        Self::new(Arc::new(db))
    }

    fn overlay(&self, spectrogram: &DecibelSpectrogram, db_range: (f32, f32)) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12" fill="black">"#,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT
        );

        let duration = spectrogram.duration_secs();
        for (value, label) in ticks(0.0, duration) {
            let x = PLOT.left as f32 + value / duration * PLOT.width() as f32;
            svg.push_str(&format!(
                r#"<line x1="{x:.1}" y1="{y0}" x2="{x:.1}" y2="{y1}" stroke="black" stroke-width="1"/><text x="{x:.1}" y="{ty}" text-anchor="middle">{label}</text>"#,
                y0 = PLOT.bottom,
                y1 = PLOT.bottom + 4,
                ty = PLOT.bottom + 18,
            ));
        }

        let nyquist = spectrogram.nyquist_hz();
        for (value, label) in ticks(0.0, nyquist) {
            let y = PLOT.bottom as f32 - value / nyquist * PLOT.height() as f32;
            svg.push_str(&format!(
                r#"<line x1="{x0}" y1="{y:.1}" x2="{x1}" y2="{y:.1}" stroke="black" stroke-width="1"/><text x="{tx}" y="{ty:.1}" text-anchor="end">{label}</text>"#,
                x0 = PLOT.left - 4,
                x1 = PLOT.left,
                tx = PLOT.left - 7,
                ty = y + 4.0,
            ));
        }

        let (lo, hi) = db_range;
        if hi > lo {
            for (value, _) in ticks(lo, hi) {
                let y = COLORBAR.bottom as f32
                    - (value - lo) / (hi - lo) * COLORBAR.height() as f32;
                svg.push_str(&format!(
                    r#"<line x1="{x0}" y1="{y:.1}" x2="{x1}" y2="{y:.1}" stroke="black" stroke-width="1"/><text x="{tx}" y="{ty:.1}">{label}</text>"#,
                    x0 = COLORBAR.right,
                    x1 = COLORBAR.right + 4,
                    tx = COLORBAR.right + 7,
                    ty = y + 4.0,
                    label = decibel_label(value),
                ));
            }
        }

        for rect in [PLOT, COLORBAR] {
            svg.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black" stroke-width="1"/>"#,
                rect.left,
                rect.top,
                rect.width(),
                rect.height()
            ));
        }

        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="14">Time (s)</text>"#,
            (PLOT.left + PLOT.right) / 2,
            PLOT.bottom + 38
        ));
        svg.push_str(&format!(
            r#"<text x="0" y="0" text-anchor="middle" font-size="14" transform="translate({} {}) rotate(-90)">Hz</text>"#,
            PLOT.left - 62,
            (PLOT.top + PLOT.bottom) / 2
        ));
        svg.push_str("</svg>");
        svg
    }
}

impl SpectrogramRenderer for SvgSpectrogramRenderer {
    fn render(&self, spectrogram: &DecibelSpectrogram) -> Result<Vec<u8>, AudioError> {
        let mut pixmap = Pixmap::new(CANVAS_WIDTH, CANVAS_HEIGHT)
            .ok_or_else(|| AudioError::RenderingFailed("failed to allocate canvas".to_string()))?;
        pixmap.fill(Color::WHITE);

        let db_range = spectrogram.range();
        paint_heatmap(&mut pixmap, spectrogram, db_range);
        paint_colorbar(&mut pixmap);

        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&self.overlay(spectrogram, db_range), &opts)
            .map_err(|e| AudioError::RenderingFailed(format!("parse overlay: {}", e)))?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        // Every pixel is opaque, so premultiplied and straight alpha agree.
        let canvas = RgbaImage::from_raw(CANVAS_WIDTH, CANVAS_HEIGHT, pixmap.take())
            .ok_or_else(|| AudioError::RenderingFailed("canvas size mismatch".to_string()))?;

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(canvas)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| AudioError::RenderingFailed(format!("encode png: {}", e)))?;

        tracing::debug!(
            frames = spectrogram.n_frames(),
            bins = spectrogram.n_bins(),
            min_db = db_range.0,
            max_db = db_range.1,
            bytes = png.len(),
            "Spectrogram rendered"
        );

        Ok(png)
    }
}

fn paint_heatmap(pixmap: &mut Pixmap, spectrogram: &DecibelSpectrogram, (lo, hi): (f32, f32)) {
    let n_frames = spectrogram.n_frames();
    let n_bins = spectrogram.frames.first().map_or(0, Vec::len);
    if n_frames == 0 || n_bins == 0 {
        return;
    }

    let span = hi - lo;
    let data = pixmap.data_mut();

    for py in PLOT.top..PLOT.bottom {
        let from_bottom = (PLOT.bottom - 1 - py) as f32 + 0.5;
        let bin = ((from_bottom / PLOT.height() as f32) * n_bins as f32) as usize;
        let bin = bin.min(n_bins - 1);

        for px in PLOT.left..PLOT.right {
            let from_left = (px - PLOT.left) as f32 + 0.5;
            let frame = ((from_left / PLOT.width() as f32) * n_frames as f32) as usize;
            let frame = frame.min(n_frames - 1);

            let value = spectrogram.frames[frame].get(bin).copied().unwrap_or(lo);
            let t = if span > 0.0 { (value - lo) / span } else { 0.0 };
            put_pixel(data, px, py, magma(t));
        }
    }
}

fn paint_colorbar(pixmap: &mut Pixmap) {
    let data = pixmap.data_mut();
    for py in COLORBAR.top..COLORBAR.bottom {
        let t = ((COLORBAR.bottom - 1 - py) as f32 + 0.5) / COLORBAR.height() as f32;
        let color = magma(t);
        for px in COLORBAR.left..COLORBAR.right {
            put_pixel(data, px, py, color);
        }
    }
}

fn put_pixel(data: &mut [u8], x: u32, y: u32, [r, g, b]: [u8; 3]) {
    let idx = (y as usize * CANVAS_WIDTH as usize + x as usize) * 4;
    if let Some(px) = data.get_mut(idx..idx + 4) {
        px.copy_from_slice(&[r, g, b, 255]);
    }
}

/// Maps `t` in `[0, 1]` onto the magma ramp.
fn magma(t: f32) -> [u8; 3] {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (MAGMA.len() - 1) as f32;
    let idx = (scaled.floor() as usize).min(MAGMA.len() - 2);
    let frac = scaled - idx as f32;

    let (a, b) = (MAGMA[idx], MAGMA[idx + 1]);
    std::array::from_fn(|c| (a[c] as f32 + (b[c] as f32 - a[c] as f32) * frac).round() as u8)
}

/// Tick positions on a 1/2/2.5/5 x 10^k grid, at most about eight per axis.
fn ticks(lo: f32, hi: f32) -> Vec<(f32, String)> {
    let range = hi - lo;
    if !range.is_finite() || range <= 0.0 {
        return Vec::new();
    }

    let raw = range / 8.0;
    let magnitude = 10f32.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw)
        .unwrap_or(10.0 * magnitude);

    let decimals = (0..=4)
        .find(|&d| {
            let scaled = step * 10f32.powi(d);
            (scaled - scaled.round()).abs() < 1e-3
        })
        .unwrap_or(4) as usize;

    let first = (lo / step).ceil() as i64;
    let last = (hi / step + 1e-4).floor() as i64;
    (first..=last)
        .map(|i| {
            let value = i as f32 * step;
            (value, format!("{:.*}", decimals, value + 0.0))
        })
        .collect()
}

/// `%+2.0f dB` style label.
fn decibel_label(value: f32) -> String {
    let rounded = value.round() + 0.0;
    format!("{:+.0} dB", rounded)
}
