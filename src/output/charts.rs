// Static PNG charts drawn pixel by pixel with the `image` crate.
//
// Charts carry no text; the Markdown reports describe bar order and colors.
// Rendering functions return the image so they can be checked without
// touching the filesystem; save_chart writes it out.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use tracing::info;

use crate::analysis::summary::strategy_names;
use crate::analysis::{CrossSectorSummary, ResultTable};
use crate::scoring::IntensityTier;

pub mod colors {
    use image::Rgb;

    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    pub const AXIS: Rgb<u8> = Rgb([60, 60, 60]);
    pub const GRID: Rgb<u8> = Rgb([215, 215, 215]);
    pub const RED: Rgb<u8> = Rgb([214, 39, 40]);
    pub const ORANGE: Rgb<u8> = Rgb([255, 127, 14]);
    pub const GREEN: Rgb<u8> = Rgb([44, 160, 44]);
    pub const BLUE: Rgb<u8> = Rgb([31, 119, 180]);
    pub const NEUTRAL: Rgb<u8> = Rgb([150, 150, 150]);
    pub const HEAT_HIGH: Rgb<u8> = Rgb([165, 0, 38]);

    /// Emotion bar colors, cycled.
    pub const PALETTE: [Rgb<u8>; 6] = [
        Rgb([148, 103, 189]),
        Rgb([140, 86, 75]),
        Rgb([227, 119, 194]),
        Rgb([127, 127, 127]),
        Rgb([188, 189, 34]),
        Rgb([23, 190, 207]),
    ];
}

#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    /// Blank border around the plot area, in pixels
    pub margin: u32,
    pub background: Rgb<u8>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            margin: 40,
            background: colors::WHITE,
        }
    }
}

impl ChartConfig {
    fn plot_width(&self) -> u32 {
        self.width.saturating_sub(2 * self.margin)
    }

    fn plot_height(&self) -> u32 {
        self.height.saturating_sub(2 * self.margin)
    }

    /// y pixel for a value in [0, 1], 0 at the bottom of the plot area.
    fn y_for(&self, value: f64) -> u32 {
        let v = value.clamp(0.0, 1.0);
        self.margin + self.plot_height() - (v * self.plot_height() as f64).round() as u32
    }
}

pub fn tier_color(intensity: f64) -> Rgb<u8> {
    match IntensityTier::from_intensity(intensity) {
        IntensityTier::High => colors::RED,
        IntensityTier::Medium => colors::ORANGE,
        IntensityTier::Low => colors::GREEN,
    }
}

pub fn interpolate_color(c1: Rgb<u8>, c2: Rgb<u8>, t: f64) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Rgb([mix(c1[0], c2[0]), mix(c1[1], c2[1]), mix(c1[2], c2[2])])
}

pub fn draw_filled_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    for py in y..y.saturating_add(h).min(img.height()) {
        for px in x..x.saturating_add(w).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

fn draw_horizontal_line(img: &mut RgbImage, y: u32, x1: u32, x2: u32, color: Rgb<u8>) {
    if y >= img.height() {
        return;
    }
    for x in x1..x2.min(img.width()) {
        img.put_pixel(x, y, color);
    }
}

fn draw_axes(img: &mut RgbImage, config: &ChartConfig) {
    let bottom = config.y_for(0.0);
    draw_horizontal_line(img, bottom, config.margin, config.width - config.margin, colors::AXIS);
    for y in config.margin..=bottom.min(img.height() - 1) {
        img.put_pixel(config.margin.min(img.width() - 1), y, colors::AXIS);
    }
}

/// One bar per brand, height = intensity, colored by tier. Gridlines mark the
/// tier thresholds.
pub fn intensity_chart(intensities: &[f64], config: &ChartConfig) -> RgbImage {
    let mut img = RgbImage::from_pixel(config.width, config.height, config.background);

    for threshold in [IntensityTier::MEDIUM_THRESHOLD, IntensityTier::HIGH_THRESHOLD] {
        draw_horizontal_line(
            &mut img,
            config.y_for(threshold),
            config.margin,
            config.width - config.margin,
            colors::GRID,
        );
    }

    if !intensities.is_empty() {
        let slot = config.plot_width() as f64 / intensities.len() as f64;
        let bar_w = ((slot * 0.7).floor() as u32).max(1);
        for (i, &v) in intensities.iter().enumerate() {
            let x = config.margin + (i as f64 * slot + (slot - bar_w as f64) / 2.0) as u32;
            let top = config.y_for(v);
            let h = config.y_for(0.0) - top;
            draw_filled_rect(&mut img, x, top, bar_w, h, tier_color(v));
        }
    }

    draw_axes(&mut img, config);
    img
}

/// Strategy x brand matrix of weighted scores: one row per strategy in
/// declaration order, one column per brand in table order.
pub fn strategy_matrix(table: &ResultTable) -> Vec<Vec<f64>> {
    strategy_names(table)
        .iter()
        .map(|name| {
            table
                .numeric_column(&format!("strat_{name}_weighted"))
                .unwrap_or_default()
                .into_iter()
                .map(|v| v.unwrap_or(0.0))
                .collect()
        })
        .collect()
}

/// Heatmap of a row-major matrix, white (0) to dark red (matrix max).
pub fn strategy_heatmap(matrix: &[Vec<f64>], config: &ChartConfig) -> RgbImage {
    let mut img = RgbImage::from_pixel(config.width, config.height, config.background);

    let rows = matrix.len();
    let cols = matrix.iter().map(Vec::len).max().unwrap_or(0);
    if rows == 0 || cols == 0 {
        return img;
    }

    let max = matrix
        .iter()
        .flat_map(|r| r.iter())
        .copied()
        .fold(0.0, f64::max);

    let cell_w = config.plot_width() as f64 / cols as f64;
    let cell_h = config.plot_height() as f64 / rows as f64;

    for (r, row) in matrix.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            let t = if max > 0.0 { v / max } else { 0.0 };
            let color = interpolate_color(colors::WHITE, colors::HEAT_HIGH, t);
            let x = config.margin + (c as f64 * cell_w) as u32;
            let y = config.margin + (r as f64 * cell_h) as u32;
            // 1px gap so neighbouring white cells stay distinguishable
            let w = (cell_w.ceil() as u32).saturating_sub(1).max(1);
            let h = (cell_h.ceil() as u32).saturating_sub(1).max(1);
            draw_filled_rect(&mut img, x, y, w, h, color);
        }
    }

    img
}

/// Grouped bars per sector: mean intensity (blue) followed by each emotion
/// mean scaled to the largest emotion mean across sectors.
pub fn cross_sector_chart(summary: &CrossSectorSummary, config: &ChartConfig) -> RgbImage {
    let mut img = RgbImage::from_pixel(config.width, config.height, config.background);
    if summary.sectors.is_empty() {
        draw_axes(&mut img, config);
        return img;
    }

    let mut emotions: Vec<&str> = Vec::new();
    for p in &summary.sectors {
        for (e, _) in &p.emotion_means {
            if !emotions.contains(&e.as_str()) {
                emotions.push(e);
            }
        }
    }
    let emotion_max = summary
        .sectors
        .iter()
        .flat_map(|p| p.emotion_means.iter().map(|(_, m)| *m))
        .fold(0.0, f64::max);

    let bars_per_group = 1 + emotions.len();
    let group_w = config.plot_width() as f64 / summary.sectors.len() as f64;
    let bar_w = ((group_w * 0.8 / bars_per_group as f64).floor() as u32).max(1);

    for (g, p) in summary.sectors.iter().enumerate() {
        let group_x = config.margin as f64 + g as f64 * group_w + group_w * 0.1;

        let mut values = vec![(p.mean_intensity, colors::BLUE)];
        for (i, e) in emotions.iter().enumerate() {
            let mean = p
                .emotion_means
                .iter()
                .find(|(name, _)| name == e)
                .map(|(_, m)| *m)
                .unwrap_or(0.0);
            let scaled = if emotion_max > 0.0 { mean / emotion_max } else { 0.0 };
            values.push((scaled, colors::PALETTE[i % colors::PALETTE.len()]));
        }

        draw_bar_group(&mut img, config, group_x, bar_w, &values);
    }

    draw_axes(&mut img, config);
    img
}

/// Adjacent bars starting at `x0`, values in [0, 1].
fn draw_bar_group(
    img: &mut RgbImage,
    config: &ChartConfig,
    x0: f64,
    bar_w: u32,
    values: &[(f64, Rgb<u8>)],
) {
    for (b, &(v, color)) in values.iter().enumerate() {
        let x = (x0 + (b as u32 * bar_w) as f64) as u32;
        let top = config.y_for(v);
        let h = config.y_for(0.0) - top;
        draw_filled_rect(img, x, top, bar_w, h, color);
    }
}

/// Evenly spaced bars across the plot area, one per value.
fn bar_chart(values: &[(f64, Rgb<u8>)], config: &ChartConfig) -> RgbImage {
    let mut img = RgbImage::from_pixel(config.width, config.height, config.background);
    if !values.is_empty() {
        let slot = config.plot_width() as f64 / values.len() as f64;
        let bar_w = ((slot * 0.7).floor() as u32).max(1);
        for (i, &value) in values.iter().enumerate() {
            let x = config.margin as f64 + i as f64 * slot + (slot - bar_w as f64) / 2.0;
            draw_bar_group(&mut img, config, x, bar_w, &[value]);
        }
    }
    draw_axes(&mut img, config);
    img
}

/// Mean score per emotion, in coding-scheme order, scaled to the largest
/// mean. Colors cycle through the emotion palette.
pub fn emotion_chart(emotion_means: &[(String, f64)], config: &ChartConfig) -> RgbImage {
    let max = emotion_means.iter().map(|(_, m)| *m).fold(0.0, f64::max);
    let values: Vec<(f64, Rgb<u8>)> = emotion_means
        .iter()
        .enumerate()
        .map(|(i, (_, m))| {
            let scaled = if max > 0.0 { m / max } else { 0.0 };
            (scaled, colors::PALETTE[i % colors::PALETTE.len()])
        })
        .collect();
    bar_chart(&values, config)
}

/// Mean valence distribution: negative (red), neutral (grey), positive
/// (green). The three proportions are already in [0, 1].
pub fn sentiment_chart(sentiment_means: &[(String, f64)], config: &ChartConfig) -> RgbImage {
    let mean = |column: &str| {
        sentiment_means
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, m)| *m)
            .unwrap_or(0.0)
    };
    bar_chart(
        &[
            (mean("valence_neg"), colors::RED),
            (mean("valence_neu"), colors::NEUTRAL),
            (mean("valence_pos"), colors::GREEN),
        ],
        config,
    )
}

/// Save a chart as PNG, creating parent directories.
pub fn save_chart(img: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    img.save(path)
        .with_context(|| format!("Failed to write chart {}", path.display()))?;
    info!(path = %path.display(), "Wrote chart");
    Ok(())
}
