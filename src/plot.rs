// Software chart renderer for the gamma curve.
// Visual: a white canvas with a framed plot area, light grid, tick
// labels on both axes, the curve drawn point-to-point, a legend box
// naming the gamma value, and a title across the top.

use crate::draw::{draw_line, draw_rect, draw_text_5x7, fill_rect, text_width_5x7};
use crate::lut::GammaLut;
use crate::types::FrameBuffer;

pub const CHART_WIDTH: usize = 640;
pub const CHART_HEIGHT: usize = 480;

// Margins leave room for tick labels, the axis names and the title.
const MARGIN_LEFT: i32 = 56;
const MARGIN_RIGHT: i32 = 16;
const MARGIN_TOP: i32 = 28;
const MARGIN_BOTTOM: i32 = 44;

const TICK_STEP: usize = 50; // input/output levels between grid lines
const TICK_LEN: i32 = 3;

const COLOR_CANVAS: u32 = 0x00_FF_FF_FF;
const COLOR_GRID: u32 = 0x00_D8_D8_D8;
const COLOR_AXIS: u32 = 0x00_20_20_20;
const COLOR_CURVE: u32 = 0x00_1F_77_B4;

/// Render the full chart for one table. The curve is drawn after the
/// grid and frame so it stays on top; the legend is drawn last.
pub fn render_chart(lut: &GammaLut) -> FrameBuffer {
    let mut fb = FrameBuffer::filled(CHART_WIDTH, CHART_HEIGHT, COLOR_CANVAS);
    draw_grid(&mut fb);
    draw_frame_and_ticks(&mut fb);
    draw_titles(&mut fb);
    draw_curve(&mut fb, lut);
    draw_legend(&mut fb, lut.gamma());
    fb
}

/* ---------- Geometry: level (0..=255) to pixel coordinates ---------- */

fn plot_width() -> i32 {
    CHART_WIDTH as i32 - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> i32 {
    CHART_HEIGHT as i32 - MARGIN_TOP - MARGIN_BOTTOM
}

/// Column for an input level; level 0 is the left edge of the plot area.
fn x_to_px(level: usize) -> i32 {
    MARGIN_LEFT + ((level as f64 / 255.0) * (plot_width() - 1) as f64).round() as i32
}

/// Row for an output level; level 0 is the *bottom* edge (screen y grows
/// downward, chart y grows upward).
fn y_to_px(level: usize) -> i32 {
    let h = plot_height();
    MARGIN_TOP + (h - 1) - ((level as f64 / 255.0) * (h - 1) as f64).round() as i32
}

fn ticks() -> impl Iterator<Item = usize> {
    (0..=255).step_by(TICK_STEP)
}

/* ---------- Chart layers ---------- */

fn draw_grid(fb: &mut FrameBuffer) {
    let (top, bottom) = (MARGIN_TOP, MARGIN_TOP + plot_height() - 1);
    let (left, right) = (MARGIN_LEFT, MARGIN_LEFT + plot_width() - 1);
    for t in ticks() {
        draw_line(fb, x_to_px(t), top, x_to_px(t), bottom, COLOR_GRID);
        draw_line(fb, left, y_to_px(t), right, y_to_px(t), COLOR_GRID);
    }
}

fn draw_frame_and_ticks(fb: &mut FrameBuffer) {
    let (top, bottom) = (MARGIN_TOP, MARGIN_TOP + plot_height() - 1);
    let (left, right) = (MARGIN_LEFT, MARGIN_LEFT + plot_width() - 1);
    draw_rect(fb, left, top, right, bottom, COLOR_AXIS);

    for t in ticks() {
        let label = t.to_string();

        // X ticks below the frame, labels centered under the mark
        let x = x_to_px(t);
        draw_line(fb, x, bottom + 1, x, bottom + TICK_LEN, COLOR_AXIS);
        draw_text_5x7(
            fb,
            x - text_width_5x7(&label) / 2,
            bottom + TICK_LEN + 4,
            &label,
            COLOR_AXIS,
        );

        // Y ticks left of the frame, labels right-aligned to the mark
        let y = y_to_px(t);
        draw_line(fb, left - TICK_LEN, y, left - 1, y, COLOR_AXIS);
        draw_text_5x7(
            fb,
            left - TICK_LEN - 4 - text_width_5x7(&label),
            y - 3,
            &label,
            COLOR_AXIS,
        );
    }
}

fn draw_titles(fb: &mut FrameBuffer) {
    let title = "GAMMA CORRECTION LUT";
    let cx = MARGIN_LEFT + plot_width() / 2;
    draw_text_5x7(fb, cx - text_width_5x7(title) / 2, 10, title, COLOR_AXIS);

    let x_name = "INPUT";
    draw_text_5x7(
        fb,
        cx - text_width_5x7(x_name) / 2,
        CHART_HEIGHT as i32 - 14,
        x_name,
        COLOR_AXIS,
    );

    // The bitmap font doesn't rotate, so the y-axis name is stacked.
    let y_name = "OUTPUT";
    let mut y = MARGIN_TOP + (plot_height() - y_name.len() as i32 * 8) / 2;
    for ch in y_name.chars() {
        draw_text_5x7(fb, 8, y, &ch.to_string(), COLOR_AXIS);
        y += 8;
    }
}

fn draw_curve(fb: &mut FrameBuffer, lut: &GammaLut) {
    let vals = lut.values();
    let mut prev = (x_to_px(0), y_to_px(vals[0] as usize));
    for (i, &v) in vals.iter().enumerate().skip(1) {
        let next = (x_to_px(i), y_to_px(v as usize));
        draw_line(fb, prev.0, prev.1, next.0, next.1, COLOR_CURVE);
        prev = next;
    }
}

/// Pick a corner of the plot area the curve stays away from: a gamma
/// below 1 bows the curve toward the upper left, one above 1 toward the
/// lower right.
fn legend_anchor(gamma: f64, box_w: i32, box_h: i32) -> (i32, i32) {
    if gamma >= 1.0 {
        (MARGIN_LEFT + 10, MARGIN_TOP + 10)
    } else {
        (
            MARGIN_LEFT + plot_width() - 10 - box_w,
            MARGIN_TOP + plot_height() - 10 - box_h,
        )
    }
}

fn draw_legend(fb: &mut FrameBuffer, gamma: f64) {
    let label = format!("gamma={gamma}");
    let sample_w = 18; // short sample segment in the curve color
    let pad = 6;
    let box_w = pad + sample_w + 4 + text_width_5x7(&label) + pad;
    let box_h = 7 + 2 * pad;

    let (x0, y0) = legend_anchor(gamma, box_w, box_h);
    fill_rect(fb, x0, y0, x0 + box_w, y0 + box_h, COLOR_CANVAS);
    draw_rect(fb, x0, y0, x0 + box_w, y0 + box_h, COLOR_AXIS);

    let mid_y = y0 + box_h / 2;
    draw_line(fb, x0 + pad, mid_y, x0 + pad + sample_w, mid_y, COLOR_CURVE);
    draw_text_5x7(fb, x0 + pad + sample_w + 4, mid_y - 3, &label, COLOR_AXIS);
}
