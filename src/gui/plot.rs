// src/gui/plot.rs
//
// Minimal painter-based plotting: one rectangular data area with linear
// axes, points, bars, gridlines and a dashed reference line. Enough for the
// four dashboard charts; no zoom or pan.

use eframe::egui::{self, pos2, Align2, Color32, FontId, Pos2, Rect, Response, Sense, Shape, Stroke, Vec2};

use crate::{
    config::consts::{BG_COLOR, REFERENCE_LABEL},
    model::{Category, Region},
};

const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 12.0;
const MARGIN_BOTTOM: f32 = 40.0;
const MIN_HEIGHT: f32 = 260.0;

pub fn category_color(c: Category) -> Color32 {
    let [r, g, b] = c.color();
    Color32::from_rgb(r, g, b)
}

/// Round tick positions covering `[min, max]`, roughly `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || target == 0 {
        return vec![min];
    }
    let raw = (max - min) / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);

    let mut out = Vec::new();
    let mut t = (min / step).ceil() * step;
    while t <= max + step * 1e-9 {
        out.push(t);
        t += step;
    }
    out
}

/// Pad a data range and fold in an optional reference value.
pub fn padded_range(values: impl Iterator<Item = f64>, reference: Option<f64>, fallback: (f64, f64)) -> (f64, f64) {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values.chain(reference) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return fallback;
    }
    let pad = ((hi - lo) * 0.05).max(50.0);
    (lo - pad, hi + pad)
}

pub struct Canvas {
    pub painter: egui::Painter,
    pub response: Response,
    plot: Rect,
    x: (f64, f64),
    y: (f64, f64),
    ink: Color32,
}

impl Canvas {
    /// Take the remaining space of `ui` as the chart.
    pub fn new(ui: &mut egui::Ui, x: (f64, f64), y: (f64, f64)) -> Self {
        let size = Vec2::new(ui.available_width(), ui.available_height().max(MIN_HEIGHT));
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let outer = response.rect;
        let plot = Rect::from_min_max(
            pos2(outer.left() + MARGIN_LEFT, outer.top() + MARGIN_TOP),
            pos2(outer.right() - MARGIN_RIGHT, outer.bottom() - MARGIN_BOTTOM),
        );
        let [r, g, b] = BG_COLOR;
        painter.rect_filled(plot, 0.0, Color32::from_rgb(r, g, b));
        let ink = ui.visuals().text_color();
        Self { painter, response, plot, x, y, ink }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        let fx = frac(x, self.x);
        let fy = frac(y, self.y);
        pos2(
            self.plot.left() + fx * self.plot.width(),
            self.plot.bottom() - fy * self.plot.height(),
        )
    }

    fn font() -> FontId { FontId::proportional(12.0) }

    fn grid_stroke() -> Stroke { Stroke::new(1.0, Color32::from_gray(220)) }

    pub fn y_axis(&self, label: &str) {
        for t in nice_ticks(self.y.0, self.y.1, 6) {
            let p = self.to_screen(self.x.0, t);
            self.painter.line_segment([p, pos2(self.plot.right(), p.y)], Self::grid_stroke());
            self.painter.text(pos2(p.x - 6.0, p.y), Align2::RIGHT_CENTER, format!("{t}"), Self::font(), self.ink);
        }
        let mid = pos2(self.response.rect.left() + 4.0, self.plot.top() - 2.0);
        self.painter.text(mid, Align2::LEFT_BOTTOM, label, Self::font(), self.ink);
    }

    /// Regions as evenly spaced categories at x = 0..18.
    pub fn region_x_axis(&self) {
        for (i, r) in Region::ALL.iter().enumerate() {
            let p = self.to_screen(i as f64, self.y.0);
            self.painter.text(pos2(p.x, p.y + 4.0), Align2::CENTER_TOP, r.to_string(), Self::font(), self.ink);
        }
        self.x_label("Region");
    }

    pub fn score_x_axis(&self) {
        for t in nice_ticks(self.x.0, self.x.1, 8) {
            let p = self.to_screen(t, self.y.0);
            self.painter.line_segment([p, pos2(p.x, self.plot.top())], Self::grid_stroke());
            self.painter.text(pos2(p.x, p.y + 4.0), Align2::CENTER_TOP, format!("{t}"), Self::font(), self.ink);
        }
        self.x_label("Score");
    }

    fn x_label(&self, label: &str) {
        let p = pos2(self.plot.center().x, self.response.rect.bottom() - 2.0);
        self.painter.text(p, Align2::CENTER_BOTTOM, label, Self::font(), self.ink);
    }

    pub fn point(&self, x: f64, y: f64, color: Color32) -> Pos2 {
        let p = self.to_screen(x, y);
        self.painter.circle_filled(p, 4.0, color);
        p
    }

    pub fn bar(&self, x0: f64, x1: f64, y0: f64, y1: f64, color: Color32) -> Rect {
        let rect = Rect::from_two_pos(self.to_screen(x0, y0), self.to_screen(x1, y1));
        self.painter.rect_filled(rect, 0.0, color);
        self.painter.rect_stroke(rect, 0.0, Stroke::new(0.5, Color32::WHITE), egui::StrokeKind::Inside);
        rect
    }

    /// Horizontal dashed line at score `y` (scatter charts).
    pub fn h_reference(&self, y: f64) {
        let a = self.to_screen(self.x.0, y);
        let b = pos2(self.plot.right(), a.y);
        self.dashed(a, b);
        self.painter.text(pos2(a.x + 4.0, a.y - 2.0), Align2::LEFT_BOTTOM, REFERENCE_LABEL, Self::font(), self.ink);
    }

    /// Vertical dashed line at score `x` (histograms).
    pub fn v_reference(&self, x: f64) {
        let a = self.to_screen(x, self.y.1);
        let b = pos2(a.x, self.plot.bottom());
        self.dashed(a, b);
        self.painter.text(pos2(a.x - 4.0, a.y + 2.0), Align2::RIGHT_TOP, REFERENCE_LABEL, Self::font(), self.ink);
    }

    fn dashed(&self, a: Pos2, b: Pos2) {
        self.painter.extend(Shape::dashed_line(&[a, b], Stroke::new(1.5, self.ink), 8.0, 5.0));
    }

    pub fn empty_note(&self) {
        self.painter.text(self.plot.center(), Align2::CENTER_CENTER, "No data", FontId::proportional(16.0), self.ink);
    }

    pub fn hover_pos(&self) -> Option<Pos2> {
        self.response.hover_pos().filter(|p| self.plot.contains(*p))
    }

    /// Tooltip at the pointer for whatever the caller found under it.
    pub fn tooltip(&self, text: String) {
        let _ = self.response.clone().on_hover_text_at_pointer(text);
    }
}

fn frac(v: f64, (lo, hi): (f64, f64)) -> f32 {
    if hi > lo { ((v - lo) / (hi - lo)) as f32 } else { 0.5 }
}

/// Colour key for the categories shown.
pub fn legend(ui: &mut egui::Ui, cats: &[Category]) {
    ui.horizontal_wrapped(|ui| {
        for &c in cats {
            ui.label(egui::RichText::new("■").color(category_color(c)));
            ui.label(c.tag()).on_hover_text(c.label());
        }
    });
}
