//! Abspielen eines `ConnectorPlan` auf den egui-Painter.
//!
//! Renderer-Vertrag: Linienstärke und Farbe setzen, dann die Befehle
//! `MoveTo`/`LineTo`/`ArcTo` in Reihenfolge ausführen. `plan_to_polyline`
//! ist genau diese Ausführung, Bögen werden dabei abgetastet.

mod flatten;


pub use flatten::flatten_arc;

use eframe::egui;
use glam::DVec2;

use crate::core::{ConnectorPlan, ConnectorPoints, DrawCommand};
use crate::shared::EditorOptions;

/// Führt die Zeichenbefehle eines Plans in eine zusammenhängende Polylinie aus.
pub fn plan_to_polyline(plan: &ConnectorPlan, max_segment_length: f64) -> Vec<DVec2> {
    let mut points: Vec<DVec2> = Vec::new();
    let mut pen: Option<DVec2> = None;

    for command in &plan.commands {
        match *command {
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => {
                points.push(p);
                pen = Some(p);
            }
            DrawCommand::ArcTo { corner, to, radius } => {
                let from = pen.unwrap_or(corner);
                let arc = flatten_arc(from, corner, to, radius, max_segment_length);
                // `from` liegt bereits in der Polylinie
                points.extend(arc.into_iter().skip(1));
                pen = Some(to);
            }
        }
    }
    points
}

/// Zeichnet die Verbindung mit durchgereichter Linienstärke und Farbe.
pub fn paint_connector(
    painter: &egui::Painter,
    rect: egui::Rect,
    plan: &ConnectorPlan,
    max_segment_length: f64,
) {
    let polyline = plan_to_polyline(plan, max_segment_length);
    if polyline.len() < 2 {
        return;
    }

    let screen_points: Vec<egui::Pos2> = polyline
        .iter()
        .map(|p| to_screen(rect, *p))
        .collect();
    painter.add(egui::Shape::line(
        screen_points,
        egui::Stroke::new(plan.line_width, color32_from_rgba(plan.color)),
    ));
}

/// Zeichnet die drei draggbaren Marker als halbtransparente Kreise.
pub fn paint_markers(
    painter: &egui::Painter,
    rect: egui::Rect,
    points: &ConnectorPoints,
    options: &EditorOptions,
) {
    let markers = [
        (points.start, options.marker_color_start),
        (points.corner, options.marker_color_corner),
        (points.end, options.marker_color_end),
    ];
    for (position, color) in markers {
        painter.circle_filled(
            to_screen(rect, position),
            options.marker_radius_px,
            color32_from_rgba(color),
        );
    }
}

/// Canvas-Koordinaten (f64, relativ zum Viewport-Ursprung) → Screen-Position.
fn to_screen(rect: egui::Rect, p: DVec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x as f32, rect.min.y + p.y as f32)
}

/// RGBA-Komponenten in 0..=1 → `Color32`.
pub(crate) fn color32_from_rgba(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        (color[3] * 255.0).round() as u8,
    )
}
