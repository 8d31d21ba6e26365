//! Pointer-Eingabe: expliziter Drag-Zustand der drei Marker
//! (Idle → Dragging → Idle bei Pointer-Down/-Up).

use eframe::egui;
use glam::DVec2;

use crate::core::ConnectorPoints;

/// Welcher Marker wird gerade per Drag verschoben?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerId {
    Start,
    Corner,
    End,
}

impl MarkerId {
    pub const ALL: [MarkerId; 3] = [MarkerId::Start, MarkerId::Corner, MarkerId::End];

    /// Position des Markers in den Verbindungs-Punkten.
    pub fn position(self, points: &ConnectorPoints) -> DVec2 {
        match self {
            MarkerId::Start => points.start,
            MarkerId::Corner => points.corner,
            MarkerId::End => points.end,
        }
    }

    fn position_mut(self, points: &mut ConnectorPoints) -> &mut DVec2 {
        match self {
            MarkerId::Start => &mut points.start,
            MarkerId::Corner => &mut points.corner,
            MarkerId::End => &mut points.end,
        }
    }
}

/// Drag-Zustand der Marker-Eingabe.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    /// Gerade gegriffener Marker (None = Idle)
    pub dragging: Option<MarkerId>,
    /// Letzte Pointer-Position in Canvas-Koordinaten
    last_pointer: Option<DVec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet einen Drag auf dem nächstgelegenen Marker innerhalb des Pick-Radius.
    ///
    /// Gibt `true` zurück wenn ein Marker gegriffen wurde.
    pub fn on_drag_start(
        &mut self,
        pointer: DVec2,
        points: &ConnectorPoints,
        pick_radius: f64,
    ) -> bool {
        let mut candidates: Vec<(MarkerId, f64)> = MarkerId::ALL
            .iter()
            .map(|&id| (id, id.position(points).distance(pointer)))
            .collect();
        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some(&(id, dist)) = candidates.first() {
            if dist <= pick_radius {
                self.dragging = Some(id);
                self.last_pointer = Some(pointer);
                return true;
            }
        }
        false
    }

    /// Verschiebt den gegriffenen Marker um das Pointer-Delta.
    ///
    /// Gibt `true` zurück wenn sich eine Position geändert hat
    /// ("moved"-Benachrichtigung für den Neuaufbau der Verbindung).
    pub fn on_drag_update(&mut self, pointer: DVec2, points: &mut ConnectorPoints) -> bool {
        let Some(id) = self.dragging else {
            return false;
        };
        let Some(last) = self.last_pointer else {
            return false;
        };

        let delta = pointer - last;
        self.last_pointer = Some(pointer);
        if delta == DVec2::ZERO {
            return false;
        }
        *id.position_mut(points) += delta;
        true
    }

    /// Beendet den Drag (zurück zu Idle).
    pub fn on_drag_end(&mut self) {
        self.dragging = None;
        self.last_pointer = None;
    }

    /// Verarbeitet die egui-Pointer-Ereignisse eines Frames.
    ///
    /// Gibt `true` zurück wenn ein Marker bewegt wurde.
    pub fn handle_pointer(
        &mut self,
        response: &egui::Response,
        rect: egui::Rect,
        points: &mut ConnectorPoints,
        pick_radius: f64,
    ) -> bool {
        let to_canvas = |pos: egui::Pos2| {
            DVec2::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64)
        };

        if response.drag_started_by(egui::PointerButton::Primary) {
            // press_origin() liefert die exakte Klickposition (vor der
            // Drag-Schwelle), interact_pointer_pos() erst die Position danach
            let press_pos = response
                .ctx
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(pos) = press_pos {
                self.on_drag_start(to_canvas(pos), points, pick_radius);
            }
        }

        let mut moved = false;
        if self.dragging.is_some() {
            if let Some(pos) = response.interact_pointer_pos() {
                moved = self.on_drag_update(to_canvas(pos), points);
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.on_drag_end();
        }
        moved
    }
}
