//! Anwendungszustand: Punkte, Optionen, Drag-Eingabe und Neuzeichnen pro Frame.

use eframe::egui;

use crate::core::{
    compute_connector, ConnectorPlan, ConnectorPoints, ConnectorRequest, RadiusBalancing,
};
use crate::render;
use crate::shared::{
    EditorOptions, ARC_MAX_SEGMENT_LENGTH, INITIAL_CORNER, INITIAL_END, INITIAL_START,
};
use crate::ui::InputState;

/// Haupt-Anwendungsstruktur
pub struct EditorApp {
    points: ConnectorPoints,
    options: EditorOptions,
    input: InputState,
    /// Letzter berechneter Plan (None bei degenerierter Geometrie)
    plan: Option<ConnectorPlan>,
    config_path: std::path::PathBuf,
}

impl EditorApp {
    pub fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let mut app = Self {
            points: ConnectorPoints::new(INITIAL_START, INITIAL_CORNER, INITIAL_END),
            options,
            input: InputState::new(),
            plan: None,
            config_path,
        };
        app.recompute();
        app
    }

    /// Baut den Verbindungs-Plan aus den aktuellen Punkten neu auf.
    ///
    /// Degenerierte Geometrie (ein Marker liegt exakt auf dem Eckpunkt) ist
    /// nicht fatal: der Plan entfällt für diesen Frame, die Marker bleiben
    /// sichtbar und draggbar, beim nächsten Auseinanderziehen ist die
    /// Geometrie wieder gültig.
    fn recompute(&mut self) {
        let request = ConnectorRequest {
            start: self.points.start,
            corner: self.points.corner,
            end: self.points.end,
            radius: self.options.connector_radius,
            line_width: self.options.line_width,
            color: self.options.connector_color,
            balancing: self.options.balancing,
        };
        match compute_connector(&request) {
            Ok(plan) => self.plan = Some(plan),
            Err(e) => {
                log::debug!("Verbindung für diesen Frame übersprungen: {}", e);
                self.plan = None;
            }
        }
    }

    fn save_options(&self) {
        if let Err(e) = self.options.save_to_file(&self.config_path) {
            log::warn!("Optionen konnten nicht gespeichert werden: {}", e);
        }
    }

    /// Rendert das Konfigurationspanel.
    ///
    /// Gibt `true` zurück wenn sich eine Einstellung geändert hat.
    fn render_config_panel(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Verbindung");
        ui.add_space(4.0);

        changed |= ui
            .add(
                egui::Slider::new(&mut self.options.connector_radius, 0.0..=200.0)
                    .text("Eck-Radius"),
            )
            .changed();

        ui.label("Radius-Anpassung:");
        let old_balancing = self.options.balancing;
        egui::ComboBox::from_id_salt("radius_balancing")
            .selected_text(match self.options.balancing {
                RadiusBalancing::Fixed => "Fest",
                RadiusBalancing::AngleBalanced => "Winkelabhängig",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.options.balancing, RadiusBalancing::Fixed, "Fest");
                ui.selectable_value(
                    &mut self.options.balancing,
                    RadiusBalancing::AngleBalanced,
                    "Winkelabhängig",
                );
            });
        changed |= self.options.balancing != old_balancing;

        changed |= ui
            .add(egui::Slider::new(&mut self.options.line_width, 0.5..=16.0).text("Linienstärke"))
            .changed();

        ui.horizontal(|ui| {
            ui.label("Farbe:");
            changed |= ui
                .color_edit_button_rgba_unmultiplied(&mut self.options.connector_color)
                .changed();
        });

        ui.add_space(8.0);
        if ui.button("Punkte zurücksetzen").clicked() {
            self.points = ConnectorPoints::new(INITIAL_START, INITIAL_CORNER, INITIAL_END);
            changed = true;
        }

        changed
    }

    /// Zeichenbereich: Pointer-Eingabe, Neuaufbau bei Bewegung, Abspielen des Plans.
    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        painter.rect_filled(
            rect,
            0.0,
            render::color32_from_rgba(self.options.background_color),
        );

        let moved = self.input.handle_pointer(
            &response,
            rect,
            &mut self.points,
            self.options.pick_radius() as f64,
        );
        if moved {
            self.recompute();
        }

        if let Some(plan) = &self.plan {
            render::paint_connector(&painter, rect, plan, ARC_MAX_SEGMENT_LENGTH);
        }
        render::paint_markers(&painter, rect, &self.points, &self.options);
    }
}

impl Default for EditorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut options_changed = false;

        egui::SidePanel::right("config_panel")
            .default_width(220.0)
            .show(ctx, |ui| {
                options_changed = self.render_config_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| self.render_canvas(ui));

        if options_changed {
            self.recompute();
            self.save_options();
        }
    }
}
