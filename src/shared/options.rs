//! Zentrale Konfiguration des Corner-Connector-Editors.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::RadiusBalancing;

// ── Verbindung ──────────────────────────────────────────────────────

/// Nomineller Eck-Radius in Canvas-Pixeln.
pub const CONNECTOR_RADIUS: f64 = 50.0;
/// Linienstärke der Verbindung in Pixeln.
pub const CONNECTOR_LINE_WIDTH: f32 = 4.0;
/// Farbe der Verbindung (RGBA: Schwarz).
pub const CONNECTOR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Maximale Segmentlänge beim Abtasten des Bogens (Pixel).
pub const ARC_MAX_SEGMENT_LENGTH: f64 = 2.0;

// ── Marker ──────────────────────────────────────────────────────────

/// Radius der draggbaren Marker in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 16.0;
/// Zusätzlicher Greif-Spielraum beim Hit-Test in Pixeln.
pub const MARKER_PICK_PADDING_PX: f32 = 4.0;
/// Füllfarbe des Start-Markers (RGBA: Rot, halbtransparent).
pub const MARKER_COLOR_START: [f32; 4] = [1.0, 0.0, 0.0, 0.32];
/// Füllfarbe des Eck-Markers (RGBA: Grün, halbtransparent).
pub const MARKER_COLOR_CORNER: [f32; 4] = [0.0, 1.0, 0.0, 0.32];
/// Füllfarbe des End-Markers (RGBA: Blau, halbtransparent).
pub const MARKER_COLOR_END: [f32; 4] = [0.0, 0.0, 1.0, 0.32];

// ── Canvas ──────────────────────────────────────────────────────────

/// Hintergrundfarbe des Zeichenbereichs (RGBA: dunkles Grau, #282b30).
pub const BACKGROUND_COLOR: [f32; 4] = [0.157, 0.169, 0.188, 1.0];
/// Startposition des Start-Punkts (Canvas-Pixel).
pub const INITIAL_START: DVec2 = DVec2::new(350.0, 100.0);
/// Startposition des Eck-Punkts.
pub const INITIAL_CORNER: DVec2 = DVec2::new(400.0, 300.0);
/// Startposition des End-Punkts.
pub const INITIAL_END: DVec2 = DVec2::new(550.0, 100.0);

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `corner_connector_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Verbindung ──────────────────────────────────────────────
    /// Nomineller Eck-Radius in Pixeln
    pub connector_radius: f64,
    /// Radius-Anpassung (fest oder winkelabhängig)
    pub balancing: RadiusBalancing,
    /// Linienstärke in Pixeln
    pub line_width: f32,
    /// Farbe der Verbindung (RGBA)
    pub connector_color: [f32; 4],

    // ── Marker ──────────────────────────────────────────────────
    /// Marker-Radius in Pixeln
    pub marker_radius_px: f32,
    /// Zusätzlicher Greif-Spielraum beim Hit-Test in Pixeln
    #[serde(default = "default_marker_pick_padding_px")]
    pub marker_pick_padding_px: f32,
    /// Füllfarbe des Start-Markers
    pub marker_color_start: [f32; 4],
    /// Füllfarbe des Eck-Markers
    pub marker_color_corner: [f32; 4],
    /// Füllfarbe des End-Markers
    pub marker_color_end: [f32; 4],

    // ── Canvas ──────────────────────────────────────────────────
    /// Hintergrundfarbe des Zeichenbereichs
    pub background_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            connector_radius: CONNECTOR_RADIUS,
            balancing: RadiusBalancing::Fixed,
            line_width: CONNECTOR_LINE_WIDTH,
            connector_color: CONNECTOR_COLOR,

            marker_radius_px: MARKER_RADIUS_PX,
            marker_pick_padding_px: MARKER_PICK_PADDING_PX,
            marker_color_start: MARKER_COLOR_START,
            marker_color_corner: MARKER_COLOR_CORNER,
            marker_color_end: MARKER_COLOR_END,

            background_color: BACKGROUND_COLOR,
        }
    }
}

/// Serde-Default für `marker_pick_padding_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_marker_pick_padding_px() -> f32 {
    MARKER_PICK_PADDING_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("corner_connector_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("corner_connector_editor.toml")
    }

    /// Greif-Radius der Marker beim Hit-Test in Pixeln.
    ///
    /// `marker_radius_px + marker_pick_padding_px`
    pub fn pick_radius(&self) -> f32 {
        self.marker_radius_px + self.marker_pick_padding_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let options =
            EditorOptions::load_from_file(std::path::Path::new("/nonexistent/options.toml"));
        assert_eq!(options, EditorOptions::default());
    }

    #[test]
    fn test_pick_radius_includes_padding() {
        let options = EditorOptions::default();
        assert_eq!(options.pick_radius(), MARKER_RADIUS_PX + MARKER_PICK_PADDING_PX);
    }
}
