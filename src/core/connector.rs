//! Geometrie der abgerundeten Eck-Verbindung: zwei Strecken mit gemeinsamem
//! Eckpunkt werden durch einen tangentialen Kreisbogen verbunden.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Welche Seite der Verbindung betroffen ist (Start- oder Endstrecke).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentSide {
    Start,
    End,
}

/// Degenerierte Eingabe: Start- bzw. Endpunkt fällt mit dem Eckpunkt zusammen,
/// der Richtungsvektor hat Länge 0 und ist nicht normalisierbar.
///
/// Für den Aufrufer ist das kein fataler Zustand: den Zeichenzyklus
/// überspringen, sobald die Punkte wieder auseinanderliegen ist die
/// Geometrie gültig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("degenerierte Geometrie: {side:?}-Punkt fällt mit dem Eckpunkt zusammen")]
pub struct DegenerateGeometryError {
    /// Betroffene Seite der Verbindung
    pub side: SegmentSide,
}

/// Modus der Radius-Anpassung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadiusBalancing {
    /// Nomineller Radius unverändert
    Fixed,
    /// Radius wächst mit dem Öffnungswinkel der beiden Strecken
    AngleBalanced,
}

/// Zeichenbefehl eines [`ConnectorPlan`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Stift ohne Linie auf den Zielpunkt setzen
    MoveTo(DVec2),
    /// Gerade Linie von der aktuellen Stiftposition zum Zielpunkt
    LineTo(DVec2),
    /// Kreisbogen von der aktuellen Stiftposition nach `to`.
    ///
    /// Vertrag: der Stift steht beim Ausführen bereits auf dem Start-Tangentenpunkt
    /// (der Plan emittiert die Zuleitung immer explizit als `LineTo`). Der Bogen
    /// verläuft durch beide Tangentenpunkte, sein Mittelpunkt liegt auf der
    /// Winkelhalbierenden durch `corner`; der Renderer muss keine Lücke
    /// überbrücken.
    ArcTo {
        /// Eckpunkt (Schnittpunkt der beiden Tangenten)
        corner: DVec2,
        /// End-Tangentenpunkt
        to: DVec2,
        /// Bogenradius
        radius: f64,
    },
}

/// Parameter-Bundle für [`compute_connector`] (Clippy: max 7 Parameter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorRequest {
    /// Startpunkt der ersten Strecke
    pub start: DVec2,
    /// Gemeinsamer Eckpunkt beider Strecken
    pub corner: DVec2,
    /// Endpunkt der zweiten Strecke
    pub end: DVec2,
    /// Nomineller Eck-Radius (>= 0)
    pub radius: f64,
    /// Linienstärke in Pixeln, wird unverändert durchgereicht
    pub line_width: f32,
    /// Linienfarbe (RGBA), wird unverändert durchgereicht
    pub color: [f32; 4],
    /// Radius-Anpassung
    pub balancing: RadiusBalancing,
}

/// Geordnete Zeichenbefehle einer Eck-Verbindung plus durchgereichter Stil.
///
/// Wird pro Frame aus den aktuellen drei Punkten neu berechnet und nach dem
/// Abspielen verworfen; es gibt keinen veränderbaren Zustand.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorPlan {
    pub commands: Vec<DrawCommand>,
    pub line_width: f32,
    pub color: [f32; 4],
}

/// Effektiver Bogenradius nach Radius-Anpassung.
///
/// `Fixed` gibt den nominellen Radius unverändert zurück, ohne Klammerung
/// auf die Streckenlängen. Ein Radius oberhalb der kürzeren Strecke
/// überschießt sichtbar; das ist gewollter Stil, kein Fehlerfall.
///
/// `AngleBalanced` skaliert mit `1.0 - (dot - 0.5)`: je weiter sich die
/// beiden Strecken öffnen (dot → -1), desto größer der Radius. Der Faktor
/// liegt für dot in [-1, 1] in [0.5, 2.5] und wird nicht geklammert.
pub fn effective_radius(
    nominal: f64,
    unit1: DVec2,
    unit2: DVec2,
    balancing: RadiusBalancing,
) -> f64 {
    match balancing {
        RadiusBalancing::Fixed => nominal,
        RadiusBalancing::AngleBalanced => nominal * (1.0 - (unit1.dot(unit2) - 0.5)),
    }
}

/// Berechnet den Zeichenplan einer abgerundeten Eck-Verbindung.
///
/// Ablauf:
/// 1. Richtungsvektoren vom Eckpunkt zu Start und Ende, normalisiert
///    (Länge 0 ⇒ [`DegenerateGeometryError`]);
/// 2. effektiver Radius gemäß [`RadiusBalancing`];
/// 3. Tangentenpunkte `corner + unit_i * r_eff`;
/// 4. Befehle `MoveTo(start)`, `LineTo(t1)`, `ArcTo{corner, t2, r_eff}`, `LineTo(end)`.
///
/// Reine Funktion ohne Seiteneffekte; identische Eingaben liefern einen
/// identischen Plan. Beide Tangentenpunkte liegen exakt `r_eff` vom Eckpunkt
/// entfernt auf den jeweiligen Richtungsvektoren.
pub fn compute_connector(
    request: &ConnectorRequest,
) -> Result<ConnectorPlan, DegenerateGeometryError> {
    debug_assert!(request.radius >= 0.0, "nomineller Radius muss >= 0 sein");
    debug_assert!(request.line_width >= 0.0, "Linienstärke muss >= 0 sein");

    let v1 = request.start - request.corner;
    let v2 = request.end - request.corner;

    let len1 = v1.length();
    let len2 = v2.length();
    if len1 < f64::EPSILON {
        return Err(DegenerateGeometryError {
            side: SegmentSide::Start,
        });
    }
    if len2 < f64::EPSILON {
        return Err(DegenerateGeometryError {
            side: SegmentSide::End,
        });
    }

    let unit1 = v1 / len1;
    let unit2 = v2 / len2;

    let radius = effective_radius(request.radius, unit1, unit2, request.balancing);

    let tangent1 = request.corner + unit1 * radius;
    let tangent2 = request.corner + unit2 * radius;

    Ok(ConnectorPlan {
        commands: vec![
            DrawCommand::MoveTo(request.start),
            DrawCommand::LineTo(tangent1),
            DrawCommand::ArcTo {
                corner: request.corner,
                to: tangent2,
                radius,
            },
            DrawCommand::LineTo(request.end),
        ],
        line_width: request.line_width,
        color: request.color,
    })
}
