//! Bogen-Zerlegung: ein `ArcTo`-Befehl wird als Polylinie abgetastet.
//!
//! egui kennt kein Bogen-Primitiv; wie bei Kurven wird daher in Segmente
//! fester Maximallänge zerlegt und als Linienzug gezeichnet.

use glam::DVec2;

/// Unterhalb dieser Schwelle gilt die Winkelhalbierende als verschwunden (kollineare Strecken).
const ANGLE_EPSILON: f64 = 1e-9;

/// Tastet den Kreisbogen mit Radius `radius` ab, der die beiden
/// Tangentenpunkte `from` und `to` verbindet.
///
/// `from` und `to` sind die Tangentenpunkte im Abstand `radius` vom Eckpunkt
/// (so wie `compute_connector` sie emittiert). Der Bogenmittelpunkt liegt auf
/// der Winkelhalbierenden im Abstand `2 · radius · cos(θ/2)` vom Eckpunkt —
/// der einzige Punkt dort, der von beiden Tangentenpunkten exakt `radius`
/// entfernt ist. Der Bogen beginnt und endet damit ohne Versatz auf den
/// Tangentenpunkten.
///
/// Rückgabe: mindestens zwei Punkte, erster = `from`, letzter = `to`.
/// Degenerierte Fälle (Radius ~0, kollineare Strecken) fallen auf die gerade
/// Zwei-Punkt-Polylinie zurück.
pub fn flatten_arc(
    from: DVec2,
    corner: DVec2,
    to: DVec2,
    radius: f64,
    max_segment_length: f64,
) -> Vec<DVec2> {
    if radius < f64::EPSILON {
        return vec![from, to];
    }

    let (Some(unit1), Some(unit2)) = (
        (from - corner).try_normalize(),
        (to - corner).try_normalize(),
    ) else {
        // Tangentenpunkt fällt mit dem Eckpunkt zusammen
        return vec![from, to];
    };

    let dot = unit1.dot(unit2).clamp(-1.0, 1.0);
    let bisector = unit1 + unit2;
    if bisector.length_squared() < ANGLE_EPSILON {
        // kollinear (θ = π): gerader Durchgang, kein Bogen nötig
        return vec![from, to];
    }

    // cos(θ/2) über den Halbwinkelsatz; Sehne t1–t2 = 2·r·sin(θ/2) ⇒ der
    // Mittelpunkt im Abstand 2·r·cos(θ/2) trägt beide Tangentenpunkte
    let cos_half = ((1.0 + dot) * 0.5).sqrt();
    let center = corner + bisector.normalize() * (2.0 * radius * cos_half);
    let start_angle = (from - center).to_angle();
    let end_angle = (to - center).to_angle();

    // kürzester Drehsinn; der Eck-Bogen überstreicht immer weniger als π
    let mut sweep = end_angle - start_angle;
    if sweep > std::f64::consts::PI {
        sweep -= std::f64::consts::TAU;
    } else if sweep < -std::f64::consts::PI {
        sweep += std::f64::consts::TAU;
    }

    let arc_length = sweep.abs() * radius;
    let segment_count = (arc_length / max_segment_length).ceil().max(1.0) as usize;

    let mut points = Vec::with_capacity(segment_count + 1);
    for i in 0..=segment_count {
        let t = i as f64 / segment_count as f64;
        points.push(center + DVec2::from_angle(start_angle + sweep * t) * radius);
    }
    points
}
