//! Integrationstests über die öffentliche Library-API:
//! Plan-Berechnung → Polylinien-Ausführung, wie sie der Editor pro Frame fährt.

use approx::assert_relative_eq;
use corner_connector_editor::{
    compute_connector, plan_to_polyline, ConnectorRequest, DrawCommand, RadiusBalancing,
    SegmentSide,
};
use glam::DVec2;

fn demo_request(balancing: RadiusBalancing) -> ConnectorRequest {
    ConnectorRequest {
        start: DVec2::new(350.0, 100.0),
        corner: DVec2::new(400.0, 300.0),
        end: DVec2::new(550.0, 100.0),
        radius: 50.0,
        line_width: 4.0,
        color: [0.0, 0.0, 0.0, 1.0],
        balancing,
    }
}

#[test]
fn test_frame_pipeline_produces_continuous_polyline() {
    let plan = compute_connector(&demo_request(RadiusBalancing::Fixed))
        .expect("gültige Geometrie");
    let polyline = plan_to_polyline(&plan, 2.0);

    assert_eq!(polyline[0], DVec2::new(350.0, 100.0));
    assert_eq!(*polyline.last().unwrap(), DVec2::new(550.0, 100.0));

    // keine Sprünge an den Bogen-Nahtstellen: zwischen den beiden geraden
    // Zuleitungen (erstes und letztes Segment) bleibt jedes Segment innerhalb
    // der Abtast-Auflösung
    let arc_region = &polyline[1..polyline.len() - 1];
    for window in arc_region.windows(2) {
        let dist = window[0].distance(window[1]);
        assert!(
            dist <= 2.0 + 1e-9,
            "Segment mit Länge {dist} überschreitet die Abtast-Auflösung"
        );
    }

    // alle Werte endlich
    assert!(polyline.iter().all(|p| p.is_finite()));
}

#[test]
fn test_balanced_mode_widens_the_arc() {
    let fixed = compute_connector(&demo_request(RadiusBalancing::Fixed))
        .expect("gültige Geometrie");
    let balanced = compute_connector(&demo_request(RadiusBalancing::AngleBalanced))
        .expect("gültige Geometrie");

    let radius_of = |plan: &corner_connector_editor::ConnectorPlan| match plan.commands[2] {
        DrawCommand::ArcTo { radius, .. } => radius,
        other => panic!("ArcTo erwartet, war {other:?}"),
    };

    // Öffnungswinkel > 90° (dot < 0): der winkelabhängige Radius liegt über dem nominellen
    assert_eq!(radius_of(&fixed), 50.0);
    assert!(radius_of(&balanced) > 50.0);
    assert_relative_eq!(
        radius_of(&balanced),
        50.0 * (1.0 - (-5.0 / 13.0 - 0.5)),
        max_relative = 1e-9
    );
}

#[test]
fn test_degenerate_frame_is_skippable_not_fatal() {
    // Marker auf den Eckpunkt gezogen: Fehler statt Plan, der Aufrufer
    // überspringt den Zeichenzyklus
    let mut request = demo_request(RadiusBalancing::Fixed);
    request.start = request.corner;

    let err = compute_connector(&request).expect_err("degenerierte Geometrie");
    assert_eq!(err.side, SegmentSide::Start);

    // nächster "Frame" mit auseinandergezogenen Punkten funktioniert wieder
    request.start = DVec2::new(100.0, 100.0);
    assert!(compute_connector(&request).is_ok());
}
