//! Kern-Geometrie: Eck-Verbindung mit abgerundetem Übergang, engine-unabhängig.

mod connector;


pub use connector::{
    compute_connector, effective_radius, ConnectorPlan, ConnectorRequest,
    DegenerateGeometryError, DrawCommand, RadiusBalancing, SegmentSide,
};

use glam::DVec2;

/// Die drei vom Aufrufer verwalteten Punkte der Verbindung.
///
/// Reiner Werttyp mit Wertgleichheit; Identität gibt es nur über die
/// Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorPoints {
    pub start: DVec2,
    pub corner: DVec2,
    pub end: DVec2,
}

impl ConnectorPoints {
    pub fn new(start: DVec2, corner: DVec2, end: DVec2) -> Self {
        Self { start, corner, end }
    }
}
