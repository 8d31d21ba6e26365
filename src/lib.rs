//! Corner-Connector Editor Library.
//! Kern-Geometrie als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::EditorApp;
pub use core::{
    compute_connector, effective_radius, ConnectorPlan, ConnectorPoints, ConnectorRequest,
    DegenerateGeometryError, DrawCommand, RadiusBalancing, SegmentSide,
};
pub use render::{flatten_arc, plan_to_polyline};
pub use shared::EditorOptions;
pub use ui::{InputState, MarkerId};
