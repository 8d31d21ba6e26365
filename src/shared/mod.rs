//! Gemeinsame Konfiguration und Konstanten.

pub mod options;

pub use options::{
    EditorOptions, ARC_MAX_SEGMENT_LENGTH, BACKGROUND_COLOR, CONNECTOR_COLOR,
    CONNECTOR_LINE_WIDTH, CONNECTOR_RADIUS, INITIAL_CORNER, INITIAL_END, INITIAL_START,
    MARKER_COLOR_CORNER, MARKER_COLOR_END, MARKER_COLOR_START, MARKER_PICK_PADDING_PX,
    MARKER_RADIUS_PX,
};
