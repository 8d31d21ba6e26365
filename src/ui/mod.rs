//! Eingabe-Schicht: Drag-Zustand der draggbaren Marker.

mod input;

#[cfg(test)]
mod tests;

pub use input::{InputState, MarkerId};
