//! Chart rendering backends.
//!
//! SVG is the only backend; charts are rendered to [`svg::Document`]
//! values and serialized by the caller.

pub mod svg;
