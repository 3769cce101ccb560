//! Rasterization of chart snapshots and frame-by-frame animation rendering.

pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod pipeline;
