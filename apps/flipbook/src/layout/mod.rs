// Layout engine: line-budget metrics, greedy page packing, reader navigation
// and localized page views. Everything here except `handlers` is pure.

pub mod cost;
pub mod handlers;
pub mod metrics;
pub mod navigation;
pub mod packer;
pub mod view;

// Re-export the public API consumed by main.
pub use metrics::raster_metrics;
pub use packer::paginate;
