//! spider-chart: spider/radar chart engine with pluggable render backends.
//!
//! The crate is split into a pure geometry core (`core`), a composition and
//! widget layer (`api`), and backend-agnostic draw primitives plus renderers
//! (`render`). A chart pass is `config + data -> ordered RenderFrame`, which
//! any `Renderer` then draws without reordering.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{SpiderChart, SpiderChartConfig, compose_chart};
pub use error::{ChartError, ChartResult};
