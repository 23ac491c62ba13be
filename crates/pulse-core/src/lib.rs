// File: crates/pulse-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, bar/line/pie layouts and SVG output.

pub mod bar;
pub mod chart;
pub mod color;
pub mod downsample;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod line;
pub mod pie;
pub mod scale;
pub mod scene;
pub mod series;
pub mod session;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{Chart, RenderOptions, SeriesLegend};
pub use color::Color;
pub use error::{ChartError, Result};
pub use layout::{EmptyReason, Layout};
pub use scene::{Node, Scene};
pub use series::{BarPoint, ChartData, ChartKind, ChartSpec, LinePoint, PiePoint};
pub use session::{FileStore, MemoryStore, Session, SessionStore, User};
pub use theme::Theme;
pub use types::Insets;
