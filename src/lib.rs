pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod identifier;
pub mod lang;
pub mod model;
pub mod project;
pub mod reporting;
pub mod types;

pub use crate::model::CityModel;
pub use crate::types::{MeasurementFeed, Metrics, MetricsRecord, NodeKind};
