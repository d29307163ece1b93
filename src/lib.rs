pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod render;

pub use api::{MetricsClient, MetricsService};
pub use app::{SearchInput, Session, ViewMode};
pub use config::Config;
pub use error::{Error, Result};
pub use query::{parse_query, Query};
