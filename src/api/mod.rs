pub mod client;
pub mod service;

pub use client::MetricsClient;
pub use service::MetricsService;
