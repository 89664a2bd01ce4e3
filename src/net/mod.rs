//! Backend access: the `PortfolioApi` seam and its HTTP implementation.

pub mod api;
pub mod types;

pub use api::{HttpBackend, PortfolioApi};
pub use types::{ApiError, Comment, HappinessDataset};
