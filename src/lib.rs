pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod normalize;
pub mod prompt;
pub mod service;
pub mod transport;

pub use config::Config;
pub use error::{GiftGenieError, Result};
pub use models::{AppState, GiftRecommendation, UserProfile, ViewMode};
pub use service::GiftService;
