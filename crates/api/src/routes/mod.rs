pub mod common;
pub mod completion;
pub mod health;
pub mod models;

pub use completion::create_completion;
pub use health::health_check;
pub use models::list_models;
