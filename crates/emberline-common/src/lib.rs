pub mod errors;
pub mod notifications;
pub mod peer;

pub use errors::{ConfigError, EmberlineError};
pub use notifications::NotificationTracker;
pub use peer::PeerId;

pub type Result<T> = std::result::Result<T, EmberlineError>;
