pub mod core;
pub mod loader;

pub use core::EventSender;
pub use loader::{DataLoader, LoadOutcome};
