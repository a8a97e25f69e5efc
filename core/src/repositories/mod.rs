pub mod business;
pub mod contact;

pub use business::{BusinessRepository, MockBusinessRepository};
pub use contact::{ContactRepository, MockContactRepository};
