//! Business repository module.

mod r#trait;
pub use r#trait::BusinessRepository;

mod mock;
pub use mock::MockBusinessRepository;

#[cfg(test)]
mod tests;
