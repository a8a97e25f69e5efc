//! Contact repository module.

mod r#trait;
pub use r#trait::ContactRepository;

mod mock;
pub use mock::MockContactRepository;

#[cfg(test)]
mod tests;
