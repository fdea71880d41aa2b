pub mod prepare;

// Re-export traits
pub use prepare::Prepare;
