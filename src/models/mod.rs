pub mod image;
pub mod interpolate;

// Re-export common model types
pub use image::ImageConfig;
pub use interpolate::InterpolationContext;
