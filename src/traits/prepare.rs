use crate::errors::ImageConfigError;
use crate::models::interpolate::InterpolationContext;

/// A configuration fragment the host checks before a build starts
pub trait Prepare {
    /// Check the fragment and return every problem found. An empty vector
    /// means the fragment is usable. Implementations must not mutate the
    /// fragment or the context.
    fn prepare(&self, ctx: &InterpolationContext) -> Vec<ImageConfigError>;
}
