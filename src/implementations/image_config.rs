use log::debug;

use crate::errors::ImageConfigError;
use crate::models::image::ImageConfig;
use crate::models::interpolate::InterpolationContext;
use crate::traits::prepare::Prepare;

impl Prepare for ImageConfig {
    fn prepare(&self, _ctx: &InterpolationContext) -> Vec<ImageConfigError> {
        debug!("Preparing image config for '{}'", self.image_name);

        let mut errs = Vec::new();
        if self.image_name.is_empty() {
            errs.push(ImageConfigError::MissingField("image_name"));
        }

        errs
    }
}
