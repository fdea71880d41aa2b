use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Common configuration for creating and sharing an image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// The name of the image. Required.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_name: String,

    /// The description of the image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_description: String,

    /// Tags for the image in key/value format.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_tags: HashMap<String, String>,

    /// Members to add to the image after creation. A member is usually a
    /// project (also called a tenant) the image is shared with.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_members: Vec<String>,

    /// **Deprecated.** Accept the share on behalf of the members so they see
    /// the image in their project. Needs privileges in both the build project
    /// and the member projects. Defaults to false.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_auto_accept_members: bool,
}

/// An explicit null reads as the zero value, same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ImageConfig {
    pub fn new(image_name: impl Into<String>) -> Self {
        Self {
            image_name: image_name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.image_description = description.into();
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.image_tags.insert(key.into(), value.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.image_members.push(member.into());
        self
    }

    /// Tags ordered by key, for stable output
    pub fn sorted_tags(&self) -> Vec<(&str, &str)> {
        let mut tags: Vec<(&str, &str)> = self
            .image_tags
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        tags.sort_unstable_by(|a, b| a.0.cmp(b.0));
        tags
    }

    /// Warnings for deprecated options that are set. These never fail a build.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.image_auto_accept_members {
            warnings.push(
                "image_auto_accept_members is deprecated and will be removed in a future release"
                    .to_string(),
            );
        }
        warnings
    }
}
