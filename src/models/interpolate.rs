use std::collections::HashMap;

/// Template variable context owned by the host. Configuration fragments
/// receive it during prepare but do not read or change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpolationContext {
    pub user_variables: HashMap<String, String>,
    pub build_name: Option<String>,
    pub build_type: Option<String>,
    pub template_path: Option<String>,
}

impl InterpolationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_variables.insert(key.into(), value.into());
        self
    }

    pub fn with_build_name(mut self, build_name: impl Into<String>) -> Self {
        self.build_name = Some(build_name.into());
        self
    }

    pub fn with_build_type(mut self, build_type: impl Into<String>) -> Self {
        self.build_type = Some(build_type.into());
        self
    }

    pub fn with_template_path(mut self, template_path: impl Into<String>) -> Self {
        self.template_path = Some(template_path.into());
        self
    }
}
