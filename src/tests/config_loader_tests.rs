#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::errors::ConfigError;
    use crate::implementations::config::ConfigFormat;
    use crate::models::image::ImageConfig;
    use crate::models::interpolate::InterpolationContext;
    use crate::traits::prepare::Prepare;

    #[test]
    fn test_yaml_config() {
        let yaml = r#"
image_name: my-image
image_description: base image
image_tags:
  env: prod
image_members:
  - tenantA
  - tenantB
"#;
        let config = ImageConfig::from_yaml_str(yaml).expect("valid yaml");
        assert_eq!(config.image_name, "my-image");
        assert_eq!(config.image_description, "base image");
        assert_eq!(config.image_tags.get("env").map(String::as_str), Some("prod"));
        assert_eq!(config.image_members, vec!["tenantA", "tenantB"]);
        assert!(!config.image_auto_accept_members);
    }

    #[test]
    fn test_json_config_with_missing_name() {
        let json = r#"{ "image_tags": { "env": "dev" }, "image_auto_accept_members": true }"#;
        let config = ImageConfig::from_json_str(json).expect("valid json");
        assert!(config.image_name.is_empty());
        assert!(config.image_auto_accept_members);

        let errs = config.prepare(&InterpolationContext::default());
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].to_string(), "image_name must be specified");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{ "image_name": "my-image", "region": "cn-north-4", "flavor": "s3.large" }"#;
        let config = ImageConfig::from_json_str(json).expect("valid json");
        assert_eq!(config, ImageConfig::new("my-image"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let result = ImageConfig::from_json_str(r#"{ "image_members": "tenantA" }"#);
        assert!(matches!(result, Err(ConfigError::JsonParseError(_))));

        let result = ImageConfig::from_yaml_str("image_tags: [a, b]");
        assert!(matches!(result, Err(ConfigError::YamlParseError(_))));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("image.json")).unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("image.YAML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("image.yml")).unwrap(), ConfigFormat::Yaml);
        assert!(
            matches!(
                ConfigFormat::from_path(Path::new("image.toml")),
                Err(ConfigError::UnsupportedFormat(_))
            )
        );
        assert!(ConfigFormat::from_path(Path::new("image")).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = ImageConfig::from_file(Path::new("/nonexistent/ecs-image/config.yaml"));
        assert!(matches!(result, Err(ConfigError::FileReadError { .. })));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("ecs-image-{}.json", std::process::id()));
        let config = ImageConfig::new("my-image")
            .with_description("saved")
            .with_tag("env", "prod")
            .with_member("tenantA");
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = ImageConfig::from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.unwrap(), config);
    }

    #[test]
    fn test_null_name_is_missing() {
        let ctx = InterpolationContext::default();

        for yaml in ["image_name: ~\n", "image_name: null\n", "image_name:\n"] {
            let config = ImageConfig::from_yaml_str(yaml).expect("valid yaml");
            assert!(config.image_name.is_empty(), "{:?} gave {:?}", yaml, config.image_name);
            let errs = config.prepare(&ctx);
            assert_eq!(errs.len(), 1);
            assert_eq!(errs[0].to_string(), "image_name must be specified");
        }

        let config = ImageConfig::from_json_str(r#"{ "image_name": null }"#).expect("valid json");
        assert!(config.image_name.is_empty());
        assert_eq!(config.prepare(&ctx).len(), 1);
    }

    #[test]
    fn test_null_optional_fields_are_zero_values() {
        let json = r#"{
            "image_name": "my-image",
            "image_description": null,
            "image_tags": null,
            "image_members": null,
            "image_auto_accept_members": null
        }"#;
        let config = ImageConfig::from_json_str(json).expect("valid json");
        assert_eq!(config, ImageConfig::new("my-image"));

        let yaml = "image_name: my-image\nimage_tags: ~\nimage_members:\n";
        let config = ImageConfig::from_yaml_str(yaml).expect("valid yaml");
        assert_eq!(config, ImageConfig::new("my-image"));
    }
}
