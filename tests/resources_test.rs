use shape_ngin::{AppConfig, resources::load_shaders};

use crate::common::test_utils::test_config;

mod common;

#[tokio::test]
async fn loads_both_shader_stages() {
    let shaders = load_shaders(&test_config()).await.unwrap();
    assert!(shaders.vertex.contains("fn vs_main"));
    assert!(shaders.vertex.contains("VertexShaderExternalData"));
    assert!(shaders.pixel.contains("fn fs_main"));
}

#[tokio::test]
async fn missing_shader_names_the_file() {
    let config = AppConfig {
        pixel_shader: "DoesNotExist.wgsl".to_string(),
        ..test_config()
    };
    let err = load_shaders(&config).await.unwrap_err();
    assert!(format!("{:#}", err).contains("DoesNotExist.wgsl"), "{:#}", err);
}
