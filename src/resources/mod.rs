use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::config::AppConfig;

/**
 * This module contains all logic for loading shaders and geometry from outside the renderer.
 */
pub mod geometry;

/// WGSL source of both shader stages.
#[derive(Clone, Debug)]
pub struct ShaderSources {
    pub vertex: String,
    pub pixel: String,
}

/// Candidate locations of `shaders/<file_name>`, most specific first.
pub fn shader_search_paths(asset_dir: &Path, file_name: &str) -> Vec<PathBuf> {
    vec![
        asset_dir.join("shaders").join(file_name),
        Path::new(env!("OUT_DIR"))
            .join("assets")
            .join("shaders")
            .join(file_name),
    ]
}

pub async fn load_string(asset_dir: &Path, file_name: &str) -> anyhow::Result<String> {
    let candidates = shader_search_paths(asset_dir, file_name);
    let path = candidates
        .iter()
        .find(|path| path.is_file())
        .with_context(|| format!("{} not found, searched {:?}", file_name, candidates))?;

    log::debug!("loading {}", path.display());
    let txt = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(txt)
}

/// Reads the vertex and pixel shaders named in `config`.
pub async fn load_shaders(config: &AppConfig) -> anyhow::Result<ShaderSources> {
    let (vertex, pixel) = futures::try_join!(
        load_string(&config.asset_dir, &config.vertex_shader),
        load_string(&config.asset_dir, &config.pixel_shader),
    )?;
    Ok(ShaderSources { vertex, pixel })
}
