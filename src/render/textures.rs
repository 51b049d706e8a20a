//! Texture sourcing for the demo scene.
//!
//! Each logical texture first looks for an override image in the assets
//! directory and falls back to a generated pattern, so the program runs with
//! no files on disk at all.

use std::path::Path;
use std::sync::Arc;

use crate::abs::Texture;
use crate::render::patterns::{self, PATTERN_SIZE};

const BLUE: [u8; 3] = [58, 92, 182];
const GREEN: [u8; 3] = [52, 132, 72];

/// The three textures the scene samples from.
pub struct SceneTextures {
    /// Brick wall, used by the ground plane.
    pub brick: Texture,
    /// Speckled blue, shared by the box, cylinder and torus.
    pub blue: Texture,
    /// Mottled green, used by the sphere.
    pub green: Texture,
}

/// Which of the scene textures an object samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    Brick,
    Blue,
    Green,
}

impl SceneTextures {
    /// Loads all scene textures, preferring overrides from `assets_dir`.
    pub fn load(gl: &Arc<glow::Context>, assets_dir: &Path) -> Self {
        Self {
            brick: load_or_generate(gl, assets_dir, "brick", patterns::brick),
            blue: load_or_generate(gl, assets_dir, "blue", || patterns::speckle(BLUE, 11)),
            green: load_or_generate(gl, assets_dir, "green", || patterns::mottle(GREEN, 17)),
        }
    }

    pub fn get(&self, slot: TextureSlot) -> &Texture {
        match slot {
            TextureSlot::Brick => &self.brick,
            TextureSlot::Blue => &self.blue,
            TextureSlot::Green => &self.green,
        }
    }
}

fn load_or_generate(
    gl: &Arc<glow::Context>,
    assets_dir: &Path,
    name: &str,
    fallback: impl FnOnce() -> Vec<u8>,
) -> Texture {
    for extension in ["png", "jpg", "jpeg"] {
        let path = assets_dir.join(format!("{name}.{extension}"));
        if !path.exists() {
            continue;
        }
        match image::open(&path) {
            Ok(image) => {
                log::info!("Loaded texture override {}", path.display());
                return Texture::from_image(gl, &image);
            }
            Err(e) => {
                log::warn!("Failed to decode {}: {}", path.display(), e);
            }
        }
    }
    log::info!("Using generated '{name}' texture");
    Texture::from_rgba(gl, PATTERN_SIZE, PATTERN_SIZE, &fallback())
}
