//! The fixed five-shape demo scene.
//!
//! Shape dimensions and placements are hard-coded; each object pairs a GPU
//! mesh with a model matrix and the texture it samples from.

use std::path::Path;
use std::sync::Arc;

use glam::{Mat4, Vec3};

use crate::abs::{Mesh, ShaderProgram};
use crate::render::shapes;
use crate::render::textures::{SceneTextures, TextureSlot};

/// The single white point light.
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
}

/// One drawable object in the scene.
pub struct SceneObject {
    pub mesh: Mesh,
    pub model: Mat4,
    pub texture: TextureSlot,
}

/// The demo scene: five shapes, three textures, one light.
pub struct Scene {
    pub textures: SceneTextures,
    pub objects: Vec<SceneObject>,
    pub light: Light,
}

impl Scene {
    /// Builds the meshes, loads the textures and places every object.
    pub fn new(gl: &Arc<glow::Context>, assets_dir: &Path) -> Self {
        let textures = SceneTextures::load(gl, assets_dir);

        let upload = |(vertices, indices): shapes::ShapeData| Mesh::new(gl, &vertices, &indices);

        let objects = vec![
            SceneObject {
                mesh: upload(shapes::box_mesh(Vec3::new(0.1, 0.3, 0.3))),
                model: Mat4::from_translation(Vec3::new(-1.9, 0.9, 0.0)),
                texture: TextureSlot::Blue,
            },
            SceneObject {
                mesh: upload(shapes::plane(2.0)),
                model: Mat4::from_translation(Vec3::new(0.0, 0.6, 0.0)),
                texture: TextureSlot::Brick,
            },
            SceneObject {
                mesh: upload(shapes::torus(0.25, 0.1, 20, 10)),
                model: Mat4::from_translation(Vec3::new(1.0, 0.7, 0.0)),
                texture: TextureSlot::Blue,
            },
            SceneObject {
                mesh: upload(shapes::cylinder(0.2, 0.5, 20)),
                model: Mat4::from_translation(Vec3::new(-0.65, 0.9, 0.0)),
                texture: TextureSlot::Blue,
            },
            SceneObject {
                mesh: upload(shapes::sphere(0.3, 20, 20)),
                model: Mat4::from_translation(Vec3::new(1.0, 1.05, 0.0)),
                texture: TextureSlot::Green,
            },
        ];

        Self {
            textures,
            objects,
            light: Light {
                position: Vec3::new(1.0, 2.0, 2.0),
                color: Vec3::ONE,
            },
        }
    }

    /// Draws every object with the given program. The per-frame uniforms
    /// (view, projection, light) must already be set.
    pub fn draw(&self, program: &ShaderProgram) {
        for object in &self.objects {
            program.set_uniform("u_model", object.model);
            self.textures.get(object.texture).bind_to_unit(0);
            object.mesh.draw();
        }
    }
}
