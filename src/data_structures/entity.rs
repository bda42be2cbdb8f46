use std::rc::Rc;

use crate::data_structures::{mesh::Mesh, transform::Transform};

/// A drawable object: a shared mesh placed in the world by its own transform.
///
/// The mesh type defaults to the uploaded [`Mesh`]; scene logic that never
/// touches the GPU is generic over it so it can run on CPU-side geometry.
#[derive(Debug)]
pub struct GameEntity<M = Mesh> {
    mesh: Rc<M>,
    transform: Transform,
}

impl<M> GameEntity<M> {
    pub fn with_transform(mesh: Rc<M>, transform: Transform) -> Self {
        Self { mesh, transform }
    }

    pub fn mesh(&self) -> &Rc<M> {
        &self.mesh
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

// Manual impl: cloning shares the mesh, so `M` itself need not be `Clone`.
impl<M> Clone for GameEntity<M> {
    fn clone(&self) -> Self {
        Self {
            mesh: Rc::clone(&self.mesh),
            transform: self.transform.clone(),
        }
    }
}
