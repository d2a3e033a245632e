//! Configuration records describing what the frame renderer draws.
//!
//! A `Scene` lists shader source pairs, static vertex data and the (program,
//! vertex data) pairs drawn every frame. The built-in variants live in
//! `variants`.

pub mod variants;

pub use self::variants::Variant;

use crate::errors::*;
use crate::math::prelude::Color;

/// A pair of vertex and fragment shader sources, linked into one program.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    pub name: String,
    pub vs: String,
    pub fs: String,
}

impl ShaderSource {
    pub fn new<T: Into<String>>(name: T, vs: &str, fs: &str) -> Self {
        ShaderSource {
            name: name.into(),
            vs: vs.to_owned(),
            fs: fs.to_owned(),
        }
    }
}

/// Triangle corners uploaded as-is into one vertex buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexData {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
}

impl VertexData {
    pub fn new<T: Into<String>>(name: T, positions: &[[f32; 3]]) -> Self {
        VertexData {
            name: name.into(),
            positions: positions.to_vec(),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn triangles(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Draws the whole of `scene.vertex_data[vertices]` with `scene.programs[program]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawPair {
    pub program: usize,
    pub vertices: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub name: String,
    pub clear_color: Color<f32>,
    pub programs: Vec<ShaderSource>,
    pub vertex_data: Vec<VertexData>,
    pub draws: Vec<DrawPair>,
}

impl Scene {
    /// Checks that the scene can be built, before any GPU object is created.
    pub fn validate(&self) -> Result<()> {
        let invalid = |detail: String| -> Result<()> {
            Err(Error::ResourceCreation("scene", detail))
        };

        if self.programs.is_empty() {
            return invalid(format!("{} has no shader program.", self.name));
        }

        for v in &self.programs {
            if v.vs.is_empty() || v.fs.is_empty() {
                return invalid(format!(
                    "program {} requires both vertex and fragment shader.",
                    v.name
                ));
            }
        }

        for v in &self.vertex_data {
            if v.is_empty() || v.len() % 3 != 0 {
                return invalid(format!(
                    "vertex data {} holds {} vertices, which is not a whole number of triangles.",
                    v.name,
                    v.len()
                ));
            }
        }

        for (i, v) in self.draws.iter().enumerate() {
            if v.program >= self.programs.len() {
                return invalid(format!("draw {} refers to undefined program {}.", i, v.program));
            }

            if v.vertices >= self.vertex_data.len() {
                return invalid(format!(
                    "draw {} refers to undefined vertex data {}.",
                    i, v.vertices
                ));
            }
        }

        Ok(())
    }

    /// The number of vertices submitted by each frame.
    pub fn vertices_per_frame(&self) -> u32 {
        self.draws
            .iter()
            .map(|v| self.vertex_data[v.vertices].len() as u32)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::variants::*;
    use super::*;

    fn scene() -> Scene {
        Scene {
            name: "test".into(),
            clear_color: Color::black(),
            programs: vec![ShaderSource::new("p", VERTEX_SHADER, ORANGE_FRAGMENT_SHADER)],
            vertex_data: vec![VertexData::new("v", &LEFT_TRIANGLE)],
            draws: vec![DrawPair {
                program: 0,
                vertices: 0,
            }],
        }
    }

    #[test]
    fn valid() {
        assert!(scene().validate().is_ok());
        assert_eq!(scene().vertices_per_frame(), 3);
    }

    #[test]
    fn partial_triangle() {
        let mut scene = scene();
        scene.vertex_data[0].positions.pop();
        assert!(scene.validate().is_err());

        scene.vertex_data[0].positions.clear();
        assert!(scene.validate().is_err());
    }

    #[test]
    fn undefined_references() {
        let mut s = scene();
        s.draws[0].program = 1;
        assert!(s.validate().is_err());

        let mut s = scene();
        s.draws[0].vertices = 1;
        assert!(s.validate().is_err());
    }

    #[test]
    fn missing_shaders() {
        let mut s = scene();
        s.programs.clear();
        assert!(s.validate().is_err());

        let mut s = scene();
        s.programs[0].fs.clear();
        assert!(s.validate().is_err());
    }
}
