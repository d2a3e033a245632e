//! The three built-in scenes, sharing shader sources and triangle data.

use crate::math::prelude::Color;

use super::{DrawPair, Scene, ShaderSource, VertexData};

pub const VERTEX_SHADER: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main() {
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}";

pub const ORANGE_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main() {
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}";

pub const YELLOW_FRAGMENT_SHADER: &str = "#version 330 core
out vec4 FragColor;
void main() {
    FragColor = vec4(1.0f, 1.0f, 0.0f, 1.0f);
}";

pub const LEFT_TRIANGLE: [[f32; 3]; 3] = [
    [-0.8, -0.4, 0.0],
    [-0.4, 0.4, 0.0],
    [0.0, -0.4, 0.0],
];

pub const RIGHT_TRIANGLE: [[f32; 3]; 3] = [
    [0.0, -0.4, 0.0],
    [0.4, 0.4, 0.0],
    [0.8, -0.4, 0.0],
];

/// The background every variant clears to.
pub fn clear_color() -> Color<f32> {
    [0.2, 0.3, 0.3, 1.0].into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Two triangles in two buffers, drawn with one shared program.
    SharedProgram,
    /// Two triangles in two buffers, each drawn with its own program.
    TwoPrograms,
    /// Two triangles in one buffer, drawn with a single draw call.
    CombinedBuffer,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::SharedProgram => "shared_program",
            Variant::TwoPrograms => "two_programs",
            Variant::CombinedBuffer => "combined_buffer",
        }
    }

    pub fn scene(self) -> Scene {
        match self {
            Variant::SharedProgram => Scene {
                name: self.name().into(),
                clear_color: clear_color(),
                programs: vec![ShaderSource::new(
                    "orange",
                    VERTEX_SHADER,
                    ORANGE_FRAGMENT_SHADER,
                )],
                vertex_data: vec![
                    VertexData::new("left", &LEFT_TRIANGLE),
                    VertexData::new("right", &RIGHT_TRIANGLE),
                ],
                draws: vec![
                    DrawPair {
                        program: 0,
                        vertices: 0,
                    },
                    DrawPair {
                        program: 0,
                        vertices: 1,
                    },
                ],
            },

            Variant::TwoPrograms => Scene {
                name: self.name().into(),
                clear_color: clear_color(),
                programs: vec![
                    ShaderSource::new("orange", VERTEX_SHADER, ORANGE_FRAGMENT_SHADER),
                    ShaderSource::new("yellow", VERTEX_SHADER, YELLOW_FRAGMENT_SHADER),
                ],
                vertex_data: vec![
                    VertexData::new("left", &LEFT_TRIANGLE),
                    VertexData::new("right", &RIGHT_TRIANGLE),
                ],
                draws: vec![
                    DrawPair {
                        program: 0,
                        vertices: 0,
                    },
                    DrawPair {
                        program: 1,
                        vertices: 1,
                    },
                ],
            },

            Variant::CombinedBuffer => {
                let mut positions = LEFT_TRIANGLE.to_vec();
                positions.extend_from_slice(&RIGHT_TRIANGLE);

                Scene {
                    name: self.name().into(),
                    clear_color: clear_color(),
                    programs: vec![ShaderSource::new(
                        "orange",
                        VERTEX_SHADER,
                        ORANGE_FRAGMENT_SHADER,
                    )],
                    vertex_data: vec![VertexData::new("both", &positions)],
                    draws: vec![DrawPair {
                        program: 0,
                        vertices: 0,
                    }],
                }
            }
        }
    }
}
