use glam::Mat4;

/// Vertex layout of the sandbox primitive: position + RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// The sandbox triangle: red, green and blue corners
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new([0.5, -0.5, 0.0], [1.0, 0.0, 0.0, 1.0]),
    Vertex::new([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0, 1.0]),
    Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0, 1.0]),
];

pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

/// Uniform buffer data for GPU (`uMVP`)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub mvp: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn new(mvp: Mat4) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 7 * 4);
        assert_eq!(Vertex::ATTRIBUTES[1].offset, 12);
    }

    #[test]
    fn test_transform_uniform_is_column_major() {
        let mvp = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let uniform = TransformUniform::new(mvp);
        assert_eq!(uniform.mvp[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(std::mem::size_of::<TransformUniform>(), 64);
    }
}
