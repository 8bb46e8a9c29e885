use crate::camera::{Camera, CameraUniform};
use crate::simulation::Circle;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl From<&Circle> for InstanceData {
    fn from(circle: &Circle) -> Self {
        Self {
            transform: [
                circle.center.x,
                circle.center.y,
                circle.radius,
                circle.radius,
            ],
            tint: circle.color.to_array(),
        }
    }
}

pub struct SceneBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub capacity: usize,
}

pub fn create_buffers(device: &Device, camera: &Camera, capacity: usize) -> SceneBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::bytes_of(&camera_uniform),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Circle Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    SceneBuffers {
        camera: camera_buffer,
        instances,
        capacity,
    }
}
