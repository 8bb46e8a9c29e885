pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, Mesh};
use crate::simulation::Circle;
use game_core::Color as ArenaColor;
use resources::{InstanceData, SceneBuffers};
use wgpu::*;

/// Six per frame: two balls, two joystick bases, two knobs
const MAX_CIRCLES: usize = 6;
const CIRCLE_SEGMENTS: u16 = 48;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub size: (u32, u32),

    pub circle_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: SceneBuffers,
    pub circle: Mesh,

    pub last_instances: Option<Vec<InstanceData>>,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::viewport(ctx.size.0 as f32, ctx.size.1 as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera, MAX_CIRCLES);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let circle = create_circle(&ctx.device, CIRCLE_SEGMENTS);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            size: ctx.size,
            circle_pipeline: pipes.circle_pipeline,
            camera_bind_group,
            buffers,
            circle,
            last_instances: None,
        })
    }

    /// Viewport size in pixels, as seen by the simulation
    pub fn viewport(&self) -> (f32, f32) {
        (self.size.0 as f32, self.size.1 as f32)
    }

    pub fn draw(&mut self, circles: &[Circle], background: ArenaColor) -> Result<(), String> {
        draw::draw_frame(self, circles, background)
    }
}
