use super::resources::InstanceData;
use super::Renderer;
use crate::simulation::Circle;
use game_core::Color as ArenaColor;
use wgpu::*;

pub fn draw_frame(
    renderer: &mut Renderer,
    circles: &[Circle],
    background: ArenaColor,
) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let count = update_instances(renderer, circles);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Arena Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: background.r as f64,
                        g: background.g as f64,
                        b: background.b as f64,
                        a: background.a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if count > 0 {
            pass.set_pipeline(&renderer.circle_pipeline);
            pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
            pass.set_vertex_buffer(0, renderer.circle.vertex_buffer.slice(..));
            pass.set_index_buffer(renderer.circle.index_buffer.slice(..), IndexFormat::Uint16);
            pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
            pass.draw_indexed(0..renderer.circle.index_count, 0, 0..count);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Upload the instances if they changed since the last frame; returns how many to draw
fn update_instances(renderer: &mut Renderer, circles: &[Circle]) -> u32 {
    let instances: Vec<InstanceData> = circles
        .iter()
        .take(renderer.buffers.capacity)
        .map(InstanceData::from)
        .collect();

    if renderer.last_instances.as_deref() != Some(instances.as_slice()) {
        renderer.queue.write_buffer(
            &renderer.buffers.instances,
            0,
            bytemuck::cast_slice(&instances),
        );
        renderer.last_instances = Some(instances.clone());
    }
    instances.len() as u32
}
