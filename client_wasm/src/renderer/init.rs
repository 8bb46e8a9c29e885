use web_sys::HtmlCanvasElement;
use wgpu::*;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

/// Colors are authored as sRGB hex values; a linear target stores them untouched
fn linear_format(adapter: &Adapter, surface: &Surface) -> Result<TextureFormat, String> {
    let formats = surface.get_capabilities(adapter).formats;
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
        .ok_or_else(|| "Surface reports no formats".to_string())
}

fn arena_surface_config(format: TextureFormat, (width, height): (u32, u32)) -> SurfaceConfiguration {
    SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: Vec::new(),
        desired_maximum_frame_latency: 2,
    }
}

pub async fn init_wgpu(canvas: HtmlCanvasElement) -> Result<WgpuContext, String> {
    let size = (canvas.width(), canvas.height());
    if size.0 == 0 || size.1 == 0 {
        return Err(format!("Canvas has no area: {}x{}", size.0, size.1));
    }

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Surface creation failed: {e:?}"))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| "No WebGPU adapter for this canvas".to_string())?;

    let descriptor = DeviceDescriptor {
        label: Some("Arena Device"),
        required_features: Features::empty(),
        required_limits: Limits::downlevel_webgl2_defaults(),
        memory_hints: MemoryHints::default(),
    };
    let (device, queue) = adapter
        .request_device(&descriptor, None)
        .await
        .map_err(|e| format!("Device request failed: {e:?}"))?;

    let config = arena_surface_config(linear_format(&adapter, &surface)?, size);
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size,
    })
}
