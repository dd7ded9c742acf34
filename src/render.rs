use crate::constants::{CLEAR_COLOR, INITIAL_SPRITE_CAPACITY};
use backdrop_core::{Sprite, Viewport};
use web_sys as web;

mod sprites;

use sprites::{create_instance_buffer, create_sprite_resources, SpriteResources, SpriteUniforms};

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sprites: SpriteResources,
    instances: wgpu::Buffer,
    instance_capacity: usize,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        // The surface owns its canvas handle, so it can outlive the caller's borrow
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Colours are authored in sRGB; a linear target passes them through unchanged
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            log::warn!("[gpu] premultiplied alpha unavailable; backdrop will be opaque");
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sprites = create_sprite_resources(&device, format);
        let instances = create_instance_buffer(&device, INITIAL_SPRITE_CAPACITY);
        log::info!("[gpu] ready: {:?} {}x{} alpha={:?}", format, width, height, alpha_mode);

        let [r, g, b, a] = CLEAR_COLOR;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            sprites,
            instances,
            instance_capacity: INITIAL_SPRITE_CAPACITY,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Re-apply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        log::warn!("[gpu] reconfiguring surface {}x{}", self.width, self.height);
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw `sprites` (CSS pixel coordinates) over a transparent clear.
    pub fn render(&mut self, sprites: &[Sprite], viewport: Viewport) -> Result<(), wgpu::SurfaceError> {
        self.ensure_capacity(sprites.len());
        let size = viewport.size();
        let drawable = !sprites.is_empty() && size.x > 0.0 && size.y > 0.0;
        if drawable {
            let u = SpriteUniforms {
                resolution: size.to_array(),
                _pad: [0.0; 2],
            };
            self.queue
                .write_buffer(&self.sprites.uniform_buffer, 0, bytemuck::bytes_of(&u));
            self.queue
                .write_buffer(&self.instances, 0, bytemuck::cast_slice(sprites));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sprites_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if drawable {
                let bytes = (sprites.len() * std::mem::size_of::<Sprite>()) as u64;
                rpass.set_pipeline(&self.sprites.pipeline);
                rpass.set_bind_group(0, &self.sprites.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.instances.slice(..bytes));
                rpass.draw(0..6, 0..sprites.len() as u32);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl GpuState {
    fn ensure_capacity(&mut self, needed: usize) {
        if needed <= self.instance_capacity {
            return;
        }
        let capacity = needed.next_power_of_two();
        log::debug!("[gpu] growing sprite buffer {} -> {}", self.instance_capacity, capacity);
        self.instances = create_instance_buffer(&self.device, capacity);
        self.instance_capacity = capacity;
    }
}
