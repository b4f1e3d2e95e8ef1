use anyhow::Context;
use cube_core::{
    Camera, PaletteKind, SceneConfig, ShadowedCube, BOX_INDEX_COUNT, CLEAR_COLOR, CUBE_WGSL,
    DRAW_SLOTS,
};
use std::time::Instant;
use wgpu::util::DeviceExt;

use crate::frame::{FrameDraws, Uniforms};
use crate::helpers;

struct DrawSlot {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    object_pipeline: wgpu::RenderPipeline,
    shadow_pipeline: wgpu::RenderPipeline,
    position_vb: wgpu::Buffer,
    color_full_vb: wgpu::Buffer,
    color_black_vb: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    slots: Vec<DrawSlot>,
    camera: Camera,
    cube: ShadowedCube,
    frame_count: u64,
    last_report: Instant,
}

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w winit::window::Window, scene: &SceneConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .context("create surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let info = adapter.get_info();
        log::info!("[gpu] adapter={} backend={:?}", info.name, info.backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .context("request device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface format={:?} size={}x{}", format, config.width, config.height);

        let (depth_tex, depth_view) =
            helpers::create_depth_texture(&device, config.width, config.height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cube_shader"),
            source: wgpu::ShaderSource::Wgsl(CUBE_WGSL.into()),
        });

        // Geometry is uploaded once and shared by both draws
        let cube = ShadowedCube::from_config(scene);
        let geometry = cube.geometry();
        let position_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("position_vb"),
            contents: geometry.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let color_full_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("color_full_vb"),
            contents: geometry.palette_bytes(PaletteKind::Full),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let color_black_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("color_black_vb"),
            contents: geometry.palette_bytes(PaletteKind::Black),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("index_buffer"),
            contents: geometry.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        // Each draw of a frame gets its own uniform buffer; writes land
        // before the pass runs, so a shared buffer would hold only the last.
        let slots = (0..DRAW_SLOTS)
            .map(|i| {
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(&format!("uniforms_{i}")),
                    size: std::mem::size_of::<Uniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("bg_{i}")),
                    layout: &bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                DrawSlot {
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });
        let object_pipeline =
            helpers::make_cube_pipeline(&device, &pipeline_layout, &shader, format, true);
        let shadow_pipeline =
            helpers::make_cube_pipeline(&device, &pipeline_layout, &shader, format, false);

        let camera = Camera::looking_at_box(config.width as f32 / config.height as f32);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            _depth_tex: depth_tex,
            depth_view,
            object_pipeline,
            shadow_pipeline,
            position_vb,
            color_full_vb,
            color_black_vb,
            index_buffer,
            slots,
            camera,
            cube,
            frame_count: 0,
            last_report: Instant::now(),
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        let (depth_tex, depth_view) =
            helpers::create_depth_texture(&self.device, new_size.width, new_size.height);
        self._depth_tex = depth_tex;
        self.depth_view = depth_view;
        self.camera.aspect = new_size.width as f32 / new_size.height as f32;
        log::debug!("[gpu] resized to {}x{}", new_size.width, new_size.height);
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Record this frame's draws: object first, then its shadow
        let mvp = self.camera.mvp();
        let mut draws = FrameDraws::default();
        self.cube.draw_object(&mut draws, &mvp);
        self.cube.draw_shadow(&mut draws, &mvp);
        if draws.len() > self.slots.len() {
            log::warn!(
                "{} draw calls recorded but only {} uniform slots; extra calls dropped",
                draws.len(),
                self.slots.len()
            );
        }
        for (i, call) in draws.slotted() {
            self.queue.write_buffer(
                &self.slots[i].uniform_buffer,
                0,
                bytemuck::bytes_of(&Uniforms::from(&call.matrix)),
            );
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let [r, g, b, a] = CLEAR_COLOR;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            for (i, call) in draws.slotted() {
                let pipeline = if call.depth_write {
                    &self.object_pipeline
                } else {
                    &self.shadow_pipeline
                };
                let colors = match call.palette {
                    PaletteKind::Full => &self.color_full_vb,
                    PaletteKind::Black => &self.color_black_vb,
                };
                rpass.set_pipeline(pipeline);
                rpass.set_bind_group(0, &self.slots[i].bind_group, &[]);
                rpass.set_vertex_buffer(0, self.position_vb.slice(..));
                rpass.set_vertex_buffer(1, colors.slice(..));
                rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..BOX_INDEX_COUNT as u32, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();

        self.frame_count += 1;
        if self.frame_count % 360 == 0 {
            let elapsed = self.last_report.elapsed().as_secs_f32();
            self.last_report = Instant::now();
            log::debug!(
                "[frame] {} frames, orbit took {:.2}s ({:.1} fps)",
                self.frame_count,
                elapsed,
                360.0 / elapsed.max(f32::EPSILON)
            );
        }
        Ok(())
    }
}
