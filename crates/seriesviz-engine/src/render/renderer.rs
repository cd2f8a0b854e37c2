use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Viewport;
use crate::paint::Color;

use super::sink::sprite_size;
use super::stream::{UniformStream, VertexStream};
use super::vertex::{SpriteCorner, SPRITE_CORNERS};
use super::{DrawSink, RenderCtx, RenderTarget, Topology, Vertex};

const SHADER_SRC: &str = include_str!("shaders/series.wgsl");

/// Renderer settings.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Background the frame is cleared to.
    pub clear_color: Color,

    /// Initial size of the streaming vertex buffer, in bytes.
    ///
    /// The buffer grows on demand; this only avoids early reallocations.
    pub initial_vertex_capacity: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::from_u8(0xF7, 0xF5, 0xF0, 0xFF),
            initial_vertex_capacity: 256 * 1024,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SpriteUniform {
    viewport: [f32; 2],
    point_size: f32,
    _pad: f32, // 16-byte alignment
}

struct Pipelines {
    triangles: wgpu::RenderPipeline,
    lines: wgpu::RenderPipeline,
    line_strip: wgpu::RenderPipeline,
    points: wgpu::RenderPipeline,
    sprite_layout: wgpu::BindGroupLayout,
}

impl Pipelines {
    fn get(&self, topology: Topology) -> &wgpu::RenderPipeline {
        match topology {
            Topology::Points => &self.points,
            Topology::Lines => &self.lines,
            Topology::LineStrip => &self.line_strip,
            Topology::Triangles => &self.triangles,
        }
    }
}

/// Minimal immediate-mode renderer.
///
/// Owns one shader module, one pipeline per topology and a streaming vertex
/// buffer. Every draw call uploads its vertex list and records one draw.
pub struct Renderer {
    config: RendererConfig,
    pipelines: Option<Pipelines>,
    vertices: VertexStream,
    sprite_uniforms: Option<UniformStream>,
    sprite_corners: Option<wgpu::Buffer>,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        let vertices = VertexStream::new("seriesviz vertex stream", config.initial_vertex_capacity);
        Self {
            config,
            pipelines: None,
            vertices,
            sprite_uniforms: None,
            sprite_corners: None,
        }
    }

    /// `true` once `initialize` has succeeded.
    pub fn is_usable(&self) -> bool {
        self.pipelines.is_some()
    }

    /// Validates the shader and builds all pipelines for `format`.
    ///
    /// Nothing is stored unless every step succeeds, so a failed call leaves the
    /// renderer unusable and holding no GPU objects.
    pub fn initialize(&mut self, device: &wgpu::Device, format: wgpu::TextureFormat) -> Result<()> {
        validate_shader(SHADER_SRC).context("series shader failed validation")?;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("seriesviz shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });

        let uniform_size = std::mem::size_of::<SpriteUniform>() as u64;
        let sprite_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("seriesviz sprite bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: std::num::NonZeroU64::new(uniform_size),
                },
                count: None,
            }],
        });

        let plain_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("seriesviz plain pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });
        let sprite_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("seriesviz sprite pipeline layout"),
            bind_group_layouts: &[&sprite_layout],
            immediate_size: 0,
        });

        let plain = [Vertex::layout()];
        let sprite = [SpriteCorner::layout(), Vertex::instance_layout()];

        let build = |label: &str,
                     layout: &wgpu::PipelineLayout,
                     entry: &str,
                     buffers: &[wgpu::VertexBufferLayout<'_>],
                     topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(entry),
                    compilation_options: Default::default(),
                    buffers,
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        let pipelines = Pipelines {
            triangles: build(
                "seriesviz triangles",
                &plain_layout,
                "vs_main",
                &plain,
                wgpu::PrimitiveTopology::TriangleList,
            ),
            lines: build(
                "seriesviz lines",
                &plain_layout,
                "vs_main",
                &plain,
                wgpu::PrimitiveTopology::LineList,
            ),
            line_strip: build(
                "seriesviz line strip",
                &plain_layout,
                "vs_main",
                &plain,
                wgpu::PrimitiveTopology::LineStrip,
            ),
            points: build(
                "seriesviz points",
                &sprite_pipeline_layout,
                "vs_point",
                &sprite,
                wgpu::PrimitiveTopology::TriangleList,
            ),
            sprite_layout,
        };

        let corners = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("seriesviz sprite corners"),
            contents: bytemuck::cast_slice(&SPRITE_CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;

        self.sprite_uniforms = Some(UniformStream::new(
            "seriesviz sprite uniforms",
            uniform_size,
            alignment,
            8,
        ));
        self.sprite_corners = Some(corners);
        self.pipelines = Some(pipelines);

        log::debug!("renderer initialized for {format:?}");
        Ok(())
    }

    /// Clears the target and opens a frame for drawing.
    ///
    /// `width`/`height` are the viewport in pixels, clamped to the target.
    /// Returns `None` when the renderer is not usable.
    pub fn begin_frame<'r, 'a>(
        &'r mut self,
        ctx: &'r RenderCtx<'a>,
        target: &'r mut RenderTarget<'a>,
        width: f32,
        height: f32,
    ) -> Option<FramePainter<'r, 'a>> {
        if !self.is_usable() {
            return None;
        }

        self.vertices.reset();
        if let Some(uniforms) = self.sprite_uniforms.as_mut() {
            uniforms.reset();
        }

        {
            let _clear = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("seriesviz clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.config.clear_color.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let (tw, th) = ctx.target_size;
        let viewport = Viewport::new(width, height).clamped_to(tw, th);

        Some(FramePainter {
            renderer: self,
            ctx,
            target,
            viewport,
        })
    }
}

/// Draw sink for one frame, obtained from [`Renderer::begin_frame`].
pub struct FramePainter<'r, 'a> {
    renderer: &'r mut Renderer,
    ctx: &'r RenderCtx<'a>,
    target: &'r mut RenderTarget<'a>,
    viewport: Viewport,
}

impl FramePainter<'_, '_> {
    fn draw(&mut self, topology: Topology, vertices: &[Vertex], point_size: f32) {
        if vertices.is_empty() || !self.viewport.is_valid() {
            return;
        }

        let renderer = &mut *self.renderer;
        let Some(pipelines) = renderer.pipelines.as_ref() else { return };

        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        let Some((vbo, offset)) = renderer.vertices.push(self.ctx.device, self.ctx.queue, bytes)
        else {
            return;
        };
        let range = offset..offset + bytes.len() as u64;

        let sprite = if topology == Topology::Points {
            let uniform = SpriteUniform {
                viewport: [self.viewport.width, self.viewport.height],
                point_size,
                _pad: 0.0,
            };
            let Some(uniforms) = renderer.sprite_uniforms.as_mut() else { return };
            let Some(corners) = renderer.sprite_corners.as_ref() else { return };
            let Some((bind_group, dyn_offset)) = uniforms.push(
                self.ctx.device,
                self.ctx.queue,
                &pipelines.sprite_layout,
                bytemuck::bytes_of(&uniform),
            ) else {
                return;
            };
            Some((bind_group, dyn_offset, corners))
        } else {
            None
        };

        let mut rpass = self.target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("seriesviz batch"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_viewport(0.0, 0.0, self.viewport.width, self.viewport.height, 0.0, 1.0);
        rpass.set_pipeline(pipelines.get(topology));

        let count = vertices.len() as u32;
        match sprite {
            Some((bind_group, dyn_offset, corners)) => {
                rpass.set_bind_group(0, bind_group, &[dyn_offset]);
                rpass.set_vertex_buffer(0, corners.slice(..));
                rpass.set_vertex_buffer(1, vbo.slice(range));
                rpass.draw(0..SPRITE_CORNERS.len() as u32, 0..count);
            }
            None => {
                rpass.set_vertex_buffer(0, vbo.slice(range));
                rpass.draw(0..count, 0..1);
            }
        }
    }
}

impl DrawSink for FramePainter<'_, '_> {
    fn draw_points(&mut self, vertices: &[Vertex], point_size: f32) {
        self.draw(Topology::Points, vertices, sprite_size(point_size));
    }

    fn draw_lines(&mut self, vertices: &[Vertex]) {
        self.draw(Topology::Lines, vertices, 1.0);
    }

    fn draw_line_strip(&mut self, vertices: &[Vertex]) {
        self.draw(Topology::LineStrip, vertices, 1.0);
    }

    fn draw_triangles(&mut self, vertices: &[Vertex]) {
        self.draw(Topology::Triangles, vertices, 1.0);
    }
}

/// Parses and validates WGSL on the CPU.
///
/// wgpu reports shader errors through the device error callback; validating
/// up front turns them into an ordinary `Err` during initialization.
pub(crate) fn validate_shader(source: &str) -> Result<()> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| anyhow::anyhow!("WGSL parse error:\n{}", e.emit_to_string(source)))?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    )
    .validate(&module)
    .map_err(|e| anyhow::anyhow!("WGSL validation error:\n{}", e.emit_to_string(source)))?;

    Ok(())
}
