use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;
use crate::paint::{GradientPaint, GradientShape};
use crate::render::{RenderCtx, RenderTarget};

const KIND_LINEAR: u32 = 0;
const KIND_RADIAL: u32 = 1;
const KIND_CONIC: u32 = 2;

const MIN_STOP_CAPACITY: usize = 8;

/// Draws one [`GradientPaint`] as a full-rect quad.
///
/// The fragment shader evaluates the gradient per pixel, so any number of
/// stops costs one draw call. Stops live in a storage buffer that grows by
/// powers of two; the bind group is rebuilt whenever it does.
#[derive(Default)]
pub struct GradientRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_buffer: Option<wgpu::Buffer>,

    stop_buffer: Option<wgpu::Buffer>,
    stop_capacity: usize,
}

impl GradientRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pass drawing `paint` into `target` on top of its contents.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, paint: &GradientPaint) {
        if paint.stops.is_empty() || !ctx.viewport.is_valid() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_stop_capacity(ctx, paint.stops.len());
        self.ensure_bindings(ctx);

        let (Some(ubo), Some(sbo)) = (self.uniform_buffer.as_ref(), self.stop_buffer.as_ref()) else {
            return;
        };
        let uniform = GradientUniform::new(paint, ctx.viewport, ctx.surface_format.is_srgb());
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));
        ctx.queue.write_buffer(sbo, 0, bytemuck::cast_slice(&pack_stops(paint)));

        let (Some(pipeline), Some(bind_group)) = (self.pipeline.as_ref(), self.bind_group.as_ref()) else {
            return;
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ombre gradient pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
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

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        // Quad corners come from vertex_index; no vertex buffer.
        rpass.draw(0..6, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ombre gradient shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/gradient.wgsl").into()),
        });

        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("ombre gradient bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(size_of::<GradientUniform>() as u64),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(size_of::<GpuStop>() as u64),
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ombre gradient pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ombre gradient pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("gradient pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
    }

    fn ensure_stop_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.stop_capacity && self.stop_buffer.is_some() {
            return;
        }

        let capacity = required.next_power_of_two().max(MIN_STOP_CAPACITY);
        self.stop_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ombre gradient stops"),
            size: (capacity * size_of::<GpuStop>()) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.stop_capacity = capacity;
        self.bind_group = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let (Some(bgl), Some(sbo)) = (self.bind_group_layout.as_ref(), self.stop_buffer.as_ref()) else {
            return;
        };

        let ubo = self.uniform_buffer.get_or_insert_with(|| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("ombre gradient ubo"),
                size: size_of::<GradientUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ombre gradient bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: ubo.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 1, resource: sbo.as_entire_binding() },
            ],
        }));
    }
}

fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── GPU layout ────────────────────────────────────────────────────────────
//
// Must match `Gradient` and `Stop` in shaders/gradient.wgsl.

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct GradientUniform {
    viewport: [f32; 2],
    rect_origin: [f32; 2],
    rect_size: [f32; 2],
    /// Linear: start point. Radial / conic: center.
    p0: [f32; 2],
    /// Linear: end point. Radial: radii. Conic: `[start_angle, 0]`.
    p1: [f32; 2],
    kind: u32,
    stop_count: u32,
    /// 1 when the target encodes to sRGB itself and expects linear output.
    linear_output: u32,
    _pad: [u32; 3],
}

impl GradientUniform {
    fn new(paint: &GradientPaint, viewport: Viewport, srgb_target: bool) -> Self {
        let (kind, p0, p1) = match paint.shape {
            GradientShape::Linear { start, end } => (KIND_LINEAR, start.to_array(), end.to_array()),
            GradientShape::Radial { center, radii } => (KIND_RADIAL, center.to_array(), radii.to_array()),
            GradientShape::Conic { center, start_angle } => {
                (KIND_CONIC, center.to_array(), [start_angle, 0.0])
            }
        };
        Self {
            viewport: [viewport.width, viewport.height],
            rect_origin: paint.rect.origin.to_array(),
            rect_size: paint.rect.size.to_array(),
            p0,
            p1,
            kind,
            stop_count: paint.stops.len() as u32,
            linear_output: srgb_target as u32,
            _pad: [0; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct GpuStop {
    color: [f32; 4],
    /// `[t, 0, 0, 0]`; padded to keep the array stride at 32 bytes.
    offset: [f32; 4],
}

fn pack_stops(paint: &GradientPaint) -> Vec<GpuStop> {
    paint
        .stops
        .iter()
        .map(|s| GpuStop { color: s.color.to_array(), offset: [s.t, 0.0, 0.0, 0.0] })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use ombre_css::{Angle, ColorStops, GradientConfig, GradientKind};

    fn paint(kind: GradientKind, angle: f64, colors: &[&str]) -> GradientPaint {
        let stops = ColorStops::from_vec(colors.iter().map(|c| c.to_string()).collect()).unwrap();
        let config = GradientConfig::new(kind, Angle::from(angle), stops);
        GradientPaint::layout(&config, Rect::new(10.0, 10.0, 200.0, 100.0)).unwrap()
    }

    #[test]
    fn uniform_is_64_bytes() {
        assert_eq!(size_of::<GradientUniform>(), 64);
        assert_eq!(size_of::<GpuStop>(), 32);
    }

    #[test]
    fn uniform_encodes_kind_and_points() {
        let p = paint(GradientKind::Radial, 0.0, &["red", "blue", "lime"]);
        let u = GradientUniform::new(&p, Viewport::new(220.0, 120.0), true);
        assert_eq!(u.kind, KIND_RADIAL);
        assert_eq!(u.stop_count, 3);
        assert_eq!(u.p0, [110.0, 60.0]);
        assert_eq!(u.rect_origin, [10.0, 10.0]);
        assert_eq!(u.linear_output, 1);

        let p = paint(GradientKind::Conic, 180.0, &["red"]);
        let u = GradientUniform::new(&p, Viewport::new(220.0, 120.0), false);
        assert_eq!(u.kind, KIND_CONIC);
        assert!((u.p1[0] - std::f32::consts::PI).abs() < 1e-5);
        assert_eq!(u.linear_output, 0);
    }

    #[test]
    fn stops_pack_in_order() {
        let p = paint(GradientKind::Linear, 90.0, &["#ff0000", "#00ff0080"]);
        let packed = pack_stops(&p);
        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(packed[1].offset[0], 1.0);
        // 0x80 alpha, premultiplied green
        assert!((packed[1].color[1] - packed[1].color[3]).abs() < 1e-6);
    }
}
