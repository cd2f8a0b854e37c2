//! Per-frame append-only GPU buffers.
//!
//! `queue.write_buffer` calls are applied before the frame's command buffer
//! runs, so two batches in one frame must never share a byte range. Streams
//! hand out disjoint ranges from a write cursor that resets every frame.

/// Linear range allocator behind both streams. Units are bytes or slots.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct RangeCursor {
    capacity: u64,
    next: u64,
    backed: bool,
}

/// Result of [`RangeCursor::claim`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Claim {
    pub offset: u64,
    /// New capacity when the backing buffer must be (re)created first.
    pub realloc: Option<u64>,
}

impl RangeCursor {
    pub(crate) fn new(initial_capacity: u64) -> Self {
        Self {
            capacity: initial_capacity.max(1),
            next: 0,
            backed: false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.next = 0;
    }

    /// Reserves `len` units past every range handed out since the last reset.
    ///
    /// Growth rounds to the next power of two and restarts at offset zero in
    /// the new buffer.
    pub(crate) fn claim(&mut self, len: u64) -> Claim {
        let mut realloc = None;
        if !self.backed || self.next + len > self.capacity {
            self.capacity = if self.backed {
                (self.next + len).next_power_of_two().max(self.capacity)
            } else {
                self.capacity.max(len).next_power_of_two()
            };
            self.backed = true;
            self.next = 0;
            realloc = Some(self.capacity);
        }

        let offset = self.next;
        self.next += len;
        Claim { offset, realloc }
    }
}

/// Growable vertex buffer with a linear write cursor.
pub(crate) struct VertexStream {
    label: &'static str,
    usage: wgpu::BufferUsages,
    buffer: Option<wgpu::Buffer>,
    cursor: RangeCursor,
}

impl VertexStream {
    pub(crate) fn new(label: &'static str, initial_capacity: u64) -> Self {
        Self {
            label,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            buffer: None,
            cursor: RangeCursor::new(initial_capacity.max(wgpu::COPY_BUFFER_ALIGNMENT)),
        }
    }

    /// Starts a new frame; previous ranges may be reused.
    pub(crate) fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Uploads `bytes` into a fresh range and returns the buffer plus range start.
    ///
    /// When the current buffer cannot fit the data it is replaced by a larger one.
    /// Passes already recorded against the old buffer keep it alive until submission.
    pub(crate) fn push(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
    ) -> Option<(&wgpu::Buffer, u64)> {
        let len = align_up(bytes.len() as u64, wgpu::COPY_BUFFER_ALIGNMENT);
        let claim = self.cursor.claim(len);

        if let Some(size) = claim.realloc {
            if self.buffer.is_some() {
                log::debug!("{}: growing to {size} bytes", self.label);
            }
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size,
                usage: self.usage,
                mapped_at_creation: false,
            }));
        }

        let buffer = self.buffer.as_ref()?;
        write_padded(queue, buffer, claim.offset, bytes);
        Some((buffer, claim.offset))
    }
}

/// Uniform ring with one aligned slot per batch, bound with a dynamic offset.
pub(crate) struct UniformStream {
    label: &'static str,
    buffer: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,
    slot_size: u64,
    cursor: RangeCursor,
}

impl UniformStream {
    pub(crate) fn new(label: &'static str, element_size: u64, alignment: u64, slots: u64) -> Self {
        Self {
            label,
            buffer: None,
            bind_group: None,
            slot_size: align_up(element_size, alignment.max(1)),
            cursor: RangeCursor::new(slots),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Writes one uniform value and returns the bind group plus its dynamic offset.
    pub(crate) fn push(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        bytes: &[u8],
    ) -> Option<(&wgpu::BindGroup, u32)> {
        let claim = self.cursor.claim(1);

        if let Some(slots) = claim.realloc {
            if self.buffer.is_some() {
                log::debug!("{}: growing to {slots} slots", self.label);
            }
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: self.slot_size * slots,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(self.label),
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: &buffer,
                        offset: 0,
                        size: std::num::NonZeroU64::new(bytes.len() as u64),
                    }),
                }],
            });
            self.buffer = Some(buffer);
            self.bind_group = Some(bind_group);
        }

        let offset = claim.offset * self.slot_size;
        queue.write_buffer(self.buffer.as_ref()?, offset, bytes);
        Some((self.bind_group.as_ref()?, offset as u32))
    }
}

#[inline]
pub(crate) fn align_up(value: u64, alignment: u64) -> u64 {
    value.div_ceil(alignment) * alignment
}

fn write_padded(queue: &wgpu::Queue, buffer: &wgpu::Buffer, offset: u64, bytes: &[u8]) {
    let rem = bytes.len() as u64 % wgpu::COPY_BUFFER_ALIGNMENT;
    if rem == 0 {
        queue.write_buffer(buffer, offset, bytes);
    } else {
        let mut padded = bytes.to_vec();
        padded.resize(bytes.len() + (wgpu::COPY_BUFFER_ALIGNMENT - rem) as usize, 0);
        queue.write_buffer(buffer, offset, &padded);
    }
}
