//! Where formatted bytes go.

use driver::CharDevice;

/// Receives the output of a call one byte at a time.
pub trait Sink {
    fn put(&mut self, c: u8);
}

/// Forwards every byte to a character device straight away.
pub struct ConsoleSink<'d, D: CharDevice + ?Sized> {
    device: &'d D,
}

impl<'d, D: CharDevice + ?Sized> ConsoleSink<'d, D> {
    pub fn new(device: &'d D) -> Self {
        Self { device }
    }
}

impl<D: CharDevice + ?Sized> Sink for ConsoleSink<'_, D> {
    #[inline]
    fn put(&mut self, c: u8) {
        self.device.putchar(c);
    }
}

/// Fills a caller-supplied byte buffer.
///
/// At most `capacity - 1` bytes of content are stored so that
/// [`BufferSink::finish`] always has room for the terminating NUL. Bytes past
/// that point are dropped; the caller's logical count is unaffected.
pub struct BufferSink<'b> {
    buf: &'b mut [u8],
    capacity: usize,
    pos: usize,
}

impl<'b> BufferSink<'b> {
    /// `capacity` is clamped to the length of `buf`.
    pub fn new(buf: &'b mut [u8], capacity: usize) -> Self {
        let capacity = capacity.min(buf.len());
        Self {
            buf,
            capacity,
            pos: 0,
        }
    }

    /// Use the whole buffer.
    pub fn unbounded(buf: &'b mut [u8]) -> Self {
        let capacity = buf.len();
        Self::new(buf, capacity)
    }

    /// NUL-terminate the content and return its length. A zero capacity
    /// leaves the buffer untouched.
    pub fn finish(self) -> usize {
        if self.capacity > 0 {
            self.buf[self.pos] = 0;
        }
        self.pos
    }
}

impl Sink for BufferSink<'_> {
    #[inline]
    fn put(&mut self, c: u8) {
        if self.pos + 1 < self.capacity {
            self.buf[self.pos] = c;
            self.pos += 1;
        }
    }
}

/// Drops everything. Used to compute the length of an output without a
/// destination.
pub struct NullSink;

impl Sink for NullSink {
    #[inline]
    fn put(&mut self, _c: u8) {}
}
