use crate::error::{BridgeError, Result};
use bytes::Bytes;
use std::time::Duration;

/// An encoded chunk of one stream, as handed between demuxer, decoder and
/// encoder stages.
#[derive(Debug, Clone)]
pub struct Packet {
    /// Encoded payload.
    pub data: Bytes,
    /// Presentation timestamp in microseconds.
    pub pts: Option<i64>,
    /// Decode timestamp in microseconds.
    pub dts: Option<i64>,
    /// Index of the stream this packet belongs to.
    pub stream_index: usize,
    /// Whether the packet starts a key frame.
    pub is_key: bool,
    /// How long the packet plays for.
    pub duration: Option<Duration>,
    /// Byte offset of the packet in its source, when known.
    pub position: Option<u64>,
    complete: bool,
}

impl Packet {
    /// Wraps an already filled payload; the packet is complete.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            pts: None,
            dts: None,
            stream_index: 0,
            is_key: false,
            duration: None,
            position: None,
            complete: true,
        }
    }

    /// Allocates a zeroed payload of `capacity` bytes to be filled later.
    /// The packet stays incomplete until [`set_complete`](Self::set_complete).
    pub fn allocate(capacity: usize) -> Result<Self> {
        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| BridgeError::Allocation(capacity))?;
        buf.resize(capacity, 0);
        let mut packet = Self::new(buf);
        packet.complete = false;
        Ok(packet)
    }

    /// Sets the presentation timestamp.
    pub fn with_pts(mut self, pts: i64) -> Self {
        self.pts = Some(pts);
        self
    }

    /// Sets the decode timestamp.
    pub fn with_dts(mut self, dts: i64) -> Self {
        self.dts = Some(dts);
        self
    }

    /// Sets the stream index.
    pub fn with_stream_index(mut self, index: usize) -> Self {
        self.stream_index = index;
        self
    }

    /// Marks the packet as a key frame or not.
    pub fn with_key_flag(mut self, is_key: bool) -> Self {
        self.is_key = is_key;
        self
    }

    /// Sets the play duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Sets the byte offset in the source.
    pub fn with_position(mut self, position: u64) -> Self {
        self.position = Some(position);
        self
    }

    /// Payload length in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload has been filled.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Marks the first `size` bytes of the payload as valid.
    pub fn set_complete(&mut self, size: usize) -> Result<()> {
        if size > self.data.len() {
            return Err(BridgeError::InvalidArgument(format!(
                "packet holds {} bytes, cannot complete {}",
                self.data.len(),
                size
            )));
        }
        self.data.truncate(size);
        self.complete = true;
        Ok(())
    }
}
