use super::{AudioSamples, Packet};

/// Hooks called around packet decode and encode.
///
/// Every method returns its input unchanged by default, so implementors only
/// override the hooks they care about.
pub trait PacketListener: Send {
    /// Called with each packet before it reaches the decoder.
    fn pre_decode(&mut self, packet: Packet) -> Packet {
        packet
    }

    /// Called with each packet the encoder produces.
    fn post_encode(&mut self, packet: Packet) -> Packet {
        packet
    }
}

/// Hooks called as audio moves through decode, resample and encode.
///
/// Every method returns its input unchanged by default.
pub trait AudioSamplesListener: Send {
    /// Called with each block the decoder produces.
    fn post_decode(&mut self, samples: AudioSamples) -> AudioSamples {
        samples
    }

    /// Called before a block is resampled.
    fn pre_resample(&mut self, samples: AudioSamples) -> AudioSamples {
        samples
    }

    /// Called with each resampled block.
    fn post_resample(&mut self, samples: AudioSamples) -> AudioSamples {
        samples
    }

    /// Called before a block reaches the encoder.
    fn pre_encode(&mut self, samples: AudioSamples) -> AudioSamples {
        samples
    }
}

/// A listener that changes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughListener;

impl PacketListener for PassThroughListener {}

impl AudioSamplesListener for PassThroughListener {}

/// Runs several listeners in registration order, passing each one's output to
/// the next. An empty chain returns its input.
#[derive(Default)]
pub struct ListenerChain {
    packet_listeners: Vec<Box<dyn PacketListener>>,
    audio_listeners: Vec<Box<dyn AudioSamplesListener>>,
}

impl ListenerChain {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a packet listener to the end of the chain.
    pub fn add_packet_listener(&mut self, listener: impl PacketListener + 'static) -> &mut Self {
        self.packet_listeners.push(Box::new(listener));
        self
    }

    /// Appends an audio listener to the end of the chain.
    pub fn add_audio_listener(&mut self, listener: impl AudioSamplesListener + 'static) -> &mut Self {
        self.audio_listeners.push(Box::new(listener));
        self
    }

    /// Whether no listener of either kind is registered.
    pub fn is_empty(&self) -> bool {
        self.packet_listeners.is_empty() && self.audio_listeners.is_empty()
    }

    fn run_packet(
        &mut self,
        hook: &str,
        packet: Packet,
        f: fn(&mut (dyn PacketListener + 'static), Packet) -> Packet,
    ) -> Packet {
        log::trace!("{} through {} packet listeners", hook, self.packet_listeners.len());
        self.packet_listeners
            .iter_mut()
            .fold(packet, |packet, listener| f(listener.as_mut(), packet))
    }

    fn run_audio(
        &mut self,
        hook: &str,
        samples: AudioSamples,
        f: fn(&mut (dyn AudioSamplesListener + 'static), AudioSamples) -> AudioSamples,
    ) -> AudioSamples {
        log::trace!("{} through {} audio listeners", hook, self.audio_listeners.len());
        self.audio_listeners
            .iter_mut()
            .fold(samples, |samples, listener| f(listener.as_mut(), samples))
    }
}

impl PacketListener for ListenerChain {
    fn pre_decode(&mut self, packet: Packet) -> Packet {
        self.run_packet("pre_decode", packet, |l, p| l.pre_decode(p))
    }

    fn post_encode(&mut self, packet: Packet) -> Packet {
        self.run_packet("post_encode", packet, |l, p| l.post_encode(p))
    }
}

impl AudioSamplesListener for ListenerChain {
    fn post_decode(&mut self, samples: AudioSamples) -> AudioSamples {
        self.run_audio("post_decode", samples, |l, s| l.post_decode(s))
    }

    fn pre_resample(&mut self, samples: AudioSamples) -> AudioSamples {
        self.run_audio("pre_resample", samples, |l, s| l.pre_resample(s))
    }

    fn post_resample(&mut self, samples: AudioSamples) -> AudioSamples {
        self.run_audio("post_resample", samples, |l, s| l.post_resample(s))
    }

    fn pre_encode(&mut self, samples: AudioSamples) -> AudioSamples {
        self.run_audio("pre_encode", samples, |l, s| l.pre_encode(s))
    }
}
