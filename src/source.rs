//! Channel and buffer wrappers handed to the mixing layer.

use crate::device::{BufferHandle, ChannelHandle};

/// An acquired device playback channel.
///
/// Holds the channel for the lifetime of one playing sound. When the sound
/// finishes or is destroyed, hand the wrapper back with
/// [`AudioBackend::free_source`](crate::AudioBackend::free_source); it is
/// consumed there, so a wrapper cannot be returned twice.
#[derive(Debug)]
pub struct AudioSource {
    handle: ChannelHandle,
}

impl AudioSource {
    pub(crate) fn new(handle: ChannelHandle) -> Self {
        Self { handle }
    }

    /// Raw channel handle, for addressing the device channel directly.
    pub fn handle(&self) -> ChannelHandle {
        self.handle
    }

    pub(crate) fn into_handle(self) -> ChannelHandle {
        self.handle
    }
}

/// An opaque audio data container allocated from the device.
#[derive(Debug)]
pub struct AudioBuffer {
    handle: BufferHandle,
}

impl AudioBuffer {
    pub(crate) fn new(handle: BufferHandle) -> Self {
        Self { handle }
    }

    /// Raw buffer handle, for filling the container through the device API.
    pub fn handle(&self) -> BufferHandle {
        self.handle
    }
}
