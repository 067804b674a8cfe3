//! Configuration for the audio backend.

/// Configuration descriptor for an [`AudioBackend`](crate::AudioBackend).
#[derive(Debug, Clone)]
pub struct AudioBackendDesc {
    /// Upper bound for the channel probe at initialization.
    ///
    /// The device may end the probe earlier; the count actually granted
    /// becomes the backend's `max_source_count`.
    pub source_probe_limit: usize,
    /// Output device to open; `None` selects the device default.
    pub preferred_device: Option<String>,
}

impl Default for AudioBackendDesc {
    fn default() -> Self {
        Self {
            source_probe_limit: 256,
            preferred_device: None,
        }
    }
}

impl AudioBackendDesc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_probe_limit(mut self, limit: usize) -> Self {
        self.source_probe_limit = limit;
        self
    }

    pub fn preferred_device(mut self, name: impl Into<String>) -> Self {
        self.preferred_device = Some(name.into());
        self
    }
}
