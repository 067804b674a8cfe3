//! Audio backend: session lifecycle, channel pool, listener control.

use crate::config::AudioBackendDesc;
use crate::device::{AudioDevice, DistanceModel};
use crate::error::{BackendError, Result};
use crate::math::{Vec3, listener_orientation, to_device_space};
use crate::pool::SourcePool;
use crate::session::DeviceSession;
use crate::source::{AudioBuffer, AudioSource};

/// Backend over a native audio device.
///
/// Owns the device session and the pool of playback channels, and forwards
/// listener and world parameters to the device. This is the object the
/// audio subsystem's composition root creates once and passes to whatever
/// needs the current session; there is no global instance.
///
/// # Lifecycle
///
/// [`initialize`](Self::initialize) opens the device context and populates
/// the channel pool; [`shutdown`](Self::shutdown) reverses both. Between
/// the two, callers acquire channels with
/// [`create_source`](Self::create_source) and return them with
/// [`free_source`](Self::free_source).
///
/// # Threading
///
/// All operations are synchronous and non-blocking. The backend is meant
/// to be owned by the single audio-update thread and performs no internal
/// locking.
pub struct AudioBackend {
    device: Box<dyn AudioDevice>,
    desc: AudioBackendDesc,
    session: Option<DeviceSession>,
    pool: SourcePool,
}

impl AudioBackend {
    /// Creates a backend over `device`. No device call is made until
    /// [`initialize`](Self::initialize).
    pub fn new(device: Box<dyn AudioDevice>, desc: AudioBackendDesc) -> Self {
        Self {
            device,
            desc,
            session: None,
            pool: SourcePool::default(),
        }
    }

    /// Cheap capability probe.
    ///
    /// There is no preflight device check, so this always reports `true`;
    /// the authoritative failure happens at
    /// [`initialize`](Self::initialize).
    pub fn is_available(&self) -> bool {
        true
    }

    /// Opens the device context and populates the channel pool.
    ///
    /// Context creation failure is fatal: the error is propagated, the
    /// backend stays uninitialized and must be treated as unavailable.
    /// Channel probing is not fatal — the device ending the probe early
    /// just leaves a smaller pool.
    pub fn initialize(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Err(BackendError::AlreadyInitialized);
        }

        let session =
            DeviceSession::open(&mut *self.device, self.desc.preferred_device.as_deref())?;
        self.pool = SourcePool::populate(&mut *self.device, self.desc.source_probe_limit);
        log::info!("{} sources available", self.pool.available_sources());

        self.session = Some(session);
        Ok(())
    }

    /// Frees every pooled channel and closes the device context.
    ///
    /// A no-op when [`initialize`](Self::initialize) never succeeded. The
    /// session is cleared before anything else, so
    /// [`session`](Self::session) reports `None` from the start of
    /// shutdown. Channels still held by callers are not waited for; the
    /// device reclaims them with the context.
    pub fn shutdown(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        for channel in self.pool.drain() {
            if let Err(err) = self.device.free_channel(channel) {
                log::warn!("failed to free {channel} during shutdown: {err}");
            }
        }

        self.device.close_context(session.context());
        log::info!("audio backend shut down");
    }

    /// The session currently bound to the device, `None` before
    /// initialization and after shutdown has begun.
    pub fn session(&self) -> Option<&DeviceSession> {
        self.session.as_ref()
    }

    /// Number of channels the device granted at initialization.
    pub fn max_source_count(&self) -> usize {
        self.pool.max_source_count()
    }

    /// Number of channels currently free for acquisition.
    pub fn available_sources(&self) -> usize {
        self.pool.available_sources()
    }

    /// Sets the distance attenuation model and the two world scalars.
    ///
    /// The model is fixed to linear-clamped; only the speed of sound and
    /// the doppler factor are caller-controlled.
    pub fn update_world_settings(&mut self, speed_of_sound: f32, doppler_factor: f32) -> Result<()> {
        self.ensure_initialized()?;
        self.device.set_distance_model(DistanceModel::LinearClamped)?;
        self.device.set_doppler_factor(doppler_factor)?;
        self.device.set_speed_of_sound(speed_of_sound)?;
        Ok(())
    }

    /// Applies listener position, velocity, facing angle and mute state.
    ///
    /// `position` and `velocity` are engine-space (right-handed, Y-up) and
    /// reach the device with Y and Z negated. `angle` tilts the up vector
    /// while forward stays `(0, 0, -1)`. `mute` is total gain, 0 or 1;
    /// there is no independent listener volume at this layer.
    pub fn update_listener(
        &mut self,
        position: Vec3,
        velocity: Vec3,
        angle: f32,
        mute: bool,
    ) -> Result<()> {
        self.ensure_initialized()?;
        self.device
            .set_listener_position(to_device_space(position))?;
        self.device
            .set_listener_velocity(to_device_space(velocity))?;
        let (forward, up) = listener_orientation(angle);
        self.device.set_listener_orientation(forward, up)?;
        self.device
            .set_listener_gain(if mute { 0.0 } else { 1.0 })?;
        Ok(())
    }

    /// Allocates a new audio data container from the device.
    ///
    /// Always succeeds; buffers are not pooled.
    pub fn create_buffer(&mut self) -> AudioBuffer {
        AudioBuffer::new(self.device.alloc_buffer())
    }

    /// Acquires a playback channel from the pool.
    ///
    /// `None` means every channel is in use. This is the backend's one
    /// backpressure mechanism: the caller drops the sound rather than
    /// treating exhaustion as an error. Recently released channels are
    /// handed out first.
    pub fn create_source(&mut self) -> Option<AudioSource> {
        self.pool.acquire().map(AudioSource::new)
    }

    /// Returns a finished source's channel to the pool, making it
    /// available to the next [`create_source`](Self::create_source) call.
    pub fn free_source(&mut self, source: AudioSource) {
        self.pool.release(source.into_handle());
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.session.is_none() {
            return Err(BackendError::NotInitialized);
        }
        Ok(())
    }
}
