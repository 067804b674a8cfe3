//! Native audio device interface.
//!
//! This module defines the seam between the backend and the native audio
//! subsystem. The backend never talks to hardware itself; it drives an
//! [`AudioDevice`] implementation supplied by the embedding application.
//! [`NullDevice`] is a bundled headless implementation for tests and
//! no-audio runs.

use crate::math::Vec3;
use thiserror::Error;

mod null;

pub use null::NullDevice;

/// Opaque identifier for one device playback channel.
///
/// A channel represents one simultaneous-playback slot. Handles flow
/// between the free pool and callers; the set of handles in circulation
/// is fixed between initialization and shutdown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChannelHandle(u32);

impl ChannelHandle {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ChannelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "channel {}", self.0)
    }
}

/// Opaque identifier for a device-side audio data container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BufferHandle(u32);

impl BufferHandle {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Opaque identifier for an open device context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContextHandle(u32);

impl ContextHandle {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Error codes reported by the native device.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    #[error("invalid name parameter")]
    InvalidName,

    #[error("invalid enum parameter")]
    InvalidEnum,

    #[error("invalid value parameter")]
    InvalidValue,

    #[error("requested operation is not valid")]
    InvalidOperation,

    #[error("device is out of memory")]
    OutOfMemory,
}

/// Device-side formula mapping source-to-listener distance to attenuation.
///
/// The backend always selects [`DistanceModel::LinearClamped`]; the full
/// taxonomy exists because the device interface carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceModel {
    None,
    Inverse,
    InverseClamped,
    Linear,
    LinearClamped,
    Exponent,
    ExponentClamped,
}

/// Interface to the native audio subsystem.
///
/// Implement this trait to connect the backend to a real device API. All
/// calls are synchronous and complete before returning; the backend never
/// retries a failed call. Implementations are driven from a single
/// audio-update thread and do not need internal locking.
///
/// # Contract
///
/// - `open_context` establishes the one active context; the backend opens
///   at most one and closes it at shutdown.
/// - `alloc_channel` may fail once the driver's opaque channel limit is
///   reached; the backend treats the first failure as the end of its
///   capacity probe, not as a fault.
/// - `alloc_buffer` must always succeed.
/// - Listener and world setters take effect immediately; the backend keeps
///   no local copy of what it has sent.
pub trait AudioDevice {
    /// Names of the output devices currently present, for diagnostics.
    fn enumerate_outputs(&self) -> Vec<String>;

    /// Name of the output the device would pick by default, if any.
    fn default_output(&self) -> Option<String>;

    /// Opens a context on `preferred`, or on the default output when
    /// `None`.
    fn open_context(&mut self, preferred: Option<&str>) -> Result<ContextHandle, DeviceError>;

    /// Closes a context previously returned by
    /// [`open_context`](Self::open_context).
    fn close_context(&mut self, context: ContextHandle);

    /// Name of the output the open context is bound to.
    fn current_output(&self) -> Option<String>;

    /// Requests one new playback channel.
    fn alloc_channel(&mut self) -> Result<ChannelHandle, DeviceError>;

    /// Returns a playback channel to the device.
    fn free_channel(&mut self, channel: ChannelHandle) -> Result<(), DeviceError>;

    /// Allocates a new audio data container.
    fn alloc_buffer(&mut self) -> BufferHandle;

    fn set_distance_model(&mut self, model: DistanceModel) -> Result<(), DeviceError>;

    fn set_doppler_factor(&mut self, factor: f32) -> Result<(), DeviceError>;

    fn set_speed_of_sound(&mut self, speed: f32) -> Result<(), DeviceError>;

    fn set_listener_position(&mut self, position: Vec3) -> Result<(), DeviceError>;

    fn set_listener_velocity(&mut self, velocity: Vec3) -> Result<(), DeviceError>;

    /// Sets the listener orientation as a forward/up vector pair, both in
    /// device space.
    fn set_listener_orientation(&mut self, forward: Vec3, up: Vec3) -> Result<(), DeviceError>;

    /// Sets the total listener gain; the backend only ever sends 0 or 1.
    fn set_listener_gain(&mut self, gain: f32) -> Result<(), DeviceError>;
}
