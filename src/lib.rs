//! # Sonance
//!
//! A pooled device-channel audio backend with 3D listener control.
//!
//! Sonance sits between a higher-level audio mixing/playback layer and a
//! native audio device API. It owns the device session, manages a bounded
//! pool of hardware playback channels, and forwards listener/world
//! parameters to the device. The native API itself is a collaborator
//! supplied by the embedding application through the
//! [`AudioDevice`] trait.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sonance::{AudioBackend, AudioBackendDesc, NullDevice};
//! use sonance::math::Vec3;
//!
//! // The composition root owns the backend and passes it to whatever
//! // needs the active session.
//! let device = NullDevice::new(64);
//! let mut backend = AudioBackend::new(Box::new(device), AudioBackendDesc::default());
//! backend.initialize()?;
//!
//! // Acquire a playback channel for one sound. `None` means every
//! // channel is busy and the sound is simply dropped.
//! if let Some(source) = backend.create_source() {
//!     // hand source.handle() to the mixing layer while the sound plays
//!     backend.free_source(source);
//! }
//!
//! // World and listener parameters go straight to the device.
//! backend.update_world_settings(343.3, 1.0)?;
//! backend.update_listener(Vec3::new(0.0, 1.5, 0.0), Vec3::ZERO, 0.0, false)?;
//!
//! backend.shutdown();
//! # Ok::<(), sonance::BackendError>(())
//! ```
//!
//! ## Key Components
//!
//! - **[`AudioBackend`]**: session lifecycle, channel pool, listener and
//!   world configuration
//! - **[`AudioDevice`]**: the native device seam, implemented by the
//!   embedding application (or by [`NullDevice`] for headless runs)
//! - **[`AudioBackendDesc`]**: backend configuration (probe ceiling,
//!   preferred output)
//! - **[`AudioSource`]/[`AudioBuffer`]**: handle wrappers passed to the
//!   mixing layer
//!
//! ## Channel pool
//!
//! Device drivers impose an opaque limit on simultaneous playback
//! channels, discoverable only by allocating until the device refuses.
//! [`AudioBackend::initialize`] probes up to the configured ceiling and
//! keeps whatever the device granted. Acquisition never blocks and never
//! fails hard: an exhausted pool yields `None` and the caller drops the
//! sound. Released channels are reused most-recent-first so the device's
//! warm channel state stays warm.

pub mod backend;
pub mod config;
pub mod device;
pub mod error;
pub mod math;
pub mod pool;
pub mod session;
pub mod source;

pub use backend::AudioBackend;
pub use config::AudioBackendDesc;
pub use device::{
    AudioDevice, BufferHandle, ChannelHandle, ContextHandle, DeviceError, DistanceModel,
    NullDevice,
};
pub use error::BackendError;
pub use pool::SourcePool;
pub use session::DeviceSession;
pub use source::{AudioBuffer, AudioSource};
