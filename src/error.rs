//! Error types for Sonance

use crate::device::DeviceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Audio device error: {0}")]
    Device(#[from] DeviceError),

    #[error("Audio backend is not initialized")]
    NotInitialized,

    #[error("Audio backend is already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, BackendError>;
