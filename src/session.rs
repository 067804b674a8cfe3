//! Device session lifecycle.

use crate::device::{AudioDevice, ContextHandle, DeviceError};

/// Exclusive connection to the native audio device.
///
/// Owns the context handle for the lifetime of the backend. Every other
/// entity — the pool, acquired sources, buffers — is invalid once the
/// session is gone.
#[derive(Debug)]
pub struct DeviceSession {
    context: ContextHandle,
    device_name: String,
}

impl DeviceSession {
    /// Opens the native context, logging the available outputs and the one
    /// selected.
    ///
    /// Context creation failure is fatal for the backend and is propagated
    /// to the caller.
    pub(crate) fn open(
        device: &mut dyn AudioDevice,
        preferred: Option<&str>,
    ) -> Result<Self, DeviceError> {
        let default_output = device.default_output();
        log::info!("available output devices:");
        for name in device.enumerate_outputs() {
            if Some(&name) == default_output.as_ref() {
                log::info!("  {name} (default)");
            } else {
                log::info!("  {name}");
            }
        }

        let context = device.open_context(preferred)?;
        let device_name = device
            .current_output()
            .unwrap_or_else(|| "unknown".to_string());
        log::info!("current device: {device_name}");

        Ok(Self {
            context,
            device_name,
        })
    }

    pub(crate) fn context(&self) -> ContextHandle {
        self.context
    }

    /// Identifier of the output device this session is bound to.
    /// Informational only.
    pub fn device_name(&self) -> &str {
        &self.device_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::NullDevice;

    #[test]
    fn test_open_binds_to_device() {
        let mut device = NullDevice::new(4);
        let session = DeviceSession::open(&mut device, None).unwrap();
        assert!(device.context_open());
        assert_eq!(session.device_name(), "Null Output");
    }

    #[test]
    fn test_open_twice_fails() {
        let mut device = NullDevice::new(4);
        let _session = DeviceSession::open(&mut device, None).unwrap();
        assert!(DeviceSession::open(&mut device, None).is_err());
    }
}
