//! Headless audio device.
//!
//! Behaves like a real device with a configurable channel capacity, except
//! no audio is produced. Listener and world parameters are recorded and
//! can be read back, which makes it the device of choice for tests and
//! for embeddings that want a no-audio mode.

use super::{
    AudioDevice, BufferHandle, ChannelHandle, ContextHandle, DeviceError, DistanceModel,
};
use crate::math::Vec3;
use std::sync::{Arc, Mutex};

const NULL_OUTPUT_NAME: &str = "Null Output";

#[derive(Debug)]
struct NullState {
    capacity: usize,
    live_channels: usize,
    next_channel: u32,
    next_buffer: u32,
    context_open: bool,
    distance_model: Option<DistanceModel>,
    doppler_factor: f32,
    speed_of_sound: f32,
    listener_position: Vec3,
    listener_velocity: Vec3,
    listener_forward: Vec3,
    listener_up: Vec3,
    listener_gain: f32,
}

/// A no-op [`AudioDevice`] with a fixed channel capacity.
///
/// Cloning yields a second view onto the same device state, so a test can
/// keep one clone for inspection while the backend owns the other.
#[derive(Debug, Clone)]
pub struct NullDevice {
    state: Arc<Mutex<NullState>>,
}

impl NullDevice {
    /// Creates a device that grants up to `capacity` channels before
    /// reporting [`DeviceError::OutOfMemory`].
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(NullState {
                capacity,
                live_channels: 0,
                next_channel: 0,
                next_buffer: 0,
                context_open: false,
                distance_model: None,
                doppler_factor: 1.0,
                speed_of_sound: 343.3,
                listener_position: Vec3::ZERO,
                listener_velocity: Vec3::ZERO,
                listener_forward: Vec3::new(0.0, 0.0, -1.0),
                listener_up: Vec3::new(0.0, 1.0, 0.0),
                listener_gain: 1.0,
            })),
        }
    }

    pub fn capacity(&self) -> usize {
        self.state.lock().unwrap().capacity
    }

    /// Number of channels currently allocated and not yet freed.
    pub fn live_channels(&self) -> usize {
        self.state.lock().unwrap().live_channels
    }

    pub fn context_open(&self) -> bool {
        self.state.lock().unwrap().context_open
    }

    /// Last distance model set, `None` until one has been.
    pub fn distance_model(&self) -> Option<DistanceModel> {
        self.state.lock().unwrap().distance_model
    }

    pub fn doppler_factor(&self) -> f32 {
        self.state.lock().unwrap().doppler_factor
    }

    pub fn speed_of_sound(&self) -> f32 {
        self.state.lock().unwrap().speed_of_sound
    }

    pub fn listener_position(&self) -> Vec3 {
        self.state.lock().unwrap().listener_position
    }

    pub fn listener_velocity(&self) -> Vec3 {
        self.state.lock().unwrap().listener_velocity
    }

    /// Last orientation set, as a `(forward, up)` pair.
    pub fn listener_orientation(&self) -> (Vec3, Vec3) {
        let state = self.state.lock().unwrap();
        (state.listener_forward, state.listener_up)
    }

    pub fn listener_gain(&self) -> f32 {
        self.state.lock().unwrap().listener_gain
    }
}

impl AudioDevice for NullDevice {
    fn enumerate_outputs(&self) -> Vec<String> {
        vec![NULL_OUTPUT_NAME.to_string()]
    }

    fn default_output(&self) -> Option<String> {
        Some(NULL_OUTPUT_NAME.to_string())
    }

    fn open_context(&mut self, _preferred: Option<&str>) -> Result<ContextHandle, DeviceError> {
        let mut state = self.state.lock().unwrap();
        if state.context_open {
            return Err(DeviceError::InvalidOperation);
        }
        state.context_open = true;
        Ok(ContextHandle::new(1))
    }

    fn close_context(&mut self, _context: ContextHandle) {
        self.state.lock().unwrap().context_open = false;
    }

    fn current_output(&self) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.context_open.then(|| NULL_OUTPUT_NAME.to_string())
    }

    fn alloc_channel(&mut self) -> Result<ChannelHandle, DeviceError> {
        let mut state = self.state.lock().unwrap();
        if state.live_channels >= state.capacity {
            return Err(DeviceError::OutOfMemory);
        }
        state.live_channels += 1;
        state.next_channel += 1;
        Ok(ChannelHandle::new(state.next_channel))
    }

    fn free_channel(&mut self, _channel: ChannelHandle) -> Result<(), DeviceError> {
        let mut state = self.state.lock().unwrap();
        if state.live_channels == 0 {
            return Err(DeviceError::InvalidName);
        }
        state.live_channels -= 1;
        Ok(())
    }

    fn alloc_buffer(&mut self) -> BufferHandle {
        let mut state = self.state.lock().unwrap();
        state.next_buffer += 1;
        BufferHandle::new(state.next_buffer)
    }

    fn set_distance_model(&mut self, model: DistanceModel) -> Result<(), DeviceError> {
        self.state.lock().unwrap().distance_model = Some(model);
        Ok(())
    }

    fn set_doppler_factor(&mut self, factor: f32) -> Result<(), DeviceError> {
        self.state.lock().unwrap().doppler_factor = factor;
        Ok(())
    }

    fn set_speed_of_sound(&mut self, speed: f32) -> Result<(), DeviceError> {
        self.state.lock().unwrap().speed_of_sound = speed;
        Ok(())
    }

    fn set_listener_position(&mut self, position: Vec3) -> Result<(), DeviceError> {
        self.state.lock().unwrap().listener_position = position;
        Ok(())
    }

    fn set_listener_velocity(&mut self, velocity: Vec3) -> Result<(), DeviceError> {
        self.state.lock().unwrap().listener_velocity = velocity;
        Ok(())
    }

    fn set_listener_orientation(&mut self, forward: Vec3, up: Vec3) -> Result<(), DeviceError> {
        let mut state = self.state.lock().unwrap();
        state.listener_forward = forward;
        state.listener_up = up;
        Ok(())
    }

    fn set_listener_gain(&mut self, gain: f32) -> Result<(), DeviceError> {
        self.state.lock().unwrap().listener_gain = gain;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_limits_allocation() {
        let mut device = NullDevice::new(2);
        assert!(device.alloc_channel().is_ok());
        assert!(device.alloc_channel().is_ok());
        assert_eq!(device.alloc_channel(), Err(DeviceError::OutOfMemory));
        assert_eq!(device.live_channels(), 2);
    }

    #[test]
    fn test_freeing_makes_room() {
        let mut device = NullDevice::new(1);
        let channel = device.alloc_channel().unwrap();
        assert_eq!(device.alloc_channel(), Err(DeviceError::OutOfMemory));
        device.free_channel(channel).unwrap();
        assert!(device.alloc_channel().is_ok());
    }

    #[test]
    fn test_handles_are_distinct() {
        let mut device = NullDevice::new(8);
        let a = device.alloc_channel().unwrap();
        let b = device.alloc_channel().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_current_output_requires_open_context() {
        let mut device = NullDevice::new(1);
        assert_eq!(device.current_output(), None);
        let context = device.open_context(None).unwrap();
        assert_eq!(device.current_output().as_deref(), Some(NULL_OUTPUT_NAME));
        device.close_context(context);
        assert_eq!(device.current_output(), None);
    }

    #[test]
    fn test_clone_shares_state() {
        let mut device = NullDevice::new(4);
        let probe = device.clone();
        device.alloc_channel().unwrap();
        assert_eq!(probe.live_channels(), 1);
    }
}
