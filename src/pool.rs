//! Bounded pool of device playback channels.

use crate::device::{AudioDevice, ChannelHandle};

/// Fixed-size pool of acquirable playback channels.
///
/// Free handles live on a last-in-first-out stack: the channel released
/// most recently is handed out first, keeping the working set of device
/// channels small.
///
/// The pool performs no membership tracking: releasing a handle it never
/// issued, or releasing the same handle twice, corrupts its invariants.
/// The public backend surface prevents this for its own wrappers by
/// consuming them on release; anything bypassing that surface carries the
/// responsibility itself.
#[derive(Debug, Default)]
pub struct SourcePool {
    free: Vec<ChannelHandle>,
    max_source_count: usize,
}

impl SourcePool {
    /// Probes `device` for the maximum number of simultaneously
    /// allocatable channels, up to `limit`.
    ///
    /// Drivers impose an opaque hardware limit that cannot be queried in
    /// advance, only discovered by allocating until the device refuses.
    /// The first allocation error ends the probe; the channels granted so
    /// far become the pool, and their count is fixed as
    /// [`max_source_count`](Self::max_source_count).
    pub(crate) fn populate(device: &mut dyn AudioDevice, limit: usize) -> Self {
        let mut free = Vec::new();
        for _ in 0..limit {
            match device.alloc_channel() {
                Ok(channel) => free.push(channel),
                Err(err) => {
                    log::debug!("channel probe ended by device after {}: {err}", free.len());
                    break;
                }
            }
        }
        let max_source_count = free.len();
        Self {
            free,
            max_source_count,
        }
    }

    /// Takes one free channel, most recently released first.
    ///
    /// Returns `None` when the pool is exhausted. Never blocks and never
    /// errors; an empty pool is an expected state, not a fault.
    pub fn acquire(&mut self) -> Option<ChannelHandle> {
        self.free.pop()
    }

    /// Puts a channel back on the free stack, making it the next one
    /// [`acquire`](Self::acquire) returns.
    pub fn release(&mut self, channel: ChannelHandle) {
        self.free.push(channel);
    }

    /// Number of channels the device granted when the pool was populated.
    pub fn max_source_count(&self) -> usize {
        self.max_source_count
    }

    /// Number of channels currently free.
    pub fn available_sources(&self) -> usize {
        self.free.len()
    }

    /// Empties the free stack, handing the channels back for deletion.
    pub(crate) fn drain(&mut self) -> Vec<ChannelHandle> {
        std::mem::take(&mut self.free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::NullDevice;

    #[test]
    fn test_populate_stops_at_device_limit() {
        let mut device = NullDevice::new(4);
        let pool = SourcePool::populate(&mut device, 256);
        assert_eq!(pool.max_source_count(), 4);
        assert_eq!(pool.available_sources(), 4);
    }

    #[test]
    fn test_populate_respects_probe_limit() {
        let mut device = NullDevice::new(1024);
        let pool = SourcePool::populate(&mut device, 8);
        assert_eq!(pool.max_source_count(), 8);
        assert_eq!(device.live_channels(), 8);
    }

    #[test]
    fn test_acquire_on_empty_returns_none() {
        let mut device = NullDevice::new(0);
        let mut pool = SourcePool::populate(&mut device, 256);
        assert_eq!(pool.max_source_count(), 0);
        assert!(pool.acquire().is_none());
    }

    #[test]
    fn test_acquire_release_restores_count() {
        let mut device = NullDevice::new(4);
        let mut pool = SourcePool::populate(&mut device, 256);
        let before = pool.available_sources();
        let channel = pool.acquire().unwrap();
        assert_eq!(pool.available_sources(), before - 1);
        pool.release(channel);
        assert_eq!(pool.available_sources(), before);
    }

    #[test]
    fn test_lifo_reuse_order() {
        let mut device = NullDevice::new(4);
        let mut pool = SourcePool::populate(&mut device, 256);
        let first = pool.acquire().unwrap();
        let second = pool.acquire().unwrap();
        pool.release(first);
        pool.release(second);
        assert_eq!(pool.acquire(), Some(second));
        assert_eq!(pool.acquire(), Some(first));
    }

    #[test]
    fn test_available_never_exceeds_max() {
        let mut device = NullDevice::new(16);
        let mut pool = SourcePool::populate(&mut device, 256);
        let mut held = Vec::new();
        while let Some(channel) = pool.acquire() {
            assert!(pool.available_sources() <= pool.max_source_count());
            held.push(channel);
        }
        for channel in held {
            pool.release(channel);
            assert!(pool.available_sources() <= pool.max_source_count());
        }
    }
}
