//
// manager.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use crate::device::DeviceDescriptor;
use crate::error::Error;

/// Size of R's device table.
pub const MAX_DEVICES: usize = 64;

/// The session's open devices and the active-device marker.
///
/// This replaces the ambient globals of the original dispatch layer (the
/// device table and the `.Device` variable): callers pass the manager by
/// reference instead. The registry is append-only from the dispatcher's
/// perspective; the marker is overwritten, never appended.
pub struct DeviceManager {
    devices: Vec<DeviceDescriptor>,
    active: Option<String>,
    max_devices: usize,
}

impl DeviceManager {
    pub fn new() -> Self {
        Self::with_capacity(MAX_DEVICES)
    }

    pub fn with_capacity(max_devices: usize) -> Self {
        Self {
            devices: Vec::new(),
            active: None,
            max_devices,
        }
    }

    /// Precondition for opening a new device: fails when the device table is
    /// full, before anything is allocated (R's `R_CheckDeviceAvailable()`).
    pub fn check_device_available(&self) -> crate::Result<()> {
        if self.devices.len() >= self.max_devices {
            return Err(Error::TooManyDevices {
                max: self.max_devices,
            });
        }

        Ok(())
    }

    pub(crate) fn set_active_device(&mut self, name: &str) {
        log::trace!("Graphics: active device is now '{name}'");
        self.active = Some(name.to_string());
    }

    pub(crate) fn add_device(&mut self, device: DeviceDescriptor) {
        log::trace!("Graphics: registering '{}' device", device.name());
        self.devices.push(device);
    }

    /// Marks the most recently registered device ready to record drawing
    /// operations (R's `initDisplayList()`).
    pub(crate) fn init_display_list(&mut self) {
        if let Some(device) = self.devices.last_mut() {
            device.display_list.initialize();
        }
    }

    /// The canonical name of the device currently receiving drawing
    /// commands, if any.
    pub fn active_device(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn devices(&self) -> &[DeviceDescriptor] {
        &self.devices
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }
}

impl Default for DeviceManager {
    fn default() -> Self {
        Self::new()
    }
}
