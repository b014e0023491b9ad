//
// device.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use crate::display_list::DisplayList;
use crate::drivers::DeviceDriver;

/// The shared device parameter block, set to engine defaults before the
/// driver constructor runs (R's `GInit()` step). Drivers overwrite the
/// fields they care about during `open()`.
pub struct DeviceParameters {
    pub bg: String,
    pub fg: String,
    /// Size in inches.
    pub width: f64,
    pub height: f64,
    pub pointsize: f64,
    pub landscape: bool,
}

impl Default for DeviceParameters {
    fn default() -> Self {
        Self {
            bg: String::from("white"),
            fg: String::from("black"),
            width: 7.0,
            height: 7.0,
            pointsize: 12.0,
            landscape: true,
        }
    }
}

/// One open graphics output target, owned by the [`DeviceManager`] once
/// construction succeeds.
///
/// The descriptor has a two-phase lifecycle: it is allocated with an empty
/// display list and default parameters, and only becomes visible to the rest
/// of the session after its driver's `open()` reported success.
///
/// [`DeviceManager`]: crate::manager::DeviceManager
pub struct DeviceDescriptor {
    pub(crate) display_list: DisplayList,
    pub(crate) par: DeviceParameters,
    pub(crate) driver: Box<dyn DeviceDriver>,
}

impl DeviceDescriptor {
    pub(crate) fn new(driver: Box<dyn DeviceDriver>) -> Self {
        Self {
            // Do this for early redraw attempts
            display_list: DisplayList::empty(),
            par: DeviceParameters::default(),
            driver,
        }
    }

    /// The canonical name of the device's backend, e.g. "postscript".
    pub fn name(&self) -> &'static str {
        self.driver.name()
    }

    pub fn par(&self) -> &DeviceParameters {
        &self.par
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    pub fn display_list_mut(&mut self) -> &mut DisplayList {
        &mut self.display_list
    }
}
