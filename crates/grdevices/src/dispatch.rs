//
// dispatch.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use rcall::CallFrame;
use rcall::InterruptsSuspendedScope;

use crate::device::DeviceDescriptor;
use crate::drivers::macintosh::MacintoshParameters;
use crate::drivers::pictex::PicTexParameters;
use crate::drivers::postscript::PostScriptParameters;
use crate::drivers::xfig::XFigParameters;
use crate::drivers::DeviceDriver;
use crate::drivers::MacintoshDriver;
use crate::drivers::PicTexDriver;
use crate::drivers::PostScriptDriver;
use crate::drivers::XFigDriver;
use crate::error::Error;
use crate::manager::DeviceManager;

/// Opens a PostScript device from the call's positional arguments.
pub fn postscript(manager: &mut DeviceManager, frame: &mut CallFrame) -> crate::Result<()> {
    log::trace!("Graphics: postscript device requested");
    let params = PostScriptParameters::from_frame(frame)?;
    start_device(manager, Box::new(PostScriptDriver::new(params)))
}

/// Opens a PicTeX device from the call's positional arguments.
pub fn pictex(manager: &mut DeviceManager, frame: &mut CallFrame) -> crate::Result<()> {
    log::trace!("Graphics: pictex device requested");
    let params = PicTexParameters::from_frame(frame)?;
    start_device(manager, Box::new(PicTexDriver::new(params)))
}

/// Opens an XFig device from the call's positional arguments.
pub fn xfig(manager: &mut DeviceManager, frame: &mut CallFrame) -> crate::Result<()> {
    log::trace!("Graphics: xfig device requested");
    let params = XFigParameters::from_frame(frame)?;
    start_device(manager, Box::new(XFigDriver::new(params)))
}

/// Opens the legacy Macintosh on-screen device. Arguments are validated on
/// every platform; construction is only attempted on macOS.
pub fn macintosh(manager: &mut DeviceManager, frame: &mut CallFrame) -> crate::Result<()> {
    log::trace!("Graphics: Macintosh device requested");
    let params = MacintoshParameters::from_frame(frame)?;

    if !cfg!(target_os = "macos") {
        return Err(Error::DeviceUnavailable { name: "Macintosh" });
    }

    start_device(manager, Box::new(MacintoshDriver::new(params)))
}

/// The construct-and-register sequence shared by every format.
///
/// The registry and the active-device marker are only touched once the
/// driver reported success; a failed construction drops the half-built
/// descriptor on the way out. Interrupts are suspended for the whole
/// sequence so an asynchronous interrupt can't fire against a descriptor
/// that is allocated but not yet registered.
fn start_device(manager: &mut DeviceManager, driver: Box<dyn DeviceDriver>) -> crate::Result<()> {
    manager.check_device_available()?;

    let _interrupts = InterruptsSuspendedScope::new();

    let name = driver.name();
    let mut device = DeviceDescriptor::new(driver);

    let DeviceDescriptor { par, driver, .. } = &mut device;
    if let Err(source) = driver.open(par) {
        return Err(Error::UnableToStartDevice { name, source });
    }

    manager.set_active_device(name);
    manager.add_device(device);
    manager.init_display_list();

    Ok(())
}
