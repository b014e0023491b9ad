//
// lib.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

pub mod device;
pub mod dispatch;
pub mod display_list;
pub mod drivers;
pub mod error;
pub mod manager;

pub use crate::device::DeviceDescriptor;
pub use crate::device::DeviceParameters;
pub use crate::display_list::DisplayList;
pub use crate::drivers::DeviceDriver;
pub use crate::drivers::FontFamily;
pub use crate::error::Error;
pub use crate::manager::DeviceManager;

pub type Result<T> = std::result::Result<T, error::Error>;
