//
// lib.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

pub mod error;
pub mod frame;
pub mod interrupts;
pub mod value;

pub use crate::error::Error;
pub use crate::frame::CallFrame;
pub use crate::interrupts::InterruptsSuspendedScope;
pub use crate::value::RValue;

pub type Result<T> = std::result::Result<T, error::Error>;

// Necessary for the `rcall::` references in macros, e.g. `rcall::anyhow!`, to
// resolve to the correct symbols
extern crate self as rcall;
