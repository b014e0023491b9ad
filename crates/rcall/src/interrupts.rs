//
// interrupts.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use crate::error::Error;

static SUSPEND_DEPTH: AtomicUsize = AtomicUsize::new(0);
static INTERRUPT_PENDING: AtomicBool = AtomicBool::new(false);

/// Scope guard suspending interrupt delivery, the equivalent of R's
/// `BEGIN_SUSPEND_INTERRUPTS` / `END_SUSPEND_INTERRUPTS` block.
///
/// Scopes nest; delivery resumes when the outermost scope drops. An interrupt
/// requested while suspended stays pending and is observed by the next
/// `check_interrupts()` outside the scope.
pub struct InterruptsSuspendedScope {
    _private: (),
}

impl InterruptsSuspendedScope {
    pub fn new() -> InterruptsSuspendedScope {
        SUSPEND_DEPTH.fetch_add(1, Ordering::SeqCst);
        InterruptsSuspendedScope { _private: () }
    }
}

impl Default for InterruptsSuspendedScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InterruptsSuspendedScope {
    fn drop(&mut self) {
        SUSPEND_DEPTH.fetch_sub(1, Ordering::SeqCst);
    }
}

pub fn interrupts_suspended() -> bool {
    SUSPEND_DEPTH.load(Ordering::SeqCst) > 0
}

/// Flags a pending interrupt, as an asynchronous signal handler would.
pub fn request_interrupt() {
    log::trace!("Interrupts: interrupt requested");
    INTERRUPT_PENDING.store(true, Ordering::SeqCst);
}

/// Observes a pending interrupt unless delivery is suspended. On observation
/// the flag is consumed and `Error::Interrupted` is raised.
pub fn check_interrupts() -> crate::Result<()> {
    if interrupts_suspended() {
        return Ok(());
    }

    if INTERRUPT_PENDING.swap(false, Ordering::SeqCst) {
        log::trace!("Interrupts: delivering pending interrupt");
        return Err(Error::Interrupted);
    }

    Ok(())
}
