//
// result.rs
//
// Copyright (C) 2026 Posit Software, PBC. All rights reserved.
//
//

pub trait ResultOrLog<E> {
    /// Logs the contained error (if [`Err`]) at `error` level, consuming
    /// the Result.
    fn or_log_error(self, message: &str);

    /// Logs the contained error (if [`Err`]) at `warn` level, consuming
    /// the Result.
    fn or_log_warning(self, message: &str);
}

impl<T, E> ResultOrLog<E> for Result<T, E>
where
    E: std::fmt::Debug,
{
    fn or_log_error(self, message: &str) {
        if let Err(err) = self {
            log::error!("{message}: {err:?}");
        }
    }

    fn or_log_warning(self, message: &str) {
        if let Err(err) = self {
            log::warn!("{message}: {err:?}");
        }
    }
}
