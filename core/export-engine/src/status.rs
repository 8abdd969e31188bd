//! FILENAME: core/export-engine/src/status.rs
//! The single in-flight generation flag shared by all export paths.
//!
//! Only one export runs at a time; the flag is raised before any
//! serialization starts and dropped on every exit path, success or
//! failure, so the frontend can disable its export buttons while a
//! report is being produced and always gets them back.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ExportError;

/// Tracks whether an export is currently being generated.
#[derive(Debug, Default)]
pub struct GenerationState {
    in_flight: AtomicBool,
}

impl GenerationState {
    pub fn new() -> Self {
        GenerationState::default()
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claims the flag for one export. Fails with `Busy` if another
    /// export holds it; the returned guard releases it on drop.
    pub fn begin(&self) -> Result<GenerationGuard<'_>, ExportError> {
        match self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => Ok(GenerationGuard { state: self }),
            Err(_) => Err(ExportError::Busy),
        }
    }
}

/// RAII guard clearing the in-flight flag; dropping it is the
/// `finally` path, so an early return or error cannot leave the UI
/// stuck in "generating".
#[derive(Debug)]
pub struct GenerationGuard<'a> {
    state: &'a GenerationState,
}

impl Drop for GenerationGuard<'_> {
    fn drop(&mut self) {
        self.state.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_claims_and_drop_releases() {
        let state = GenerationState::new();
        assert!(!state.is_generating());

        let guard = state.begin().unwrap();
        assert!(state.is_generating());
        assert!(matches!(state.begin(), Err(ExportError::Busy)));

        drop(guard);
        assert!(!state.is_generating());
        assert!(state.begin().is_ok());
    }

    #[test]
    fn flag_clears_on_error_paths_too() {
        let state = GenerationState::new();
        let result: Result<(), ExportError> = (|| {
            let _guard = state.begin()?;
            Err(ExportError::Busy) // any failure mid-generation
        })();
        assert!(result.is_err());
        assert!(!state.is_generating());
    }
}
