//! Display errors
//!
//! Geometry is never an error: anything outside the canvas is clipped.
//! Only resource and bus failures surface here.

/// Display engine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Canvas or shadow buffer could not be allocated
    OutOfMemory,
    /// Communication error with the display controller
    Communication,
    /// Display not initialized
    NotInitialized,
}
