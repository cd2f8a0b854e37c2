//! Time subsystem.
//!
//! The engine never owns time: hosts pass elapsed seconds into every render
//! call. `ActivationClock` is the host-side origin for that value, reset each
//! time the active visualizer changes so its animation restarts.

mod activation_clock;

pub use activation_clock::ActivationClock;
