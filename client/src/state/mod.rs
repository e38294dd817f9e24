//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`board`, `toast`) so individual components can
//! depend on small focused models. Each state struct lives in an `RwSignal`
//! provided via context by the root component; mutation goes through the
//! operations defined here, never through ad-hoc field pokes in views.

pub mod board;
pub mod toast;
