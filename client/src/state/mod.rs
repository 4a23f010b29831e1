//! Browser-side state.
//!
//! DESIGN
//! ======
//! The admin session token is the only persisted state; pages keep their own
//! transient signals.

pub mod session;
