//! Shared client-side state.
//!
//! DESIGN
//! ======
//! UI components read observable cells; the services layer is the only
//! writer. Cells are plain `tokio::sync::watch` senders behind an `Arc`, so
//! clones of a store all see the same values.

pub mod observable;
pub mod session;

pub use observable::Observable;
pub use session::{AuthState, SessionStore};
