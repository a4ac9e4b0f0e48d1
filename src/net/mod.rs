//! Network layer: wire types and the typed REST client.

pub mod api;
pub mod types;
