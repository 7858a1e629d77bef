//! Flutter-facing bindings for the club agenda core.

pub mod api;
