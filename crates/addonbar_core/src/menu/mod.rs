//! Addon-menu catalog model and deferred registration.
//!
//! # Responsibility
//! - Declare which optional modules contribute which menu entries.
//! - Attach those entries to the host's view menu once it exists, retrying
//!   on a host timer until it does.
//!
//! # Invariants
//! - The registration pass runs at most once per registrar instance.
//! - Entries are only created for modules loaded at registration time.

pub mod action;
pub mod catalog;
pub mod entry;
pub mod registrar;
