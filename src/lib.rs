//! # Pordego (Authentication Gateway)
//!
//! `pordego` is a small HTTP gateway in front of a GoTrue-compatible
//! authentication provider (Supabase auth). It accepts signup and login
//! requests on a fixed set of routes, delegates the credential operations to
//! the provider, and returns a normalized JSON response.
//!
//! The gateway keeps no state of its own: every request is independent, and
//! the only long-lived resource is the provider client handle built at
//! startup.

pub mod cli;
pub mod gotrue;
pub mod pordego;
