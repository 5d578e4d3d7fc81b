//! State layer of a personal browser start page: settings merged over
//! defaults, a one-level bookmark tree, and the editor that mutates both
//! against a host-provided key-value store.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
