//! Per-method request handlers
//!
//! Thin and mechanical: validate parameters, call the collaborator, shape
//! the result. Every handler has the uniform [`crate::dispatch::Handler`]
//! signature so the registry can hold them as plain function values.

pub(crate) mod library;
pub(crate) mod player;
