//! Web boundary helpers.

pub mod trace_ctx;
