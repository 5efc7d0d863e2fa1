//! Shared utilities and error types for the medical records contracts.
//!
//! This crate provides:
//! - [`CommonError`]: error codes shared by contract helpers.
//! - [`validation`]: bounds checks for caller-supplied strings.
//! - [`ttl`]: storage time-to-live extension helpers.
//!
//! Contract-specific errors convert from [`CommonError`] so helpers in this
//! crate can be used with `?` inside contract functions.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod ttl;
pub mod validation;

pub use ttl::*;
pub use validation::*;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Standardised error codes shared by every medical records contract.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 30 – 39 | Validation / input             |
/// | 100+    | Reserved for contract-specific |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    // ── Validation (30–39) ───────────────────────────────────
    /// One or more input parameters are invalid (empty required string or
    /// oversized payload).
    InvalidInput = 30,
}
