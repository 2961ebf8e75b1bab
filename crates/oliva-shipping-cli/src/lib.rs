// crates/oliva-shipping-cli/src/lib.rs
// ============================================================================
// Module: Oliva Shipping CLI Library
// Description: Shared helpers for the shipping command-line interface.
// Purpose: Provide reusable components (i18n) for the CLI binary and tests.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! This library module houses the message catalog used by the
//! `oliva-shipping` binary. The binary entry point (`src/main.rs`) imports
//! these helpers to keep all operator-facing output consistent in both
//! storefront languages.
//!
//! Security posture: CLI inputs are untrusted and must be validated.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
