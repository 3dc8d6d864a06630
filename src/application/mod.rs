//! Application layer containing the callback translation logic.
//!
//! This module defines the `ResponseTranslator`, the entry point that turns a
//! decoded gateway callback into a canonical `PaymentResponse`.

pub mod translator;
