//! # cart-core
//!
//! Core types and error types for cartco2.
//!
//! This crate provides the types shared across all cartco2 crates:
//! - Cart input items with lenient decoding of loosely-typed payloads
//! - Per-item resolution results and the cart assessment summary
//! - Cross-cutting error types

pub mod assessment;
pub mod cart;
pub mod errors;

pub use assessment::{AssessmentStatus, CartAssessment, ResolvedItem, Summary, round_cents};
pub use cart::{CartItem, parse_cart, parse_cart_str};
pub use errors::CoreError;
