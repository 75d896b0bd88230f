//! Core types for Shelfline.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod discount;
pub mod id;
pub mod money;

pub use discount::{DiscountError, DiscountPercent};
pub use id::*;
pub use money::{Money, MoneyError};
