//! # Lectio Grant
//!
//! The link tokenizer and token redeemer: converts a resolved video URL plus
//! a viewer identity into a short opaque token backed by a stash entry, and
//! exchanges such a token back for the URL subject to integrity and expiry
//! checks.
//!
//! Every failure mode on the redeem path except expiry collapses into a
//! single `None` so the result never discloses WHY a token was rejected.
//! Expiry is distinguished: the payload still comes back, flagged invalid,
//! so the caller can say "expired" instead of "invalid".

pub mod config;
pub mod error;
pub mod granter;

pub use config::GrantConfig;
pub use error::GrantError;
pub use granter::{Granter, RedeemedGrant};
