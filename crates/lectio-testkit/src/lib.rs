//! # Lectio Testkit
//!
//! Testing utilities for the lectio workspace.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Helper structs for setting up granters, stashes, players,
//!   and a small catalog
//! - **Generators**: Proptest strategies for property-based testing
//! - **Golden vectors**: Fixed inputs for the deterministic half of the token
//!   scheme (digest + codec)
//!
//! ## Test Fixtures
//!
//! Quickly set up a handoff scenario:
//!
//! ```rust
//! use lectio_testkit::fixtures::TestFixture;
//!
//! # tokio_test(async {
//! let fixture = TestFixture::new();
//! let token = fixture.granter.mint("https://x/v.mp4", "42").await.unwrap();
//! let grant = fixture.granter.redeem(&token).await.unwrap().unwrap();
//! assert!(grant.is_valid);
//! # });
//! # fn tokio_test<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f);
//! # }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use lectio_testkit::generators;
//!
//! proptest! {
//!     #[test]
//!     fn digest_is_deterministic(id in generators::short_id(), blob in ".*") {
//!         let d1 = lectio_core::TokenDigest::compute(&blob, &id);
//!         let d2 = lectio_core::TokenDigest::compute(&blob, &id);
//!         prop_assert_eq!(d1, d2);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sample_catalog, TestFixture};
pub use generators::GrantParams;
pub use vectors::{all_vectors, digest_from_vector, verify_all_vectors, GoldenVector};
