//! # XSwap Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (commitments, codec)
//! └── src/integration/  # Cross-module flows
//!     ├── round_trip.rs     # workflow -> serializer -> text -> deserializer
//!     ├── fill_proofs.rs    # Merkle proofs against rebuilt orders
//!     └── service_flow.rs   # OrderService with in-memory adapters
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p xswap-tests
//!
//! # By category
//! cargo test -p xswap-tests integration::round_trip
//!
//! # Benchmarks
//! cargo bench -p xswap-tests
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
