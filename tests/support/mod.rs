// tests/support/mod.rs
// Shared test doubles and router builders used by multiple integration test
// binaries. Some symbols are unused in individual test crates, so allow the
// resulting warnings at module level.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
