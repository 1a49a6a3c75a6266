//! # Integration Tests
//!
//! Cross-crate flows. Everything runs in-process; HTTP flows drive the
//! router directly with `tower::ServiceExt::oneshot`.

pub mod flows;
pub mod http_flows;

/// Secret shared by the regression vectors below.
pub const TEST_SECRET: &str = "imarealtivelylongandsomewhatsecuresecret";

/// Digest of `"item1"` under [`TEST_SECRET`].
pub const ITEM1_DIGEST: &str = "sXPrOsBtd6oI6KZMpLLQZOMkdJnpjdKGYf9RrLxG0no=";

/// Digest of `"testing1"` under [`TEST_SECRET`].
pub const TESTING1_DIGEST: &str = "MD0pnmIWLSKUz0FoyUl7HFXU8DVyq+L4j8JkMg7p0uc=";
