//! Network URL and namespace constants for the BrightID node.

/// Default BrightID node REST base URL.
pub const DEFAULT_NODE_URL: &str = "https://app.brightid.org/node/v5";

/// App namespace registered with BrightID.
pub const DEFAULT_APP: &str = "Gitcoin";

/// Operation protocol version sent as `v`.
pub const OPERATION_VERSION: u32 = 5;
