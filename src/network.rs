//! Default server URL and environment variable names.

/// Default Heketi server URL.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Environment variable holding the server URL.
pub const ENV_SERVER: &str = "HEKETI_CLI_SERVER";

/// Environment variable holding the token issuer (user).
pub const ENV_USER: &str = "HEKETI_CLI_USER";

/// Environment variable holding the shared signing key.
pub const ENV_KEY: &str = "HEKETI_CLI_KEY";
