/// Application constants
///
/// Fixed values for the DirectMail endpoint and the send-mail defaults.
// ============================================================================
// Provider Endpoint
// ============================================================================
/// DirectMail endpoint host (Singapore)
pub const DM_ENDPOINT: &str = "dm.ap-southeast-1.aliyuncs.com";

/// DirectMail region identifier
pub const DM_REGION_ID: &str = "ap-southeast-1";

/// DirectMail API version sent with every call
pub const DM_API_VERSION: &str = "2015-11-23";

/// Scheme used to reach the endpoint
pub const DM_SCHEME: &str = "https";

// ============================================================================
// Credentials
// ============================================================================

/// Environment variable holding the access key id
pub const ACCESS_KEY_ID_ENV: &str = "ALICLOUD_ACCESS_KEY_ID";

/// Environment variable holding the access key secret
pub const ACCESS_KEY_SECRET_ENV: &str = "ALICLOUD_ACCESS_KEY_SECRET";

// ============================================================================
// Send Mail
// ============================================================================

/// Subject used when the caller does not supply one
pub const DEFAULT_SUBJECT: &str = "Test Email";

/// Body used when the caller does not supply one
pub const DEFAULT_BODY: &str = "Hello from Cloudflare Workers!";

/// Address type for a sender account address (1 = sender address, 0 = random)
pub const SENDER_ADDRESS_TYPE: u8 = 1;

// ============================================================================
// Signing
// ============================================================================

/// Signature algorithm identifier
pub const SIGNATURE_ALGORITHM: &str = "ACS3-HMAC-SHA256";

/// Header carrying the provider's request id on responses
pub const REQUEST_ID_HEADER: &str = "x-acs-request-id";
