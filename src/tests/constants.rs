// ASCII "1234567890"
pub const TOTP_KEY: &str = "GEZDGNBVGY3TQOJQ";
// HMAC-SHA1("1234567890", counter 1), truncated
pub const TOTP_KEY_STEP_1_CODE: &str = "263420";
