//! Test configuration constants for the translation API client.
//!
//! These values are placeholders, not real credentials.

/// API key the mock translation endpoints expect in the `key` query parameter.
pub static TEST_TRANSLATE_API_KEY: &str = "translate_api_key";

/// Path of the mocked translate method.
pub static TEST_TRANSLATE_PATH: &str = "/language/translate/v2";

/// Language listing content is authored in during tests.
pub static TEST_SOURCE_LANG: &str = "ro";
