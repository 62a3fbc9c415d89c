//! Detection of template placeholder tokens.

/// Placeholder tokens from the distributed template, verbatim.
const PLACEHOLDER_TOKENS: [&str; 7] = [
    "YOUR_API_KEY",
    "YOUR_PROJECT.firebaseapp.com",
    "YOUR_PROJECT_ID",
    "YOUR_PROJECT.appspot.com",
    "SENDER_ID",
    "APP_ID",
    "MEASUREMENT_ID",
];

/// Returns true when a value is one of the template's placeholder tokens,
/// or was edited but still carries the `YOUR_` marker (e.g.
/// "YOUR_PROJECT.firebaseapp.com" with only the suffix changed).
pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_TOKENS.contains(&value) || value.contains("YOUR_")
}
