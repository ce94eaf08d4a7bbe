// Turns whatever the user pasted (store URL or bare package name) into an
// app identifier. Extraction only, no validation: a garbage identifier is
// allowed through and surfaces later as a catalog failure.

/// Extract the app identifier from a Play Store URL, or pass the input
/// through unchanged when it is already a bare identifier.
///
/// Handles both URL shapes the store uses:
/// `...details?id=com.foo.bar&hl=en` and `.../apps/details/com.foo.bar?x=y`.
pub fn resolve_app_id(input: &str) -> String {
    if let Some(rest) = input.split_once("id=").map(|(_, r)| r) {
        rest.split('&').next().unwrap_or(rest).to_string()
    } else if let Some(rest) = input.split_once("/apps/details/").map(|(_, r)| r) {
        rest.split('?').next().unwrap_or(rest).to_string()
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_query_parameter_url() {
        let url = "https://play.google.com/store/apps/details?id=com.example.app&hl=en_US&gl=US";
        assert_eq!(resolve_app_id(url), "com.example.app");
    }

    #[test]
    fn extracts_id_from_query_parameter_without_trailing_params() {
        let url = "https://play.google.com/store/apps/details?id=com.example.app";
        assert_eq!(resolve_app_id(url), "com.example.app");
    }

    #[test]
    fn extracts_id_from_path_segment_url() {
        let url = "https://play.google.com/store/apps/details/com.example.app?hl=en";
        assert_eq!(resolve_app_id(url), "com.example.app");
    }

    #[test]
    fn passes_bare_identifier_through() {
        assert_eq!(resolve_app_id("com.example.app"), "com.example.app");
    }
}
