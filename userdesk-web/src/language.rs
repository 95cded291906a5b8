use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Translation bundles keyed by language code
pub fn supported_languages() -> HashMap<&'static str, &'static str> {
    HashMap::from([("en", include_str!("../translations/en.json"))])
}
