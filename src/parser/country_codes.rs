use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Source country code -> underscore-separated locale codes
static COUNTRY_CODE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("GB", "EN"),
        ("IE", "EN"),
        ("NI", "EN"),
        ("GR", "EL"),
        ("DK", "DA"),
        ("RS", "SR"),
        ("SI", "SL"),
        ("CZ", "CS"),
        ("SE", "SV"),
        ("AT", "DE"),
        ("CH", "CH_DE_FR_IT"),
        ("CY", "CY_EN_EL"),
        ("BE", "BE_FR_NL"),
        // First token is "OS-DE" on purpose, only underscores split
        ("OS", "OS-DE_EN_FR_NL_PL_CS_SK_ES_DA_IT_HU"),
        ("US", "US_AE_AS"),
    ])
});

/// Look up a two-letter code, falling back to the code itself
pub fn lookup_country_code(code: &str) -> &str {
    COUNTRY_CODE_MAP.get(code).copied().unwrap_or(code)
}

/// Expand codes through the map and flatten into unique locale tokens.
///
/// Order follows the first time each token is produced.
pub fn expand_country_codes<'a, I>(codes: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut locales = Vec::new();
    let mut seen = HashSet::new();

    for code in codes {
        for token in lookup_country_code(code).split('_') {
            if seen.insert(token) {
                locales.push(token.to_string());
            }
        }
    }

    locales
}
