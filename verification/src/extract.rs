//! Name and street-address extraction from document text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional `name` label, then two capitalized words separated by one space.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:name[:\s]*)?\b([A-Z][a-z]+ [A-Z][a-z]+)\b").expect("name pattern is valid")
});

/// 3-5 digit house number, word tokens, then a street-type suffix.
///
/// Longer suffixes are listed before their abbreviations and the suffix must
/// end on a word boundary, so "Avenue" is never cut down to "Ave".
static ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d{3,5}\s+\w+(?:\s\w+)*\s+(?:Street|St|Road|Rd|Avenue|Ave|Boulevard|Blvd|Lane|Ln|Drive|Dr)\b",
    )
    .expect("address pattern is valid")
});

/// Fields pulled out of one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// First capitalized word pair, with any leading `name` label dropped.
pub fn extract_name(text: &str) -> Option<String> {
    NAME_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Full span of the first street address.
pub fn extract_address(text: &str) -> Option<String> {
    ADDRESS_PATTERN.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_fields(text: &str) -> ExtractedFields {
    ExtractedFields {
        name: extract_name(text),
        address: extract_address(text),
    }
}
