//! Font family names and the service URLs derived from them.

use std::fmt;

/// Style sheet endpoint of the font service.
pub const CSS_API_URL: &str = "https://fonts.googleapis.com/css2";

/// Path marker of a specimen page URL.
const SPECIMEN_MARKER: &str = "fonts.google.com/specimen/";

/// A font family as known to the font service, e.g. `Roboto Mono`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily(String);

impl FontFamily {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Parse user input that is either a family name or a specimen page URL.
    ///
    /// `https://fonts.google.com/specimen/Open+Sans?query=x` yields `Open Sans`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.find(SPECIMEN_MARKER) {
            Some(pos) => {
                let rest = &input[pos + SPECIMEN_MARKER.len()..];
                let end = rest.find(['/', '?', '&', '#']).unwrap_or(rest.len());
                if end == 0 {
                    return Self::new(input);
                }
                Self::new(rest[..end].replace('+', " "))
            }
            None => Self::new(input),
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Family name with spaces replaced by `+`, as the service expects.
    pub fn url_encoded(&self) -> String {
        self.0.replace(' ', "+")
    }

    /// Style sheet URL requesting the regular (400) weight.
    pub fn css_url(&self) -> String {
        format!("{CSS_API_URL}?family={}:wght@400&display=swap", self.url_encoded())
    }

    /// Style sheet URL without a weight, used to check that the family exists.
    pub fn lookup_url(&self) -> String {
        format!("{CSS_API_URL}?family={}", self.url_encoded())
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
