use regex::Regex;

use crate::error::TextError;

/// Allow-list check for platform URLs.
///
/// Wraps the single regular expression stored for a platform. With no
/// pattern configured every URL passes.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    regex: Option<Regex>,
}

impl UrlPattern {
    /// Compile a stored pattern. `None` or a blank string allows everything.
    ///
    /// # Example
    /// ```
    /// use ongen_text::UrlPattern;
    ///
    /// let pattern = UrlPattern::new(Some(r"^https://(www\.)?youtube\.com/")).unwrap();
    /// assert!(pattern.allows("https://www.youtube.com/watch?v=9lNZ_Rnr7Jc"));
    /// assert!(!pattern.allows("https://example.com/"));
    /// ```
    pub fn new(pattern: Option<&str>) -> Result<Self, TextError> {
        let regex = match pattern.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => Some(Regex::new(p).map_err(|source| TextError::InvalidPattern {
                pattern: p.to_string(),
                source,
            })?),
            None => None,
        };
        Ok(Self { regex })
    }

    /// A pattern that accepts every URL.
    pub fn allow_all() -> Self {
        Self { regex: None }
    }

    pub fn allows(&self, url: &str) -> bool {
        self.regex.as_ref().map_or(true, |re| re.is_match(url))
    }
}

impl Default for UrlPattern {
    fn default() -> Self {
        Self::allow_all()
    }
}
