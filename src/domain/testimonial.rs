use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::domain::rating::MAX_STARS;

/// Where a testimonial was originally posted
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Source {
    X,
    Instagram,
    Facebook,
    Youtube,
    Direct,
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::X => "X",
            Source::Instagram => "Instagram",
            Source::Facebook => "Facebook",
            Source::Youtube => "YouTube",
            Source::Direct => "Direct",
        }
    }
}

/// A single customer review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    #[serde(default)]
    pub rating: u8,
    pub content: String,
    pub client_name: String,
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub source: Option<Source>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Testimonial {
    pub fn new(
        id: impl Into<String>,
        rating: u8,
        content: impl Into<String>,
        client_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            rating,
            content: content.into(),
            client_name: client_name.into(),
            client_email: None,
            source: None,
            created_at: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.client_email = Some(email.into());
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Rating limited to the star scale
    pub fn clamped_rating(&self) -> u8 {
        self.rating.min(MAX_STARS)
    }

    /// Avatar label: first letter of every name token, upper-cased
    pub fn initials(&self) -> String {
        self.client_name
            .split_whitespace()
            .filter_map(|token| token.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Company name guessed from the email domain (`jane@acme.io` -> `Acme`)
    pub fn company(&self) -> Option<String> {
        let email = self.client_email.as_deref()?;
        let (_, domain) = email.rsplit_once('@')?;
        let label = domain.split('.').next().filter(|s| !s.is_empty())?;

        let mut chars = label.chars();
        chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
    }

    /// Secondary attribution line shown under the client name
    pub fn attribution(&self) -> Option<String> {
        match (&self.client_email, self.company(), self.source) {
            (Some(email), Some(company), _) => Some(format!("{company} • {email}")),
            (Some(email), None, _) => Some(email.clone()),
            (None, _, Some(source)) => Some(format!("via {}", source.label())),
            (None, _, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("Jane Doe", "JD")]
    #[case("alice", "A")]
    #[case("  mary   ann  smith ", "MAS")]
    #[case("émile zola", "ÉZ")]
    #[case("", "")]
    fn test_initials(#[case] name: &str, #[case] expected: &str) {
        let t = Testimonial::new("1", 5, "Great", name);
        assert_eq!(t.initials(), expected);
    }

    #[rstest]
    #[case(Some("jane@acme.io"), Some("Acme"))]
    #[case(Some("bob@mail.example.com"), Some("Mail"))]
    #[case(Some("broken-address"), None)]
    #[case(Some("nobody@"), None)]
    #[case(None, None)]
    fn test_company(#[case] email: Option<&str>, #[case] expected: Option<&str>) {
        let mut t = Testimonial::new("1", 5, "Great", "Jane");
        t.client_email = email.map(String::from);
        assert_eq!(t.company().as_deref(), expected);
    }

    #[test]
    fn test_attribution_prefers_email() {
        let t = Testimonial::new("1", 5, "Great", "Jane")
            .with_email("jane@acme.io")
            .with_source(Source::X);
        assert_eq!(t.attribution().as_deref(), Some("Acme • jane@acme.io"));
    }

    #[test]
    fn test_attribution_falls_back_to_source() {
        let t = Testimonial::new("1", 5, "Great", "Jane").with_source(Source::Youtube);
        assert_eq!(t.attribution().as_deref(), Some("via YouTube"));
    }

    #[test]
    fn test_attribution_absent() {
        let t = Testimonial::new("1", 5, "Great", "Jane");
        assert_eq!(t.attribution(), None);
    }

    #[test]
    fn test_clamped_rating() {
        assert_eq!(Testimonial::new("1", 9, "", "").clamped_rating(), 5);
        assert_eq!(Testimonial::new("1", 3, "", "").clamped_rating(), 3);
    }

    #[test]
    fn test_deserialize_minimal() -> serde_json::Result<()> {
        let t: Testimonial = serde_json::from_str(
            r#"{"id":"t1","rating":4,"content":"Nice","client_name":"Ann Lee","source":"instagram"}"#,
        )?;
        assert_eq!(t.id, "t1");
        assert_eq!(t.rating, 4);
        assert_eq!(t.client_email, None);
        assert_eq!(t.source, Some(Source::Instagram));
        Ok(())
    }
}
