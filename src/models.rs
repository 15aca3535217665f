use serde::{Deserialize, Serialize};

/// Kind of HTML element a [`MetaTag`] was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Meta,
    Link,
}

/// Provisional verdict attached to a single tag at extraction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStatus {
    Good,
    Warning,
    Missing,
}

/// Aggregate verdict for one SEO dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStatus {
    Good,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    #[serde(rename = "type")]
    pub kind: TagKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TagStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MetaTag {
    /// A `<meta name="..." content="...">` tag
    pub fn named(name: &str, content: &str) -> Self {
        Self {
            kind: TagKind::Meta,
            name: Some(name.to_string()),
            property: None,
            content: content.to_string(),
            status: None,
            message: None,
        }
    }

    /// A `<meta property="..." content="...">` tag
    pub fn property(property: &str, content: &str) -> Self {
        Self {
            kind: TagKind::Meta,
            name: None,
            property: Some(property.to_string()),
            content: content.to_string(),
            status: None,
            message: None,
        }
    }

    /// The synthesized entry for `<link rel="canonical" href="...">`
    pub fn canonical(href: &str) -> Self {
        Self {
            kind: TagKind::Link,
            name: None,
            property: Some("canonical".to_string()),
            content: href.to_string(),
            status: Some(TagStatus::Good),
            message: Some("Canonical URL defined".to_string()),
        }
    }

    pub fn with_status(mut self, status: TagStatus, message: &str) -> Self {
        self.status = Some(status);
        self.message = Some(message.to_string());
        self
    }

    /// The key shown to users: the property if set, otherwise the name
    pub fn key(&self) -> &str {
        self.property
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// Everything the analysis engine needs from a fetched page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub meta_tags: Vec<MetaTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPoint {
    pub status: SummaryStatus,
    pub message: String,
}

impl SummaryPoint {
    pub fn new(status: SummaryStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub implementation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub score: u8,
    pub meta_tags: Vec<MetaTag>,
    pub recommendations: Vec<Recommendation>,
    /// Title, description, Open Graph and Twitter Card verdicts, in that order
    pub summary_points: [SummaryPoint; 4],
}
