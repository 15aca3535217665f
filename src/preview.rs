//! How the analyzed page would look in a search result and when shared on
//! social networks. Missing social tags fall back the way the platforms do:
//! Open Graph falls back to the page title and description, Twitter falls
//! back to Open Graph.

use crate::models::{MetaTag, SeoAnalysis, TagStatus};
use crate::seo_analyzer::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use crate::tags::{self, REQUIRED_TWITTER_TAGS};
use serde::Serialize;

pub const FACEBOOK_CHECKLIST: [&str; 5] = [
    "og:title",
    "og:description",
    "og:image",
    "og:url",
    "og:type",
];

/// Why a search snippet length is off, if it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LengthVerdict {
    Missing,
    TooShort,
    TooLong,
}

impl LengthVerdict {
    pub fn check(length: usize, min: usize, max: usize) -> Option<Self> {
        if length == 0 {
            Some(LengthVerdict::Missing)
        } else if length < min {
            Some(LengthVerdict::TooShort)
        } else if length > max {
            Some(LengthVerdict::TooLong)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LengthVerdict::Missing => "Missing",
            LengthVerdict::TooShort => "Too short",
            LengthVerdict::TooLong => "Too long",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCheck {
    pub key: &'static str,
    pub status: TagStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPreview {
    pub title: String,
    pub url: String,
    pub description: String,
    pub title_length: usize,
    pub description_length: usize,
    pub title_verdict: Option<LengthVerdict>,
    pub description_verdict: Option<LengthVerdict>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacebookPreview {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub url: String,
    pub kind: Option<String>,
    pub checks: Vec<TagCheck>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterPreview {
    pub card: Option<String>,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// Set when twitter:card or twitter:title is absent
    pub uses_fallback: bool,
    pub checks: Vec<TagCheck>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Previews {
    pub search: SearchPreview,
    pub facebook: FacebookPreview,
    pub twitter: TwitterPreview,
}

impl Previews {
    pub fn from_analysis(analysis: &SeoAnalysis) -> Self {
        let meta_tags = &analysis.meta_tags;
        let title = analysis.title.clone().unwrap_or_default();
        let description = analysis.description.clone().unwrap_or_default();

        let og_title = content(meta_tags, "og:title").unwrap_or_else(|| title.clone());
        let og_description =
            content(meta_tags, "og:description").unwrap_or_else(|| description.clone());
        let og_image = content(meta_tags, "og:image");

        let title_length = tags::char_len(&title);
        let description_length = tags::char_len(&description);
        let search = SearchPreview {
            title_length,
            description_length,
            title_verdict: LengthVerdict::check(
                title_length,
                TITLE_MIN_LENGTH,
                TITLE_MAX_LENGTH,
            ),
            description_verdict: LengthVerdict::check(
                description_length,
                DESCRIPTION_MIN_LENGTH,
                DESCRIPTION_MAX_LENGTH,
            ),
            title,
            url: analysis.url.clone(),
            description,
        };

        let facebook = FacebookPreview {
            title: og_title.clone(),
            description: og_description.clone(),
            image: og_image.clone(),
            url: content(meta_tags, "og:url").unwrap_or_else(|| analysis.url.clone()),
            kind: content(meta_tags, "og:type"),
            checks: checklist(meta_tags, &FACEBOOK_CHECKLIST),
        };

        let card = content(meta_tags, "twitter:card");
        let twitter = TwitterPreview {
            uses_fallback: card.is_none() || tags::find_tag(meta_tags, "twitter:title").is_none(),
            card,
            title: content(meta_tags, "twitter:title").unwrap_or(og_title),
            description: content(meta_tags, "twitter:description").unwrap_or(og_description),
            image: content(meta_tags, "twitter:image").or(og_image),
            checks: checklist(meta_tags, &REQUIRED_TWITTER_TAGS),
        };

        Self {
            search,
            facebook,
            twitter,
        }
    }
}

/// Status of the tag under `key`, `Missing` when the page does not have it
pub fn tag_status(meta_tags: &[MetaTag], key: &str) -> TagStatus {
    tags::find_tag(meta_tags, key)
        .map(|tag| tag.status.unwrap_or(TagStatus::Good))
        .unwrap_or(TagStatus::Missing)
}

/// One [`tag_status`] entry per key, in the order given
pub fn checklist(meta_tags: &[MetaTag], keys: &[&'static str]) -> Vec<TagCheck> {
    keys.iter()
        .map(|&key| TagCheck {
            key,
            status: tag_status(meta_tags, key),
        })
        .collect()
}

fn content(meta_tags: &[MetaTag], key: &str) -> Option<String> {
    tags::find_tag(meta_tags, key)
        .map(|tag| tag.content.clone())
        .filter(|s| !s.is_empty())
}
