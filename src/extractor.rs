use crate::models::{MetaTag, PageData, TagKind, TagStatus};
use crate::tags;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

// Cached selectors
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector should be valid"));
static META_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='description']").expect("meta description selector should be valid")
});
static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta").expect("meta selector should be valid"));
static CANONICAL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("link[rel='canonical']").expect("canonical link selector should be valid")
});

const WELL_IMPLEMENTED: &str = "Well implemented";
const DIMENSIONS_DEFINED: &str = "Image dimensions properly defined";
const DIMENSIONS_MISSING: &str = "Missing dimensions (og:image:width, og:image:height)";

/// Turns raw HTML into the [`PageData`] the analysis engine consumes
pub struct TagExtractor;

impl TagExtractor {
    /// `requested_url` becomes the analysis URL when the page has no canonical link
    pub fn extract(html: &str, requested_url: &str) -> PageData {
        let document = Html::parse_document(html);

        let title = Self::extract_title(&document);
        let description = Self::extract_meta_description(&document);
        let url = Self::extract_canonical_url(&document)
            .unwrap_or_else(|| requested_url.to_string());
        let meta_tags = Self::extract_meta_tags(&document);

        tracing::debug!(
            url = %url,
            has_title = title.is_some(),
            has_description = description.is_some(),
            meta_tags = meta_tags.len(),
            "Extracted page metadata"
        );

        PageData {
            title,
            description,
            url,
            meta_tags,
        }
    }

    pub fn extract_title(document: &Html) -> Option<String> {
        document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn extract_meta_description(document: &Html) -> Option<String> {
        document
            .select(&META_DESC_SELECTOR)
            .next()
            .and_then(|el| el.value().attr("content"))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    }

    pub fn extract_canonical_url(document: &Html) -> Option<String> {
        document
            .select(&CANONICAL_SELECTOR)
            .next()
            .and_then(|el| el.value().attr("href"))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    }

    /// All `<meta>` tags with a name or property and some content, in document
    /// order, followed by the canonical link when the page declares one
    pub fn extract_meta_tags(document: &Html) -> Vec<MetaTag> {
        let mut meta_tags = Vec::new();

        for element in document.select(&META_SELECTOR) {
            let attr = |key: &str| element.value().attr(key).filter(|s| !s.is_empty());
            let name = attr("name");
            let property = attr("property");

            let Some(content) = attr("content") else {
                continue;
            };
            if name.is_none() && property.is_none() {
                continue;
            }

            let mut tag = MetaTag {
                kind: TagKind::Meta,
                name: name.map(|s| s.to_string()),
                property: property.map(|s| s.to_string()),
                content: content.to_string(),
                status: None,
                message: None,
            };

            if let Some((status, message)) = Self::provisional_status(name, property) {
                tag = tag.with_status(status, message);
            }

            meta_tags.push(tag);
        }

        if let Some(href) = Self::extract_canonical_url(document) {
            meta_tags.push(MetaTag::canonical(&href));
        }

        Self::flag_missing_image_dimensions(&mut meta_tags);

        meta_tags
    }

    /// Per-tag verdict for the tags we know about; `None` leaves the tag unrated
    fn provisional_status(
        name: Option<&str>,
        property: Option<&str>,
    ) -> Option<(TagStatus, &'static str)> {
        if name == Some("description") {
            return Some((TagStatus::Good, WELL_IMPLEMENTED));
        }

        if let Some(name) = name
            && tags::REQUIRED_TWITTER_TAGS.contains(&name)
        {
            return Some((TagStatus::Good, WELL_IMPLEMENTED));
        }

        match property? {
            property
                if tags::REQUIRED_OPEN_GRAPH_TAGS.contains(&property)
                    || property == tags::OG_TYPE =>
            {
                Some((TagStatus::Good, WELL_IMPLEMENTED))
            }
            tags::OG_IMAGE_WIDTH | tags::OG_IMAGE_HEIGHT => {
                Some((TagStatus::Good, DIMENSIONS_DEFINED))
            }
            _ => None,
        }
    }

    /// Downgrades the first og:image when either dimension tag is absent
    fn flag_missing_image_dimensions(meta_tags: &mut [MetaTag]) {
        if tags::has_image_dimensions(meta_tags) {
            return;
        }

        if let Some(image) = meta_tags
            .iter_mut()
            .find(|tag| tag.property.as_deref() == Some(tags::OG_IMAGE))
        {
            image.status = Some(TagStatus::Warning);
            image.message = Some(DIMENSIONS_MISSING.to_string());
        }
    }
}
