//! Lookups over an extracted tag list, shared by the analyzers, the score
//! calculator and the recommendation generator.

use crate::models::{MetaTag, TagKind};

pub const REQUIRED_OPEN_GRAPH_TAGS: [&str; 4] =
    ["og:title", "og:description", "og:image", "og:url"];

pub const REQUIRED_TWITTER_TAGS: [&str; 4] = [
    "twitter:card",
    "twitter:title",
    "twitter:description",
    "twitter:image",
];

pub const OG_TYPE: &str = "og:type";
pub const OG_IMAGE: &str = "og:image";
pub const OG_IMAGE_WIDTH: &str = "og:image:width";
pub const OG_IMAGE_HEIGHT: &str = "og:image:height";

/// Open Graph tags are matched on the `property` attribute
pub fn has_property(tags: &[MetaTag], property: &str) -> bool {
    tags.iter()
        .any(|tag| tag.property.as_deref() == Some(property))
}

/// Twitter Card tags are matched on the `name` attribute
pub fn has_name(tags: &[MetaTag], name: &str) -> bool {
    tags.iter().any(|tag| tag.name.as_deref() == Some(name))
}

pub fn has_canonical(tags: &[MetaTag]) -> bool {
    tags.iter()
        .any(|tag| tag.kind == TagKind::Link && tag.property.as_deref() == Some("canonical"))
}

/// True only when both `og:image:width` and `og:image:height` are present
pub fn has_image_dimensions(tags: &[MetaTag]) -> bool {
    has_property(tags, OG_IMAGE_WIDTH) && has_property(tags, OG_IMAGE_HEIGHT)
}

/// Required properties absent from `tags`, in the order they were required
pub fn missing_properties<'a>(tags: &[MetaTag], required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|property| !has_property(tags, property))
        .collect()
}

/// Required names absent from `tags`, in the order they were required
pub fn missing_names<'a>(tags: &[MetaTag], required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|name| !has_name(tags, name))
        .collect()
}

/// First tag whose property or name equals `key`
pub fn find_tag<'t>(tags: &'t [MetaTag], key: &str) -> Option<&'t MetaTag> {
    tags.iter().find(|tag| {
        tag.property.as_deref() == Some(key) || tag.name.as_deref() == Some(key)
    })
}

/// Empty strings count as missing everywhere in the analysis
pub fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Length in UTF-16 code units, so emoji and other astral characters count twice
pub fn char_len(value: &str) -> usize {
    value.encode_utf16().count()
}
