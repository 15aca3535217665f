use crate::models::{PageData, Recommendation};
use crate::seo_analyzer::{DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH};
use crate::tags::{self, REQUIRED_OPEN_GRAPH_TAGS, REQUIRED_TWITTER_TAGS};

const OPEN_GRAPH_SNIPPET: &str = "<meta property=\"og:title\" content=\"Your Page Title\">\n\
<meta property=\"og:description\" content=\"Your page description\">\n\
<meta property=\"og:image\" content=\"https://example.com/image.jpg\">\n\
<meta property=\"og:url\" content=\"https://example.com/page-url\">";

const OPEN_GRAPH_TYPE_SNIPPET: &str = "\n<meta property=\"og:type\" content=\"website\">";

const IMAGE_DIMENSIONS_SNIPPET: &str = "<meta property=\"og:image:width\" content=\"1200\">\n\
<meta property=\"og:image:height\" content=\"630\">";

const TWITTER_SNIPPET: &str = "<meta name=\"twitter:card\" content=\"summary_large_image\">\n\
<meta name=\"twitter:title\" content=\"Your Title\">\n\
<meta name=\"twitter:description\" content=\"Your Description\">\n\
<meta name=\"twitter:image\" content=\"https://example.com/image.jpg\">";

/// Hands out recommendations with contiguous ids starting at 1
#[derive(Default)]
struct RecommendationList {
    items: Vec<Recommendation>,
}

impl RecommendationList {
    fn push(&mut self, title: &str, description: &str, implementation: impl Into<String>) {
        self.items.push(Recommendation {
            id: self.items.len() as u32 + 1,
            title: title.to_string(),
            description: description.to_string(),
            implementation: implementation.into(),
        });
    }
}

pub struct RecommendationGenerator;

impl RecommendationGenerator {
    pub fn generate(page: &PageData) -> Vec<Recommendation> {
        let mut list = RecommendationList::default();
        let meta_tags = &page.meta_tags;

        // A title that is merely too short gets no recommendation
        match tags::present(page.title.as_ref()) {
            None => list.push(
                "Add a title tag",
                "Every page should have a unique, descriptive title tag (50-60 characters).",
                "<title>Your Page Title | Your Website Name</title>",
            ),
            Some(title) if tags::char_len(title) > TITLE_MAX_LENGTH => list.push(
                "Shorten your title tag",
                "Your title tag is too long. Keep it under 60 characters to avoid truncation in search results.",
                "<title>Shorter, More Concise Title | Website</title>",
            ),
            Some(_) => {}
        }

        match tags::present(page.description.as_ref()) {
            None => list.push(
                "Add a meta description",
                "Every page should have a unique meta description (120-158 characters).",
                "<meta name=\"description\" content=\"A concise description of your page content that will entice users to click through from search results.\">",
            ),
            Some(description) if tags::char_len(description) > DESCRIPTION_MAX_LENGTH => list
                .push(
                    "Shorten your meta description",
                    "Your meta description is too long. Keep it under 158 characters to avoid truncation in search results.",
                    "<meta name=\"description\" content=\"A shorter, more concise description of your page content.\">",
                ),
            Some(_) => {}
        }

        if !tags::missing_properties(meta_tags, &REQUIRED_OPEN_GRAPH_TAGS).is_empty() {
            let mut snippet = OPEN_GRAPH_SNIPPET.to_string();
            if !tags::has_property(meta_tags, tags::OG_TYPE) {
                snippet.push_str(OPEN_GRAPH_TYPE_SNIPPET);
            }
            list.push(
                "Add Open Graph meta tags",
                "Open Graph tags improve how your content appears when shared on social media platforms like Facebook.",
                snippet,
            );
        }

        if tags::has_property(meta_tags, tags::OG_IMAGE) && !tags::has_image_dimensions(meta_tags)
        {
            list.push(
                "Add Open Graph image dimensions",
                "Include width and height for og:image to improve social media previews.",
                IMAGE_DIMENSIONS_SNIPPET,
            );
        }

        if !tags::missing_names(meta_tags, &REQUIRED_TWITTER_TAGS).is_empty() {
            list.push(
                "Add Twitter Card meta tags",
                "Implement basic Twitter Card meta tags to improve visibility when sharing on Twitter.",
                TWITTER_SNIPPET,
            );
        }

        if !tags::has_canonical(meta_tags) {
            list.push(
                "Add canonical URL",
                "Implement a canonical URL to avoid duplicate content issues.",
                "<link rel=\"canonical\" href=\"https://example.com/page-url\">",
            );
        }

        list.items
    }
}
