use crate::models::{MetaTag, PageData, SeoAnalysis, SummaryPoint, SummaryStatus};
use crate::recommendations::RecommendationGenerator;
use crate::score::ScoreCalculator;
use crate::tags::{self, REQUIRED_OPEN_GRAPH_TAGS, REQUIRED_TWITTER_TAGS};

pub const TITLE_MIN_LENGTH: usize = 30;
pub const TITLE_MAX_LENGTH: usize = 60;
pub const DESCRIPTION_MIN_LENGTH: usize = 80;
pub const DESCRIPTION_MAX_LENGTH: usize = 158;

pub struct SeoAnalyzer;

impl SeoAnalyzer {
    /// Runs every analyzer over `page` and assembles the final report
    pub fn analyze(page: PageData) -> SeoAnalysis {
        let summary_points = [
            Self::analyze_title(page.title.as_ref()),
            Self::analyze_description(page.description.as_ref()),
            Self::analyze_open_graph(&page.meta_tags),
            Self::analyze_twitter_card(&page.meta_tags),
        ];

        let score = ScoreCalculator::calculate(&page);
        let recommendations = RecommendationGenerator::generate(&page);

        tracing::debug!(
            url = %page.url,
            score,
            recommendations = recommendations.len(),
            "SEO analysis complete"
        );

        SeoAnalysis {
            title: page.title,
            url: page.url,
            description: page.description,
            score,
            meta_tags: page.meta_tags,
            recommendations,
            summary_points,
        }
    }

    pub fn analyze_title(title: Option<&String>) -> SummaryPoint {
        let Some(title) = tags::present(title) else {
            return SummaryPoint::new(SummaryStatus::Error, "Missing title tag");
        };

        let length = tags::char_len(title);
        if length < TITLE_MIN_LENGTH {
            SummaryPoint::new(
                SummaryStatus::Warning,
                "Title tag is too short (under 30 characters)",
            )
        } else if length > TITLE_MAX_LENGTH {
            SummaryPoint::new(
                SummaryStatus::Warning,
                format!("Title tag is too long at {} characters (over 60)", length),
            )
        } else {
            SummaryPoint::new(
                SummaryStatus::Good,
                format!("Title tag is well-optimized at {} characters", length),
            )
        }
    }

    pub fn analyze_description(description: Option<&String>) -> SummaryPoint {
        let Some(description) = tags::present(description) else {
            return SummaryPoint::new(SummaryStatus::Error, "Missing meta description");
        };

        let length = tags::char_len(description);
        if length < DESCRIPTION_MIN_LENGTH {
            SummaryPoint::new(
                SummaryStatus::Warning,
                "Meta description is too short (under 80 characters)",
            )
        } else if length > DESCRIPTION_MAX_LENGTH {
            SummaryPoint::new(
                SummaryStatus::Warning,
                format!(
                    "Meta description is too long at {} characters (over 158)",
                    length
                ),
            )
        } else {
            SummaryPoint::new(
                SummaryStatus::Good,
                "Meta description is present and well-formatted",
            )
        }
    }

    pub fn analyze_open_graph(meta_tags: &[MetaTag]) -> SummaryPoint {
        let missing = tags::missing_properties(meta_tags, &REQUIRED_OPEN_GRAPH_TAGS);

        if !missing.is_empty() {
            // og:title and og:description are critical, the rest only recommended
            let critical = missing
                .iter()
                .any(|tag| *tag == "og:title" || *tag == "og:description");

            return if critical {
                SummaryPoint::new(
                    SummaryStatus::Error,
                    format!("Missing critical Open Graph tags: {}", missing.join(", ")),
                )
            } else {
                SummaryPoint::new(
                    SummaryStatus::Warning,
                    format!("Missing recommended Open Graph tags: {}", missing.join(", ")),
                )
            };
        }

        if tags::has_property(meta_tags, tags::OG_IMAGE) && !tags::has_image_dimensions(meta_tags)
        {
            return SummaryPoint::new(
                SummaryStatus::Warning,
                "Missing Open Graph image dimensions",
            );
        }

        SummaryPoint::new(SummaryStatus::Good, "Open Graph tags are well implemented")
    }

    pub fn analyze_twitter_card(meta_tags: &[MetaTag]) -> SummaryPoint {
        let missing = tags::missing_names(meta_tags, &REQUIRED_TWITTER_TAGS);

        if missing.len() == REQUIRED_TWITTER_TAGS.len() {
            SummaryPoint::new(SummaryStatus::Error, "Twitter card meta tags are missing")
        } else if !missing.is_empty() {
            SummaryPoint::new(
                SummaryStatus::Warning,
                format!("Some Twitter card tags are missing: {}", missing.join(", ")),
            )
        } else {
            SummaryPoint::new(SummaryStatus::Good, "Twitter card tags are well implemented")
        }
    }
}
