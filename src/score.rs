use crate::models::PageData;
use crate::seo_analyzer::{
    DESCRIPTION_MAX_LENGTH, DESCRIPTION_MIN_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use crate::tags::{self, REQUIRED_OPEN_GRAPH_TAGS, REQUIRED_TWITTER_TAGS};
use std::ops::RangeInclusive;

const TITLE_POINTS: u32 = 20;
const DESCRIPTION_POINTS: u32 = 20;
const OPEN_GRAPH_TAG_POINTS: u32 = 5;
const OPEN_GRAPH_TYPE_POINTS: u32 = 5;
const OPEN_GRAPH_DIMENSION_POINTS: u32 = 5;
const TWITTER_TAG_POINTS: u32 = 5;
const CANONICAL_POINTS: u32 = 10;

/// Points earned against points available, accumulated section by section
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub earned: u32,
    pub available: u32,
}

impl Tally {
    fn section(&mut self, max: u32, earned: u32) {
        self.available += max;
        self.earned += earned;
    }

    /// Percentage of available points, rounded half away from zero
    pub fn percentage(&self) -> u8 {
        if self.available == 0 {
            return 0;
        }
        let ratio = f64::from(self.earned) / f64::from(self.available);
        (ratio * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

pub struct ScoreCalculator;

impl ScoreCalculator {
    pub fn calculate(page: &PageData) -> u8 {
        Self::tally(page).percentage()
    }

    /// Raw point breakdown, independent of the analyzer verdicts
    pub fn tally(page: &PageData) -> Tally {
        let mut tally = Tally::default();
        let meta_tags = &page.meta_tags;

        tally.section(
            TITLE_POINTS,
            Self::length_points(
                page.title.as_ref(),
                TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH,
                TITLE_POINTS,
            ),
        );

        tally.section(
            DESCRIPTION_POINTS,
            Self::length_points(
                page.description.as_ref(),
                DESCRIPTION_MIN_LENGTH..=DESCRIPTION_MAX_LENGTH,
                DESCRIPTION_POINTS,
            ),
        );

        let og_present = REQUIRED_OPEN_GRAPH_TAGS
            .iter()
            .filter(|property| tags::has_property(meta_tags, property))
            .count() as u32;
        tally.section(
            OPEN_GRAPH_TAG_POINTS * REQUIRED_OPEN_GRAPH_TAGS.len() as u32,
            OPEN_GRAPH_TAG_POINTS * og_present,
        );

        tally.section(
            OPEN_GRAPH_TYPE_POINTS,
            if tags::has_property(meta_tags, tags::OG_TYPE) {
                OPEN_GRAPH_TYPE_POINTS
            } else {
                0
            },
        );

        tally.section(
            OPEN_GRAPH_DIMENSION_POINTS,
            if tags::has_image_dimensions(meta_tags) {
                OPEN_GRAPH_DIMENSION_POINTS
            } else {
                0
            },
        );

        let twitter_present = REQUIRED_TWITTER_TAGS
            .iter()
            .filter(|name| tags::has_name(meta_tags, name))
            .count() as u32;
        tally.section(
            TWITTER_TAG_POINTS * REQUIRED_TWITTER_TAGS.len() as u32,
            TWITTER_TAG_POINTS * twitter_present,
        );

        tally.section(
            CANONICAL_POINTS,
            if tags::has_canonical(meta_tags) {
                CANONICAL_POINTS
            } else {
                0
            },
        );

        tally
    }

    /// Full points inside `range`, half points for any other non-empty value
    fn length_points(value: Option<&String>, range: RangeInclusive<usize>, max: u32) -> u32 {
        match tags::present(value) {
            Some(value) if range.contains(&tags::char_len(value)) => max,
            Some(_) => max / 2,
            None => 0,
        }
    }
}
