use crate::models::{SeoAnalysis, SummaryStatus, TagStatus};
use crate::preview::{LengthVerdict, Previews, TagCheck};
use anyhow::{Context, Result};
use colored::*;
use std::fs::File;
use std::io::Write;

/// Label shown next to a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreGrade {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreGrade::Excellent,
            60.. => ScoreGrade::Good,
            40.. => ScoreGrade::NeedsImprovement,
            _ => ScoreGrade::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellent",
            ScoreGrade::Good => "Good",
            ScoreGrade::NeedsImprovement => "Needs Improvement",
            ScoreGrade::Poor => "Poor",
        }
    }
}

/// Color band for a score; coarser than [`ScoreGrade`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreColor {
    Green,
    Yellow,
    Red,
}

impl ScoreColor {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreColor::Green
        } else if score >= 50 {
            ScoreColor::Yellow
        } else {
            ScoreColor::Red
        }
    }
}

/// How many summary points landed in each status
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub good: usize,
    pub warnings: usize,
    pub errors: usize,
}

pub struct Reporter;

impl Reporter {
    pub fn status_counts(analysis: &SeoAnalysis) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for point in &analysis.summary_points {
            match point.status {
                SummaryStatus::Good => counts.good += 1,
                SummaryStatus::Warning => counts.warnings += 1,
                SummaryStatus::Error => counts.errors += 1,
            }
        }
        counts
    }

    pub fn to_json(analysis: &SeoAnalysis) -> Result<String> {
        serde_json::to_string_pretty(analysis).context("Failed to serialize analysis")
    }

    pub fn print_text_report(analysis: &SeoAnalysis) {
        let timestamp = chrono::Utc::now().to_rfc3339();

        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "MetaScout - SEO Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!("{}: {}", "URL".bright_white().bold(), analysis.url);
        println!("{}: {}", "Timestamp".bright_white().bold(), timestamp);
        println!();

        let grade = ScoreGrade::from_score(analysis.score);
        let score = format!("{}/100 ({})", analysis.score, grade.label());
        println!(
            "{}: {}",
            "Score".bright_white().bold(),
            match ScoreColor::from_score(analysis.score) {
                ScoreColor::Green => score.bright_green().bold(),
                ScoreColor::Yellow => score.yellow().bold(),
                ScoreColor::Red => score.bright_red().bold(),
            }
        );
        println!();

        // Summary
        let counts = Self::status_counts(analysis);
        println!("{}", "Summary".bright_yellow().bold().underline());
        for point in &analysis.summary_points {
            let status = match point.status {
                SummaryStatus::Good => "GOOD ".bright_green(),
                SummaryStatus::Warning => "WARN ".yellow(),
                SummaryStatus::Error => "ERROR".bright_red(),
            };
            println!("  [{}] {}", status, point.message);
        }
        println!(
            "  {} passed, {} warnings, {} errors",
            counts.good.to_string().bright_green(),
            counts.warnings.to_string().yellow(),
            counts.errors.to_string().bright_red()
        );
        println!();

        Self::print_meta_tags(analysis);
        print!("{}", Self::format_previews(&Previews::from_analysis(analysis)));
        Self::print_recommendations(analysis);

        println!("{}", "=".repeat(80).bright_blue());
    }

    fn print_meta_tags(analysis: &SeoAnalysis) {
        println!("{}", "Meta Tags".bright_yellow().bold().underline());
        if analysis.meta_tags.is_empty() {
            println!("  {}", "No meta tags found".dimmed());
        }
        for tag in &analysis.meta_tags {
            let status = match tag.status {
                Some(TagStatus::Good) => "GOOD ".bright_green(),
                Some(TagStatus::Warning) => "WARN ".yellow(),
                Some(TagStatus::Missing) => "MISS ".bright_red(),
                None => "     ".normal(),
            };
            println!(
                "  [{}] {:<24} {}",
                status,
                tag.key().bright_white(),
                tag.content
            );
            if let Some(message) = &tag.message {
                println!("          {}", message.dimmed());
            }
        }
        println!();
    }

    /// The search, Facebook and Twitter previews with their tag checklists
    pub fn format_previews(previews: &Previews) -> String {
        let mut lines = vec![
            "Previews".bright_yellow().bold().underline().to_string(),
        ];

        let search = &previews.search;
        lines.push(format!("  {}", "Search".bright_white().bold()));
        lines.push(format!("    {}", search.title.bright_blue()));
        lines.push(format!("    {}", search.url.green()));
        lines.push(format!("    {}", search.description));
        lines.push(format!(
            "    Title: {} characters (Optimal: 50-60){}",
            search.title_length,
            Self::length_verdict(search.title_verdict)
        ));
        lines.push(format!(
            "    Description: {} characters (Optimal: 120-158){}",
            search.description_length,
            Self::length_verdict(search.description_verdict)
        ));

        let facebook = &previews.facebook;
        lines.push(format!("  {}", "Facebook".bright_white().bold()));
        lines.push(format!("    {}", facebook.title.bright_white()));
        lines.push(format!("    {}", facebook.description));
        lines.push(format!("    {}", facebook.url.green()));
        if let Some(image) = &facebook.image {
            lines.push(format!("    image: {}", image));
        }
        if let Some(kind) = &facebook.kind {
            lines.push(format!("    type:  {}", kind));
        }
        Self::push_checks(&mut lines, &facebook.checks);

        let twitter = &previews.twitter;
        lines.push(format!("  {}", "Twitter".bright_white().bold()));
        if let Some(card) = &twitter.card {
            lines.push(format!("    card:  {}", card));
        }
        lines.push(format!("    {}", twitter.title.bright_white()));
        lines.push(format!("    {}", twitter.description));
        if let Some(image) = &twitter.image {
            lines.push(format!("    image: {}", image));
        }
        Self::push_checks(&mut lines, &twitter.checks);
        if twitter.uses_fallback {
            lines.push(format!(
                "    {}",
                "Note: Using Open Graph fallbacks for preview".italic()
            ));
        }

        let mut out = lines.join("\n");
        out.push_str("\n\n");
        out
    }

    fn length_verdict(verdict: Option<LengthVerdict>) -> String {
        match verdict {
            Some(LengthVerdict::Missing) => format!(" - {}", "Missing".bright_red()),
            Some(verdict) => format!(" - {}", verdict.label().yellow()),
            None => String::new(),
        }
    }

    fn push_checks(lines: &mut Vec<String>, checks: &[TagCheck]) {
        for check in checks {
            let status = match check.status {
                TagStatus::Good => "✓ Present".bright_green(),
                TagStatus::Warning => "⚠ Warning".yellow(),
                TagStatus::Missing => "✗ Missing".bright_red(),
            };
            lines.push(format!("    {:<20} {}", format!("{}:", check.key), status));
        }
    }

    fn print_recommendations(analysis: &SeoAnalysis) {
        println!("{}", "Recommendations".bright_yellow().bold().underline());
        if analysis.recommendations.is_empty() {
            println!("  {}", "Nothing to fix".bright_green());
        }
        for recommendation in &analysis.recommendations {
            println!();
            println!(
                "  {}. {}",
                recommendation.id,
                recommendation.title.bright_white().bold()
            );
            println!("     {}", recommendation.description);
            for line in recommendation.implementation.lines() {
                println!("       {}", line.cyan());
            }
        }
        println!();
    }

    pub fn save_json_report(analysis: &SeoAnalysis, filename: &str) -> Result<()> {
        let json = Self::to_json(analysis)?;
        let mut file = File::create(filename)
            .with_context(|| format!("Failed to create report file: {}", filename))?;
        file.write_all(json.as_bytes())?;
        println!("Report saved to: {}", filename.bright_green());
        Ok(())
    }
}
