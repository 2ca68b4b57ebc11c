//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output leads with what the traveller cares about (days, places, what to
//! do) and shows files and links as secondary, indented context.
//!
//! # Output Format
//!
//! ## Plan
//!
//! ```text
//! 7-8 Days (7 days)
//!     Regions: Muscat, Nizwa, Wahiba Sands, Sur, Jebel Akhdar, Ras al Jinz
//!     Budget: OMR 320 - 450 · Mid-range: OMR 650 - 900 · Luxury: OMR 1,600 - 2,400
//!
//! 001 Arrival in Muscat
//!     Muscat · Full day
//!     Morning: Sultan Qaboos Grand Mosque
//!     Stay: ...
//! ```
//!
//! ## Guide
//!
//! ```text
//! Welcome to Oman
//! Amal · 7-8 Days
//!     Places: Beaches
//!     ...
//! <plan>
//! Share: https://example.com/journey/results?data=...
//! Export: ./oman-journey-amal.html
//! ```
//!
//! ## Build
//!
//! ```text
//! en → index.html
//!     heritage/index.html
//! ar → ar/index.html
//! Generated 24 pages in 2 locales
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::export::BarcodeImage;
use crate::itinerary::{ItineraryPlan, budget_for, regions_for};
use crate::journey::Results;
use crate::locale::{Locale, TextKey, UiContext};
use crate::preferences::{FormOption, PreferenceSet, ValidationError};
use crate::viewport::ExportAction;
use std::path::{Path, PathBuf};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: u32) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

fn labels<T: FormOption>(options: impl IntoIterator<Item = T>) -> String {
    options
        .into_iter()
        .map(|o| o.label())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Plan
// ============================================================================

/// Format a plan. `active_day` is marked with `>` when given.
pub fn format_plan(plan: &ItineraryPlan, active_day: Option<u32>) -> Vec<String> {
    let budget = budget_for(plan.bucket);
    let mut lines = vec![
        format!("{} ({} days)", plan.bucket.label(), plan.len()),
        format!("{}Regions: {}", indent(1), regions_for(plan.bucket).join(", ")),
        format!(
            "{}Budget: {} · Mid-range: {} · Luxury: {}",
            indent(1),
            budget.budget,
            budget.mid_range,
            budget.luxury
        ),
    ];

    for day in &plan.days {
        lines.push(String::new());
        let marker = if active_day == Some(day.day) { "> " } else { "" };
        lines.push(format!("{}{} {}", marker, format_index(day.day), day.title));
        lines.push(format!("{}{} · {}", indent(1), day.location, day.duration));
        for activity in day.activities {
            lines.push(format!("{}{}: {}", indent(1), activity.time, activity.name));
            lines.push(format!("{}{}", indent(2), truncate(activity.description, 90)));
        }
        lines.push(format!("{}Stay: {}", indent(1), day.accommodation));
        lines.push(format!("{}Getting around: {}", indent(1), day.transportation));
        lines.push(format!("{}Meals: {}", indent(1), day.meals));
    }
    lines
}

pub fn print_plan(plan: &ItineraryPlan, active_day: Option<u32>) {
    for line in format_plan(plan, active_day) {
        println!("{}", line);
    }
}

// ============================================================================
// Preferences and validation
// ============================================================================

pub fn format_preferences(prefs: &PreferenceSet) -> Vec<String> {
    vec![
        format!("{} · {}", prefs.name(), prefs.days_to_explore().label()),
        format!("{}Places: {}", indent(1), labels(prefs.places_to_visit().iter().copied())),
        format!(
            "{}Traditions: {}",
            indent(1),
            labels(prefs.tradition_interests().iter().copied())
        ),
        format!("{}Wellness: {}", indent(1), prefs.wellness_interest().label()),
        format!(
            "{}Culture: {}",
            indent(1),
            labels(prefs.culture_interests().iter().copied())
        ),
    ]
}

/// Format form problems as a numbered list, in validation order.
pub fn format_validation_errors(errors: &[ValidationError]) -> Vec<String> {
    let mut lines = vec![format!(
        "Preferences incomplete ({} {})",
        errors.len(),
        if errors.len() == 1 { "problem" } else { "problems" }
    )];
    for (i, error) in errors.iter().enumerate() {
        lines.push(format!("{}{}. {}", indent(1), i + 1, error));
    }
    lines
}

pub fn print_validation_errors(errors: &[ValidationError]) {
    for line in format_validation_errors(errors) {
        eprintln!("{}", line);
    }
}

pub fn format_check_ok(prefs: &PreferenceSet) -> Vec<String> {
    let mut lines = vec!["Preferences complete".to_string()];
    lines.extend(format_preferences(prefs).into_iter().map(|l| format!("{}{}", indent(1), l)));
    lines
}

pub fn print_check_ok(prefs: &PreferenceSet) {
    for line in format_check_ok(prefs) {
        println!("{}", line);
    }
}

// ============================================================================
// Guide and shared links
// ============================================================================

/// Artifacts produced alongside a results view.
#[derive(Debug, Default)]
pub struct Artifacts<'a> {
    /// Export control the results view offers at the current width.
    pub action: Option<ExportAction>,
    pub export: Option<&'a Path>,
    pub qr: Option<&'a BarcodeImage>,
    pub notice: Option<String>,
}

pub fn format_results(ctx: &UiContext, results: &Results, artifacts: &Artifacts) -> Vec<String> {
    let mut lines = vec![ctx.text(TextKey::AppTitle).to_string()];
    lines.extend(format_preferences(results.preferences()));
    lines.push(String::new());
    lines.extend(format_plan(results.plan(), Some(results.active_day())));
    lines.push(String::new());
    if let Some(link) = results.share_link() {
        lines.push(format!("Share: {}", link));
    }
    if let Some(action) = artifacts.action {
        lines.push(format!("Offered: {}", action.label()));
    }
    if let Some(path) = artifacts.export {
        lines.push(format!("Export: {}", path.display()));
    }
    if let Some(qr) = artifacts.qr {
        lines.push(format!(
            "QR code: {} ({}x{})",
            qr.path.display(),
            qr.width,
            qr.height
        ));
    }
    if let Some(notice) = &artifacts.notice {
        lines.push(format!("Notice: {}", notice));
    }
    lines
}

pub fn print_results(ctx: &UiContext, results: &Results, artifacts: &Artifacts) {
    for line in format_results(ctx, results, artifacts) {
        println!("{}", line);
    }
}

pub fn format_not_found(ctx: &UiContext, reason: &str) -> Vec<String> {
    vec![
        "Journey not found".to_string(),
        format!("{}{}", indent(1), reason),
        format!(
            "{}Start a new journey from {}",
            indent(1),
            ctx.href("journey/")
        ),
    ]
}

pub fn print_not_found(ctx: &UiContext, reason: &str) {
    for line in format_not_found(ctx, reason) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Group generated pages by locale. Locale home pages head each group.
pub fn format_generate_output(pages: &[PathBuf]) -> Vec<String> {
    let mut lines = Vec::new();
    for locale in Locale::ALL {
        let prefix = locale.path_prefix();
        let mut group = pages.iter().filter(|p| match locale {
            Locale::En => !p.starts_with(Locale::Ar.path_prefix()),
            _ => p.starts_with(prefix),
        });
        let Some(first) = group.next() else {
            continue;
        };
        lines.push(format!("{} → {}", locale, first.display()));
        for page in group {
            lines.push(format!("{}{}", indent(1), page.display()));
        }
    }
    let locales = Locale::ALL
        .iter()
        .filter(|l| lines.iter().any(|line| line.starts_with(&format!("{} →", l))))
        .count();
    lines.push(format!(
        "Generated {} pages in {} locales",
        pages.len(),
        locales
    ));
    lines
}

pub fn print_generate_output(pages: &[PathBuf]) {
    for line in format_generate_output(pages) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::{DurationBucket, select_plan};
    use crate::preferences::PreferenceForm;
    use crate::test_helpers::sample_preferences;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(12), "012");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 8), "a longer...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("عُمان جميلة", 5), "عُمان...");
    }

    #[test]
    fn plan_lists_every_day() {
        let plan = select_plan(DurationBucket::Short);
        let lines = format_plan(&plan, None);
        assert_eq!(lines[0], "3-4 Days (4 days)");
        for n in 1..=4 {
            let prefix = format!("{:0>3} ", n);
            assert!(lines.iter().any(|l| l.starts_with(&prefix)), "day {n}");
        }
        assert!(!lines.iter().any(|l| l.starts_with("005 ")));
        assert!(!lines.iter().any(|l| l.starts_with("> ")));
    }

    #[test]
    fn plan_marks_active_day() {
        let plan = select_plan(DurationBucket::Full);
        let lines = format_plan(&plan, Some(3));
        let marked: Vec<_> = lines.iter().filter(|l| l.starts_with("> ")).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].starts_with("> 003 "));
    }

    #[test]
    fn plan_shows_regions_and_budget() {
        let lines = format_plan(&select_plan(DurationBucket::Comprehensive), None);
        assert!(lines[1].contains("Musandam"));
        assert!(lines[2].starts_with("    Budget: "));
    }

    #[test]
    fn validation_errors_are_numbered_in_order() {
        let errors = PreferenceForm::new().validate();
        let lines = format_validation_errors(&errors);
        assert_eq!(lines[0], "Preferences incomplete (6 problems)");
        assert_eq!(lines[1], "    1. Please enter your name");
        assert!(lines[6].starts_with("    6. Choose how many days"));
    }

    #[test]
    fn single_validation_error_is_singular() {
        let lines = format_validation_errors(&[ValidationError::DaysMissing]);
        assert_eq!(lines[0], "Preferences incomplete (1 problem)");
    }

    #[test]
    fn preferences_use_labels() {
        let lines = format_preferences(&sample_preferences());
        assert_eq!(lines[0], "Amal · 7-8 Days");
        assert_eq!(lines[1], "    Places: Beaches");
        assert!(lines[2].contains("Omani Halwa"));
        assert_eq!(lines[3], "    Wellness: Yes");
        assert!(lines[4].contains("Vision 2040"));
    }

    #[test]
    fn results_list_link_and_artifacts() {
        use crate::clock::ManualClock;
        use crate::config::SiteConfig;
        use crate::journey::{GuideSettings, JourneyGuide};
        use crate::test_helpers::complete_form;
        use std::time::Duration;

        let mut settings = GuideSettings::from_config(&SiteConfig::default()).unwrap();
        settings.generation_delay = Duration::ZERO;
        let mut guide = JourneyGuide::new(ManualClock::new(), settings);
        guide.submit(complete_form()).unwrap();
        guide.poll();
        let results = guide.results().unwrap();

        let qr = BarcodeImage {
            path: PathBuf::from("dist/oman-journey-amal.png"),
            width: 296,
            height: 296,
        };
        let lines = format_results(
            &UiContext::default(),
            results,
            &Artifacts {
                action: Some(ExportAction::Qr),
                qr: Some(&qr),
                notice: Some("Sorry".into()),
                ..Default::default()
            },
        );
        assert_eq!(lines[0], "Welcome to Oman");
        assert!(lines.iter().any(|l| l.starts_with("> 001 ")));
        assert!(lines.iter().any(|l| l.starts_with("Share: ") && l.contains("data=")));
        assert!(lines.contains(&"QR code: dist/oman-journey-amal.png (296x296)".to_string()));
        assert_eq!(lines.last().unwrap(), "Notice: Sorry");
        assert!(!lines.iter().any(|l| l.starts_with("Export: ")));
    }

    #[test]
    fn not_found_points_back_to_form() {
        let lines = format_not_found(&UiContext::new(Locale::Ar), "Link carries no journey data");
        assert_eq!(lines[0], "Journey not found");
        assert!(lines[2].ends_with("/ar/journey/"));
    }

    #[test]
    fn generate_output_groups_by_locale() {
        let pages: Vec<PathBuf> = vec![
            "index.html".into(),
            "heritage/index.html".into(),
            "ar/index.html".into(),
            "ar/heritage/index.html".into(),
        ];
        let lines = format_generate_output(&pages);
        assert_eq!(
            lines,
            vec![
                "en → index.html",
                "    heritage/index.html",
                "ar → ar/index.html",
                "    ar/heritage/index.html",
                "Generated 4 pages in 2 locales",
            ]
        );
    }

    #[test]
    fn generate_output_single_locale() {
        let pages: Vec<PathBuf> = vec!["index.html".into()];
        let lines = format_generate_output(&pages);
        assert_eq!(lines.last().unwrap(), "Generated 1 pages in 1 locales");
    }
}
