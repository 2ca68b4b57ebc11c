//! HTML site generation.
//!
//! Renders the whole showcase as static HTML, once per locale.
//!
//! ## Generated Pages
//!
//! - **Home page** (`/index.html`): Section cards and the "Start Exploring" call to action
//! - **Section pages** (`/{section}/index.html`): Gallery with "Know more" panels
//! - **Journey form** (`/journey/index.html`): The preference form
//! - **Results view** (`/journey/results/index.html`): Loading, not-found and
//!   every plan variant; the script picks one from the link's `data`
//! - **Sample itineraries** (`/journey/sample/{bucket}/index.html`): One per duration
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # English home
//! ├── heritage/index.html
//! ├── dates/index.html
//! ├── wellness/index.html
//! ├── culture/index.html
//! ├── journey/
//! │   ├── index.html             # Form
//! │   ├── results/index.html     # Shareable results view
//! │   └── sample/full/index.html # ...one per duration bucket
//! └── ar/                        # Same tree, right-to-left
//!     └── ...
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors and page size injected from config)
//! - `static/journey.js`: Selection caps, form validation, link decoding and
//!   the day switcher
//! - `static/qr.js`: QR encoder (byte mode, level M) behind the results page's
//!   "Show QR Code" action
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every renderer takes a [`UiContext`] so language and direction are explicit.

use crate::catalog::{FALLBACK_IMAGE, Section};
use crate::config::{self, SiteConfig};
use crate::itinerary::{
    BudgetEstimate, DayPlan, DurationBucket, ItineraryPlan, budget_for, regions_for, select_plan,
};
use crate::journey::Results;
use crate::locale::{Locale, TextKey, UiContext};
use crate::preferences::{
    Choice, CultureInterest, FormOption, MultiField, PlaceCategory, PreferenceForm,
    TraditionInterest, WellnessInterest,
};
use crate::share::RESULTS_PATH;
use crate::viewport::{ExportAction, MOBILE_BREAKPOINT};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/journey.js");
const QR_JS: &str = include_str!("../static/qr.js");

/// Whether a plan is rendered for the browser or for a printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    /// Day switcher, one day visible at a time.
    Interactive,
    /// Every day expanded, one per page, no controls.
    Printable,
}

/// Full stylesheet: config colors, page rules, then the static styles.
pub fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_page_css(&config.export),
        CSS_STATIC
    )
}

/// Write the site for every locale. Returns the written pages, relative to
/// `output_dir`.
pub fn generate(config: &SiteConfig, output_dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let css = site_css(config);
    let mut written = Vec::new();

    for locale in Locale::ALL {
        let ctx = UiContext::new(locale);
        let root = PathBuf::from(locale.path_prefix());

        write_page(output_dir, &root, render_home(&ctx, config, &css), &mut written)?;

        for section in Section::ALL {
            let page = render_section(&ctx, config, section, &css);
            write_page(output_dir, &root.join(section.slug()), page, &mut written)?;
        }

        let form = render_form(&ctx, config, &PreferenceForm::new(), &css);
        write_page(output_dir, &root.join("journey"), form, &mut written)?;

        let results = render_results_shell(&ctx, config, &css);
        write_page(output_dir, &root.join(RESULTS_PATH), results, &mut written)?;

        for bucket in DurationBucket::ALL {
            let dir = root.join("journey/sample").join(bucket.key());
            write_page(output_dir, &dir, render_sample(&ctx, config, bucket, &css), &mut written)?;
        }
    }

    Ok(written)
}

fn write_page(
    output_dir: &Path,
    dir: &Path,
    page: Markup,
    written: &mut Vec<PathBuf>,
) -> Result<(), GenerateError> {
    let target_dir = output_dir.join(dir);
    fs::create_dir_all(&target_dir)?;
    fs::write(target_dir.join("index.html"), page.into_string())?;
    let rel = dir.join("index.html");
    debug!(page = %rel.display(), "generated");
    written.push(rel);
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
pub fn base_document(
    ctx: &UiContext,
    title: &str,
    css: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(ctx.locale.code()) dir=(ctx.direction.as_str()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Renders the site header. Inner pages get a home button.
fn site_header(ctx: &UiContext, config: &SiteConfig, show_home: bool) -> Markup {
    let other = match ctx.locale {
        Locale::En => Locale::Ar,
        Locale::Ar => Locale::En,
    };
    html! {
        header.site-header.no-print {
            a.site-title href=(ctx.href("")) { (config.site.title) }
            nav.site-nav {
                @if show_home {
                    a.home-button href=(ctx.href("")) { (ctx.text(TextKey::CtaHome)) }
                }
                @for section in Section::ALL {
                    a href=(section_href(ctx, section)) {
                        (ctx.text(section.title_key()))
                    }
                }
                a.locale-switch href={ "/" (other.path_prefix()) } lang=(other.code()) {
                    (other.code())
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page with section cards
pub fn render_home(ctx: &UiContext, config: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(ctx, config, false))
        main.home-page {
            header.hero {
                h1 { (ctx.text(TextKey::AppTitle)) }
                p.subtitle { (ctx.text(TextKey::AppSubtitle)) }
                a.cta href=(section_href(ctx, Section::Heritage)) { (ctx.text(TextKey::CtaNext)) }
                a.cta-secondary href=(ctx.href("journey/")) { (ctx.text(TextKey::CtaPlan)) }
            }
            div.card-grid {
                @for section in Section::ALL {
                    @let cover = section.entries().first().map_or(FALLBACK_IMAGE, |e| e.image);
                    a.section-card href=(section_href(ctx, section)) {
                        (image(cover, ctx.text(section.title_key())))
                        h2 { (ctx.text(section.title_key())) }
                        p { (ctx.text(section.card_key())) }
                    }
                }
            }
            (page_toolbar(ctx, None, Some(section_href(ctx, Section::Heritage))))
        }
    };

    base_document(ctx, &config.site.title, css, None, content)
}

/// Renders a section gallery with a "Know more" panel per entry
pub fn render_section(ctx: &UiContext, config: &SiteConfig, section: Section, css: &str) -> Markup {
    let title = ctx.text(section.title_key());
    let back = section
        .previous()
        .map_or_else(|| ctx.href(""), |prev| section_href(ctx, prev));
    let next = section.next().map(|next| section_href(ctx, next));
    let content = html! {
        (site_header(ctx, config, true))
        main.section-page {
            h1 { (title) }
            p.section-intro { (ctx.text(section.card_key())) }
            div.entry-grid {
                @for entry in section.entries() {
                    article.entry-card {
                        (image(entry.image, entry.title))
                        h2 { (entry.title) }
                        p.summary { (entry.summary) }
                        details.know-more {
                            summary { "Know more" }
                            p { (entry.description) }
                            aside.fun-fact {
                                strong { "Did you know? " }
                                (entry.fun_fact)
                            }
                        }
                    }
                }
            }
            a.cta href=(ctx.href("journey/")) { (ctx.text(TextKey::CtaPlan)) }
            (page_toolbar(ctx, Some(back), next))
        }
    };

    base_document(ctx, &format!("{} - {}", title, config.site.title), css, None, content)
}

fn section_href(ctx: &UiContext, section: Section) -> String {
    ctx.href(&format!("{}/", section.slug()))
}

/// Back, home and next links through the showcase: home first, then each
/// section in order. A missing neighbour renders as a disabled control.
fn page_toolbar(ctx: &UiContext, back: Option<String>, next: Option<String>) -> Markup {
    html! {
        nav.page-toolbar.no-print {
            (toolbar_link("back", back, ctx.text(TextKey::CtaBack), false))
            a.btn data-nav="home" href=(ctx.href("")) { (ctx.text(TextKey::CtaHome)) }
            (toolbar_link("next", next, ctx.text(TextKey::CtaNext), true))
        }
    }
}

fn toolbar_link(nav: &str, href: Option<String>, label: &str, primary: bool) -> Markup {
    html! {
        @match href {
            Some(href) => {
                a.btn.btn-primary[primary] data-nav=(nav) href=(href) { (label) }
            }
            None => {
                span.btn.btn-primary[primary] data-nav=(nav) aria-disabled="true" { (label) }
            }
        }
    }
}

fn image(src: &str, alt: &str) -> Markup {
    let fallback = format!("this.onerror=null;this.src='{FALLBACK_IMAGE}'");
    html! {
        img src=(src) alt=(alt) loading="lazy" onerror=(fallback);
    }
}

/// Renders the preference form, pre-filled from `draft`.
///
/// Options a capped field can no longer take are rendered disabled; the
/// script keeps that in sync as the traveller clicks.
pub fn render_form(
    ctx: &UiContext,
    config: &SiteConfig,
    draft: &PreferenceForm,
    css: &str,
) -> Markup {
    let results = ctx.href(&format!("{RESULTS_PATH}/"));
    let content = html! {
        (site_header(ctx, config, true))
        main.journey-page {
            h1 { "Plan your journey" }
            form id="journey-form"
                data-results=(results)
                data-delay=(config.journey.generation_delay_ms)
                novalidate[true] {
                ul.form-errors hidden {}
                label.field {
                    span { "Your name" }
                    input type="text" name="name" value=(draft.name) autocomplete="given-name";
                }
                (choice_fieldset(draft, "Places you'd like to visit", "places", MultiField::Places, Choice::Place, PlaceCategory::ALL))
                (choice_fieldset(draft, "Traditions that interest you", "traditions", MultiField::Traditions, Choice::Tradition, TraditionInterest::ALL))
                fieldset.choices data-field="wellness" {
                    legend { "Interested in wellness experiences?" }
                    @for option in WellnessInterest::ALL {
                        label.choice {
                            input type="radio" name="wellness"
                                value=(option.key())
                                checked[draft.wellness_interest == Some(option)];
                            span { (option.label()) }
                        }
                    }
                }
                (choice_fieldset(draft, "Aspects of culture to explore", "culture", MultiField::Culture, Choice::Culture, CultureInterest::ALL))
                fieldset.choices data-field="days" {
                    legend { "How many days?" }
                    @for bucket in DurationBucket::ALL {
                        label.choice {
                            input type="radio" name="days" value=(bucket.key())
                                checked[draft.days_to_explore == Some(bucket)];
                            span { (bucket.label()) }
                        }
                    }
                }
                button.cta type="submit" { "Create my journey" }
            }
            (render_loading())
        }
        script { (PreEscaped(JS)) }
    };

    base_document(ctx, &format!("Plan your journey - {}", config.site.title), css, None, content)
}

fn choice_fieldset<T: FormOption>(
    draft: &PreferenceForm,
    legend: &str,
    name: &str,
    field: MultiField,
    choice: fn(T) -> Choice,
    options: &[T],
) -> Markup {
    let cap = field.cap();
    html! {
        fieldset.choices data-field=(name) data-max=[cap] {
            legend {
                (legend)
                @if let Some(cap) = cap {
                    " " span.cap-hint { "(choose " (cap) ")" }
                }
            }
            @for option in options.iter().copied() {
                @let selected = draft.is_selected(choice(option));
                label.choice {
                    input type="checkbox" name=(name) value=(option.key())
                        checked[selected]
                        disabled[!draft.can_select(choice(option))];
                    span { (option.label()) }
                }
            }
        }
    }
}

fn render_loading() -> Markup {
    html! {
        div.journey-loading hidden {
            div.spinner {}
            p { "Curating your journey..." }
        }
    }
}

fn render_not_found(ctx: &UiContext) -> Markup {
    html! {
        div.journey-not-found hidden {
            h2 { "We couldn't find that journey" }
            p { "The link may be incomplete or out of date." }
            a.cta href=(ctx.href("journey/")) { "Start a new journey" }
        }
    }
}

/// Renders the shareable results view.
///
/// The page is static, so it carries every plan variant hidden. The script
/// decodes `data`, reveals the matching plan, or falls back to not-found.
pub fn render_results_shell(ctx: &UiContext, config: &SiteConfig, css: &str) -> Markup {
    let content = html! {
        (site_header(ctx, config, true))
        main.results-page
            data-settle=(config.journey.mobile_settle_ms)
            data-breakpoint=(MOBILE_BREAKPOINT)
            data-options=(option_keys()) {
            (render_loading())
            (render_not_found(ctx))
            @for bucket in DurationBucket::ALL {
                section.plan-variant data-plan=(bucket.key()) hidden {
                    h1 { "Your Omani journey, " span.traveller-name {} }
                    (plan_overview(bucket, budget_for(bucket)))
                    (render_plan(&select_plan(bucket), 1, PlanMode::Interactive))
                    (export_controls(None))
                }
            }
        }
        script { (PreEscaped(QR_JS)) }
        script { (PreEscaped(JS)) }
    };

    base_document(ctx, &format!("Your journey - {}", config.site.title), css, None, content)
}

/// Every key a shared link may carry per field, as JSON for the script's
/// link check.
fn option_keys() -> String {
    fn keys<T: FormOption>() -> Vec<&'static str> {
        T::ALL.iter().map(|option| option.key()).collect()
    }
    serde_json::json!({
        "places": keys::<PlaceCategory>(),
        "traditions": keys::<TraditionInterest>(),
        "wellness": WellnessInterest::ALL.map(WellnessInterest::key),
        "culture": keys::<CultureInterest>(),
    })
    .to_string()
}

/// Renders a sample itinerary for one duration, without a traveller.
pub fn render_sample(
    ctx: &UiContext,
    config: &SiteConfig,
    bucket: DurationBucket,
    css: &str,
) -> Markup {
    let content = html! {
        (site_header(ctx, config, true))
        main.results-page.sample {
            h1 { "Sample itinerary: " (bucket.label()) }
            (plan_overview(bucket, budget_for(bucket)))
            (render_plan(&select_plan(bucket), 1, PlanMode::Interactive))
            a.cta.no-print href=(ctx.href("journey/")) { "Plan your own" }
        }
        script { (PreEscaped(JS)) }
    };

    let title = format!("{} - {}", bucket.label(), config.site.title);
    base_document(ctx, &title, css, Some("sample-view"), content)
}

/// Renders a traveller's results as the browser shows them after the form.
///
/// `export` decides which export control is offered; `None` offers both and
/// leaves the choice to the viewport.
pub fn render_results(
    ctx: &UiContext,
    config: &SiteConfig,
    results: &Results,
    export: Option<ExportAction>,
    css: &str,
) -> Markup {
    let prefs = results.preferences();
    let bucket = prefs.days_to_explore();
    let content = html! {
        (site_header(ctx, config, true))
        main.results-page {
            h1 { "Your Omani journey, " span.traveller-name { (prefs.name()) } }
            (plan_overview(bucket, budget_for(bucket)))
            (render_plan(results.plan(), results.active_day(), PlanMode::Interactive))
            (export_controls(export))
            @if let Some(link) = results.share_link() {
                p.share-link.no-print { a href=(link.as_str()) { "Link to this journey" } }
            }
        }
        script { (PreEscaped(QR_JS)) }
        script { (PreEscaped(JS)) }
    };

    base_document(ctx, &format!("Your journey - {}", config.site.title), css, None, content)
}

/// Renders the printable itinerary handed to the export service: every day
/// expanded and no interactive controls or navigation.
pub fn render_printable(ctx: &UiContext, config: &SiteConfig, results: &Results) -> Markup {
    let prefs = results.preferences();
    let bucket = prefs.days_to_explore();
    let content = html! {
        main.results-page.printable {
            h1 { (prefs.name()) "'s Omani journey" }
            p.trip-length { (bucket.label()) }
            (plan_overview(bucket, budget_for(bucket)))
            (render_plan(results.plan(), results.active_day(), PlanMode::Printable))
            @if let Some(link) = results.share_link() {
                p.share-link { (link.as_str()) }
            }
        }
    };

    let title = format!("{} - {}", prefs.name(), config.site.title);
    base_document(ctx, &title, &site_css(config), Some("print-view"), content)
}

fn plan_overview(bucket: DurationBucket, budget: BudgetEstimate) -> Markup {
    html! {
        section.plan-overview {
            div.regions {
                h2 { "Regions covered" }
                ul {
                    @for region in regions_for(bucket) {
                        li { (region) }
                    }
                }
            }
            div.budget {
                h2 { "Estimated budget per person" }
                dl {
                    dt { "Budget" } dd { (budget.budget) }
                    dt { "Mid-range" } dd { (budget.mid_range) }
                    dt { "Luxury" } dd { (budget.luxury) }
                }
            }
        }
    }
}

/// Renders the day-by-day plan
pub fn render_plan(plan: &ItineraryPlan, active_day: u32, mode: PlanMode) -> Markup {
    let interactive = mode == PlanMode::Interactive;
    html! {
        div.plan data-days=(plan.len()) {
            @if interactive {
                nav.day-switcher.no-print {
                    @for day in &plan.days {
                        button type="button" data-day=(day.day)
                            class=[(day.day == active_day).then_some("active")] {
                            "Day " (day.day)
                        }
                    }
                }
            }
            @for day in &plan.days {
                (render_day(day, interactive && day.day != active_day))
            }
        }
    }
}

fn render_day(day: &DayPlan, hidden: bool) -> Markup {
    html! {
        article.day data-day=(day.day) hidden[hidden] {
            header {
                h3 { "Day " (day.day) ": " (day.title) }
                p.day-meta { (day.location) " · " (day.duration) }
            }
            ul.highlights {
                @for highlight in day.highlights {
                    li { (highlight) }
                }
            }
            ol.activities {
                @for activity in day.activities {
                    li.activity {
                        (image(activity.image, activity.name))
                        div {
                            span.time { (activity.time) }
                            h4 { (activity.name) }
                            p { (activity.description) }
                            p.tip { strong { "Tip: " } (activity.tip) }
                        }
                    }
                }
            }
            dl.logistics {
                dt { "Stay" } dd { (day.accommodation) }
                dt { "Getting around" } dd { (day.transportation) }
                dt { "Meals" } dd { (day.meals) }
            }
        }
    }
}

fn export_controls(only: Option<ExportAction>) -> Markup {
    let show = |action: ExportAction| only.is_none_or(|o| o == action);
    html! {
        div.export-actions.no-print {
            @if show(ExportAction::Pdf) {
                button.cta type="button" data-action="pdf" { (ExportAction::Pdf.label()) }
            }
            @if show(ExportAction::Qr) {
                button.cta type="button" data-action="qr" { (ExportAction::Qr.label()) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::journey::{GuideSettings, JourneyGuide};
    use crate::test_helpers::complete_form;
    use std::time::Duration;
    use tempfile::TempDir;

    fn ready_results(days: DurationBucket) -> Results {
        let mut settings = GuideSettings::from_config(&SiteConfig::default()).unwrap();
        settings.generation_delay = Duration::ZERO;
        let mut guide = JourneyGuide::new(ManualClock::new(), settings);
        let mut form = complete_form();
        form.days_to_explore = Some(days);
        guide.submit(form).unwrap();
        guide.poll();
        guide.results().unwrap().clone()
    }

    #[test]
    fn base_document_includes_doctype() {
        let content = html! { p { "test" } };
        let doc = base_document(&UiContext::default(), "Test", "body {}", None, content).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"lang="en" dir="ltr""#));
    }

    #[test]
    fn arabic_documents_are_rtl() {
        let ctx = UiContext::new(Locale::Ar);
        let doc = base_document(&ctx, "Test", "", None, html! {}).into_string();
        assert!(doc.contains(r#"lang="ar" dir="rtl""#));
    }

    #[test]
    fn home_links_every_section_and_the_form() {
        let html = render_home(&UiContext::default(), &SiteConfig::default(), "").into_string();
        for section in Section::ALL {
            assert!(html.contains(&format!(r#"href="/{}/""#, section.slug())));
        }
        assert!(html.contains(r#"<a class="cta" href="/heritage/">Start Exploring</a>"#));
        assert!(html.contains(r#"href="/journey/">Plan your journey</a>"#));
        // Home page has no home button
        assert!(!html.contains("home-button"));
    }

    #[test]
    fn home_toolbar_starts_the_section_chain() {
        let html = render_home(&UiContext::default(), &SiteConfig::default(), "").into_string();
        assert!(html.contains(r#"<span class="btn" data-nav="back" aria-disabled="true">Back</span>"#));
        assert!(html.contains(r#"data-nav="next" href="/heritage/">Start Exploring</a>"#));
    }

    #[test]
    fn section_toolbar_follows_showcase_order() {
        let ctx = UiContext::default();
        let config = SiteConfig::default();
        let cases = [
            (Section::Heritage, r#"data-nav="back" href="/""#, Some("/dates/")),
            (Section::Tradition, r#"data-nav="back" href="/heritage/""#, Some("/wellness/")),
            (Section::Wellness, r#"data-nav="back" href="/dates/""#, Some("/culture/")),
            (Section::Culture, r#"data-nav="back" href="/wellness/""#, None),
        ];
        for (section, back, next) in cases {
            let html = render_section(&ctx, &config, section, "").into_string();
            assert!(html.contains(back), "{section:?} back link");
            assert!(html.contains(r#"data-nav="home" href="/""#));
            match next {
                Some(next) => {
                    assert!(html.contains(&format!(r#"data-nav="next" href="{next}""#)), "{section:?} next link")
                }
                None => assert!(html.contains(r#"data-nav="next" aria-disabled="true""#)),
            }
        }
    }

    #[test]
    fn arabic_toolbar_keeps_the_locale_prefix() {
        let ctx = UiContext::new(Locale::Ar);
        let html = render_section(&ctx, &SiteConfig::default(), Section::Tradition, "").into_string();
        assert!(html.contains(r#"data-nav="back" href="/ar/heritage/">السابق</a>"#));
        assert!(html.contains(r#"data-nav="next" href="/ar/wellness/">ابدأ الاستكشاف</a>"#));
        assert!(html.contains(r#"href="/ar/journey/">خطط رحلتك</a>"#));
    }

    #[test]
    fn section_page_has_know_more_and_home_button() {
        let ctx = UiContext::new(Locale::Ar);
        let html = render_section(&ctx, &SiteConfig::default(), Section::Heritage, "").into_string();
        assert!(html.contains("know-more"));
        assert!(html.contains("Did you know?"));
        assert!(html.contains("home-button"));
        assert!(html.contains(r#"href="/ar/""#));
        assert!(html.contains(&FALLBACK_IMAGE.replace('&', "&amp;")));
    }

    #[test]
    fn form_disables_options_at_cap() {
        let html = render_form(
            &UiContext::default(),
            &SiteConfig::default(),
            &complete_form(),
            "",
        )
        .into_string();
        assert!(html.contains(r#"data-max="4""#));
        assert!(html.contains(r#"data-max="3""#));
        // Four traditions selected, so an unselected one is disabled
        assert!(html.contains(r#"value="weaving" disabled"#));
        // Places are uncapped
        assert!(!html.contains(r#"value="mountains" disabled"#));
        assert!(html.contains(r#"value="dates" checked"#));
        // The script looks the form up by id
        assert!(html.contains(r#"<form id="journey-form""#));
        assert!(html.contains(r#"value="yes" checked"#));
    }

    #[test]
    fn empty_form_has_nothing_disabled() {
        let html = render_form(
            &UiContext::default(),
            &SiteConfig::default(),
            &PreferenceForm::new(),
            "",
        )
        .into_string();
        assert!(!html.contains(" disabled>"));
        assert!(html.contains(r#"data-delay="3000""#));
        assert!(html.contains(r#"data-results="/journey/results/""#));
    }

    #[test]
    fn results_shell_carries_every_plan() {
        let html =
            render_results_shell(&UiContext::default(), &SiteConfig::default(), "").into_string();
        for bucket in DurationBucket::ALL {
            assert!(html.contains(&format!(r#"data-plan="{}""#, bucket.key())));
        }
        assert!(html.contains("journey-loading"));
        assert!(html.contains("journey-not-found"));
        assert!(html.contains(r#"data-settle="1000""#));
    }

    #[test]
    fn results_shell_lists_every_linkable_key() {
        let keys: serde_json::Value = serde_json::from_str(&option_keys()).unwrap();
        assert_eq!(keys["places"].as_array().unwrap().len(), PlaceCategory::ALL.len());
        assert_eq!(keys["traditions"][0], TraditionInterest::ALL[0].key());
        assert_eq!(keys["wellness"], serde_json::json!(["yes", "no"]));
        assert!(keys["culture"].as_array().unwrap().contains(&"vision2040".into()));

        let html =
            render_results_shell(&UiContext::default(), &SiteConfig::default(), "").into_string();
        assert!(html.contains(r#"data-options="{&quot;"#));
        assert!(html.contains("&quot;festivals-and-arts&quot;"));
    }

    #[test]
    fn results_pages_carry_the_qr_encoder() {
        let shell =
            render_results_shell(&UiContext::default(), &SiteConfig::default(), "").into_string();
        assert!(shell.contains("OmanQr"));
        let html = render_results(
            &UiContext::default(),
            &SiteConfig::default(),
            &ready_results(DurationBucket::Short),
            Some(ExportAction::Qr),
            "",
        )
        .into_string();
        assert!(html.contains("OmanQr"));
        assert!(html.contains(r#"data-action="qr""#));
    }

    #[test]
    fn results_show_active_day_only() {
        let results = ready_results(DurationBucket::Short);
        let html = render_results(
            &UiContext::default(),
            &SiteConfig::default(),
            &results,
            Some(ExportAction::Qr),
            "",
        )
        .into_string();
        assert!(html.contains("Amal"));
        assert!(html.contains(r#"<article class="day" data-day="1">"#));
        assert!(html.contains(r#"<article class="day" data-day="4" hidden>"#));
        assert!(html.contains(r#"<nav class="day-switcher"#));
        assert!(html.contains(r#"data-action="qr""#));
        assert!(!html.contains(r#"data-action="pdf""#));
        assert!(html.contains("/journey/results?data="));
    }

    #[test]
    fn printable_excludes_interactive_controls() {
        let results = ready_results(DurationBucket::Comprehensive);
        let html =
            render_printable(&UiContext::default(), &SiteConfig::default(), &results).into_string();
        assert!(!html.contains(r#"<nav class="day-switcher"#));
        assert!(!html.contains("data-action="));
        assert!(!html.contains(r#"<header class="site-header"#));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("hidden>"));
        assert!(html.contains(r#"data-day="9""#));
        assert!(html.contains("size: A4;"));
    }

    #[test]
    fn html_escape_in_maud() {
        let mut form = complete_form();
        form.name = "<script>alert('xss')</script>".to_string();
        let html = render_form(&UiContext::default(), &SiteConfig::default(), &form, "")
            .into_string();
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn generate_writes_both_locales() {
        let tmp = TempDir::new().unwrap();
        let pages = generate(&SiteConfig::default(), tmp.path()).unwrap();

        // home + 4 sections + form + results + 5 samples, per locale
        assert_eq!(pages.len(), 2 * 12);
        assert!(tmp.path().join("index.html").exists());
        assert!(tmp.path().join("ar/index.html").exists());
        assert!(tmp.path().join("journey/results/index.html").exists());
        assert!(tmp.path().join("ar/journey/sample/comprehensive/index.html").exists());

        let arabic = fs::read_to_string(tmp.path().join("ar/dates/index.html")).unwrap();
        assert!(arabic.contains(r#"dir="rtl""#));
    }
}
