//! Journey guide lifecycle.
//!
//! One [`JourneyGuide`] backs one results view, from the moment the form is
//! submitted (or a shared link is opened) until the view goes away.
//!
//! ```text
//!                submit (valid)            generation delay
//! AwaitingInput ───────────────▶ Generating ─────────────────▶ Ready
//!       ▲                                                        ▲
//!       │ return_to_start          open_link        decode ok    │
//!       │                               │                        │
//!   NotFound ◀──────────────── RehydratingFromLink ──────────────┘
//!            decode failed / no data
//! ```
//!
//! Timed transitions are deadlines checked by [`JourneyGuide::poll`] against
//! an injected [`Clock`]. Nothing here sleeps, and a guide that has been
//! [torn down](JourneyGuide::teardown) ignores every later poll, so a late
//! timer can never mutate a view that no longer exists.
//!
//! Rehydration always passes through `RehydratingFromLink` for at least one
//! poll, so the loading view renders before the link is decoded. Links
//! flagged `mobile=true` also wait out the configured settle delay first.
//! The `NotFound` decision is only made once decoding has fully finished, and
//! leaving it requires an explicit [`JourneyGuide::return_to_start`].

use crate::clock::Clock;
use crate::config::SiteConfig;
use crate::itinerary::{ItineraryPlan, select_plan};
use crate::preferences::{PreferenceForm, PreferenceSet, Rejected};
use crate::share::{self, ShareError};
use crate::viewport::{ExportAction, LayoutMode, ViewportListener};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Timing and link settings for a guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideSettings {
    pub generation_delay: Duration,
    pub mobile_settle: Duration,
    /// Site root that share links are built under, including the locale
    /// prefix.
    pub base_url: Url,
}

impl GuideSettings {
    pub fn from_config(config: &SiteConfig) -> Result<Self, url::ParseError> {
        Ok(Self {
            generation_delay: config.journey.generation_delay(),
            mobile_settle: config.journey.mobile_settle(),
            base_url: share::locale_root(&config.site.parsed_base_url()?, config.site.locale)?,
        })
    }
}

/// Everything the results view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Results {
    preferences: PreferenceSet,
    plan: ItineraryPlan,
    active_day: u32,
    share_link: Option<Url>,
}

impl Results {
    fn new(preferences: PreferenceSet, base_url: &Url) -> Self {
        let plan = select_plan(preferences.days_to_explore());
        let share_link = match share::encode_link(base_url, &preferences, false) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(error = %e, "could not build share link");
                None
            }
        };
        Self {
            preferences,
            plan,
            active_day: 1,
            share_link,
        }
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.preferences
    }

    pub fn plan(&self) -> &ItineraryPlan {
        &self.plan
    }

    /// Selected day, always within `1..=plan.len()`.
    pub fn active_day(&self) -> u32 {
        self.active_day
    }

    /// The link that reproduces this view. `None` only if encoding failed.
    pub fn share_link(&self) -> Option<&Url> {
        self.share_link.as_ref()
    }

    /// The share link as a phone should open it: flagged `mobile=true` so the
    /// receiving view waits for the page to settle.
    pub fn scan_link(&self) -> Option<Url> {
        let mut link = self.share_link.clone()?;
        link.query_pairs_mut().append_pair("mobile", "true");
        Some(link)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyPhase {
    AwaitingInput,
    Generating {
        preferences: PreferenceSet,
        ready_at: Duration,
    },
    RehydratingFromLink {
        link: String,
        settle_until: Duration,
    },
    Ready(Results),
    NotFound {
        /// Why the link could not be used. Diagnostic only.
        reason: String,
    },
}

impl JourneyPhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            JourneyPhase::AwaitingInput => PhaseKind::AwaitingInput,
            JourneyPhase::Generating { .. } => PhaseKind::Generating,
            JourneyPhase::RehydratingFromLink { .. } => PhaseKind::RehydratingFromLink,
            JourneyPhase::Ready(_) => PhaseKind::Ready,
            JourneyPhase::NotFound { .. } => PhaseKind::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    AwaitingInput,
    Generating,
    RehydratingFromLink,
    Ready,
    NotFound,
}

impl PhaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKind::AwaitingInput => "awaiting-input",
            PhaseKind::Generating => "generating",
            PhaseKind::RehydratingFromLink => "rehydrating",
            PhaseKind::Ready => "ready",
            PhaseKind::NotFound => "not-found",
        }
    }
}

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Preferences are incomplete ({} problems)", .0.errors.len())]
    Invalid(Rejected),
    #[error("A journey is already {}", .0.as_str())]
    Busy(PhaseKind),
    #[error("The journey view has been closed")]
    TornDown,
}

pub struct JourneyGuide<C: Clock> {
    clock: C,
    settings: GuideSettings,
    phase: JourneyPhase,
    viewport: Option<ViewportListener>,
    torn_down: bool,
}

impl<C: Clock> JourneyGuide<C> {
    pub fn new(clock: C, settings: GuideSettings) -> Self {
        Self {
            clock,
            settings,
            phase: JourneyPhase::AwaitingInput,
            viewport: None,
            torn_down: false,
        }
    }

    pub fn phase(&self) -> &JourneyPhase {
        &self.phase
    }

    pub fn kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn results(&self) -> Option<&Results> {
        match &self.phase {
            JourneyPhase::Ready(results) => Some(results),
            _ => None,
        }
    }

    pub fn settings(&self) -> &GuideSettings {
        &self.settings
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Validate the draft and start generating. Only accepted while
    /// awaiting input. A rejected draft is handed back inside the error.
    pub fn submit(&mut self, form: PreferenceForm) -> Result<(), GuideError> {
        if self.torn_down {
            return Err(GuideError::TornDown);
        }
        if !matches!(self.phase, JourneyPhase::AwaitingInput) {
            return Err(GuideError::Busy(self.kind()));
        }
        let preferences = form.submit().map_err(GuideError::Invalid)?;
        let ready_at = self.clock.now() + self.settings.generation_delay;
        debug!(
            name = preferences.name(),
            days = preferences.days_to_explore().key(),
            "generating journey"
        );
        self.phase = JourneyPhase::Generating {
            preferences,
            ready_at,
        };
        Ok(())
    }

    /// Navigate straight to a results link. Replaces whatever was showing.
    pub fn open_link(&mut self, link: impl Into<String>) -> Result<(), GuideError> {
        if self.torn_down {
            return Err(GuideError::TornDown);
        }
        let link = link.into();
        // An unparseable link still goes through rehydration; it fails there.
        let mobile = share::parse_link(&link).is_ok_and(|q| q.mobile);
        let settle = if mobile {
            self.settings.mobile_settle
        } else {
            Duration::ZERO
        };
        debug!(mobile, "rehydrating journey from link");
        self.phase = JourneyPhase::RehydratingFromLink {
            link,
            settle_until: self.clock.now() + settle,
        };
        Ok(())
    }

    /// Fire any transition whose deadline has passed. Returns the new phase
    /// when one happened.
    pub fn poll(&mut self) -> Option<PhaseKind> {
        if self.torn_down {
            return None;
        }
        let now = self.clock.now();
        let next = match &self.phase {
            JourneyPhase::Generating {
                preferences,
                ready_at,
            } if now >= *ready_at => Some(JourneyPhase::Ready(Results::new(
                preferences.clone(),
                &self.settings.base_url,
            ))),
            JourneyPhase::RehydratingFromLink { link, settle_until } if now >= *settle_until => {
                Some(self.rehydrate(link))
            }
            _ => None,
        }?;
        debug!(from = self.kind().as_str(), to = next.kind().as_str(), "journey transition");
        self.phase = next;
        Some(self.kind())
    }

    fn rehydrate(&self, link: &str) -> JourneyPhase {
        match share::decode_link(link) {
            Ok(shared) => JourneyPhase::Ready(Results::new(
                shared.preferences,
                &self.settings.base_url,
            )),
            Err(e) => {
                log_decode_failure(&e);
                JourneyPhase::NotFound {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Time left before the pending transition is due, if one is pending.
    pub fn time_until_next_transition(&self) -> Option<Duration> {
        if self.torn_down {
            return None;
        }
        let deadline = match &self.phase {
            JourneyPhase::Generating { ready_at, .. } => *ready_at,
            JourneyPhase::RehydratingFromLink { settle_until, .. } => *settle_until,
            _ => return None,
        };
        Some(deadline.saturating_sub(self.clock.now()))
    }

    /// Select a day of the current plan. Out-of-range days, and calls
    /// outside `Ready`, change nothing.
    pub fn set_active_day(&mut self, day: u32) -> bool {
        if self.torn_down {
            return false;
        }
        match &mut self.phase {
            JourneyPhase::Ready(results) if results.plan.contains_day(day) => {
                results.active_day = day;
                true
            }
            _ => false,
        }
    }

    /// Leave `NotFound` for a fresh form.
    pub fn return_to_start(&mut self) -> bool {
        if self.torn_down || !matches!(self.phase, JourneyPhase::NotFound { .. }) {
            return false;
        }
        debug!("returning to start");
        self.phase = JourneyPhase::AwaitingInput;
        true
    }

    /// Register the resize listener with the current viewport width.
    pub fn mount_viewport(&mut self, width: u32) {
        if self.torn_down {
            return;
        }
        self.viewport = Some(ViewportListener::mount(width));
    }

    /// Returns true when the layout mode changed.
    pub fn on_resize(&mut self, width: u32) -> bool {
        if self.torn_down {
            return false;
        }
        self.viewport
            .as_mut()
            .is_some_and(|listener| listener.on_resize(width))
    }

    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.viewport.map(|listener| listener.mode())
    }

    /// The export control offered by the results view. Needs a mounted
    /// viewport and ready results.
    pub fn export_action(&self) -> Option<ExportAction> {
        self.results()?;
        self.layout_mode().map(LayoutMode::export_action)
    }

    /// The view is going away. Deregisters the resize listener and makes
    /// every later call a no-op.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        debug!(phase = self.kind().as_str(), "journey view torn down");
        self.viewport = None;
        self.torn_down = true;
    }
}

fn log_decode_failure(error: &ShareError) {
    match error {
        ShareError::MissingData => warn!("results link has no journey data"),
        other => warn!(error = %other, "could not decode shared journey"),
    }
}
