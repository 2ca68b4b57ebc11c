//! # Oman Guide
//!
//! A static showcase of Oman's heritage, traditions, wellness and culture,
//! with a journey planner that turns a traveller's preferences into a
//! day-by-day itinerary.
//!
//! # Architecture: Form → Guide → Views
//!
//! ```text
//! PreferenceForm ──submit──▶ PreferenceSet ──▶ JourneyGuide ──▶ Results
//!      (draft)       (validated, immutable)    (state machine)   (plan + share link)
//!                                                   ▲
//!                       share link ──decode─────────┘
//! ```
//!
//! Everything the itinerary depends on is a pure function of the validated
//! [`preferences::PreferenceSet`]: the plan is picked by trip length, the
//! share link is the preferences serialized into the URL. Opening a share
//! link therefore rebuilds the same results view without any server state.
//!
//! The site itself is rendered once per locale by [`generate`] into plain
//! HTML. The browser side is a single small script that enforces the form
//! caps, hands the preferences to the results page and switches days.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Fixed gallery content for the four showcase sections |
//! | [`itinerary`] | Duration buckets and the five authored itineraries |
//! | [`preferences`] | Form draft, validation, and the validated preference snapshot |
//! | [`share`] | Versioned share-link encoding and decoding |
//! | [`journey`] | The journey guide state machine: loading, results, not found |
//! | [`clock`] | Time source the guide's timed transitions are checked against |
//! | [`viewport`] | Desktop/mobile detection and the export action it offers |
//! | [`export`] | Itinerary export and QR code services, with failure containment |
//! | [`locale`] | English/Arabic UI strings and text direction |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`generate`] | Renders the bilingual static site with Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## No Global UI State
//!
//! Locale and direction travel in a [`locale::UiContext`] passed to every
//! renderer. The journey guide owns its phase and exposes it read-only; the
//! only ways to change it are the guide's own operations.
//!
//! ## Timed Transitions Without Timers
//!
//! The loading delay and the mobile settle delay are deadlines checked on
//! [`journey::JourneyGuide::poll`]. Nothing runs in the background, so a torn
//! down guide can never be touched by a late callback, and tests advance a
//! [`clock::ManualClock`] instead of sleeping.
//!
//! ## Static Results Pages
//!
//! There is exactly one itinerary per trip length, so the results page ships
//! all five plans hidden and the script reveals the one matching the decoded
//! link. No plan is computed in the browser.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod export;
pub mod generate;
pub mod itinerary;
pub mod journey;
pub mod locale;
pub mod output;
pub mod preferences;
pub mod share;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_helpers;
