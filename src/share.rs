//! Shareable journey links.
//!
//! A results view is fully described by its [`PreferenceSet`], so sharing a
//! journey means putting the preferences into the URL:
//!
//! ```text
//! https://example.com/journey/results?data=<urlencoded JSON>[&mobile=true]
//! ```
//!
//! The JSON payload is versioned (`v`). Decoding rules:
//!
//! - a missing `v` is read as version 1, and versions newer than
//!   [`SCHEMA_VERSION`] are refused;
//! - unknown fields are ignored and missing collections default to empty, so
//!   links written by older builds keep decoding after fields are added;
//! - the decoded draft goes through the same validation as the form. A link
//!   whose data is incomplete is as unusable as one with no data;
//! - `days` must be a bucket key or a recognised duration label. Unlike
//!   [`crate::itinerary::select_itinerary`], which falls back to the full
//!   plan, an unrecognised label makes the whole link unusable, so the
//!   receiving view shows not-found instead of a plan nobody asked for.
//!
//! Links carry the locale of the site that wrote them: an Arabic site shares
//! `https://example.com/ar/journey/results?...` (see [`locale_root`]).
//!
//! `mobile=true` marks links opened from a phone scan. The receiving view
//! waits a little longer before trusting the data (see
//! [`crate::journey::JourneyGuide::open_link`]).
//!
//! Hash-routed links (`/#/journey/results?data=...`) decode the same way.

use crate::itinerary::DurationBucket;
use crate::locale::Locale;
use crate::preferences::{
    CultureInterest, PlaceCategory, PreferenceForm, PreferenceSet, TraditionInterest,
    ValidationError, WellnessInterest,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;
use url::{Url, form_urlencoded};

pub const SCHEMA_VERSION: u32 = 1;

/// Path of the results view, relative to the site base URL.
pub const RESULTS_PATH: &str = "journey/results";

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Invalid link: {0}")]
    Url(#[from] url::ParseError),
    #[error("Link carries no journey data")]
    MissingData,
    #[error("Journey data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Journey data uses schema version {found}, newest supported is {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("Journey data is incomplete ({} problems)", .0.len())]
    Incomplete(Vec<ValidationError>),
}

#[derive(Debug, Serialize, Deserialize)]
struct SharePayload {
    #[serde(default = "first_version")]
    v: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    places: BTreeSet<PlaceCategory>,
    #[serde(default)]
    traditions: BTreeSet<TraditionInterest>,
    #[serde(default)]
    wellness: Option<WellnessInterest>,
    #[serde(default)]
    culture: BTreeSet<CultureInterest>,
    #[serde(default)]
    days: Option<DurationBucket>,
}

fn first_version() -> u32 {
    1
}

/// A decoded shared link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedJourney {
    pub preferences: PreferenceSet,
    pub mobile: bool,
}

/// The raw query values of a results link, before the payload is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkQuery {
    pub data: Option<String>,
    pub mobile: bool,
}

/// Serialize preferences to the structured-text payload carried in `data`.
pub fn encode_data(preferences: &PreferenceSet) -> Result<String, ShareError> {
    let payload = SharePayload {
        v: SCHEMA_VERSION,
        name: preferences.name().to_string(),
        places: preferences.places_to_visit().clone(),
        traditions: preferences.tradition_interests().clone(),
        wellness: Some(preferences.wellness_interest()),
        culture: preferences.culture_interests().clone(),
        days: Some(preferences.days_to_explore()),
    };
    Ok(serde_json::to_string(&payload)?)
}

pub fn decode_data(data: &str) -> Result<PreferenceSet, ShareError> {
    let payload: SharePayload = serde_json::from_str(data)?;
    if payload.v > SCHEMA_VERSION {
        return Err(ShareError::UnsupportedVersion {
            found: payload.v,
            supported: SCHEMA_VERSION,
        });
    }
    let form = PreferenceForm {
        name: payload.name,
        places_to_visit: payload.places,
        tradition_interests: payload.traditions,
        wellness_interest: payload.wellness,
        culture_interests: payload.culture,
        days_to_explore: payload.days,
    };
    form.submit()
        .map_err(|rejected| ShareError::Incomplete(rejected.errors))
}

/// Site root of `locale` under `base_url`, e.g. `https://example.com/ar/`.
pub fn locale_root(base_url: &Url, locale: Locale) -> Result<Url, url::ParseError> {
    with_trailing_slash(base_url).join(locale.path_prefix())
}

fn with_trailing_slash(url: &Url) -> Url {
    let mut url = url.clone();
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Build the shareable results URL for `preferences` under `base_url`.
pub fn encode_link(
    base_url: &Url,
    preferences: &PreferenceSet,
    mobile: bool,
) -> Result<Url, ShareError> {
    let mut url = with_trailing_slash(base_url).join(RESULTS_PATH)?;
    let data = encode_data(preferences)?;
    {
        let mut query = url.query_pairs_mut();
        query.clear().append_pair("data", &data);
        if mobile {
            query.append_pair("mobile", "true");
        }
    }
    Ok(url)
}

/// Pull `data` and `mobile` out of a link without decoding the payload.
///
/// Accepts absolute URLs, site-relative paths and bare query strings.
pub fn parse_link(link: &str) -> Result<LinkQuery, ShareError> {
    let url = parse_lenient(link)?;
    let mut query = LinkQuery::default();
    let fragment_query = url
        .fragment()
        .and_then(|f| f.split_once('?'))
        .map(|(_, q)| q.to_string())
        .unwrap_or_default();
    let pairs = url
        .query_pairs()
        .into_owned()
        .chain(form_urlencoded::parse(fragment_query.as_bytes()).into_owned());
    for (key, value) in pairs {
        match key.as_str() {
            "data" if query.data.is_none() => query.data = Some(value),
            "mobile" => query.mobile = value == "true",
            _ => {}
        }
    }
    Ok(query)
}

pub fn decode_link(link: &str) -> Result<SharedJourney, ShareError> {
    let query = parse_link(link)?;
    let data = query
        .data
        .filter(|d| !d.trim().is_empty())
        .ok_or(ShareError::MissingData)?;
    Ok(SharedJourney {
        preferences: decode_data(&data)?,
        mobile: query.mobile,
    })
}

fn parse_lenient(link: &str) -> Result<Url, url::ParseError> {
    match Url::parse(link) {
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("http://localhost/")?;
            base.join(link)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{Choice, ScalarValue};
    use crate::test_helpers::{complete_form, sample_preferences};

    fn base() -> Url {
        Url::parse("https://visit.example/oman/").unwrap()
    }

    #[test]
    fn link_points_at_results_view() {
        let url = encode_link(&base(), &sample_preferences(), false).unwrap();
        assert_eq!(url.path(), "/oman/journey/results");
        assert!(url.query().unwrap().starts_with("data="));
        assert!(!url.as_str().contains("mobile"));
    }

    #[test]
    fn base_without_trailing_slash_keeps_its_path() {
        let base = Url::parse("https://visit.example/oman").unwrap();
        let url = encode_link(&base, &sample_preferences(), false).unwrap();
        assert_eq!(url.path(), "/oman/journey/results");
    }

    #[test]
    fn arabic_links_live_under_the_locale_prefix() {
        let root = locale_root(&base(), Locale::Ar).unwrap();
        assert_eq!(root.as_str(), "https://visit.example/oman/ar/");
        let url = encode_link(&root, &sample_preferences(), false).unwrap();
        assert_eq!(url.path(), "/oman/ar/journey/results");

        let root = locale_root(&Url::parse("https://visit.example").unwrap(), Locale::En).unwrap();
        assert_eq!(root.as_str(), "https://visit.example/");
    }

    #[test]
    fn round_trip_reproduces_preferences() {
        let original = sample_preferences();
        let url = encode_link(&base(), &original, false).unwrap();
        let shared = decode_link(url.as_str()).unwrap();
        assert_eq!(shared.preferences, original);
        assert!(!shared.mobile);
    }

    #[test]
    fn round_trip_across_every_duration() {
        for bucket in DurationBucket::ALL {
            let mut form = complete_form();
            form.set_field(ScalarValue::Days(Some(bucket)));
            form.set_field(ScalarValue::Name("Zainab Al-Harthy & co".into()));
            form.toggle(Choice::Place(PlaceCategory::Islands));
            let original = form.submit().unwrap();
            let url = encode_link(&base(), &original, true).unwrap();
            let shared = decode_link(url.as_str()).unwrap();
            assert_eq!(shared.preferences, original, "{bucket:?}");
            assert!(shared.mobile);
        }
    }

    #[test]
    fn hash_routed_links_decode() {
        let data = encode_data(&sample_preferences()).unwrap();
        let encoded: String = form_urlencoded::byte_serialize(data.as_bytes()).collect();
        let link = format!("https://visit.example/#/journey/results?data={encoded}&mobile=true");
        let shared = decode_link(&link).unwrap();
        assert_eq!(shared.preferences, sample_preferences());
        assert!(shared.mobile);
    }

    #[test]
    fn relative_links_decode() {
        let url = encode_link(&base(), &sample_preferences(), false).unwrap();
        let relative = format!("{}?{}", url.path(), url.query().unwrap());
        assert!(decode_link(&relative).is_ok());
    }

    #[test]
    fn missing_data_is_an_error() {
        let err = decode_link("https://visit.example/journey/results").unwrap_err();
        assert!(matches!(err, ShareError::MissingData));
        let err = decode_link("https://visit.example/journey/results?data=").unwrap_err();
        assert!(matches!(err, ShareError::MissingData));
    }

    #[test]
    fn malformed_data_is_an_error() {
        let err = decode_link("https://visit.example/journey/results?data=%7Bnot-json").unwrap_err();
        assert!(matches!(err, ShareError::Json(_)));
    }

    #[test]
    fn incomplete_data_is_an_error() {
        let err = decode_data(r#"{"v":1,"name":"Amal"}"#).unwrap_err();
        match err {
            ShareError::Incomplete(errors) => assert_eq!(errors.len(), 5),
            other => panic!("expected Incomplete, got {other:?}"),
        }
    }

    #[test]
    fn unrecognised_days_label_is_an_error() {
        let data = r#"{
            "name": "Amal",
            "places": ["beaches"],
            "traditions": ["dates"],
            "wellness": "yes",
            "culture": ["vision2040"],
            "days": "2 weeks"
        }"#;
        let err = decode_data(data).unwrap_err();
        assert!(matches!(err, ShareError::Json(_)), "{err:?}");
    }

    #[test]
    fn newer_schema_is_refused() {
        let err = decode_data(r#"{"v":2}"#).unwrap_err();
        assert!(matches!(
            err,
            ShareError::UnsupportedVersion { found: 2, supported: 1 }
        ));
    }

    #[test]
    fn unversioned_payload_with_unknown_fields_decodes() {
        let data = r#"{
            "name": "Amal",
            "places": ["beaches"],
            "traditions": ["dates", "frankincense", "pottery", "halwa"],
            "wellness": "yes",
            "culture": ["traditional-dress", "festivals-and-arts", "vision2040"],
            "days": "7-8 Days",
            "theme": "dark"
        }"#;
        let prefs = decode_data(data).unwrap();
        assert_eq!(prefs, sample_preferences());
    }

    #[test]
    fn garbage_link_is_an_error() {
        assert!(decode_link("http://[::1").is_err());
    }
}
