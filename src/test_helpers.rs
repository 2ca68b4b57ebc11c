//! Shared test utilities for the oman-guide test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let form = complete_form();
//! assert!(form.validate().is_empty());
//!
//! let prefs = sample_preferences();
//! assert_eq!(prefs.name(), "Amal");
//! ```

use crate::itinerary::DurationBucket;
use crate::preferences::{
    CultureInterest, PlaceCategory, PreferenceForm, PreferenceSet, TraditionInterest,
    WellnessInterest,
};

/// A draft that passes validation: Amal, beaches, a 7-8 day trip.
pub fn complete_form() -> PreferenceForm {
    PreferenceForm {
        name: "Amal".to_string(),
        places_to_visit: [PlaceCategory::Beaches].into(),
        tradition_interests: [
            TraditionInterest::Dates,
            TraditionInterest::Frankincense,
            TraditionInterest::Pottery,
            TraditionInterest::Halwa,
        ]
        .into(),
        wellness_interest: Some(WellnessInterest::Yes),
        culture_interests: [
            CultureInterest::TraditionalDress,
            CultureInterest::FestivalsAndArts,
            CultureInterest::Vision2040,
        ]
        .into(),
        days_to_explore: Some(DurationBucket::Full),
    }
}

/// [`complete_form`], submitted.
pub fn sample_preferences() -> PreferenceSet {
    complete_form().submit().unwrap()
}

/// Same traveller with a different trip length.
pub fn preferences_for(days: DurationBucket) -> PreferenceSet {
    let mut form = complete_form();
    form.days_to_explore = Some(days);
    form.submit().unwrap()
}
