//! Traveller preferences: the form draft and the validated snapshot.
//!
//! A [`PreferenceForm`] is the mutable draft the traveller edits. Writes are
//! never constrained; [`PreferenceForm::validate`] reports everything that is
//! missing, and [`PreferenceForm::submit`] turns a complete draft into an
//! immutable [`PreferenceSet`]. A `PreferenceSet` cannot be built any other
//! way, so holding one means the constraints below were met:
//!
//! | Field | Rule |
//! |---|---|
//! | name | non-empty after trimming |
//! | places to visit | at least 1 |
//! | tradition interests | exactly 4 |
//! | wellness interest | yes or no |
//! | culture interests | exactly 3 |
//! | days to explore | one duration bucket |
//!
//! Completeness is checked on every submission, never cached.

use crate::itinerary::DurationBucket;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const TRADITION_SELECTIONS: usize = 4;
pub const CULTURE_SELECTIONS: usize = 3;

/// An enumerated option of a multi-select field.
pub trait FormOption: Copy + Ord + 'static {
    const ALL: &'static [Self];

    /// Stable identifier used in links and form values.
    fn key(self) -> &'static str;

    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceCategory {
    Beaches,
    Mountains,
    Deserts,
    Wadis,
    Forts,
    Souqs,
    Islands,
}

impl FormOption for PlaceCategory {
    const ALL: &'static [Self] = &[
        PlaceCategory::Beaches,
        PlaceCategory::Mountains,
        PlaceCategory::Deserts,
        PlaceCategory::Wadis,
        PlaceCategory::Forts,
        PlaceCategory::Souqs,
        PlaceCategory::Islands,
    ];

    fn key(self) -> &'static str {
        match self {
            PlaceCategory::Beaches => "beaches",
            PlaceCategory::Mountains => "mountains",
            PlaceCategory::Deserts => "deserts",
            PlaceCategory::Wadis => "wadis",
            PlaceCategory::Forts => "forts",
            PlaceCategory::Souqs => "souqs",
            PlaceCategory::Islands => "islands",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PlaceCategory::Beaches => "Beaches",
            PlaceCategory::Mountains => "Mountains",
            PlaceCategory::Deserts => "Deserts",
            PlaceCategory::Wadis => "Wadis",
            PlaceCategory::Forts => "Forts & Castles",
            PlaceCategory::Souqs => "Souqs",
            PlaceCategory::Islands => "Islands",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraditionInterest {
    Dates,
    Frankincense,
    Pottery,
    Silversmithing,
    Weaving,
    Halwa,
    DhowBuilding,
    Kahwa,
}

impl FormOption for TraditionInterest {
    const ALL: &'static [Self] = &[
        TraditionInterest::Dates,
        TraditionInterest::Frankincense,
        TraditionInterest::Pottery,
        TraditionInterest::Silversmithing,
        TraditionInterest::Weaving,
        TraditionInterest::Halwa,
        TraditionInterest::DhowBuilding,
        TraditionInterest::Kahwa,
    ];

    fn key(self) -> &'static str {
        match self {
            TraditionInterest::Dates => "dates",
            TraditionInterest::Frankincense => "frankincense",
            TraditionInterest::Pottery => "pottery",
            TraditionInterest::Silversmithing => "silversmithing",
            TraditionInterest::Weaving => "weaving",
            TraditionInterest::Halwa => "halwa",
            TraditionInterest::DhowBuilding => "dhow-building",
            TraditionInterest::Kahwa => "kahwa",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TraditionInterest::Dates => "Date Farming",
            TraditionInterest::Frankincense => "Frankincense",
            TraditionInterest::Pottery => "Pottery",
            TraditionInterest::Silversmithing => "Silversmithing",
            TraditionInterest::Weaving => "Weaving",
            TraditionInterest::Halwa => "Omani Halwa",
            TraditionInterest::DhowBuilding => "Dhow Building",
            TraditionInterest::Kahwa => "Kahwa Ceremony",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CultureInterest {
    TraditionalDress,
    TradingHeritage,
    FestivalsAndArts,
    Vision2040,
    CuisineAndHospitality,
    LanguageAndLiterature,
}

impl FormOption for CultureInterest {
    const ALL: &'static [Self] = &[
        CultureInterest::TraditionalDress,
        CultureInterest::TradingHeritage,
        CultureInterest::FestivalsAndArts,
        CultureInterest::Vision2040,
        CultureInterest::CuisineAndHospitality,
        CultureInterest::LanguageAndLiterature,
    ];

    fn key(self) -> &'static str {
        match self {
            CultureInterest::TraditionalDress => "traditional-dress",
            CultureInterest::TradingHeritage => "trading-heritage",
            CultureInterest::FestivalsAndArts => "festivals-and-arts",
            CultureInterest::Vision2040 => "vision2040",
            CultureInterest::CuisineAndHospitality => "cuisine-and-hospitality",
            CultureInterest::LanguageAndLiterature => "language-and-literature",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CultureInterest::TraditionalDress => "Traditional Dress",
            CultureInterest::TradingHeritage => "Trading Heritage",
            CultureInterest::FestivalsAndArts => "Festivals & Arts",
            CultureInterest::Vision2040 => "Vision 2040",
            CultureInterest::CuisineAndHospitality => "Cuisine & Hospitality",
            CultureInterest::LanguageAndLiterature => "Language & Literature",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellnessInterest {
    Yes,
    No,
}

impl WellnessInterest {
    pub const ALL: [WellnessInterest; 2] = [WellnessInterest::Yes, WellnessInterest::No];

    /// Serialized form, as written in links and form values.
    pub fn key(self) -> &'static str {
        match self {
            WellnessInterest::Yes => "yes",
            WellnessInterest::No => "no",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WellnessInterest::Yes => "Yes",
            WellnessInterest::No => "No",
        }
    }
}

/// The three multi-select fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiField {
    Places,
    Traditions,
    Culture,
}

impl MultiField {
    /// Maximum number of selections the form lets the traveller make.
    pub fn cap(self) -> Option<usize> {
        match self {
            MultiField::Places => None,
            MultiField::Traditions => Some(TRADITION_SELECTIONS),
            MultiField::Culture => Some(CULTURE_SELECTIONS),
        }
    }
}

/// A value of one of the multi-select fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Place(PlaceCategory),
    Tradition(TraditionInterest),
    Culture(CultureInterest),
}

impl Choice {
    pub fn field(self) -> MultiField {
        match self {
            Choice::Place(_) => MultiField::Places,
            Choice::Tradition(_) => MultiField::Traditions,
            Choice::Culture(_) => MultiField::Culture,
        }
    }
}

/// A write to one of the scalar fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarValue {
    Name(String),
    Wellness(Option<WellnessInterest>),
    Days(Option<DurationBucket>),
}

/// One unmet form constraint. Reported in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    NameMissing,
    #[error("Select at least one place to visit")]
    PlacesMissing,
    #[error("Select exactly 4 traditions (you selected {selected})")]
    TraditionCount { selected: usize },
    #[error("Tell us whether you are interested in wellness experiences")]
    WellnessMissing,
    #[error("Select exactly 3 cultural interests (you selected {selected})")]
    CultureCount { selected: usize },
    #[error("Choose how many days you want to explore")]
    DaysMissing,
}

/// Editable draft of the preference form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreferenceForm {
    pub name: String,
    pub places_to_visit: BTreeSet<PlaceCategory>,
    pub tradition_interests: BTreeSet<TraditionInterest>,
    pub wellness_interest: Option<WellnessInterest>,
    pub culture_interests: BTreeSet<CultureInterest>,
    pub days_to_explore: Option<DurationBucket>,
}

/// A submission that failed validation. The draft comes back untouched so
/// the traveller can fix it and try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub form: PreferenceForm,
    pub errors: Vec<ValidationError>,
}

impl PreferenceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, value: ScalarValue) {
        match value {
            ScalarValue::Name(name) => self.name = name,
            ScalarValue::Wellness(wellness) => self.wellness_interest = wellness,
            ScalarValue::Days(days) => self.days_to_explore = days,
        }
    }

    /// Add the choice if absent, remove it if present. Returns whether it is
    /// selected afterwards.
    ///
    /// Caps are not enforced here; see [`PreferenceForm::can_select`].
    pub fn toggle(&mut self, choice: Choice) -> bool {
        match choice {
            Choice::Place(p) => flip(&mut self.places_to_visit, p),
            Choice::Tradition(t) => flip(&mut self.tradition_interests, t),
            Choice::Culture(c) => flip(&mut self.culture_interests, c),
        }
    }

    pub fn is_selected(&self, choice: Choice) -> bool {
        match choice {
            Choice::Place(p) => self.places_to_visit.contains(&p),
            Choice::Tradition(t) => self.tradition_interests.contains(&t),
            Choice::Culture(c) => self.culture_interests.contains(&c),
        }
    }

    pub fn selected_count(&self, field: MultiField) -> usize {
        match field {
            MultiField::Places => self.places_to_visit.len(),
            MultiField::Traditions => self.tradition_interests.len(),
            MultiField::Culture => self.culture_interests.len(),
        }
    }

    /// Whether the presentation layer should offer this choice as clickable.
    ///
    /// Removing a selection is always allowed; adding one is refused once the
    /// field's cap is reached.
    pub fn can_select(&self, choice: Choice) -> bool {
        if self.is_selected(choice) {
            return true;
        }
        let field = choice.field();
        field
            .cap()
            .is_none_or(|cap| self.selected_count(field) < cap)
    }

    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ValidationError::NameMissing);
        }
        if self.places_to_visit.is_empty() {
            errors.push(ValidationError::PlacesMissing);
        }
        if self.tradition_interests.len() != TRADITION_SELECTIONS {
            errors.push(ValidationError::TraditionCount {
                selected: self.tradition_interests.len(),
            });
        }
        if self.wellness_interest.is_none() {
            errors.push(ValidationError::WellnessMissing);
        }
        if self.culture_interests.len() != CULTURE_SELECTIONS {
            errors.push(ValidationError::CultureCount {
                selected: self.culture_interests.len(),
            });
        }
        if self.days_to_explore.is_none() {
            errors.push(ValidationError::DaysMissing);
        }
        errors
    }

    /// Freeze a complete draft into a [`PreferenceSet`]. The draft is consumed
    /// on success.
    pub fn submit(self) -> Result<PreferenceSet, Rejected> {
        let errors = self.validate();
        let (Some(wellness_interest), Some(days_to_explore), true) = (
            self.wellness_interest,
            self.days_to_explore,
            errors.is_empty(),
        ) else {
            return Err(Rejected { form: self, errors });
        };
        Ok(PreferenceSet {
            name: self.name.trim().to_string(),
            places_to_visit: self.places_to_visit,
            tradition_interests: self.tradition_interests,
            wellness_interest,
            culture_interests: self.culture_interests,
            days_to_explore,
        })
    }
}

fn flip<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

/// Complete, immutable traveller preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceSet {
    name: String,
    places_to_visit: BTreeSet<PlaceCategory>,
    tradition_interests: BTreeSet<TraditionInterest>,
    wellness_interest: WellnessInterest,
    culture_interests: BTreeSet<CultureInterest>,
    days_to_explore: DurationBucket,
}

impl PreferenceSet {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn places_to_visit(&self) -> &BTreeSet<PlaceCategory> {
        &self.places_to_visit
    }

    pub fn tradition_interests(&self) -> &BTreeSet<TraditionInterest> {
        &self.tradition_interests
    }

    pub fn wellness_interest(&self) -> WellnessInterest {
        self.wellness_interest
    }

    pub fn culture_interests(&self) -> &BTreeSet<CultureInterest> {
        &self.culture_interests
    }

    pub fn days_to_explore(&self) -> DurationBucket {
        self.days_to_explore
    }

    /// A fresh draft pre-filled with these preferences.
    pub fn to_form(&self) -> PreferenceForm {
        PreferenceForm {
            name: self.name.clone(),
            places_to_visit: self.places_to_visit.clone(),
            tradition_interests: self.tradition_interests.clone(),
            wellness_interest: Some(self.wellness_interest),
            culture_interests: self.culture_interests.clone(),
            days_to_explore: Some(self.days_to_explore),
        }
    }
}

#[derive(Error, Debug)]
pub enum PreferencesFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Read a form draft from a TOML file.
///
/// ```toml
/// name = "Amal"
/// places_to_visit = ["beaches", "wadis"]
/// tradition_interests = ["dates", "frankincense", "pottery", "halwa"]
/// wellness_interest = "yes"
/// culture_interests = ["traditional-dress", "festivals-and-arts", "vision2040"]
/// days_to_explore = "7-8 Days"
/// ```
///
/// The draft is returned as-is; validation is the caller's decision.
pub fn load_form(path: &Path) -> Result<PreferenceForm, PreferencesFileError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::complete_form;

    #[test]
    fn empty_form_reports_six_errors_in_order() {
        let errors = PreferenceForm::new().validate();
        assert_eq!(
            errors,
            vec![
                ValidationError::NameMissing,
                ValidationError::PlacesMissing,
                ValidationError::TraditionCount { selected: 0 },
                ValidationError::WellnessMissing,
                ValidationError::CultureCount { selected: 0 },
                ValidationError::DaysMissing,
            ]
        );
    }

    #[test]
    fn complete_form_has_no_errors() {
        assert!(complete_form().validate().is_empty());
    }

    #[test]
    fn three_traditions_is_a_single_error() {
        let mut form = complete_form();
        form.toggle(Choice::Tradition(TraditionInterest::Dates));
        assert_eq!(
            form.validate(),
            vec![ValidationError::TraditionCount { selected: 3 }]
        );
    }

    #[test]
    fn whitespace_name_is_missing() {
        let mut form = complete_form();
        form.set_field(ScalarValue::Name("   ".into()));
        assert_eq!(form.validate(), vec![ValidationError::NameMissing]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut form = PreferenceForm::new();
        assert!(form.toggle(Choice::Place(PlaceCategory::Beaches)));
        assert!(form.is_selected(Choice::Place(PlaceCategory::Beaches)));
        assert!(!form.toggle(Choice::Place(PlaceCategory::Beaches)));
        assert!(form.places_to_visit.is_empty());
    }

    #[test]
    fn toggle_itself_ignores_the_cap() {
        let mut form = PreferenceForm::new();
        for t in TraditionInterest::ALL.iter().take(5) {
            form.toggle(Choice::Tradition(*t));
        }
        assert_eq!(form.selected_count(MultiField::Traditions), 5);
        assert_eq!(
            form.validate()[2],
            ValidationError::TraditionCount { selected: 5 }
        );
    }

    #[test]
    fn can_select_stops_additions_at_cap() {
        let form = complete_form();
        let unselected = CultureInterest::ALL
            .iter()
            .copied()
            .find(|c| !form.culture_interests.contains(c))
            .unwrap();
        let selected = *form.culture_interests.iter().next().unwrap();

        assert!(!form.can_select(Choice::Culture(unselected)));
        // Removal stays available.
        assert!(form.can_select(Choice::Culture(selected)));
        // Places have no cap.
        assert!(form.can_select(Choice::Place(PlaceCategory::Islands)));
    }

    #[test]
    fn submit_freezes_a_complete_form() {
        let set = complete_form().submit().unwrap();
        assert_eq!(set.name(), "Amal");
        assert_eq!(set.days_to_explore(), DurationBucket::Full);
        assert_eq!(set.tradition_interests().len(), 4);
        assert_eq!(set.to_form().submit().unwrap(), set);
    }

    #[test]
    fn rejected_submit_returns_the_draft() {
        let mut form = complete_form();
        form.set_field(ScalarValue::Days(None));
        let rejected = form.clone().submit().unwrap_err();
        assert_eq!(rejected.form, form);
        assert_eq!(rejected.errors, vec![ValidationError::DaysMissing]);
    }

    #[test]
    fn validation_messages_are_readable() {
        let msg = ValidationError::CultureCount { selected: 1 }.to_string();
        assert_eq!(msg, "Select exactly 3 cultural interests (you selected 1)");
    }

    #[test]
    fn form_parses_from_toml_with_labels_or_keys() {
        let form: PreferenceForm = toml::from_str(
            r#"
name = "Amal"
places_to_visit = ["beaches"]
tradition_interests = ["dates", "frankincense", "pottery", "halwa"]
wellness_interest = "yes"
culture_interests = ["traditional-dress", "festivals-and-arts", "vision2040"]
days_to_explore = "10-12 Days"
"#,
        )
        .unwrap();
        assert!(form.validate().is_empty());
        assert_eq!(form.days_to_explore, Some(DurationBucket::Extended));

        let keyed: PreferenceForm = toml::from_str(r#"days_to_explore = "short""#).unwrap();
        assert_eq!(keyed.days_to_explore, Some(DurationBucket::Short));
    }

    #[test]
    fn unknown_form_key_rejected() {
        let result: Result<PreferenceForm, _> = toml::from_str(r#"nme = "Amal""#);
        assert!(result.is_err());
    }

    #[test]
    fn option_keys_match_serde_names() {
        for place in PlaceCategory::ALL {
            let json = serde_json::to_string(place).unwrap();
            assert_eq!(json, format!("\"{}\"", place.key()));
        }
        for tradition in TraditionInterest::ALL {
            let json = serde_json::to_string(tradition).unwrap();
            assert_eq!(json, format!("\"{}\"", tradition.key()));
        }
        for culture in CultureInterest::ALL {
            let json = serde_json::to_string(culture).unwrap();
            assert_eq!(json, format!("\"{}\"", culture.key()));
        }
    }

    #[test]
    fn load_form_reads_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("prefs.toml");
        fs::write(&path, "name = \"Salim\"\nwellness_interest = \"no\"\n").unwrap();
        let form = load_form(&path).unwrap();
        assert_eq!(form.name, "Salim");
        assert_eq!(form.wellness_interest, Some(WellnessInterest::No));
    }

    #[test]
    fn load_form_invalid_toml_is_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("prefs.toml");
        fs::write(&path, "name = [[[").unwrap();
        assert!(matches!(
            load_form(&path),
            Err(PreferencesFileError::Toml(_))
        ));
    }
}
