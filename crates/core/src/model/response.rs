use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::choices::{
    Gender, LearningEnvironment, LearningStyle, PrimaryDevice, StudyTime,
};
use crate::model::ids::ResponseId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// At least one required field was left blank or unselected.
    #[error("missing fields")]
    MissingFields,

    /// Age or weekly study hours is not a non-negative integer.
    #[error("invalid numeric input")]
    InvalidNumeric,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SatisfactionError {
    #[error("satisfaction must be between 1 and 10, got {0}")]
    OutOfRange(i64),
}

//
// ─── SATISFACTION SCORE ────────────────────────────────────────────────────────
//

/// A satisfaction rating in [1, 10].
///
/// The survey slider can only produce in-range values and uses `clamped`;
/// every other path (persistence, seeding, tests) goes through `new` and
/// rejects out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SatisfactionScore(u8);

impl SatisfactionScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Creates a score, rejecting values outside [1, 10].
    ///
    /// # Errors
    ///
    /// Returns `SatisfactionError::OutOfRange` for values outside the scale.
    pub fn new(value: i64) -> Result<Self, SatisfactionError> {
        let narrowed = u8::try_from(value).map_err(|_| SatisfactionError::OutOfRange(value))?;
        if (Self::MIN..=Self::MAX).contains(&narrowed) {
            Ok(Self(narrowed))
        } else {
            Err(SatisfactionError::OutOfRange(value))
        }
    }

    /// Creates a score, clamping out-of-range values into [1, 10].
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // In range by construction.
        Self(clamped as u8)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based histogram bucket for this score (score 1 lands in bucket 0).
    #[must_use]
    pub fn bucket(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}

impl fmt::Display for SatisfactionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Raw form state, collected from the survey view in one struct instead of
/// scattered widget handles.
///
/// Free-text and numeric fields arrive as the strings the user typed;
/// combo selections are `None` until the user picks a value; the slider
/// always carries an in-range score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseDraft {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub environment: Option<LearningEnvironment>,
    pub study_hours: String,
    pub study_time: Option<StudyTime>,
    pub study_tools: String,
    pub device: Option<PrimaryDevice>,
    pub learning_style: Option<LearningStyle>,
    pub satisfaction: Option<SatisfactionScore>,
}

impl ResponseDraft {
    /// Validates the draft into a well-formed, unsaved response.
    ///
    /// Checks run in order: completeness of every field, then numeric
    /// well-formedness of age and study hours. All-or-nothing; a failed
    /// attempt leaves the draft untouched for correction.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingFields` if any field is blank or
    /// unselected, then `ValidationError::InvalidNumeric` if age or study
    /// hours fails to parse as a non-negative integer.
    pub fn validate(&self) -> Result<NewResponse, ValidationError> {
        let name = self.name.trim();
        let age = self.age.trim();
        let study_hours = self.study_hours.trim();
        let study_tools = self.study_tools.trim();

        let all_present = !name.is_empty()
            && !age.is_empty()
            && !study_hours.is_empty()
            && !study_tools.is_empty()
            && self.gender.is_some()
            && self.environment.is_some()
            && self.study_time.is_some()
            && self.device.is_some()
            && self.learning_style.is_some()
            && self.satisfaction.is_some();
        if !all_present {
            return Err(ValidationError::MissingFields);
        }

        let age: u32 = age.parse().map_err(|_| ValidationError::InvalidNumeric)?;
        let study_hours: u32 = study_hours
            .parse()
            .map_err(|_| ValidationError::InvalidNumeric)?;

        // `is_some` was checked above for each of these.
        Ok(NewResponse {
            name: name.to_owned(),
            age,
            gender: self.gender.ok_or(ValidationError::MissingFields)?,
            environment: self.environment.ok_or(ValidationError::MissingFields)?,
            study_hours,
            study_time: self.study_time.ok_or(ValidationError::MissingFields)?,
            study_tools: study_tools.to_owned(),
            device: self.device.ok_or(ValidationError::MissingFields)?,
            learning_style: self.learning_style.ok_or(ValidationError::MissingFields)?,
            satisfaction: self.satisfaction.ok_or(ValidationError::MissingFields)?,
        })
    }
}

//
// ─── RESPONSE ──────────────────────────────────────────────────────────────────
//

/// A fully-validated survey submission that has not been appended yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResponse {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub environment: LearningEnvironment,
    pub study_hours: u32,
    pub study_time: StudyTime,
    pub study_tools: String,
    pub device: PrimaryDevice,
    pub learning_style: LearningStyle,
    pub satisfaction: SatisfactionScore,
}

/// One stored survey response. Created exactly once per successful
/// submission, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    id: ResponseId,
    name: String,
    age: u32,
    gender: Gender,
    environment: LearningEnvironment,
    study_hours: u32,
    study_time: StudyTime,
    study_tools: String,
    device: PrimaryDevice,
    learning_style: LearningStyle,
    satisfaction: SatisfactionScore,
}

impl Response {
    /// Rebuilds a response from persisted state.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingFields` if the stored free-text
    /// fields are blank (possible only for rows written by another program).
    pub fn from_persisted(id: ResponseId, record: NewResponse) -> Result<Self, ValidationError> {
        if record.name.trim().is_empty() || record.study_tools.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(Self {
            id,
            name: record.name,
            age: record.age,
            gender: record.gender,
            environment: record.environment,
            study_hours: record.study_hours,
            study_time: record.study_time,
            study_tools: record.study_tools,
            device: record.device,
            learning_style: record.learning_style,
            satisfaction: record.satisfaction,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> ResponseId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn environment(&self) -> LearningEnvironment {
        self.environment
    }

    #[must_use]
    pub fn study_hours(&self) -> u32 {
        self.study_hours
    }

    #[must_use]
    pub fn study_time(&self) -> StudyTime {
        self.study_time
    }

    #[must_use]
    pub fn study_tools(&self) -> &str {
        &self.study_tools
    }

    #[must_use]
    pub fn device(&self) -> PrimaryDevice {
        self.device
    }

    #[must_use]
    pub fn learning_style(&self) -> LearningStyle {
        self.learning_style
    }

    #[must_use]
    pub fn satisfaction(&self) -> SatisfactionScore {
        self.satisfaction
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ResponseDraft {
        ResponseDraft {
            name: "Asha".into(),
            age: "21".into(),
            gender: Some(Gender::Female),
            environment: Some(LearningEnvironment::Online),
            study_hours: "10".into(),
            study_time: Some(StudyTime::Evening),
            study_tools: "Laptop notes".into(),
            device: Some(PrimaryDevice::Laptop),
            learning_style: Some(LearningStyle::Visual),
            satisfaction: Some(SatisfactionScore::new(7).unwrap()),
        }
    }

    #[test]
    fn validate_accepts_complete_draft() {
        let response = complete_draft().validate().unwrap();
        assert_eq!(response.name, "Asha");
        assert_eq!(response.age, 21);
        assert_eq!(response.gender, Gender::Female);
        assert_eq!(response.environment, LearningEnvironment::Online);
        assert_eq!(response.study_hours, 10);
        assert_eq!(response.study_time, StudyTime::Evening);
        assert_eq!(response.study_tools, "Laptop notes");
        assert_eq!(response.device, PrimaryDevice::Laptop);
        assert_eq!(response.learning_style, LearningStyle::Visual);
        assert_eq!(response.satisfaction.value(), 7);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut draft = complete_draft();
        draft.name = "   ".into();
        assert_eq!(draft.validate().unwrap_err(), ValidationError::MissingFields);
    }

    #[test]
    fn validate_rejects_unselected_combo() {
        let mut draft = complete_draft();
        draft.device = None;
        assert_eq!(draft.validate().unwrap_err(), ValidationError::MissingFields);
    }

    #[test]
    fn validate_rejects_non_numeric_age() {
        let mut draft = complete_draft();
        draft.age = "abc".into();
        assert_eq!(
            draft.validate().unwrap_err(),
            ValidationError::InvalidNumeric
        );
    }

    #[test]
    fn validate_rejects_negative_study_hours() {
        let mut draft = complete_draft();
        draft.study_hours = "-3".into();
        assert_eq!(
            draft.validate().unwrap_err(),
            ValidationError::InvalidNumeric
        );
    }

    #[test]
    fn validate_reports_missing_before_numeric() {
        // Blank study tools and non-numeric age at once: completeness wins.
        let mut draft = complete_draft();
        draft.study_tools = String::new();
        draft.age = "abc".into();
        assert_eq!(draft.validate().unwrap_err(), ValidationError::MissingFields);
    }

    #[test]
    fn validate_trims_free_text() {
        let mut draft = complete_draft();
        draft.name = "  Asha  ".into();
        draft.study_tools = " Laptop notes ".into();
        let response = draft.validate().unwrap();
        assert_eq!(response.name, "Asha");
        assert_eq!(response.study_tools, "Laptop notes");
    }

    #[test]
    fn satisfaction_new_rejects_out_of_range() {
        assert!(SatisfactionScore::new(0).is_err());
        assert!(SatisfactionScore::new(11).is_err());
        assert_eq!(SatisfactionScore::new(1).unwrap().value(), 1);
        assert_eq!(SatisfactionScore::new(10).unwrap().value(), 10);
    }

    #[test]
    fn satisfaction_clamped_pins_to_scale() {
        assert_eq!(SatisfactionScore::clamped(-5).value(), 1);
        assert_eq!(SatisfactionScore::clamped(0).value(), 1);
        assert_eq!(SatisfactionScore::clamped(7).value(), 7);
        assert_eq!(SatisfactionScore::clamped(99).value(), 10);
    }

    #[test]
    fn satisfaction_bucket_is_zero_based() {
        assert_eq!(SatisfactionScore::new(1).unwrap().bucket(), 0);
        assert_eq!(SatisfactionScore::new(10).unwrap().bucket(), 9);
    }

    #[test]
    fn from_persisted_rejects_blank_text_fields() {
        let mut record = complete_draft().validate().unwrap();
        record.name = String::new();
        let err = Response::from_persisted(ResponseId::new(1), record).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields);
    }

    #[test]
    fn from_persisted_exposes_accessors() {
        let record = complete_draft().validate().unwrap();
        let response = Response::from_persisted(ResponseId::new(3), record).unwrap();
        assert_eq!(response.id(), ResponseId::new(3));
        assert_eq!(response.name(), "Asha");
        assert_eq!(response.satisfaction().value(), 7);
    }
}
