use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Error returned when a persisted or user-supplied label does not match any
/// variant of a fixed survey choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceParseError {
    kind: &'static str,
    raw: String,
}

impl ChoiceParseError {
    fn new(kind: &'static str, raw: &str) -> Self {
        Self {
            kind,
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for ChoiceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {:?}", self.kind, self.raw)
    }
}

impl std::error::Error for ChoiceParseError {}

//
// ─── GENDER ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// The label shown in the form and stored as TEXT.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.label() == s)
            .ok_or_else(|| ChoiceParseError::new("gender", s))
    }
}

//
// ─── LEARNING ENVIRONMENT ──────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LearningEnvironment {
    Online,
    Classroom,
    Hybrid,
}

impl LearningEnvironment {
    pub const ALL: [LearningEnvironment; 3] = [
        LearningEnvironment::Online,
        LearningEnvironment::Classroom,
        LearningEnvironment::Hybrid,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LearningEnvironment::Online => "Online",
            LearningEnvironment::Classroom => "Classroom",
            LearningEnvironment::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for LearningEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LearningEnvironment {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.label() == s)
            .ok_or_else(|| ChoiceParseError::new("learning environment", s))
    }
}

//
// ─── STUDY TIME ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StudyTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl StudyTime {
    pub const ALL: [StudyTime; 4] = [
        StudyTime::Morning,
        StudyTime::Afternoon,
        StudyTime::Evening,
        StudyTime::Night,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StudyTime::Morning => "Morning",
            StudyTime::Afternoon => "Afternoon",
            StudyTime::Evening => "Evening",
            StudyTime::Night => "Night",
        }
    }
}

impl fmt::Display for StudyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StudyTime {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.label() == s)
            .ok_or_else(|| ChoiceParseError::new("study time", s))
    }
}

//
// ─── PRIMARY DEVICE ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrimaryDevice {
    Laptop,
    Desktop,
    Tablet,
    Smartphone,
}

impl PrimaryDevice {
    pub const ALL: [PrimaryDevice; 4] = [
        PrimaryDevice::Laptop,
        PrimaryDevice::Desktop,
        PrimaryDevice::Tablet,
        PrimaryDevice::Smartphone,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PrimaryDevice::Laptop => "Laptop",
            PrimaryDevice::Desktop => "Desktop",
            PrimaryDevice::Tablet => "Tablet",
            PrimaryDevice::Smartphone => "Smartphone",
        }
    }
}

impl fmt::Display for PrimaryDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrimaryDevice {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.label() == s)
            .ok_or_else(|| ChoiceParseError::new("primary device", s))
    }
}

//
// ─── LEARNING STYLE ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    ReadingWriting,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Kinesthetic,
        LearningStyle::ReadingWriting,
    ];

    /// Label matches the stored TEXT form, slash included.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::Kinesthetic => "Kinesthetic",
            LearningStyle::ReadingWriting => "Reading/Writing",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LearningStyle {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.label() == s)
            .ok_or_else(|| ChoiceParseError::new("learning style", s))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_roundtrip_through_from_str() {
        for v in Gender::ALL {
            assert_eq!(v.label().parse::<Gender>().unwrap(), v);
        }
        for v in LearningEnvironment::ALL {
            assert_eq!(v.label().parse::<LearningEnvironment>().unwrap(), v);
        }
        for v in StudyTime::ALL {
            assert_eq!(v.label().parse::<StudyTime>().unwrap(), v);
        }
        for v in PrimaryDevice::ALL {
            assert_eq!(v.label().parse::<PrimaryDevice>().unwrap(), v);
        }
        for v in LearningStyle::ALL {
            assert_eq!(v.label().parse::<LearningStyle>().unwrap(), v);
        }
    }

    #[test]
    fn reading_writing_label_keeps_the_slash() {
        assert_eq!(LearningStyle::ReadingWriting.label(), "Reading/Writing");
        assert_eq!(
            "Reading/Writing".parse::<LearningStyle>().unwrap(),
            LearningStyle::ReadingWriting
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Carrier Pigeon".parse::<PrimaryDevice>().unwrap_err();
        assert_eq!(err.to_string(), "invalid primary device: \"Carrier Pigeon\"");
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert!("laptop".parse::<PrimaryDevice>().is_err());
        assert!("male".parse::<Gender>().is_err());
    }
}
