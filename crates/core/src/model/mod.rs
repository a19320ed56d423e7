mod choices;
mod ids;
mod response;

pub use choices::{ChoiceParseError, Gender, LearningEnvironment, LearningStyle, PrimaryDevice, StudyTime};
pub use ids::{ParseIdError, ResponseId};
pub use response::{
    NewResponse, Response, ResponseDraft, SatisfactionError, SatisfactionScore, ValidationError,
};
