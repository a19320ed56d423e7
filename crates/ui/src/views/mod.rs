mod charts;
mod login;
mod state;
mod survey;

pub use charts::ChartsView;
pub use login::LoginView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use survey::SurveyView;
