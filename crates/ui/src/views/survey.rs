use dioxus::prelude::*;

use survey_core::model::{
    Gender, LearningEnvironment, LearningStyle, PrimaryDevice, ResponseDraft, SatisfactionScore,
    StudyTime,
};

use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Saving,
    Saved,
    Failed(String),
}

/// The survey form: four text inputs, five fixed-choice selects, and the
/// 1-10 satisfaction slider. Submit validates everything at once; a rejected
/// attempt keeps the form state so the user can correct it, a successful one
/// clears the form.
#[component]
pub fn SurveyView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut name = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut gender = use_signal(|| None::<Gender>);
    let mut environment = use_signal(|| None::<LearningEnvironment>);
    let mut study_hours = use_signal(String::new);
    let mut study_time = use_signal(|| None::<StudyTime>);
    let mut study_tools = use_signal(String::new);
    let mut device = use_signal(|| None::<PrimaryDevice>);
    let mut learning_style = use_signal(|| None::<LearningStyle>);
    let mut satisfaction = use_signal(|| SatisfactionScore::clamped(1));
    let mut status = use_signal(|| SubmitStatus::Idle);

    let submit = move |_| {
        let draft = ResponseDraft {
            name: name.read().clone(),
            age: age.read().clone(),
            gender: gender(),
            environment: environment(),
            study_hours: study_hours.read().clone(),
            study_time: study_time(),
            study_tools: study_tools.read().clone(),
            device: device(),
            learning_style: learning_style(),
            satisfaction: Some(satisfaction()),
        };
        let survey = ctx.survey();

        status.set(SubmitStatus::Saving);
        spawn(async move {
            match survey.submit(&draft).await {
                Ok(_) => {
                    name.set(String::new());
                    age.set(String::new());
                    gender.set(None);
                    environment.set(None);
                    study_hours.set(String::new());
                    study_time.set(None);
                    study_tools.set(String::new());
                    device.set(None);
                    learning_style.set(None);
                    satisfaction.set(SatisfactionScore::clamped(1));
                    status.set(SubmitStatus::Saved);
                }
                Err(err) => status.set(SubmitStatus::Failed(err.to_string())),
            }
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Student Learning Habits Analysis" }

            div { class: "survey-form",
                div { class: "form-row",
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        value: "{name.read()}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div { class: "form-row",
                    label { r#for: "age", "Age" }
                    input {
                        id: "age",
                        inputmode: "numeric",
                        value: "{age.read()}",
                        oninput: move |evt| age.set(evt.value()),
                    }
                }

                div { class: "form-row",
                    label { r#for: "gender", "Gender" }
                    select {
                        id: "gender",
                        value: gender().map_or("", Gender::label),
                        oninput: move |evt| gender.set(evt.value().parse().ok()),
                        option { value: "", disabled: true, "Select..." }
                        for choice in Gender::ALL {
                            option { value: choice.label(), "{choice}" }
                        }
                    }
                }

                div { class: "form-row",
                    label { r#for: "environment", "Preferred Learning Environment" }
                    select {
                        id: "environment",
                        value: environment().map_or("", LearningEnvironment::label),
                        oninput: move |evt| environment.set(evt.value().parse().ok()),
                        option { value: "", disabled: true, "Select..." }
                        for choice in LearningEnvironment::ALL {
                            option { value: choice.label(), "{choice}" }
                        }
                    }
                }

                div { class: "form-row",
                    label { r#for: "study-hours", "Study Hours Per Week" }
                    input {
                        id: "study-hours",
                        inputmode: "numeric",
                        value: "{study_hours.read()}",
                        oninput: move |evt| study_hours.set(evt.value()),
                    }
                }

                div { class: "form-row",
                    label { r#for: "study-time", "Study Time Preference" }
                    select {
                        id: "study-time",
                        value: study_time().map_or("", StudyTime::label),
                        oninput: move |evt| study_time.set(evt.value().parse().ok()),
                        option { value: "", disabled: true, "Select..." }
                        for choice in StudyTime::ALL {
                            option { value: choice.label(), "{choice}" }
                        }
                    }
                }

                div { class: "form-row",
                    label { r#for: "study-tools", "Preferred Study Tools" }
                    input {
                        id: "study-tools",
                        value: "{study_tools.read()}",
                        oninput: move |evt| study_tools.set(evt.value()),
                    }
                }

                div { class: "form-row",
                    label { r#for: "device", "Primary Device Used" }
                    select {
                        id: "device",
                        value: device().map_or("", PrimaryDevice::label),
                        oninput: move |evt| device.set(evt.value().parse().ok()),
                        option { value: "", disabled: true, "Select..." }
                        for choice in PrimaryDevice::ALL {
                            option { value: choice.label(), "{choice}" }
                        }
                    }
                }

                div { class: "form-row",
                    label { r#for: "learning-style", "Learning Style" }
                    select {
                        id: "learning-style",
                        value: learning_style().map_or("", LearningStyle::label),
                        oninput: move |evt| learning_style.set(evt.value().parse().ok()),
                        option { value: "", disabled: true, "Select..." }
                        for choice in LearningStyle::ALL {
                            option { value: choice.label(), "{choice}" }
                        }
                    }
                }

                div { class: "form-row",
                    label { r#for: "satisfaction",
                        "Study Satisfaction (1-10): {satisfaction()}"
                    }
                    input {
                        id: "satisfaction",
                        r#type: "range",
                        min: "1",
                        max: "10",
                        value: "{satisfaction()}",
                        oninput: move |evt| {
                            let raw = evt.value().parse::<i64>().unwrap_or(1);
                            satisfaction.set(SatisfactionScore::clamped(raw));
                        },
                    }
                }

                match status() {
                    SubmitStatus::Idle => rsx! {},
                    SubmitStatus::Saving => rsx! {
                        p { class: "form-note", "Saving..." }
                    },
                    SubmitStatus::Saved => rsx! {
                        p { class: "form-success", "Thank you for completing the survey!" }
                    },
                    SubmitStatus::Failed(message) => rsx! {
                        p { class: "form-error", "{message}" }
                    },
                }

                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: status() == SubmitStatus::Saving,
                    onclick: submit,
                    "Submit"
                }
            }
        }
    }
}
