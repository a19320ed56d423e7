use dioxus::prelude::*;

use crate::context::AppContext;

/// The login page shown while the app is in its unauthenticated state.
///
/// On success the parent flips the gate; there is no way back.
#[component]
pub fn LoginView(on_success: Callback<()>) -> Element {
    let ctx = use_context::<AppContext>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let attempt_login = move |_| {
        let authenticator = ctx.authenticator();
        match authenticator.authenticate(&email.read(), &password.read()) {
            Ok(()) => {
                error.set(None);
                on_success.call(());
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        div { class: "login-page",
            section { class: "login-card",
                h1 { class: "login-title", "Student Learning Habits Analysis" }
                p { class: "login-subtitle", "Login to continue" }

                div { class: "login-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: "{email.read()}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div { class: "login-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "{password.read()}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                if let Some(message) = error.read().as_ref() {
                    p { class: "form-error", "{message}" }
                }

                button {
                    class: "btn btn-primary login-submit",
                    r#type: "button",
                    onclick: attempt_login,
                    "Login"
                }
            }
        }
    }
}
