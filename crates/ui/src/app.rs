use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::views::LoginView;

#[component]
pub fn App() -> Element {
    // The whole application has two states: Unauthenticated and SurveyActive.
    // The transition is one-way; there is no logout path.
    let mut authenticated = use_signal(|| false);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Student Learning Habits Analysis" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                if authenticated() {
                    Router::<Route> {}
                } else {
                    LoginView { on_success: move |()| authenticated.set(true) }
                }
            }
        }
    }
}
