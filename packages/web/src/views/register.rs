//! Registration page view hosting the shared form.

use dioxus::prelude::*;
use ui::RegisterForm;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterForm {
            on_navigate: move |path: String| match path.parse::<Route>() {
                Ok(route) => {
                    nav.push(route);
                }
                Err(_) => tracing::warn!("No route for {}", path),
            },
        }
    }
}
