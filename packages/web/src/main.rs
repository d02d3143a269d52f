use api::Settings;
use dioxus::prelude::*;

use ui::UsersProvider;
use views::{Home, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/register")]
    Register {},
}

fn main() {
    dioxus::launch(App);
}

fn load_settings() -> Settings {
    Settings::load().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default settings: {}", e);
        Settings::default()
    })
}

#[component]
fn App() -> Element {
    let settings = use_hook(load_settings);

    rsx! {
        UsersProvider {
            settings,
            Router::<Route> {}
        }
    }
}
