//! Shared user state and the registrar, provided to the component tree.

use api::{HttpDirectory, Registrar, Settings, UserDirectory};
use dioxus::prelude::*;
use store::{UserEvent, UserSink, UsersState};

/// The registrar the app runs with: lookups go to the configured users collection.
pub type AppRegistrar = Registrar<HttpDirectory>;

/// Get the users known to this session.
/// Returns a signal that updates when a registration is dispatched.
pub fn use_users() -> Signal<UsersState> {
    use_context::<Signal<UsersState>>()
}

/// Get the registrar provided by [`UsersProvider`].
pub fn use_registrar() -> AppRegistrar {
    use_context::<AppRegistrar>()
}

/// Provider component that owns the users state and the registrar.
/// Wrap your router with this component to enable registration.
#[component]
pub fn UsersProvider(settings: Settings, children: Element) -> Element {
    let users = use_signal(UsersState::new);

    use_context_provider(|| users);
    use_context_provider(|| Registrar::new(HttpDirectory::from_settings(&settings), &settings));

    rsx! {
        {children}
    }
}

/// UserSink that applies events to the users signal, then persists new users to the
/// collection in the background. Persistence failures are logged only.
pub struct StateSink<D> {
    users: Signal<UsersState>,
    directory: D,
}

impl<D> StateSink<D> {
    pub fn new(users: Signal<UsersState>, directory: D) -> Self {
        Self { users, directory }
    }
}

impl<D> UserSink for StateSink<D>
where
    D: UserDirectory + Clone + 'static,
{
    fn dispatch(&mut self, event: UserEvent) {
        let UserEvent::Created(user) = &event;
        let user = user.clone();
        self.users.write().apply(event);

        let directory = self.directory.clone();
        // Outlives the form, which unmounts as soon as navigation happens
        spawn_forever(async move {
            if let Err(e) = directory.create_user(&user).await {
                tracing::error!("Failed to persist user {}: {}", user.username, e);
            }
        });
    }
}

/// Navigator that hands the path to the parent view, which owns the router.
pub struct CallbackNavigator(pub EventHandler<String>);

impl api::Navigator for CallbackNavigator {
    fn navigate(&mut self, path: &str) {
        self.0.call(path.to_string());
    }
}
