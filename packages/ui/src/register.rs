//! Registration form: username, password, confirmation and optional profile image.

use api::{check_username_input, Field, RegistrationDraft, RegistrationError};
use dioxus::prelude::*;

use crate::users::{use_registrar, use_users, CallbackNavigator, StateSink};

const INPUT_CLASS: &str = "w-full bg-[rgb(62,63,64)] rounded-lg p-2 sm:text-lg";
const ERROR_OUTLINE: &str = "border border-red-500";

/// A refused double submit leaves the first one pending, so the button stays disabled.
fn ends_pending_submit(result: &Result<(), RegistrationError>) -> bool {
    !matches!(result, Err(RegistrationError::SubmitInFlight))
}

/// Register form component.
///
/// `on_navigate` receives the path to go to once the user has been dispatched.
#[component]
pub fn RegisterForm(on_navigate: EventHandler<String>) -> Element {
    let registrar = use_registrar();
    let users = use_users();
    let mut draft = use_signal(RegistrationDraft::default);
    let mut error = use_signal(|| Option::<RegistrationError>::None);
    let mut submitting = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let registrar = registrar.clone();
        spawn(async move {
            let snapshot = draft();
            let mut sink = StateSink::new(users, registrar.directory().clone());
            let mut nav = CallbackNavigator(on_navigate);

            submitting.set(true);
            let result = registrar.submit(&snapshot, &mut sink, &mut nav).await;
            if ends_pending_submit(&result) {
                submitting.set(false);
            }

            if let Err(e) = result {
                error.set(Some(e));
            }
        });
    };

    let handle_username = move |evt: FormEvent| {
        let value = evt.value();
        match check_username_input(&value) {
            Err(e) => error.set(Some(e)),
            Ok(()) => {
                if error() == Some(RegistrationError::UsernameContainsSpace) {
                    error.set(None);
                }
            }
        }
        draft.write().username = value;
    };

    let values = draft();
    let current = error();
    let input_class = |field: Field| {
        let outlined = current.as_ref().is_some_and(|e| e.pertains_to(field));
        if outlined {
            format!("{INPUT_CLASS} {ERROR_OUTLINE}")
        } else {
            INPUT_CLASS.to_string()
        }
    };
    let username_class = input_class(Field::Username);
    let password_class = input_class(Field::Password);
    let confirm_class = input_class(Field::ConfirmPassword);
    let image_class = input_class(Field::ProfileImageUrl);

    rsx! {
        div {
            class: "pb-2 max-w-[500px] m-auto",

            div {
                class: "m-3 sm:m-6 px-4 py-2 bg-[rgb(43,44,45)] rounded-lg",

                h2 {
                    class: "text-center my-2 text-xl sm:text-2xl font-bold",
                    "Register here"
                }

                form {
                    onsubmit: handle_register,

                    div {
                        class: "my-3",
                        label { r#for: "username", class: "block mb-1 ml-0.5", "Username*" }
                        input {
                            id: "username",
                            r#type: "text",
                            name: "username",
                            placeholder: "Username",
                            class: "{username_class}",
                            value: "{values.username}",
                            oninput: handle_username,
                        }
                    }

                    div {
                        class: "my-3",
                        label { r#for: "password", class: "block mb-1 ml-0.5", "Password*" }
                        input {
                            id: "password",
                            r#type: "password",
                            name: "password",
                            placeholder: "Password",
                            class: "{password_class}",
                            value: "{values.password}",
                            oninput: move |evt: FormEvent| draft.write().password = evt.value(),
                        }
                    }

                    div {
                        class: "my-3",
                        label { r#for: "confirmPassword", class: "block mb-1 ml-0.5", "Confirm Password*" }
                        input {
                            id: "confirmPassword",
                            r#type: "password",
                            name: "confirmPassword",
                            placeholder: "Confirm Password",
                            class: "{confirm_class}",
                            value: "{values.confirm_password}",
                            oninput: move |evt: FormEvent| draft.write().confirm_password = evt.value(),
                        }
                    }

                    div {
                        class: "mt-3 mb-4",
                        label { r#for: "image", class: "block mb-1 ml-0.5", "Profile photo URL (optional)" }
                        input {
                            id: "image",
                            r#type: "text",
                            name: "image",
                            placeholder: "Image URL",
                            class: "{image_class}",
                            value: "{values.profile_image_url}",
                            oninput: move |evt: FormEvent| draft.write().profile_image_url = evt.value(),
                        }
                    }

                    if let Some(err) = current {
                        div {
                            role: "alert",
                            class: "flex justify-between items-center px-3 py-2 bg-red-700 rounded-lg",
                            span { "{err}" }
                            button {
                                r#type: "button",
                                class: "ml-2",
                                onclick: move |_| error.set(None),
                                "×"
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full h-10 sm:h-11 text-center bg-green-600 rounded-lg py-2 mt-4 mb-2 disabled:bg-zinc-700 sm:text-lg",
                        disabled: submitting(),
                        if submitting() { "Checking..." } else { "Register" }
                    }
                }
            }
        }
    }
}
