use dioxus::prelude::*;
use ui::use_users;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let members = use_users().read().users.clone();

    rsx! {
        div {
            class: "max-w-[500px] m-auto p-4",

            h1 { class: "text-2xl font-bold mb-4", "Members" }

            if members.is_empty() {
                p { class: "text-zinc-400", "Nobody has registered in this session yet." }
            }

            ul {
                for user in members {
                    li {
                        key: "{user.id}",
                        class: "flex items-center gap-3 my-2",
                        img {
                            class: "w-10 h-10 rounded-full object-cover",
                            src: "{user.profile_picture_url}",
                            alt: "{user.username}",
                        }
                        span { "{user.username}" }
                    }
                }
            }

            Link {
                class: "block mt-6 p-2 text-center bg-green-600 rounded-lg",
                to: Route::Register {},
                "Register"
            }
        }
    }
}
