use dioxus::prelude::*;

use crate::Hero;

// Shared site theme (tokens + base styles). Platform launchers that cannot
// serve linked assets inline this same file instead.
const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }

        main { class: "page page-home",
            Hero {}
        }
    }
}
