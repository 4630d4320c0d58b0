use dioxus::prelude::*;

use crate::i18n::{self, Locale};

/// EN/FR toggle pinned to the hero's top-right corner.
///
/// The switch owns no state of its own; it flips the caller's [`Locale`]
/// signal only after the global loader has been pointed at the other
/// bundle, so no render ever sees a half-switched vocabulary.
#[component]
pub fn LocaleSwitch(mut locale: Signal<Locale>) -> Element {
    let current = locale();

    let en_class = lang_class(current == Locale::En);
    let fr_class = lang_class(current == Locale::Fr);
    let globe_class = if current == Locale::Fr {
        "locale-switch__globe locale-switch__globe--flipped"
    } else {
        "locale-switch__globe"
    };

    let en_label = Locale::En.label();
    let fr_label = Locale::Fr.label();

    let on_toggle = move |_| {
        let next = locale().toggle();
        if i18n::set_locale(next).is_ok() {
            locale.set(next);
        }
    };

    rsx! {
        div { class: "locale-switch",
            button {
                r#type: "button",
                class: "locale-switch__button",
                onclick: on_toggle,
                span { class: "{en_class}", "{en_label}" }
                span { class: "locale-switch__sep", "/" }
                span { class: "{fr_class}", "{fr_label}" }
                svg {
                    class: "{globe_class}",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M3 5h12M9 3v2m1.048 9.5A18.022 18.022 0 016.412 9m6.088 9h7M11 21l5-10 5 10M12.751 5C11.783 10.77 8.07 15.61 3 18.129",
                    }
                }
            }
        }
    }
}

fn lang_class(active: bool) -> &'static str {
    if active {
        "locale-switch__lang locale-switch__lang--active"
    } else {
        "locale-switch__lang"
    }
}
