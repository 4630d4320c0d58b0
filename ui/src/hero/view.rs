//! Full-screen landing hero.
//!
//! Layer order, back to front: gradient backdrop, pink grid, circuit
//! traces, floating tech glyphs, falling petals, then the centered name
//! and copy. Decorative positions come from [`decor`](super::decor) and
//! are scattered once per mount; every animation afterwards is CSS.
//!
//! Localized copy re-renders when the [`LocaleSwitch`] flips the shared
//! locale signal. Text blocks are keyed by language code so their
//! entrance animations replay on a switch.

use dioxus::prelude::*;
use rand::thread_rng;

use crate::components::LocaleSwitch;
use crate::hero::decor::{Petal, TechGlyph};
use crate::i18n::{self, Locale};
use crate::t;

// Hero stylesheet (linked asset plus inline fallback for release native)
const HERO_CSS: Asset = asset!("/assets/styling/hero.css");
const HERO_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/hero.css"
));

#[component]
pub fn Hero() -> Element {
    i18n::init();

    // Scattered once per mount; re-renders reuse the same collections.
    let petals = use_signal(|| Petal::scatter(&mut thread_rng()));
    let glyphs = use_signal(|| TechGlyph::scatter(&mut thread_rng()));
    let locale = use_signal(Locale::default);

    let lang = locale().code();

    #[cfg(debug_assertions)]
    println!("[i18n] Hero render lang={lang}");

    let title = t!("hero-title");
    let slogan_1 = t!("hero-slogan-1");
    let slogan_2 = t!("hero-slogan-2");
    let view_projects = t!("hero-view-projects");
    let download_cv = t!("hero-download-cv");
    let scroll_hint = t!("hero-scroll-hint");

    let scroll_to_projects = move |_| {
        spawn(async move {
            let _ = document::eval(
                "window.scrollTo({ top: window.innerHeight, behavior: 'smooth' });",
            )
            .await;
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HERO_CSS_INLINE}" }
        }

        section { class: "hero",
            LocaleSwitch { locale }

            div { class: "hero__grid" }

            svg { class: "hero__circuits",
                path {
                    class: "hero__circuit hero__circuit--pink",
                    d: "M0,100 Q250,50 500,100 T1000,100",
                    stroke_width: "2",
                    fill: "none",
                }
                path {
                    class: "hero__circuit hero__circuit--cyan",
                    d: "M1920,200 Q1500,150 1000,200 T0,200",
                    stroke_width: "2",
                    fill: "none",
                }
            }

            for glyph in glyphs() {
                {render_glyph(&glyph)}
            }
            for petal in petals() {
                {render_petal(&petal)}
            }

            div { class: "hero__content",
                div { class: "hero__inner",
                    div { class: "hero__name-wrap",
                        for i in 0..8 {
                            {render_particle(i)}
                        }
                        div { class: "hero__name-block",
                            h1 { class: "hero__name", "HADDAJI" }
                            div { class: "hero__name-glow" }
                        }
                    }

                    p { key: "title-{lang}", class: "hero__title", "{title}" }

                    div { key: "slogan-{lang}", class: "hero__slogan",
                        p {
                            "{slogan_1}"
                            br {}
                            span { class: "hero__slogan-alt", "{slogan_2}" }
                        }
                    }

                    div { class: "hero__divider" }

                    div { key: "cta-{lang}", class: "hero__cta",
                        button {
                            r#type: "button",
                            class: "hero__button hero__button--solid",
                            onclick: scroll_to_projects,
                            span { class: "hero__button-label",
                                "{view_projects}"
                                svg {
                                    class: "hero__button-icon",
                                    fill: "none",
                                    stroke: "currentColor",
                                    view_box: "0 0 24 24",
                                    path {
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        stroke_width: "2",
                                        d: "M17 8l4 4m0 0l-4 4m4-4H3",
                                    }
                                }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "hero__button hero__button--ghost",
                            span { class: "hero__button-label",
                                svg {
                                    class: "hero__button-icon",
                                    fill: "none",
                                    stroke: "currentColor",
                                    view_box: "0 0 24 24",
                                    path {
                                        stroke_linecap: "round",
                                        stroke_linejoin: "round",
                                        stroke_width: "2",
                                        d: "M12 10v6m0 0l-3-3m3 3l3-3m2 8H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
                                    }
                                }
                                "{download_cv}"
                            }
                        }
                    }

                    div { class: "hero__orbits",
                        for i in 0..6 {
                            {render_orbit(i)}
                        }
                    }

                    span { class: "hero__accent hero__accent--code", "</>" }
                    span { class: "hero__accent hero__accent--blossom", "🌸" }
                    span { class: "hero__accent hero__accent--braces", "{{ }}" }
                    span { class: "hero__accent hero__accent--bolt", "⚡" }
                }
            }

            div { class: "hero__scroll",
                span { class: "hero__scroll-label", "{scroll_hint}" }
                svg {
                    class: "hero__scroll-icon",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M19 14l-7 7m0 0l-7-7m7 7V3",
                    }
                }
            }
        }
    }
}

fn render_glyph(glyph: &TechGlyph) -> Element {
    let style = format!(
        "left: {}%; top: {}%; font-size: {}rem; --glyph-drift: {}px; animation-delay: {}s; animation-duration: {}s;",
        glyph.left,
        glyph.top,
        glyph.scale,
        glyph.drift(),
        glyph.delay,
        glyph.duration
    );
    rsx! {
        span {
            key: "tech-{glyph.id}",
            class: "hero__glyph",
            style: "{style}",
            "{glyph.symbol}"
        }
    }
}

fn render_petal(petal: &Petal) -> Element {
    let style = format!(
        "left: {}%; --petal-sway: {}px; animation-delay: {}s; animation-duration: {}s;",
        petal.left,
        petal.sway(),
        petal.delay,
        petal.duration
    );
    rsx! {
        div {
            key: "petal-{petal.id}",
            class: "hero__petal",
            style: "{style}",
            svg {
                width: "{petal.size}",
                height: "{petal.size}",
                view_box: "0 0 24 24",
                fill: "none",
                path {
                    d: "M12 2C12 2 8 6 8 10C8 12.2 9.8 14 12 14C14.2 14 16 12.2 16 10C16 6 12 2 12 2Z",
                    fill: "#ff9bb5",
                    opacity: "0.6",
                }
                path {
                    d: "M12 14C12 14 8 18 8 22C8 22 10 22 12 22C14 22 16 22 16 22C16 18 12 14 12 14Z",
                    fill: "#ffc7d4",
                    opacity: "0.4",
                }
            }
        }
    }
}

fn render_particle(i: usize) -> Element {
    let angle = (i as f64) * std::f64::consts::TAU / 8.0;
    let left = 50.0 + angle.cos() * 150.0;
    let top = 50.0 + angle.sin() * 150.0;
    let dx = angle.cos() * 20.0;
    let dy = angle.sin() * 20.0;
    let duration = 3.0 + (i as f64) * 0.2;
    let style = format!(
        "left: {left}%; top: {top}%; --particle-dx: {dx}px; --particle-dy: {dy}px; animation-duration: {duration}s;"
    );
    rsx! {
        span {
            key: "particle-{i}",
            class: "hero__particle",
            style: "{style}",
        }
    }
}

fn render_orbit(i: usize) -> Element {
    let duration = 10.0 + (i as f64) * 2.0;
    let delay = (i as f64) * 0.5;
    let radius = 100 + i * 30;
    rsx! {
        div {
            key: "orbit-{i}",
            class: "hero__orbit",
            style: "animation-duration: {duration}s; animation-delay: {delay}s;",
            span { class: "hero__orbit-dot", style: "left: {radius}px;" }
        }
    }
}
