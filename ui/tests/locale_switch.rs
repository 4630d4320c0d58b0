//! End-to-end locale switch scenario.
//!
//! This file drives the global language loader, so it stays alone in its own
//! integration binary: sibling unit tests never leave the fallback locale,
//! and separate test binaries run in separate processes.

use ui::i18n::{self, Locale};
use ui::t;

#[test]
fn all_six_strings_follow_the_locale() {
    i18n::init();

    // Fresh mount: the primary locale is active and every string is English.
    let locale = Locale::default();
    assert_eq!(locale, Locale::En);
    assert_eq!(
        t!("hero-title"),
        "IoT & Embedded Systems — Computer Engineering Student"
    );
    assert_eq!(t!("hero-slogan-1"), "Engineering resilience.");
    assert_eq!(t!("hero-slogan-2"), "Where circuits grow petals.");
    assert_eq!(t!("hero-view-projects"), "View Projects");
    assert_eq!(t!("hero-download-cv"), "Download CV");
    assert_eq!(t!("hero-scroll-hint"), "SCROLL");

    // Toggle: all six strings switch together, none lag behind.
    let locale = locale.toggle();
    assert_eq!(locale, Locale::Fr);
    i18n::set_locale(locale).expect("fr-FR bundle is embedded");
    assert_eq!(
        t!("hero-title"),
        "IoT & Systèmes Embarqués — Étudiante en Génie Informatique"
    );
    assert_eq!(t!("hero-slogan-1"), "Ingénierie de la résilience.");
    assert_eq!(t!("hero-slogan-2"), "Où les circuits font pousser des pétales.");
    assert_eq!(t!("hero-view-projects"), "Voir les Projets");
    assert_eq!(t!("hero-download-cv"), "Télécharger CV");
    assert_eq!(t!("hero-scroll-hint"), "DÉFILER");

    // Toggle again: back to English, involution holds end to end.
    let locale = locale.toggle();
    assert_eq!(locale, Locale::En);
    i18n::set_locale(locale).expect("en-US bundle is embedded");
    assert_eq!(t!("hero-slogan-1"), "Engineering resilience.");
    assert_eq!(t!("hero-scroll-hint"), "SCROLL");
}
