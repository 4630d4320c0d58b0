//! Shared UI crate for the portfolio site. Cross-platform views live here.

pub mod i18n;
pub mod views;

pub mod components {
    // Bilingual EN/FR switch pinned inside the hero (components/locale_switch.rs)
    pub mod locale_switch;
    pub use locale_switch::LocaleSwitch;
}

mod hero;
pub use hero::Hero;
