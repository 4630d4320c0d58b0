//! Internationalization (i18n) support for `portfolio-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/portfolio-ui.ftl   (fallback/reference)
//!   fr-FR/portfolio-ui.ftl   (second locale)
//! ```
//!
//! The site speaks exactly two languages, so locale state is a [`Locale`]
//! enum rather than a free-form tag. The page always mounts in English
//! (no OS/browser language sniffing) and the visitor flips languages with
//! the hero's EN/FR control; nothing is persisted between visits.
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::i18n::{self, Locale};
//! use crate::t;
//! i18n::init(); // idempotent
//! let title = t!("hero-title");
//! i18n::set_locale(Locale::Fr)?; // switch the active bundle
//! ```
//!
//! Public API surface:
//! - `Locale` – two-state locale value with `toggle()`.
//! - `init()` – load the bundles and select the primary locale (safe to call
//!   multiple times).
//! - `set_locale(locale)` – switch the active bundle at runtime.
//! - `available_languages()` – discover embedded language tags.
//! - `fl` macro re-export plus the `t!` wrapper.
//! - `LOADER` – global `FluentLanguageLoader` consumed by `t!`/`fl!`.
//!
//! NOTE: The hyphenated filename `portfolio-ui.ftl` is canonical across all
//! locales.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Example:
///     t!("hero-title")
///
/// Fluent arguments chain after the key as `ident = value` pairs and are
/// forwarded to `fl!` untouched.
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "portfolio-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// The two languages the site is written in.
///
/// `En` is the primary locale: every mount starts there, and the string
/// bundles treat `en-US` as the reference key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Flip to the other locale. Toggling twice lands back where it started.
    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }

    /// BCP 47 tag matching the embedded asset folder for this locale.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Fr => "fr-FR",
        }
    }

    /// Short label for UI chrome (the EN/FR switch).
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Fr => "FR",
        }
    }

    pub fn language_id(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("locale tags are valid language identifiers")
    }
}

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent). Loads the embedded bundles and selects the
/// primary locale; the page never guesses from OS or browser settings.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) =
            i18n_embed::select(&*LOADER, &Localizations, &[Locale::default().language_id()])
        {
            eprintln!("[i18n] Failed selecting initial locale ({err}); continuing with fallback");
        }
    });
}

/// Switch the active bundle at runtime. Infallible in practice since both
/// bundles are embedded at compile time, but select errors still propagate.
pub fn set_locale(locale: Locale) -> Result<(), i18n_embed::I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, &[locale.language_id()]).map(|_| ())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn starts_on_the_primary_locale() {
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "hero-scroll-hint");
        assert_eq!(s, "SCROLL");
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Locale::En.toggle(), Locale::Fr);
        assert_eq!(Locale::Fr.toggle(), Locale::En);

        // Odd toggle counts land on French, even counts back on English.
        let mut locale = Locale::default();
        for step in 1..=6 {
            locale = locale.toggle();
            let expected = if step % 2 == 1 { Locale::Fr } else { Locale::En };
            assert_eq!(locale, expected, "after {step} toggles");
        }
    }

    #[test]
    fn locale_codes_match_embedded_folders() {
        let langs = available_languages();
        for locale in [Locale::En, Locale::Fr] {
            assert!(
                langs.iter().any(|l| l == locale.code()),
                "no embedded bundle for {}",
                locale.code()
            );
        }
    }

    #[test]
    fn labels_stay_two_letter() {
        assert_eq!(Locale::En.label(), "EN");
        assert_eq!(Locale::Fr.label(), "FR");
    }
}
