//! i18n - Internationalization Module
//!
//! Thin wrappers around `rust_i18n`; translations live in `locales/*.yml`.

use gpui::SharedString;
use rust_i18n::t;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Chinese (Simplified)
    ZhCn,
}

impl Locale {
    /// Locale code as used by the translation files
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhCn => "中文",
        }
    }

    /// Parse a locale code such as "en", "en-US", "zh_CN" or "zh-Hans-CN"
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::ZhCn),
            _ => None,
        }
    }

    /// Detect the locale from the operating system, falling back to English
    pub fn detect() -> Self {
        let current = locale_config::Locale::current().to_string();
        // `current` may carry several comma separated ranges; the first one wins
        current
            .split(',')
            .next()
            .and_then(Self::from_code)
            .unwrap_or_default()
    }

    /// The other supported locale
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::ZhCn,
            Locale::ZhCn => Locale::En,
        }
    }
}

/// Translate a key
pub fn tr(locale: Locale, key: &str) -> SharedString {
    SharedString::from(t!(key, locale = locale.code()).to_string())
}

/// Label of the counter button for a given count
pub fn count_label(locale: Locale, count: u64) -> SharedString {
    SharedString::from(t!("count_button.label", locale = locale.code(), count = count).to_string())
}

/// Warning shown when the settings file could not be loaded
pub fn settings_load_failed(locale: Locale, error: &str) -> SharedString {
    SharedString::from(t!("settings.load_failed", locale = locale.code(), error = error).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_codes() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("zh_CN"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_code("zh-Hans-CN"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_code("fr-FR"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn toggles_between_locales() {
        assert_eq!(Locale::En.toggled(), Locale::ZhCn);
        assert_eq!(Locale::ZhCn.toggled(), Locale::En);
    }

    #[test]
    fn english_labels() {
        assert_eq!(tr(Locale::En, "click_button.label").as_ref(), "Click me");
        assert_eq!(tr(Locale::En, "click_button.message").as_ref(), "You clicked me!");
    }

    #[test]
    fn count_label_shows_current_count() {
        assert_eq!(count_label(Locale::En, 0).as_ref(), "Clicked 0 times");
        assert_eq!(count_label(Locale::En, 1).as_ref(), "Clicked 1 times");
        assert_eq!(count_label(Locale::En, 42).as_ref(), "Clicked 42 times");
        assert_eq!(count_label(Locale::ZhCn, 3).as_ref(), "已点击 3 次");
    }

    #[test]
    fn settings_warning_includes_error() {
        let text = settings_load_failed(Locale::En, "bad toml");
        assert!(text.as_ref().ends_with("bad toml"));
    }
}
