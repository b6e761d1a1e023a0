//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Toggle between English and Chinese
    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_returns_new_locale() {
        let mut state = I18nState::new(Locale::En);
        assert_eq!(state.toggle_locale(), Locale::ZhCn);
        assert_eq!(state.locale, Locale::ZhCn);
        assert_eq!(state.toggle_locale(), Locale::En);
    }
}
