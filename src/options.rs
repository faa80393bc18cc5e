//! Driver configuration options.

use crate::display::Locale;

/// Configuration for drivers that present a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bataille::{Locale, PresentationOptions};
///
/// let options = PresentationOptions::default()
///     .with_reveal_delay_ms(500)
///     .with_locale(Locale::English);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationOptions {
    /// Pause between revealing a round's cards and scoring them, in milliseconds.
    pub reveal_delay_ms: u32,
    /// Language of the displayed strings.
    pub locale: Locale,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 1000,
            locale: Locale::French,
        }
    }
}

impl PresentationOptions {
    /// Sets the reveal delay.
    ///
    /// # Example
    ///
    /// ```
    /// use bataille::PresentationOptions;
    ///
    /// let options = PresentationOptions::default().with_reveal_delay_ms(0);
    /// assert_eq!(options.reveal_delay_ms, 0);
    /// ```
    #[must_use]
    pub const fn with_reveal_delay_ms(mut self, delay_ms: u32) -> Self {
        self.reveal_delay_ms = delay_ms;
        self
    }

    /// Sets the display language.
    ///
    /// # Example
    ///
    /// ```
    /// use bataille::{Locale, PresentationOptions};
    ///
    /// let options = PresentationOptions::default().with_locale(Locale::English);
    /// assert_eq!(options.locale, Locale::English);
    /// ```
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
