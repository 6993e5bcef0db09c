//! Weather view port
//!
//! The two page targets the widget writes to: the temperature display and
//! the background. Implementations are bound to concrete elements up front,
//! so the update logic never has to look anything up.

use domain::ClassToken;
#[cfg(test)]
use mockall::automock;

/// Class selecting the temperature display element
pub const TEMPERATURE_CLASS: &str = "temp_read";

/// Class selecting the background element
///
/// It is also the baseline class re-applied after the class list is cleared.
pub const BACKGROUND_CLASS: &str = "background";

/// Port for writing weather state into the page
#[cfg_attr(test, automock)]
pub trait WeatherViewPort: Send + Sync {
    /// Replace the text content of the temperature display
    fn set_temperature_text(&self, text: &str);

    /// Remove every class from the background element
    fn clear_background_classes(&self);

    /// Add a class to the background element
    ///
    /// Adding a class that is already present leaves the list unchanged.
    fn add_background_class(&self, class: &ClassToken);
}
