//! Weather widget service
//!
//! Fetches the report for a location and renders it into the page. Every
//! failure on the way is logged and swallowed; the caller gets a
//! [`FetchOutcome`] it is free to ignore.

use std::fmt;
use std::sync::Arc;

use domain::{ClassToken, LocationId, WeatherReport};
use tracing::{debug, error, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{BACKGROUND_CLASS, WeatherSourcePort, WeatherViewPort};

/// Result of a single widget refresh
#[derive(Debug)]
pub enum FetchOutcome {
    /// No location was given, nothing was requested
    Skipped,
    /// The report was fetched and rendered
    Updated(WeatherReport),
    /// The refresh failed and the error was logged
    Failed(ApplicationError),
}

impl FetchOutcome {
    /// Whether the page was updated with fresh data
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    /// The error, if the refresh failed
    pub const fn error(&self) -> Option<&ApplicationError> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Skipped | Self::Updated(_) => None,
        }
    }
}

/// Render a weather report into the page
///
/// Sets the temperature text, clears the background class list, re-adds the
/// baseline class and then adds the weather label. Calling it twice with the
/// same report leaves the page as a single call would.
///
/// # Errors
///
/// Returns a domain error when the weather label is not a valid class token.
/// The temperature text and baseline class have already been applied by then.
pub fn update_weather(
    view: &dyn WeatherViewPort,
    report: &WeatherReport,
) -> Result<(), ApplicationError> {
    view.set_temperature_text(&report.temperature_text());
    view.clear_background_classes();
    view.add_background_class(&ClassToken::new(BACKGROUND_CLASS)?);

    match report.weather_class()? {
        Some(class) => view.add_background_class(&class),
        None => warn!("Weather report has no weather label"),
    }

    Ok(())
}

/// Fetches weather for a location and keeps the page in sync with it
pub struct WeatherWidgetService {
    source: Arc<dyn WeatherSourcePort>,
    view: Arc<dyn WeatherViewPort>,
}

impl fmt::Debug for WeatherWidgetService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherWidgetService")
            .field("source", &"dyn WeatherSourcePort")
            .field("view", &"dyn WeatherViewPort")
            .finish()
    }
}

impl WeatherWidgetService {
    /// Create a new service
    pub fn new(source: Arc<dyn WeatherSourcePort>, view: Arc<dyn WeatherViewPort>) -> Self {
        Self { source, view }
    }

    /// Fetch the weather for a location and render it
    ///
    /// `None` means there is no location to show; the call returns at once
    /// without touching the network. Concurrent calls are not coordinated:
    /// whichever completes last determines what the page shows.
    #[instrument(skip(self, location), fields(location = location.map(LocationId::as_str)))]
    pub async fn get_weather_for_location(&self, location: Option<&LocationId>) -> FetchOutcome {
        let Some(location) = location else {
            debug!("No location given, skipping weather fetch");
            return FetchOutcome::Skipped;
        };

        match self.refresh(location).await {
            Ok(report) => FetchOutcome::Updated(report),
            Err(e) => {
                error!(error = %e, %location, "Weather fetch failed");
                FetchOutcome::Failed(e)
            },
        }
    }

    async fn refresh(&self, location: &LocationId) -> Result<WeatherReport, ApplicationError> {
        let report = self.source.fetch_weather(location).await?;
        debug!(?report, "Received weather data");

        update_weather(self.view.as_ref(), &report)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use mockall::Sequence;
    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::ports::{MockWeatherSourcePort, MockWeatherViewPort};

    /// In-memory view recording the state a page would end up in
    #[derive(Debug, Default)]
    struct RecordingView {
        state: Mutex<(String, Vec<String>)>,
    }

    impl RecordingView {
        fn with_classes(classes: &[&str]) -> Self {
            Self {
                state: Mutex::new((
                    String::new(),
                    classes.iter().map(ToString::to_string).collect(),
                )),
            }
        }

        fn text(&self) -> String {
            self.state.lock().0.clone()
        }

        fn classes(&self) -> Vec<String> {
            self.state.lock().1.clone()
        }
    }

    impl WeatherViewPort for RecordingView {
        fn set_temperature_text(&self, text: &str) {
            self.state.lock().0 = text.to_string();
        }

        fn clear_background_classes(&self) {
            self.state.lock().1.clear();
        }

        fn add_background_class(&self, class: &ClassToken) {
            let mut state = self.state.lock();
            if !state.1.iter().any(|c| c == class.as_str()) {
                state.1.push(class.to_string());
            }
        }
    }

    fn sunny() -> WeatherReport {
        WeatherReport::new(json!(72), Some("sunny".to_string()))
    }

    fn location(id: &str) -> LocationId {
        LocationId::new(id).unwrap()
    }

    #[test]
    fn update_sets_text_and_classes() {
        let view = RecordingView::with_classes(&["background", "rainy"]);
        update_weather(&view, &sunny()).unwrap();

        assert_eq!(view.text(), "72");
        assert_eq!(view.classes(), vec!["background", "sunny"]);
    }

    #[test]
    fn update_drops_leftover_classes() {
        let view = RecordingView::with_classes(&["background", "rainy", "extra"]);
        update_weather(&view, &sunny()).unwrap();

        assert_eq!(view.classes(), vec!["background", "sunny"]);
    }

    #[test]
    fn update_restores_baseline_when_missing() {
        let view = RecordingView::with_classes(&["something-else"]);
        update_weather(&view, &sunny()).unwrap();

        assert_eq!(view.classes(), vec!["background", "sunny"]);
    }

    #[test]
    fn update_is_idempotent() {
        let once = RecordingView::with_classes(&["background", "bad"]);
        update_weather(&once, &sunny()).unwrap();

        let twice = RecordingView::with_classes(&["background", "bad"]);
        update_weather(&twice, &sunny()).unwrap();
        update_weather(&twice, &sunny()).unwrap();

        assert_eq!(once.text(), twice.text());
        assert_eq!(once.classes(), twice.classes());
    }

    #[test]
    fn update_with_baseline_label_keeps_single_class() {
        let view = RecordingView::default();
        let report = WeatherReport::new(json!(3), Some("background".to_string()));
        update_weather(&view, &report).unwrap();

        assert_eq!(view.classes(), vec!["background"]);
    }

    #[test]
    fn update_without_label_keeps_baseline_only() {
        let view = RecordingView::with_classes(&["background", "good"]);
        let report = WeatherReport::new(json!("18"), None);
        update_weather(&view, &report).unwrap();

        assert_eq!(view.text(), "18");
        assert_eq!(view.classes(), vec!["background"]);
    }

    #[test]
    fn update_with_invalid_label_applies_baseline_then_fails() {
        let view = RecordingView::with_classes(&["background", "good"]);
        let report = WeatherReport::new(json!(9), Some("heavy rain".to_string()));
        let err = update_weather(&view, &report).unwrap_err();

        assert!(matches!(err, ApplicationError::Domain(_)));
        assert_eq!(view.text(), "9");
        assert_eq!(view.classes(), vec!["background"]);
    }

    #[test]
    fn update_writes_in_order() {
        let mut view = MockWeatherViewPort::new();
        let mut seq = Sequence::new();

        view.expect_set_temperature_text()
            .withf(|text| text == "72")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_clear_background_classes()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_add_background_class()
            .withf(|c| c.as_str() == "background")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_add_background_class()
            .withf(|c| c.as_str() == "sunny")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        update_weather(&view, &sunny()).unwrap();
    }

    #[tokio::test]
    async fn missing_location_skips_fetch() {
        let mut source = MockWeatherSourcePort::new();
        source.expect_fetch_weather().never();
        let view = Arc::new(RecordingView::with_classes(&["background", "bad"]));

        let service = WeatherWidgetService::new(Arc::new(source), view.clone());

        for raw in [LocationId::new(""), LocationId::from_number(0), LocationId::from_optional(None)] {
            let outcome = service.get_weather_for_location(raw.as_ref()).await;
            assert!(matches!(outcome, FetchOutcome::Skipped));
        }
        assert_eq!(view.classes(), vec!["background", "bad"]);
    }

    #[tokio::test]
    async fn successful_fetch_updates_view() {
        let mut source = MockWeatherSourcePort::new();
        source
            .expect_fetch_weather()
            .withf(|loc| loc.as_str() == "4")
            .times(1)
            .returning(|_| Ok(sunny()));
        let view = Arc::new(RecordingView::with_classes(&["background", "rainy", "extra"]));

        let service = WeatherWidgetService::new(Arc::new(source), view.clone());
        let outcome = service.get_weather_for_location(Some(&location("4"))).await;

        assert!(outcome.is_updated());
        assert!(outcome.error().is_none());
        assert_eq!(view.text(), "72");
        assert_eq!(view.classes(), vec!["background", "sunny"]);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_view_untouched() {
        let mut source = MockWeatherSourcePort::new();
        source
            .expect_fetch_weather()
            .returning(|_| Err(ApplicationError::UnexpectedStatus(500)));
        let mut view = MockWeatherViewPort::new();
        view.expect_set_temperature_text().never();
        view.expect_clear_background_classes().never();
        view.expect_add_background_class().never();

        let service = WeatherWidgetService::new(Arc::new(source), Arc::new(view));
        let outcome = service.get_weather_for_location(Some(&location("1"))).await;

        assert!(matches!(
            outcome.error(),
            Some(ApplicationError::UnexpectedStatus(500))
        ));
    }

    #[tokio::test]
    async fn malformed_response_is_reported() {
        let mut source = MockWeatherSourcePort::new();
        source
            .expect_fetch_weather()
            .returning(|_| Err(ApplicationError::MalformedResponse("expected value".into())));
        let view = Arc::new(RecordingView::with_classes(&["background", "good"]));

        let service = WeatherWidgetService::new(Arc::new(source), view.clone());
        let outcome = service.get_weather_for_location(Some(&location("1"))).await;

        assert!(matches!(outcome, FetchOutcome::Failed(ApplicationError::MalformedResponse(_))));
        assert_eq!(view.classes(), vec!["background", "good"]);
        assert_eq!(view.text(), "");
    }

    #[tokio::test]
    async fn invalid_label_is_reported_as_failure() {
        let mut source = MockWeatherSourcePort::new();
        source
            .expect_fetch_weather()
            .returning(|_| Ok(WeatherReport::new(json!(1), Some(String::new()))));
        let view = Arc::new(RecordingView::default());

        let service = WeatherWidgetService::new(Arc::new(source), view.clone());
        let outcome = service.get_weather_for_location(Some(&location("2"))).await;

        assert!(matches!(outcome, FetchOutcome::Failed(ApplicationError::Domain(_))));
        assert_eq!(view.classes(), vec!["background"]);
    }

    /// Source answering each location after its own delay
    struct DelayedSource;

    #[async_trait]
    impl WeatherSourcePort for DelayedSource {
        async fn fetch_weather(
            &self,
            location: &LocationId,
        ) -> Result<WeatherReport, ApplicationError> {
            let (delay, label) = match location.as_str() {
                "slow" => (80, "bad"),
                _ => (5, "good"),
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(WeatherReport::new(json!(delay), Some(label.to_string())))
        }
    }

    #[tokio::test]
    async fn last_completion_wins() {
        let view = Arc::new(RecordingView::default());
        let service = WeatherWidgetService::new(Arc::new(DelayedSource), view.clone());

        let slow = location("slow");
        let fast = location("fast");
        let (first, second) = tokio::join!(
            service.get_weather_for_location(Some(&slow)),
            service.get_weather_for_location(Some(&fast)),
        );

        assert!(first.is_updated());
        assert!(second.is_updated());
        assert_eq!(view.text(), "80");
        assert_eq!(view.classes(), vec!["background", "bad"]);
    }

    #[test]
    fn service_debug() {
        let service = WeatherWidgetService::new(
            Arc::new(MockWeatherSourcePort::new()),
            Arc::new(MockWeatherViewPort::new()),
        );
        assert!(format!("{service:?}").contains("WeatherWidgetService"));
    }
}
