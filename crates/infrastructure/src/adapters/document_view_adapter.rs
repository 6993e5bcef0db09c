//! Document view adapter - Implements WeatherViewPort on an in-memory page

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{BACKGROUND_CLASS, TEMPERATURE_CLASS, WeatherViewPort};
use domain::ClassToken;
use parking_lot::Mutex;
use tracing::warn;

use crate::dom::{Document, ElementId};

/// A page document shared between the widget and its host
pub type SharedDocument = Arc<Mutex<Document>>;

/// Wrap a document for sharing with a view
pub fn shared_document(document: Document) -> SharedDocument {
    Arc::new(Mutex::new(document))
}

/// View bound to the temperature and background elements of a document
///
/// Both elements are resolved once, when the view is bound. Later class
/// changes on the background element do not affect the binding.
#[derive(Debug, Clone)]
pub struct DocumentView {
    document: SharedDocument,
    temperature: ElementId,
    background: ElementId,
}

impl DocumentView {
    /// Bind to the first `.temp_read` and `.background` elements
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::View` if either element is missing.
    pub fn bind(document: SharedDocument) -> Result<Self, ApplicationError> {
        let (temperature, background) = {
            let doc = document.lock();
            (
                Self::find(&doc, TEMPERATURE_CLASS)?,
                Self::find(&doc, BACKGROUND_CLASS)?,
            )
        };

        Ok(Self {
            document,
            temperature,
            background,
        })
    }

    /// The document this view writes to
    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    fn find(doc: &Document, class: &str) -> Result<ElementId, ApplicationError> {
        doc.query_class(class)
            .ok_or_else(|| ApplicationError::View(format!("no element with class .{class}")))
    }

    fn with_element(&self, id: ElementId, f: impl FnOnce(&mut crate::dom::Element)) {
        let mut doc = self.document.lock();
        match doc.element_mut(id) {
            Some(element) => f(element),
            None => warn!(?id, "Bound element is no longer in the document"),
        }
    }
}

impl WeatherViewPort for DocumentView {
    fn set_temperature_text(&self, text: &str) {
        self.with_element(self.temperature, |el| el.set_text_content(text));
    }

    fn clear_background_classes(&self) {
        self.with_element(self.background, crate::dom::Element::remove_all_classes);
    }

    fn add_background_class(&self, class: &ClassToken) {
        self.with_element(self.background, |el| {
            el.add_class(class);
        });
    }
}
