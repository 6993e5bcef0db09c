//! In-memory page document
//!
//! A flat list of elements, each with a class list and text content. It is
//! just enough of a page for the widget to render into, and is what the CLI
//! prints after a refresh.

use application::ports::{BACKGROUND_CLASS, TEMPERATURE_CLASS};
use domain::ClassToken;
use serde::{Deserialize, Serialize};

/// Handle to an element inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// A page element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, e.g. `div`
    pub tag: String,
    classes: Vec<String>,
    text: String,
}

impl Element {
    /// Create an element with no classes and empty text
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            text: String::new(),
        }
    }

    /// Builder: add a class
    #[must_use]
    pub fn with_class(mut self, class: ClassToken) -> Self {
        self.add_class(&class);
        self
    }

    /// Builder: set the text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Classes in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the element carries a class
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class, returning `false` if it was already present
    pub fn add_class(&mut self, class: &ClassToken) -> bool {
        if self.has_class(class.as_str()) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove every class
    pub fn remove_all_classes(&mut self) {
        self.classes.clear();
    }

    /// Current text content
    pub fn text_content(&self) -> &str {
        &self.text
    }

    /// Replace the text content
    pub fn set_text_content(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }
}

/// A page made of elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with a temperature display and a background element
    ///
    /// `extra_background_classes` are added after the baseline class.
    pub fn weather_page(extra_background_classes: &[ClassToken]) -> Self {
        let mut doc = Self::new();

        let mut temperature = Element::new("span");
        temperature.classes.push(TEMPERATURE_CLASS.to_string());
        doc.append(temperature);

        let mut background = Element::new("div");
        background.classes.push(BACKGROUND_CLASS.to_string());
        for class in extra_background_classes {
            background.add_class(class);
        }
        doc.append(background);

        doc
    }

    /// Append an element and return its handle
    pub fn append(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    /// First element carrying the class, in document order
    pub fn query_class(&self, class: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|el| el.has_class(class))
            .map(ElementId)
    }

    /// Look up an element
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Look up an element for modification
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// All elements in document order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(s: &str) -> ClassToken {
        ClassToken::new(s).unwrap()
    }

    #[test]
    fn add_class_ignores_duplicates() {
        let mut el = Element::new("div");
        assert!(el.add_class(&token("a")));
        assert!(!el.add_class(&token("a")));
        assert!(el.add_class(&token("b")));
        assert_eq!(el.classes(), ["a", "b"]);
    }

    #[test]
    fn remove_all_classes_empties_list() {
        let mut el = Element::new("div").with_class(token("a")).with_class(token("b"));
        el.remove_all_classes();
        assert!(el.classes().is_empty());
    }

    #[test]
    fn text_content_is_replaced() {
        let mut el = Element::new("span").with_text("old");
        el.set_text_content("new");
        assert_eq!(el.text_content(), "new");
    }

    #[test]
    fn query_class_returns_first_match() {
        let mut doc = Document::new();
        doc.append(Element::new("p"));
        let first = doc.append(Element::new("div").with_class(token("x")));
        doc.append(Element::new("div").with_class(token("x")));

        assert_eq!(doc.query_class("x"), Some(first));
        assert_eq!(doc.query_class("y"), None);
    }

    #[test]
    fn weather_page_layout() {
        let doc = Document::weather_page(&[token("rainy"), token("background")]);

        let temp = doc.query_class(TEMPERATURE_CLASS).unwrap();
        let background = doc.query_class(BACKGROUND_CLASS).unwrap();
        assert_eq!(doc.element(temp).unwrap().tag, "span");
        assert_eq!(doc.element(background).unwrap().classes(), ["background", "rainy"]);
        assert_eq!(doc.elements().len(), 2);
    }

    #[test]
    fn document_serializes_to_json() {
        let doc = Document::weather_page(&[]);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["elements"][1]["classes"][0], "background");
    }
}
