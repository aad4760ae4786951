//! Mock DOM for host-free testing
//!
//! Stands in for the browser page: text fields hold a `value`, buttons hold
//! their label as text content, and `alert` calls are recorded instead of
//! blocking.

use std::collections::HashMap;

use crate::config::{CalculatorConfig, SlotIds};
use crate::surface::{SlotId, Surface};

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content (button labels)
    pub text_content: String,
    /// Current value (input fields)
    pub value: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            value: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Sets the ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Things that happened on the page, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// A click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// A `window.alert` call
    Alert {
        /// The alert text
        message: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    slot_ids: SlotIds,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM using the stock slot ids
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            slot_ids: SlotIds::default(),
            event_history: Vec::new(),
        }
    }

    /// Creates the four calculator text fields described by `config`.
    ///
    /// Keypad buttons are added separately with
    /// [`MockDomKeypadExt::add_keypad`](super::keypad::MockDomKeypadExt::add_keypad).
    #[must_use]
    pub fn calculator(config: &CalculatorConfig) -> Self {
        let mut dom = Self::new();
        dom.slot_ids = config.slots.clone();

        for slot in SlotId::ALL {
            let field = DomElement::new("input")
                .with_id(config.slots.id(slot))
                .with_attr("type", "text")
                .with_attr("readonly", "");
            dom.register_element(field);
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Gets element text content by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Gets an input field's value by ID
    #[must_use]
    pub fn get_value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.value.as_str())
    }

    /// Sets an input field's value by ID
    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            value.clone_into(&mut elem.value);
        }
    }

    /// Value of the field bound to a slot
    #[must_use]
    pub fn slot_value(&self, slot: SlotId) -> Option<&str> {
        self.get_value(self.slot_ids.id(slot))
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Alert messages shown so far
    #[must_use]
    pub fn alerts(&self) -> Vec<&str> {
        self.event_history
            .iter()
            .filter_map(|e| match e {
                DomEvent::Alert { message } => Some(message.as_str()),
                DomEvent::Click { .. } => None,
            })
            .collect()
    }
}

impl Surface for MockDom {
    fn render(&mut self, slot: SlotId, text: &str) {
        let id = self.slot_ids.id(slot).to_string();
        self.set_value(&id, text);
    }

    fn notify(&mut self, message: &str) {
        self.dispatch_event(DomEvent::Alert {
            message: message.to_string(),
        });
    }
}
