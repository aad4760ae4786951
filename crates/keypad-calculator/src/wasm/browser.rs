//! Browser WASM bindings for the calculator
//!
//! Looks up the configured fields and buttons once, then routes every
//! button click into a shared controller.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, HtmlInputElement, Window};

use super::keypad::Keypad;
use crate::config::{CalculatorConfig, SlotIds};
use crate::controller::{Controller, Trigger};
use crate::surface::{SlotId, Surface};

/// Surface writing into the page's text fields
#[derive(Debug)]
pub struct BrowserSurface {
    window: Window,
    document: Document,
    slots: SlotIds,
}

impl BrowserSurface {
    fn field(&self, slot: SlotId) -> Option<Element> {
        self.document.get_element_by_id(self.slots.id(slot))
    }
}

impl Surface for BrowserSurface {
    fn render(&mut self, slot: SlotId, text: &str) {
        match self.field(slot) {
            Some(elem) => match elem.dyn_ref::<HtmlInputElement>() {
                Some(input) => input.set_value(text),
                None => elem.set_text_content(Some(text)),
            },
            None => console::warn_1(&format!("missing field #{}", self.slots.id(slot)).into()),
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            console::error_2(&"alert failed".into(), &err);
        }
    }
}

/// Calculator attached to a live page
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    controller: Rc<RefCell<Controller<BrowserSurface>>>,
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Attaches to the stock page layout
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        Self::attach(&CalculatorConfig::default())
    }

    /// Attaches to a page described by a JSON configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config = CalculatorConfig::from_json(json).map_err(to_js)?;
        Self::attach(&config)
    }

    /// Current result field text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.controller.borrow().display().to_string()
    }

    /// All four slots as JSON
    #[wasm_bindgen(js_name = slotsJson)]
    pub fn slots_json(&self) -> Result<String, JsValue> {
        let slots = self.controller.borrow().snapshot();
        serde_json::to_string(&slots).map_err(to_js)
    }

    /// Number of attached click listeners
    #[wasm_bindgen(js_name = listenerCount)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl BrowserCalculator {
    fn attach(config: &CalculatorConfig) -> Result<Self, JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let keypad = Keypad::from_config(config).map_err(to_js)?;

        let surface = BrowserSurface {
            window,
            document: document.clone(),
            slots: config.slots.clone(),
        };
        let controller = Rc::new(RefCell::new(Controller::with_prompt(
            surface,
            &config.prompt,
        )));

        let mut listeners = Vec::with_capacity(keypad.button_count());
        for button in keypad.buttons() {
            let Some(elem) = document.get_element_by_id(&button.id) else {
                console::warn_1(&format!("missing button #{}", button.id).into());
                continue;
            };

            let trigger = label_trigger(button.trigger, &elem);
            let controller = Rc::clone(&controller);
            let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                controller.borrow_mut().fire(trigger);
            });
            elem.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            listeners.push(on_click);
        }

        console::log_1(&"Calculator script loaded successfully.".into());
        Ok(Self {
            controller,
            listeners,
        })
    }
}

/// Digit buttons type the glyph on their label when it is a single char
fn label_trigger(trigger: Trigger, elem: &Element) -> Trigger {
    let Trigger::Digit(glyph) = trigger else {
        return trigger;
    };
    let label = elem.text_content().unwrap_or_default();
    let mut chars = label.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Trigger::Digit(c),
        _ => Trigger::Digit(glyph),
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Installs the panic hook when the module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
