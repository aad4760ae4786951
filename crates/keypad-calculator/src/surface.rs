//! Rendering seam between the controller and its host
//!
//! The controller never looks up UI elements itself. It is handed a
//! [`Surface`] and writes slot text and user notices into it.

use serde::{Deserialize, Serialize};

/// The four text fields the controller owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotId {
    /// First operand field
    OperandA,
    /// Operator field
    Operator,
    /// Second operand field
    OperandB,
    /// Result field
    Display,
}

impl SlotId {
    /// All slots in page order
    pub const ALL: [Self; 4] = [Self::OperandA, Self::Operator, Self::OperandB, Self::Display];
}

/// Host-side sink for slot text and notices
pub trait Surface {
    /// Writes the current text of a slot
    fn render(&mut self, slot: SlotId, text: &str);

    /// Shows a blocking notice to the user
    fn notify(&mut self, message: &str);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn render(&mut self, slot: SlotId, text: &str) {
        (**self).render(slot, text);
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

/// In-memory surface that keeps the latest text per slot and every notice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    operand_a: String,
    operator: String,
    operand_b: String,
    display: String,
    notices: Vec<String>,
    renders: usize,
}

impl Recorder {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest text rendered into a slot
    #[must_use]
    pub fn text(&self, slot: SlotId) -> &str {
        match slot {
            SlotId::OperandA => &self.operand_a,
            SlotId::Operator => &self.operator,
            SlotId::OperandB => &self.operand_b,
            SlotId::Display => &self.display,
        }
    }

    /// Notices raised so far, oldest first
    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Number of render calls received
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Forgets recorded notices
    pub fn clear_notices(&mut self) {
        self.notices.clear();
    }
}

impl Surface for Recorder {
    fn render(&mut self, slot: SlotId, text: &str) {
        self.renders += 1;
        let field = match slot {
            SlotId::OperandA => &mut self.operand_a,
            SlotId::Operator => &mut self.operator,
            SlotId::OperandB => &mut self.operand_b,
            SlotId::Display => &mut self.display,
        };
        text.clone_into(field);
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
