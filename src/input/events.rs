//! Pointer events and the bindings that map them onto gestures.

use crate::types::ScreenPoint;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Modifier keys held during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub fn is_held(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Shift => self.shift,
            Modifier::Ctrl => self.ctrl,
            Modifier::Alt => self.alt,
            Modifier::Meta => self.meta,
        }
    }
}

/// A single modifier key, used in bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
    Meta,
}

/// A pointer down, move or up in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: ScreenPoint,
    #[serde(default)]
    pub button: PointerButton,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: ScreenPoint) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self::new(ScreenPoint::new(x, y))
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// How pointer-downs are routed to gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBindings {
    /// Held on a node to drag out a new edge instead of moving the node
    pub connect_modifier: Modifier,
    /// Held on empty canvas with the primary button to pan
    pub pan_modifier: Modifier,
    /// Button that pans on empty canvas without any modifier
    pub pan_button: PointerButton,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            connect_modifier: Modifier::Shift,
            pan_modifier: Modifier::Alt,
            pan_button: PointerButton::Middle,
        }
    }
}

impl InputBindings {
    pub fn wants_connect(&self, event: &PointerEvent) -> bool {
        event.modifiers.is_held(self.connect_modifier)
    }

    pub fn wants_pan(&self, event: &PointerEvent) -> bool {
        event.button == self.pan_button
            || (event.button == PointerButton::Primary && event.modifiers.is_held(self.pan_modifier))
    }
}
