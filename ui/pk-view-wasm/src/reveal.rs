//! Reveal toggle for the secret field.
//!
//! States: `Masked` (input type `password`) ↔ `Revealed` (input type `text`).
//! Each click on the eye icon flips the state, keeps the icon's `bx-show`
//! class in step with it, and toggles the overlay's `overlay-content` class
//! for the reveal animation. The input's current type is the source of truth,
//! so the toggle stays correct if something else changes the field.

use web_sys::{Document, Element, HtmlInputElement};

use crate::config::ElementIds;
use crate::dom;
use crate::error::ViewError;

pub const SHOWN_CLASS: &str = "bx-show";
pub const OVERLAY_CLASS: &str = "overlay-content";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Masked,
    Revealed,
}

impl RevealState {
    /// Any type other than `password` counts as revealed.
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type == "password" {
            RevealState::Masked
        } else {
            RevealState::Revealed
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            RevealState::Masked => RevealState::Revealed,
            RevealState::Revealed => RevealState::Masked,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            RevealState::Masked => "password",
            RevealState::Revealed => "text",
        }
    }

    pub fn icon_shown(self) -> bool {
        self == RevealState::Revealed
    }
}

#[derive(Clone)]
pub struct RevealToggle {
    pub overlay: Element,
    pub input: HtmlInputElement,
    pub icon: Element,
}

impl RevealToggle {
    pub fn resolve(document: &Document, ids: &ElementIds) -> Result<Self, ViewError> {
        Ok(RevealToggle {
            overlay: get_el!(document, &ids.overlay),
            input: get_input!(document, &ids.key),
            icon: get_el!(document, &ids.icon),
        })
    }

    pub fn state(&self) -> RevealState {
        RevealState::from_input_type(&self.input.type_())
    }

    /// Apply one transition and return the new state.
    pub fn toggle(&self) -> RevealState {
        let next = self.state().toggled();
        self.input.set_type(next.input_type());
        if next.icon_shown() {
            dom::add_class(&self.icon, SHOWN_CLASS);
        } else {
            dom::remove_class(&self.icon, SHOWN_CLASS);
        }
        dom::toggle_class(&self.overlay, OVERLAY_CLASS);
        next
    }

    /// Listen for clicks on the icon for the rest of the page's life.
    pub fn wire(&self) -> Result<(), ViewError> {
        let toggle = self.clone();
        on_click!(self.icon, move |_: web_sys::MouseEvent| {
            toggle.toggle();
        });
        Ok(())
    }
}
