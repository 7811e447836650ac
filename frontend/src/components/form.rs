use std::collections::BTreeMap;

use yew::prelude::*;

use crate::validation::{FormState, Schema};

pub type Submitted = BTreeMap<&'static str, String>;

/// Yew binding for a `FormState`: hands out the callbacks inputs need.
#[derive(Clone, PartialEq)]
pub struct FormHandle {
    state: UseStateHandle<FormState>,
}

impl FormHandle {
    pub fn value(&self, field: &str) -> AttrValue {
        AttrValue::from(self.state.value(field).to_string())
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.state.visible_error(field)
    }

    pub fn is_submitted(&self) -> bool {
        self.state.is_submitted()
    }

    pub fn on_input(&self, field: &'static str) -> Callback<String> {
        let state = self.state.clone();
        Callback::from(move |value: String| {
            let mut next = (*state).clone();
            next.set(field, value);
            state.set(next);
        })
    }

    pub fn on_blur(&self, field: &'static str) -> Callback<()> {
        let state = self.state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.touch(field);
            state.set(next);
        })
    }

    /// Validates everything; `on_valid` only runs when the form passes.
    pub fn on_submit(&self, on_valid: Callback<Submitted>) -> Callback<SubmitEvent> {
        let state = self.state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*state).clone();
            match next.submit() {
                Ok(values) => on_valid.emit(values),
                Err(errors) => log::info!("Form has {} invalid field(s)", errors.len()),
            }
            state.set(next);
        })
    }

    pub fn on_reset(&self) -> Callback<MouseEvent> {
        let state = self.state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.reset();
            state.set(next);
        })
    }
}

#[hook]
pub fn use_form(schema: &'static Schema) -> FormHandle {
    let state = use_state(|| FormState::new(schema));
    FormHandle { state }
}
