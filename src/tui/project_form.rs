//! The project input form.
//!
//! Holds three text fields. Submitting validates them, commits a new project
//! to the store and clears the fields; a rejected submission leaves both the
//! store and the fields untouched.

use super::input::{KeyEvent, TextInput};
use crate::error::Result;
use crate::id::ProjectId;
use crate::store::ProjectStore;
use crate::validation::{FormLimits, gather_user_input};
use log::info;
use std::rc::Rc;

/// One of the three form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    People,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Description, FormField::People];

    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::People,
            FormField::People => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::People,
            FormField::Description => FormField::Title,
            FormField::People => FormField::Description,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::People => "People",
        }
    }
}

pub struct ProjectForm {
    store: Rc<ProjectStore>,
    limits: FormLimits,
    title: TextInput,
    description: TextInput,
    people: TextInput,
    focus: FormField,
}

impl ProjectForm {
    pub fn new(store: Rc<ProjectStore>, limits: FormLimits) -> Self {
        Self {
            store,
            limits,
            title: TextInput::new(),
            description: TextInput::new(),
            people: TextInput::new(),
            focus: FormField::default(),
        }
    }

    pub fn field(&self, field: FormField) -> &TextInput {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut TextInput {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        self.field(field).content()
    }

    pub fn set_value(&mut self, field: FormField, value: &str) {
        self.field_mut(field).set_content(value);
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Route an editing key to the focused field
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let focus = self.focus;
        self.field_mut(focus).handle_key(key)
    }

    /// Validate the current field values and commit them to the store.
    pub fn submit(&mut self) -> Result<ProjectId> {
        let draft = gather_user_input(
            self.title.content(),
            self.description.content(),
            self.people.content(),
            &self.limits,
        )?;

        let id = self.store.add(draft.title, draft.description, draft.people);
        info!("Form submitted project {}", id);
        self.clear_inputs();
        Ok(id)
    }

    /// Fill all three fields from raw values, then submit.
    pub fn submit_values(&mut self, title: &str, description: &str, people: &str) -> Result<ProjectId> {
        self.title.set_content(title);
        self.description.set_content(description);
        self.people.set_content(people);
        self.submit()
    }

    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
        self.focus = FormField::Title;
    }
}
