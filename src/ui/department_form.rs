// SPDX-License-Identifier: MPL-2.0
//! Create-department form.
//!
//! Same lifecycle as the employee form: presence validation, inputs and
//! submit button disabled while the save request is in flight, reset on
//! success, input retained on failure.

use crate::domain::NewDepartment;
use crate::i18n::fluent::I18n;
use crate::ui::components::form_field::labeled_input;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment, Element};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub department_name: String,
    pub department_description: String,
    pub department_code: String,
    /// True while a save request is in flight.
    pub submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    DescriptionChanged(String),
    CodeChanged(String),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(NewDepartment),
    Invalid(&'static str),
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => self.department_name = value,
            Message::DescriptionChanged(value) => self.department_description = value,
            Message::CodeChanged(value) => self.department_code = value,
            Message::SubmitPressed => {
                if self.submitting {
                    return Event::None;
                }
                return match self.validate() {
                    Ok(payload) => {
                        self.submitting = true;
                        Event::Submit(payload)
                    }
                    Err(key) => Event::Invalid(key),
                };
            }
        }
        Event::None
    }

    /// Marks the in-flight submission as finished. A successful save resets
    /// every field; a failed one keeps the user's input.
    pub fn complete(&mut self, succeeded: bool) {
        if succeeded {
            *self = State::default();
        } else {
            self.submitting = false;
        }
    }

    fn validate(&self) -> Result<NewDepartment, &'static str> {
        let name = self.department_name.trim();
        let description = self.department_description.trim();
        let code = self.department_code.trim();

        if name.is_empty() || description.is_empty() || code.is_empty() {
            return Err("notification-missing-required-fields");
        }

        Ok(NewDepartment {
            department_name: name.to_string(),
            department_description: description.to_string(),
            department_code: code.to_string(),
        })
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let enabled = !state.submitting;

    let field = |label: &str, helper: &str, value: &str, on_input: fn(String) -> Message| {
        labeled_input(i18n.tr(label), i18n.tr(helper), value, on_input, enabled)
    };

    let save_label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::light::floppy(), sizing::ICON_SM))
        .push(Text::new(i18n.tr("button-save-department")));

    let mut save_button = button(save_label)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if enabled {
        save_button = save_button.on_press(Message::SubmitPressed);
    }

    Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(Text::new(i18n.tr("create-department-title")).size(typography::TITLE_LG))
        .push(field(
            "field-department-name",
            "helper-department-name",
            &state.department_name,
            Message::NameChanged,
        ))
        .push(field(
            "field-department-description",
            "helper-department-description",
            &state.department_description,
            Message::DescriptionChanged,
        ))
        .push(field(
            "field-department-code",
            "helper-department-code",
            &state.department_code,
            Message::CodeChanged,
        ))
        .push(save_button)
        .into()
}
