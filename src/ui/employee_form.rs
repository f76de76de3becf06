// SPDX-License-Identifier: MPL-2.0
//! Create-employee form.
//!
//! Lifecycle: Idle → Validating → Submitting → (Success | Failed) → Idle.
//! Validation is local and presence-based; no request leaves this screen
//! until it passes. While a submission is in flight every input and the
//! submit button are disabled. Success resets the form; failure keeps the
//! user's input so it can be corrected and resubmitted.

use crate::domain::NewEmployee;
use crate::i18n::fluent::I18n;
use crate::ui::components::form_field::labeled_input;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use chrono::NaiveDate;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment, Element};

/// Form field state. Field values mirror the text inputs verbatim; parsing
/// happens at validation time.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_code: String,
    pub position: String,
    pub salary: String,
    pub hire_date: String,
    /// True while a save request is in flight.
    pub submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    DepartmentCodeChanged(String),
    PositionChanged(String),
    SalaryChanged(String),
    HireDateChanged(String),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Validation passed; the parent should issue the save request.
    Submit(NewEmployee),
    /// Validation failed; the parent should show a warning toast.
    Invalid(&'static str),
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FirstNameChanged(value) => self.first_name = value,
            Message::LastNameChanged(value) => self.last_name = value,
            Message::EmailChanged(value) => self.email = value,
            Message::DepartmentCodeChanged(value) => self.department_code = value,
            Message::PositionChanged(value) => self.position = value,
            Message::SalaryChanged(value) => self.salary = value,
            Message::HireDateChanged(value) => self.hire_date = value,
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

    fn validate(&self) -> Result<NewEmployee, &'static str> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        let department_code = self.department_code.trim();

        if first_name.is_empty()
            || last_name.is_empty()
            || email.is_empty()
            || department_code.is_empty()
        {
            return Err("notification-missing-required-fields");
        }
        if !email_like(email) {
            return Err("notification-invalid-email");
        }

        let salary = match self.salary.trim() {
            "" => None,
            raw => Some(
                raw.parse::<f64>()
                    .map_err(|_| "notification-invalid-salary")?,
            ),
        };

        let hire_date = match self.hire_date.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| "notification-invalid-hire-date")?,
            ),
        };

        let position = match self.position.trim() {
            "" => None,
            raw => Some(raw.to_string()),
        };

        Ok(NewEmployee {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            department_code: department_code.to_string(),
            position,
            salary,
            hire_date,
        })
    }
}

/// The native `type=email` presence check: something on both sides of an `@`.
fn email_like(value: &str) -> bool {
    value
        .find('@')
        .is_some_and(|at| at > 0 && at < value.len() - 1)
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

    let name_row = Row::new()
        .spacing(spacing::LG)
        .push(field(
            "field-first-name",
            "helper-first-name",
            &state.first_name,
            Message::FirstNameChanged,
        ))
        .push(field(
            "field-last-name",
            "helper-last-name",
            &state.last_name,
            Message::LastNameChanged,
        ));

    let contact_row = Row::new()
        .spacing(spacing::LG)
        .push(field(
            "field-email",
            "helper-email",
            &state.email,
            Message::EmailChanged,
        ))
        .push(field(
            "field-department-code",
            "helper-department-code",
            &state.department_code,
            Message::DepartmentCodeChanged,
        ));

    let job_row = Row::new()
        .spacing(spacing::LG)
        .push(field(
            "field-position",
            "helper-position",
            &state.position,
            Message::PositionChanged,
        ))
        .push(field(
            "field-salary",
            "helper-salary",
            &state.salary,
            Message::SalaryChanged,
        ));

    let date_row = Row::new().spacing(spacing::LG).push(field(
        "field-hire-date",
        "helper-hire-date",
        &state.hire_date,
        Message::HireDateChanged,
    ));

    let save_label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::light::floppy(), sizing::ICON_SM))
        .push(Text::new(i18n.tr("button-save-employee")));

    let mut save_button = button(save_label)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if enabled {
        save_button = save_button.on_press(Message::SubmitPressed);
    }

    Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(Text::new(i18n.tr("create-employee-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("create-employee-subtitle")).size(typography::BODY))
        .push(name_row)
        .push(contact_row)
        .push(job_row)
        .push(date_row)
        .push(save_button)
        .into()
}
