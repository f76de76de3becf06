// SPDX-License-Identifier: MPL-2.0
//! Service status screen.
//!
//! Shows the plain-text status message of each backend service. Both
//! messages are fetched every time the screen is entered; a failed fetch
//! renders an inline "unavailable" placeholder instead of a toast.

use crate::api;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{text, Column, Row, Text};
use iced::{Element, Theme};

/// Fetch progress of a single service message.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Line {
    #[default]
    Loading,
    Ready(String),
    Unavailable,
}

impl Line {
    fn from_result(result: Result<String, api::Error>) -> Self {
        match result {
            Ok(message) => Line::Ready(message),
            Err(_) => Line::Unavailable,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub employee: Line,
    pub department: Line,
}

impl State {
    /// Resets both lines to Loading; called when the screen is entered.
    pub fn begin(&mut self) {
        self.employee = Line::Loading;
        self.department = Line::Loading;
    }

    pub fn resolve_employee(&mut self, result: Result<String, api::Error>) {
        self.employee = Line::from_result(result);
    }

    pub fn resolve_department(&mut self, result: Result<String, api::Error>) {
        self.department = Line::from_result(result);
    }
}

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(Text::new(i18n.tr("service-messages-title")).size(typography::TITLE_LG))
        .push(line(i18n, "status-employee-label", &ctx.state.employee))
        .push(line(i18n, "status-department-label", &ctx.state.department))
        .into()
}

/// Screens without interactions still need a message type for `Element`.
#[derive(Debug, Clone, Copy)]
pub enum Message {}

fn line<'a>(i18n: &I18n, label_key: &str, state: &'a Line) -> Element<'a, Message> {
    let label = Text::new(format!("{}:", i18n.tr(label_key))).size(typography::BODY_LG);

    let value: Element<'a, Message> = match state {
        Line::Ready(message) => Text::new(message.clone()).size(typography::BODY_LG).into(),
        Line::Loading => muted(i18n.tr("status-loading")),
        Line::Unavailable => muted(i18n.tr("status-unavailable")),
    };

    Row::new()
        .spacing(spacing::XS)
        .push(label)
        .push(value)
        .into()
}

fn muted<'a>(content: String) -> Element<'a, Message> {
    Text::new(content)
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        })
        .into()
}
