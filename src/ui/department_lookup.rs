// SPDX-License-Identifier: MPL-2.0
//! Department-by-code lookup.
//!
//! Same lifecycle as the employee lookup, with one observed difference the
//! application deliberately preserves: a successful department lookup shows
//! no toast — only not-found and error cases do.

use crate::domain::Department;
use crate::i18n::fluent::I18n;
use crate::ui::components::form_field::labeled_input;
use crate::ui::components::record_card;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, Column, Row, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub code_input: String,
    pub record: Option<Department>,
    pub searched: bool,
    pub searching: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    CodeChanged(String),
    SearchPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Search(String),
    Invalid(&'static str),
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CodeChanged(value) => {
                self.code_input = value;
                self.record = None;
                self.searched = false;
                Event::None
            }
            Message::SearchPressed => {
                if self.searching {
                    return Event::None;
                }
                let key = self.code_input.trim();
                if key.is_empty() {
                    return Event::Invalid("notification-missing-department-code");
                }
                self.searching = true;
                self.record = None;
                self.searched = false;
                Event::Search(key.to_string())
            }
        }
    }

    /// Applies a resolved search.
    pub fn resolve(&mut self, record: Option<Department>) {
        self.searching = false;
        self.searched = true;
        self.record = record;
    }
}

/// Contextual data needed to render the lookup.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let enabled = !state.searching;

    let code_field = labeled_input(
        i18n.tr("field-department-code"),
        i18n.tr("helper-department-code"),
        &state.code_input,
        Message::CodeChanged,
        enabled,
    );

    let search_label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::light::magnifier(), sizing::ICON_SM))
        .push(Text::new(i18n.tr("button-search")));

    let mut search_button = button(search_label)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if enabled {
        search_button = search_button.on_press(Message::SearchPressed);
    }

    let search_row = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(code_field)
        .push(search_button);

    let result: Element<'a, Message> = match &state.record {
        Some(department) => record_card::field_card(
            i18n.tr("department-record-title"),
            vec![
                (
                    i18n.tr("department-record-name"),
                    department.department_name.clone(),
                ),
                (
                    i18n.tr("department-record-description"),
                    department.department_description.clone(),
                ),
                (
                    i18n.tr("department-record-code"),
                    department.department_code.clone(),
                ),
            ],
        ),
        None => Text::new(i18n.tr("lookup-empty"))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.color),
            })
            .into(),
    };

    Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(Text::new(i18n.tr("department-details-title")).size(typography::TITLE_LG))
        .push(search_row)
        .push(result)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_department() -> Department {
        Department {
            id: 3,
            department_name: "Research".into(),
            department_description: "R&D".into(),
            department_code: "DEP001".into(),
        }
    }

    #[test]
    fn blank_code_is_invalid_after_trimming() {
        let mut state = State {
            code_input: "  ".into(),
            ..State::default()
        };

        assert!(matches!(
            state.update(Message::SearchPressed),
            Event::Invalid("notification-missing-department-code")
        ));
    }

    #[test]
    fn search_clears_the_old_record_before_resolving() {
        let mut state = State {
            code_input: "DEP001".into(),
            record: Some(sample_department()),
            searched: true,
            searching: false,
        };

        assert!(matches!(state.update(Message::SearchPressed), Event::Search(_)));
        assert!(state.record.is_none());
        assert!(state.searching);
    }

    #[test]
    fn editing_the_code_after_a_search_clears_the_result() {
        let mut state = State {
            code_input: "DEP001".into(),
            record: Some(sample_department()),
            searched: true,
            searching: false,
        };

        let _ = state.update(Message::CodeChanged("DEP".into()));

        assert!(state.record.is_none());
        assert!(!state.searched);
    }

    #[test]
    fn resolve_stores_or_clears_the_record() {
        let mut state = State {
            code_input: "DEP001".into(),
            searching: true,
            ..State::default()
        };

        state.resolve(Some(sample_department()));
        assert_eq!(
            state.record.as_ref().map(|d| d.department_code.as_str()),
            Some("DEP001")
        );

        state.searching = true;
        state.resolve(None);
        assert!(state.record.is_none());
        assert!(state.searched);
    }

    #[test]
    fn view_renders_with_and_without_a_record() {
        let i18n = I18n::default();

        let empty = State::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &empty,
        });

        let found = State {
            record: Some(sample_department()),
            searched: true,
            ..State::default()
        };
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &found,
        });
    }
}
