// SPDX-License-Identifier: MPL-2.0
//! Employee-by-id lookup.
//!
//! Lifecycle: Idle → Searching → (Found | NotFound | Error) → Idle.
//! The previously displayed record is cleared the moment a new search
//! starts, and also the moment the key field is edited after a completed
//! search, so stale data never renders next to fresh input.

use crate::domain::Employee;
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
    pub id_input: String,
    /// The last fetched record, if any.
    pub record: Option<Employee>,
    /// True once a search has resolved (found or not).
    pub searched: bool,
    /// True while a fetch is in flight.
    pub searching: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    IdChanged(String),
    SearchPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The trimmed key to fetch.
    Search(String),
    /// Blank key; the parent should show a warning toast.
    Invalid(&'static str),
}

impl State {
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::IdChanged(value) => {
                self.id_input = value;
                // Partial new input must never render next to a stale result
                self.record = None;
                self.searched = false;
                Event::None
            }
            Message::SearchPressed => {
                if self.searching {
                    return Event::None;
                }
                let key = self.id_input.trim();
                if key.is_empty() {
                    return Event::Invalid("notification-missing-employee-id");
                }
                self.searching = true;
                self.record = None;
                self.searched = false;
                Event::Search(key.to_string())
            }
        }
    }

    /// Applies a resolved search: the fetched record, or `None` on
    /// not-found / error.
    pub fn resolve(&mut self, record: Option<Employee>) {
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

    let id_field = labeled_input(
        i18n.tr("field-employee-id"),
        i18n.tr("helper-employee-id"),
        &state.id_input,
        Message::IdChanged,
        enabled,
    );

    let fetch_label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::light::magnifier(), sizing::ICON_SM))
        .push(Text::new(i18n.tr("button-fetch")));

    let mut fetch_button = button(fetch_label)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if enabled {
        fetch_button = fetch_button.on_press(Message::SearchPressed);
    }

    let search_row = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(id_field)
        .push(fetch_button);

    let result: Element<'a, Message> = match &state.record {
        Some(employee) => record_card::json_card(
            i18n.tr("employee-record-title"),
            serde_json::to_string_pretty(employee)
                .unwrap_or_else(|_| i18n.tr("lookup-empty")),
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
        .push(Text::new(i18n.tr("employee-details-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("employee-details-subtitle")).size(typography::BODY))
        .push(search_row)
        .push(result)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            id: 42,
            first_name: "Ann".into(),
            last_name: "Smith".into(),
            email: "ann@example.com".into(),
            department_code: "DEP001".into(),
            position: None,
            salary: None,
            hire_date: None,
        }
    }

    #[test]
    fn blank_key_is_invalid_after_trimming() {
        let mut state = State {
            id_input: "   ".into(),
            ..State::default()
        };

        assert!(matches!(
            state.update(Message::SearchPressed),
            Event::Invalid("notification-missing-employee-id")
        ));
        assert!(!state.searching);
    }

    #[test]
    fn search_trims_the_key_and_clears_the_old_record() {
        let mut state = State {
            id_input: " 42 ".into(),
            record: Some(sample_employee()),
            searched: true,
            searching: false,
        };

        match state.update(Message::SearchPressed) {
            Event::Search(key) => assert_eq!(key, "42"),
            other => panic!("expected Search, got {other:?}"),
        }
        assert!(state.searching);
        assert!(state.record.is_none());
    }

    #[test]
    fn search_while_in_flight_is_ignored() {
        let mut state = State {
            id_input: "42".into(),
            ..State::default()
        };
        assert!(matches!(state.update(Message::SearchPressed), Event::Search(_)));
        assert!(matches!(state.update(Message::SearchPressed), Event::None));
    }

    #[test]
    fn resolve_found_stores_the_record() {
        let mut state = State {
            id_input: "42".into(),
            searching: true,
            ..State::default()
        };

        state.resolve(Some(sample_employee()));

        assert!(!state.searching);
        assert!(state.searched);
        assert_eq!(state.record.as_ref().map(|e| e.id), Some(42));
    }

    #[test]
    fn resolve_not_found_clears_the_record() {
        let mut state = State {
            id_input: "999".into(),
            record: Some(sample_employee()),
            searching: true,
            searched: false,
        };

        state.resolve(None);

        assert!(state.searched);
        assert!(state.record.is_none());
    }

    #[test]
    fn editing_the_key_after_a_search_clears_the_result() {
        let mut state = State {
            id_input: "42".into(),
            record: Some(sample_employee()),
            searched: true,
            searching: false,
        };

        let _ = state.update(Message::IdChanged("4".into()));

        assert!(state.record.is_none());
        assert!(!state.searched);
        assert_eq!(state.id_input, "4");
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
            record: Some(sample_employee()),
            searched: true,
            ..State::default()
        };
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &found,
        });
    }
}
