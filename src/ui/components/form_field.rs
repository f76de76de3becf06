// SPDX-License-Identifier: MPL-2.0
//! Labeled text input with helper text.
//!
//! The desktop equivalent of an outlined text field: label above, input in
//! the middle, muted helper text below. A field without an `on_input`
//! handler renders disabled, which is how forms freeze while a submission
//! is in flight.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{text, text_input, Column, Text};
use iced::{Element, Length, Theme};

/// Renders a labeled input row.
///
/// `enabled` controls whether the input accepts edits; the visual disabled
/// state comes from the widget itself once no handler is attached.
pub fn labeled_input<'a, M, F>(
    label: String,
    helper: String,
    value: &str,
    on_input: F,
    enabled: bool,
) -> Element<'a, M>
where
    M: Clone + 'a,
    F: Fn(String) -> M + 'a,
{
    let mut input = text_input("", value)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    if enabled {
        input = input.on_input(on_input);
    }

    let helper_text = Text::new(helper)
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        });

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(label).size(typography::BODY))
        .push(input)
        .push(helper_text)
        .into()
}
