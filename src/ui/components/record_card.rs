// SPDX-License-Identifier: MPL-2.0
//! Inset card for rendering a fetched record.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Text};
use iced::{Element, Font, Length, Theme};

/// Renders a titled card with a monospace body, used for raw JSON output.
pub fn json_card<'a, M: 'a>(title: String, body: String) -> Element<'a, M> {
    let title_text = Text::new(title)
        .size(typography::BODY_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        });

    let body_text = Text::new(body).size(typography::BODY).font(Font::MONOSPACE);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(title_text)
            .push(body_text),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::record)
    .into()
}

/// Renders a titled card of labeled `(label, value)` lines.
pub fn field_card<'a, M: 'a>(title: String, fields: Vec<(String, String)>) -> Element<'a, M> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM));

    for (label, value) in fields {
        column = column.push(Text::new(format!("{label}: {value}")).size(typography::BODY));
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::record)
        .into()
}
