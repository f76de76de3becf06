// SPDX-License-Identifier: MPL-2.0
//! Landing screen with static welcome copy.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Column, Text};
use iced::Element;

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// No interactions on this screen.
#[derive(Debug, Clone, Copy)]
pub enum Message {}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_WIDTH)
        .push(Text::new(ctx.i18n.tr("home-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("home-body")).size(typography::BODY_LG))
        .into()
}
