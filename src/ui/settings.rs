// SPDX-License-Identifier: MPL-2.0
//! Settings screen: display language and theme mode.
//!
//! Both choices persist immediately; the parent application applies the
//! change and saves the config file.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{Button, Column, Row, Text};
use iced::Element;
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut language_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("select-language-label")).size(typography::TITLE_SM));

    for locale in &i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated name, e.g. "language-name-en-US"
        let translated_name = i18n.tr(&format!("language-name-{locale}"));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name
        } else {
            format!("{translated_name} ({display_name})")
        };

        let is_current = i18n.current_locale() == locale;
        let style = if is_current {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        language_column = language_column.push(
            Button::new(Text::new(button_text))
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .on_press(Message::LanguageSelected(locale.clone())),
        );
    }

    let mut theme_row = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::all() {
        let style = if mode == ctx.theme_mode {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        theme_row = theme_row.push(
            Button::new(Text::new(i18n.tr(mode.label_key())))
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .on_press(Message::ThemeModeSelected(mode)),
        );
    }

    let theme_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("theme-mode-label")).size(typography::TITLE_SM))
        .push(theme_row);

    Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::FORM_WIDTH)
        .push(Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG))
        .push(language_column)
        .push(theme_column)
        .into()
}
