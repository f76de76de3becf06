// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the top bar with the application title and a
//! hamburger menu. The menu lists every screen: Home, the four entity
//! screens, Service Messages, and Settings.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Open(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Open(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Open(screen) => {
            *menu_open = false;
            Event::Open(screen)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    // Dropdown menu (if open)
    if ctx.menu_open {
        let dropdown = build_dropdown(&ctx);
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the top bar with the hamburger menu button and the app title.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(icons::sized(icons::menu(), sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::bare);

    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(title);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

/// Build the dropdown menu with one entry per screen.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for (icon, label_key, screen) in [
        (icons::home(), "menu-home", Screen::Home),
        (icons::user_plus(), "menu-create-employee", Screen::CreateEmployee),
        (icons::magnifier(), "menu-employee-details", Screen::EmployeeDetails),
        (icons::building(), "menu-create-department", Screen::CreateDepartment),
        (icons::magnifier(), "menu-department-details", Screen::DepartmentDetails),
        (icons::message(), "menu-service-messages", Screen::ServiceMessages),
        (icons::cog(), "menu-settings", Screen::Settings),
    ] {
        menu_column = menu_column.push(build_menu_item(
            icon,
            ctx.i18n.tr(label_key),
            Message::Open(screen),
        ));
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(styles::container::dropdown)
        .into()
}

/// Build a single menu item with icon and label.
fn build_menu_item<'a>(
    icon: Image<Handle>,
    label: String,
    message: Message,
) -> Element<'a, Message> {
    let icon_sized = icons::sized(icon, sizing::ICON_SM);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icon_sized)
        .push(Text::new(label));

    button(row)
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::bare)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn menu_items_close_menu_and_emit_event() {
        let mut menu_open = true;

        let event = update(Message::Open(Screen::CreateEmployee), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::Open(Screen::CreateEmployee)));
    }

    #[test]
    fn close_menu_emits_no_event() {
        let mut menu_open = true;
        let event = update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }
}
