// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen below the navigation bar, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::department_form;
use crate::ui::department_lookup;
use crate::ui::design_tokens::spacing;
use crate::ui::employee_form;
use crate::ui::employee_lookup;
use crate::ui::home;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, toast::Toast};
use crate::ui::service_status;
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use iced::widget::{scrollable, Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub menu_open: bool,
    pub theme_mode: ThemeMode,
    pub employee_form: &'a employee_form::State,
    pub employee_lookup: &'a employee_lookup::State,
    pub department_form: &'a department_form::State,
    pub department_lookup: &'a department_lookup::State,
    pub service_status: &'a service_status::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    let screen_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(home::ViewContext { i18n: ctx.i18n }).map(|never| match never {}),
        Screen::CreateEmployee => employee_form::view(employee_form::ViewContext {
            i18n: ctx.i18n,
            state: ctx.employee_form,
        })
        .map(Message::EmployeeForm),
        Screen::EmployeeDetails => employee_lookup::view(employee_lookup::ViewContext {
            i18n: ctx.i18n,
            state: ctx.employee_lookup,
        })
        .map(Message::EmployeeLookup),
        Screen::CreateDepartment => department_form::view(department_form::ViewContext {
            i18n: ctx.i18n,
            state: ctx.department_form,
        })
        .map(Message::DepartmentForm),
        Screen::DepartmentDetails => department_lookup::view(department_lookup::ViewContext {
            i18n: ctx.i18n,
            state: ctx.department_lookup,
        })
        .map(Message::DepartmentLookup),
        Screen::ServiceMessages => service_status::view(service_status::ViewContext {
            i18n: ctx.i18n,
            state: ctx.service_status,
        })
        .map(|never| match never {}),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
    };

    let content = Container::new(screen_view)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG);

    let base = Column::new()
        .push(navbar_view)
        .push(scrollable(content).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(overlay)
        .into()
}
