// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for each screen.
//! Screens validate and mutate their own state; this layer turns their
//! events into network tasks and toast notifications. Completions are
//! applied unconditionally when they arrive — in-flight requests are not
//! cancelled on navigation or re-search, so the last response wins.

use super::{notifications, Message, Screen};
use crate::api::{self, ApiClient};
use crate::config::{self, Config};
use crate::domain::{Department, Employee};
use crate::i18n::fluent::I18n;
use crate::ui::department_form;
use crate::ui::department_lookup;
use crate::ui::employee_form;
use crate::ui::employee_lookup;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use crate::ui::service_status;
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub menu_open: &'a mut bool,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    pub api: &'a ApiClient,
    pub employee_form: &'a mut employee_form::State,
    pub employee_lookup: &'a mut employee_lookup::State,
    pub department_form: &'a mut department_form::State,
    pub department_lookup: &'a mut department_lookup::State,
    pub service_status: &'a mut service_status::State,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles navbar messages.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Open(screen) => handle_screen_switch(ctx, screen),
    }
}

/// Switches the active screen. Entering the service-messages screen kicks
/// off both status fetches; nothing is cached between visits.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    *ctx.menu_open = false;

    if target == Screen::ServiceMessages {
        ctx.service_status.begin();

        let employee_api = ctx.api.clone();
        let department_api = ctx.api.clone();
        return Task::batch([
            Task::perform(
                async move { employee_api.employee_service_message().await },
                Message::EmployeeServiceMessage,
            ),
            Task::perform(
                async move { department_api.department_service_message().await },
                Message::DepartmentServiceMessage,
            ),
        ]);
    }

    Task::none()
}

/// Handles create-employee form messages.
pub fn handle_employee_form_message(
    ctx: &mut UpdateContext<'_>,
    message: employee_form::Message,
) -> Task<Message> {
    match ctx.employee_form.update(message) {
        employee_form::Event::None => Task::none(),
        employee_form::Event::Invalid(key) => {
            ctx.notifications.show(Notification::warning(key));
            Task::none()
        }
        employee_form::Event::Submit(payload) => {
            let api = ctx.api.clone();
            Task::perform(
                async move { api.save_employee(payload).await },
                Message::EmployeeSaved,
            )
        }
    }
}

/// Applies the create-employee completion.
pub fn handle_employee_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<Employee, api::Error>,
) -> Task<Message> {
    ctx.employee_form.complete(result.is_ok());
    match result {
        Ok(employee) => {
            ctx.notifications.show(
                Notification::success("notification-employee-saved")
                    .with_arg("id", employee.id.to_string()),
            );
        }
        Err(err) => {
            ctx.notifications.show(failure_notification(
                &err,
                "notification-employee-save-failed",
                "notification-employee-save-failed-generic",
            ));
        }
    }
    Task::none()
}

/// Handles employee lookup messages.
pub fn handle_employee_lookup_message(
    ctx: &mut UpdateContext<'_>,
    message: employee_lookup::Message,
) -> Task<Message> {
    match ctx.employee_lookup.update(message) {
        employee_lookup::Event::None => Task::none(),
        employee_lookup::Event::Invalid(key) => {
            ctx.notifications.show(Notification::warning(key));
            Task::none()
        }
        employee_lookup::Event::Search(id) => {
            let api = ctx.api.clone();
            Task::perform(
                async move {
                    let result = api.employee_by_id(&id).await;
                    (id, result)
                },
                |(id, result)| Message::EmployeeFetched { id, result },
            )
        }
    }
}

/// Applies an employee fetch completion. Found shows a success toast;
/// not-found and errors clear the record and toast the failure.
pub fn handle_employee_fetched(
    ctx: &mut UpdateContext<'_>,
    id: &str,
    result: Result<Employee, api::Error>,
) -> Task<Message> {
    ctx.employee_lookup.resolve(result.as_ref().ok().cloned());
    match result {
        Ok(_) => {
            ctx.notifications
                .show(Notification::success("notification-employee-loaded"));
        }
        Err(api::Error::NotFound) => {
            ctx.notifications.show(
                Notification::error("notification-employee-not-found").with_arg("id", id),
            );
        }
        Err(err) => {
            ctx.notifications.show(failure_notification(
                &err,
                "notification-employee-lookup-failed",
                "notification-employee-lookup-failed-generic",
            ));
        }
    }
    Task::none()
}

/// Handles create-department form messages.
pub fn handle_department_form_message(
    ctx: &mut UpdateContext<'_>,
    message: department_form::Message,
) -> Task<Message> {
    match ctx.department_form.update(message) {
        department_form::Event::None => Task::none(),
        department_form::Event::Invalid(key) => {
            ctx.notifications.show(Notification::warning(key));
            Task::none()
        }
        department_form::Event::Submit(payload) => {
            let api = ctx.api.clone();
            Task::perform(
                async move { api.save_department(payload).await },
                Message::DepartmentSaved,
            )
        }
    }
}

/// Applies the create-department completion.
pub fn handle_department_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<Department, api::Error>,
) -> Task<Message> {
    ctx.department_form.complete(result.is_ok());
    match result {
        Ok(department) => {
            ctx.notifications.show(
                Notification::success("notification-department-saved")
                    .with_arg("code", department.department_code),
            );
        }
        Err(err) => {
            ctx.notifications.show(failure_notification(
                &err,
                "notification-department-save-failed",
                "notification-department-save-failed-generic",
            ));
        }
    }
    Task::none()
}

/// Handles department lookup messages.
pub fn handle_department_lookup_message(
    ctx: &mut UpdateContext<'_>,
    message: department_lookup::Message,
) -> Task<Message> {
    match ctx.department_lookup.update(message) {
        department_lookup::Event::None => Task::none(),
        department_lookup::Event::Invalid(key) => {
            ctx.notifications.show(Notification::warning(key));
            Task::none()
        }
        department_lookup::Event::Search(code) => {
            let api = ctx.api.clone();
            Task::perform(
                async move {
                    let result = api.department_by_code(&code).await;
                    (code, result)
                },
                |(code, result)| Message::DepartmentFetched { code, result },
            )
        }
    }
}

/// Applies a department fetch completion. Unlike the employee lookup,
/// a successful find shows no toast.
pub fn handle_department_fetched(
    ctx: &mut UpdateContext<'_>,
    code: &str,
    result: Result<Department, api::Error>,
) -> Task<Message> {
    ctx.department_lookup.resolve(result.as_ref().ok().cloned());
    match result {
        Ok(_) => {}
        Err(api::Error::NotFound) => {
            ctx.notifications.show(
                Notification::error("notification-department-not-found").with_arg("code", code),
            );
        }
        Err(err) => {
            ctx.notifications.show(failure_notification(
                &err,
                "notification-department-lookup-failed",
                "notification-department-lookup-failed-generic",
            ));
        }
    }
    Task::none()
}

/// Handles settings messages. Both settings apply immediately and persist;
/// a failed save degrades to a warning toast.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match message {
        settings::Message::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale.clone());
            ctx.config.general.language = Some(locale.to_string());
            persist_config(ctx);
        }
        settings::Message::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            persist_config(ctx);
        }
    }
    Task::none()
}

fn persist_config(ctx: &mut UpdateContext<'_>) {
    if config::save(ctx.config).is_err() {
        ctx.notifications
            .show(Notification::warning("notification-config-save-warning"));
    }
}

/// Picks the error notification: the server-provided reason when one
/// exists, the generic localized message otherwise.
fn failure_notification(
    err: &api::Error,
    reason_key: &'static str,
    generic_key: &'static str,
) -> Notification {
    match err.reason() {
        Some(reason) => Notification::error(reason_key).with_arg("reason", reason),
        None => Notification::error(generic_key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    #[test]
    fn failure_notification_prefers_the_server_reason() {
        let err = api::Error::Status {
            status: 500,
            message: Some("db down".to_string()),
        };
        let notification = failure_notification(&err, "with-reason", "generic");

        assert_eq!(notification.message_key(), "with-reason");
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(
            notification.message_args(),
            &[("reason".to_string(), "db down".to_string())]
        );
    }

    #[test]
    fn failure_notification_falls_back_to_generic() {
        let err = api::Error::Transport("connection refused".to_string());
        let notification = failure_notification(&err, "with-reason", "generic");

        assert_eq!(notification.message_key(), "generic");
        assert!(notification.message_args().is_empty());
    }
}
