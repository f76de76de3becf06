// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the screens, localization, the API
//! client, and the toast notification manager, and translates messages into
//! side effects like network calls or config persistence. Policy decisions
//! (window sizing, locale resolution, backend fallback) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::ApiClient;
use crate::config::{self, BackendConfig, Config};
use crate::i18n::fluent::I18n;
use crate::ui::department_form;
use crate::ui::department_lookup;
use crate::ui::employee_form;
use crate::ui::employee_lookup;
use crate::ui::notifications;
use crate::ui::service_status;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state that bridges the screens, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    menu_open: bool,
    theme_mode: ThemeMode,
    config: Config,
    api: ApiClient,
    employee_form: employee_form::State,
    employee_lookup: employee_lookup::State,
    department_form: department_form::State,
    department_lookup: department_lookup::State,
    service_status: service_status::State,
    /// Toast notification state, passed by reference into the views.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("menu_open", &self.menu_open)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            menu_open: false,
            theme_mode: ThemeMode::System,
            config: Config::default(),
            api: default_api_client(),
            employee_form: employee_form::State::default(),
            employee_lookup: employee_lookup::State::default(),
            department_form: department_form::State::default(),
            department_lookup: department_lookup::State::default(),
            service_status: service_status::State::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

/// The built-in backend config is known to be a valid URL.
fn default_api_client() -> ApiClient {
    ApiClient::new(&BackendConfig::default()).expect("default backend config is valid")
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();

        if let Some(url) = flags.backend_url {
            config.backend.base_url = url;
        }

        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.general.theme_mode;

        // A bad backend address degrades to the default, not a crash
        match ApiClient::new(&config.backend) {
            Ok(api) => app.api = api,
            Err(_) => {
                app.notifications.show(notifications::Notification::warning(
                    "notification-backend-config-warning",
                ));
            }
        }

        if let Some(key) = config_warning {
            app.notifications
                .show(notifications::Notification::warning(key));
        }

        app.config = config;

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.is_open())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            menu_open: &mut self.menu_open,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            api: &self.api,
            employee_form: &mut self.employee_form,
            employee_lookup: &mut self.employee_lookup,
            department_form: &mut self.department_form,
            department_lookup: &mut self.department_lookup,
            service_status: &mut self.service_status,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::EmployeeForm(form_message) => {
                update::handle_employee_form_message(&mut ctx, form_message)
            }
            Message::EmployeeSaved(result) => update::handle_employee_saved(&mut ctx, result),
            Message::EmployeeLookup(lookup_message) => {
                update::handle_employee_lookup_message(&mut ctx, lookup_message)
            }
            Message::EmployeeFetched { id, result } => {
                update::handle_employee_fetched(&mut ctx, &id, result)
            }
            Message::DepartmentForm(form_message) => {
                update::handle_department_form_message(&mut ctx, form_message)
            }
            Message::DepartmentSaved(result) => update::handle_department_saved(&mut ctx, result),
            Message::DepartmentLookup(lookup_message) => {
                update::handle_department_lookup_message(&mut ctx, lookup_message)
            }
            Message::DepartmentFetched { code, result } => {
                update::handle_department_fetched(&mut ctx, &code, result)
            }
            Message::EmployeeServiceMessage(result) => {
                self.service_status.resolve_employee(result);
                Task::none()
            }
            Message::DepartmentServiceMessage(result) => {
                self.service_status.resolve_department(result);
                Task::none()
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Periodic tick drives the toast auto-dismiss timer
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            menu_open: self.menu_open,
            theme_mode: self.theme_mode,
            employee_form: &self.employee_form,
            employee_lookup: &self.employee_lookup,
            department_form: &self.department_form,
            department_lookup: &self.department_lookup,
            service_status: &self.service_status,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use crate::domain::{Department, Employee};
    use crate::ui::department_lookup;
    use crate::ui::employee_form;
    use crate::ui::employee_lookup;
    use crate::ui::notifications::Severity;
    use crate::ui::service_status::Line;
    use crate::ui::settings;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(config::CONFIG_DIR_ENV).ok();
        std::env::set_var(config::CONFIG_DIR_ENV, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(config::CONFIG_DIR_ENV, value);
        } else {
            std::env::remove_var(config::CONFIG_DIR_ENV);
        }
    }

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

    fn sample_department() -> Department {
        Department {
            id: 3,
            department_name: "Research".into(),
            department_description: "R&D".into(),
            department_code: "DEP001".into(),
        }
    }

    fn fill_employee_form(app: &mut App) {
        for message in [
            employee_form::Message::FirstNameChanged("Ann".into()),
            employee_form::Message::LastNameChanged("Smith".into()),
            employee_form::Message::EmailChanged("ann@example.com".into()),
            employee_form::Message::DepartmentCodeChanged("DEP001".into()),
            employee_form::Message::HireDateChanged("2021-07-01".into()),
        ] {
            let _ = app.update(Message::EmployeeForm(message));
        }
    }

    #[test]
    fn new_starts_on_home_screen() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Home);
            assert!(!app.menu_open);
        });
    }

    #[test]
    fn new_warns_about_unreadable_config() {
        with_temp_config_dir(|config_root| {
            let app_dir = config_root.join("EmployeePortal");
            fs::create_dir_all(&app_dir).expect("dir");
            fs::write(app_dir.join("settings.toml"), "not = valid = toml").expect("write");

            let (app, _task) = App::new(Flags::default());
            let visible = app.notifications.visible().expect("warning expected");
            assert_eq!(visible.message_key(), "notification-config-load-warning");
            assert_eq!(visible.severity(), Severity::Warning);
        });
    }

    #[test]
    fn new_falls_back_when_backend_url_is_invalid() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                backend_url: Some("not a url".into()),
                ..Flags::default()
            });
            let visible = app.notifications.visible().expect("warning expected");
            assert_eq!(visible.message_key(), "notification-backend-config-warning");
        });
    }

    #[test]
    fn submitting_valid_employee_form_goes_in_flight() {
        let mut app = App::default();
        fill_employee_form(&mut app);

        let _ = app.update(Message::EmployeeForm(employee_form::Message::SubmitPressed));

        assert!(app.employee_form.submitting);
        assert!(!app.notifications.is_open());
    }

    #[test]
    fn submitting_incomplete_employee_form_warns_and_stays_idle() {
        let mut app = App::default();
        let _ = app.update(Message::EmployeeForm(employee_form::Message::FirstNameChanged(
            "Ann".into(),
        )));

        let _ = app.update(Message::EmployeeForm(employee_form::Message::SubmitPressed));

        assert!(!app.employee_form.submitting);
        let visible = app.notifications.visible().expect("warning expected");
        assert_eq!(visible.severity(), Severity::Warning);
        assert_eq!(
            visible.message_key(),
            "notification-missing-required-fields"
        );
    }

    #[test]
    fn successful_save_resets_the_form_and_toasts_the_id() {
        let mut app = App::default();
        fill_employee_form(&mut app);
        let _ = app.update(Message::EmployeeForm(employee_form::Message::SubmitPressed));

        let _ = app.update(Message::EmployeeSaved(Ok(sample_employee())));

        assert_eq!(app.employee_form.first_name, "");
        assert!(!app.employee_form.submitting);
        let visible = app.notifications.visible().expect("toast expected");
        assert_eq!(visible.message_key(), "notification-employee-saved");
        assert_eq!(
            visible.message_args(),
            &[("id".to_string(), "42".to_string())]
        );
    }

    #[test]
    fn failed_save_preserves_input_and_toasts_the_server_reason() {
        let mut app = App::default();
        fill_employee_form(&mut app);
        let _ = app.update(Message::EmployeeForm(employee_form::Message::SubmitPressed));

        let _ = app.update(Message::EmployeeSaved(Err(api::Error::Status {
            status: 500,
            message: Some("db down".into()),
        })));

        assert_eq!(app.employee_form.first_name, "Ann");
        assert!(!app.employee_form.submitting);
        let visible = app.notifications.visible().expect("toast expected");
        assert_eq!(visible.message_key(), "notification-employee-save-failed");
        assert_eq!(visible.severity(), Severity::Error);
    }

    #[test]
    fn employee_lookup_found_renders_record_and_toasts_success() {
        let mut app = App::default();
        let _ = app.update(Message::EmployeeLookup(employee_lookup::Message::IdChanged(
            "42".into(),
        )));
        let _ = app.update(Message::EmployeeLookup(
            employee_lookup::Message::SearchPressed,
        ));
        assert!(app.employee_lookup.searching);

        let _ = app.update(Message::EmployeeFetched {
            id: "42".into(),
            result: Ok(sample_employee()),
        });

        assert_eq!(app.employee_lookup.record.as_ref().map(|e| e.id), Some(42));
        let visible = app.notifications.visible().expect("toast expected");
        assert_eq!(visible.message_key(), "notification-employee-loaded");
        assert_eq!(visible.severity(), Severity::Success);
    }

    #[test]
    fn employee_lookup_not_found_clears_record_and_names_the_id() {
        let mut app = App::default();
        app.employee_lookup.record = Some(sample_employee());
        let _ = app.update(Message::EmployeeFetched {
            id: "999".into(),
            result: Err(api::Error::NotFound),
        });

        assert!(app.employee_lookup.record.is_none());
        assert!(app.employee_lookup.searched);
        let visible = app.notifications.visible().expect("toast expected");
        assert_eq!(visible.message_key(), "notification-employee-not-found");
        assert_eq!(
            visible.message_args(),
            &[("id".to_string(), "999".to_string())]
        );
    }

    #[test]
    fn blank_lookup_key_warns_without_searching() {
        let mut app = App::default();
        let _ = app.update(Message::EmployeeLookup(employee_lookup::Message::IdChanged(
            "   ".into(),
        )));
        let _ = app.update(Message::EmployeeLookup(
            employee_lookup::Message::SearchPressed,
        ));

        assert!(!app.employee_lookup.searching);
        let visible = app.notifications.visible().expect("warning expected");
        assert_eq!(visible.message_key(), "notification-missing-employee-id");
    }

    #[test]
    fn department_lookup_found_shows_no_toast() {
        let mut app = App::default();
        let _ = app.update(Message::DepartmentLookup(
            department_lookup::Message::CodeChanged("DEP001".into()),
        ));
        let _ = app.update(Message::DepartmentLookup(
            department_lookup::Message::SearchPressed,
        ));

        let _ = app.update(Message::DepartmentFetched {
            code: "DEP001".into(),
            result: Ok(sample_department()),
        });

        assert!(app.department_lookup.record.is_some());
        assert!(!app.notifications.is_open());
    }

    #[test]
    fn department_lookup_not_found_toasts_the_code() {
        let mut app = App::default();
        let _ = app.update(Message::DepartmentFetched {
            code: "NOPE".into(),
            result: Err(api::Error::NotFound),
        });

        assert!(app.department_lookup.record.is_none());
        let visible = app.notifications.visible().expect("toast expected");
        assert_eq!(visible.message_key(), "notification-department-not-found");
        assert_eq!(
            visible.message_args(),
            &[("code".to_string(), "NOPE".to_string())]
        );
    }

    #[test]
    fn a_new_toast_replaces_the_previous_one() {
        let mut app = App::default();
        let _ = app.update(Message::EmployeeSaved(Err(api::Error::Transport(
            "refused".into(),
        ))));
        let _ = app.update(Message::EmployeeSaved(Ok(sample_employee())));

        let visible = app.notifications.visible().expect("toast expected");
        assert_eq!(visible.message_key(), "notification-employee-saved");
        assert_eq!(visible.severity(), Severity::Success);
    }

    #[test]
    fn entering_service_messages_resets_both_lines() {
        let mut app = App::default();
        app.service_status.resolve_employee(Ok("up".into()));

        let _ = app.update(Message::SwitchScreen(Screen::ServiceMessages));

        assert_eq!(app.screen, Screen::ServiceMessages);
        assert_eq!(app.service_status.employee, Line::Loading);
        assert_eq!(app.service_status.department, Line::Loading);
    }

    #[test]
    fn service_message_results_fill_lines_independently() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::ServiceMessages));

        let _ = app.update(Message::EmployeeServiceMessage(Ok("Employee up".into())));
        let _ = app.update(Message::DepartmentServiceMessage(Err(
            api::Error::Transport("refused".into()),
        )));

        assert_eq!(app.service_status.employee, Line::Ready("Employee up".into()));
        assert_eq!(app.service_status.department, Line::Unavailable);
    }

    #[test]
    fn language_selected_updates_config_file() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();
            let target_locale: unic_langid::LanguageIdentifier = "fr".parse().unwrap();

            let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
                target_locale.clone(),
            )));

            assert_eq!(app.i18n.current_locale().to_string(), "fr");
            let config_path = config_root.join("EmployeePortal").join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("fr"));
        });
    }

    #[test]
    fn theme_mode_selected_is_applied_and_persisted() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();

            let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
                ThemeMode::Dark,
            )));

            assert_eq!(app.theme_mode, ThemeMode::Dark);
            let config_path = config_root.join("EmployeePortal").join("settings.toml");
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("dark"));
        });
    }

    #[test]
    fn tick_closes_an_expired_toast() {
        let mut app = App::default();
        let _ = app.update(Message::EmployeeSaved(Ok(sample_employee())));
        assert!(app.notifications.is_open());

        // A fresh toast survives a tick
        app.notifications.tick();
        assert!(app.notifications.is_open());
    }

    #[test]
    fn navbar_navigation_switches_screens() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::Open(
            Screen::CreateEmployee,
        )));

        assert_eq!(app.screen, Screen::CreateEmployee);
        assert!(!app.menu_open);
    }

    #[test]
    fn view_renders_every_screen() {
        let mut app = App::default();
        for screen in [
            Screen::Home,
            Screen::CreateEmployee,
            Screen::EmployeeDetails,
            Screen::CreateDepartment,
            Screen::DepartmentDetails,
            Screen::ServiceMessages,
            Screen::Settings,
        ] {
            app.screen = screen;
            let _element = app.view();
        }
    }
}
