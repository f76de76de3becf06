// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api;
use crate::domain::{Department, Employee};
use crate::ui::department_form;
use crate::ui::department_lookup;
use crate::ui::employee_form;
use crate::ui::employee_lookup;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint;
/// request completions land here so every screen transition runs through
/// the same loop.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    SwitchScreen(Screen),
    EmployeeForm(employee_form::Message),
    /// Result of the create-employee request.
    EmployeeSaved(Result<Employee, api::Error>),
    EmployeeLookup(employee_lookup::Message),
    /// Result of an employee fetch, tagged with the searched id so the
    /// not-found notification can name it.
    EmployeeFetched {
        id: String,
        result: Result<Employee, api::Error>,
    },
    DepartmentForm(department_form::Message),
    /// Result of the create-department request.
    DepartmentSaved(Result<Department, api::Error>),
    DepartmentLookup(department_lookup::Message),
    /// Result of a department fetch, tagged with the searched code.
    DepartmentFetched {
        code: String,
        result: Result<Department, api::Error>,
    },
    /// Result of the employee service status fetch.
    EmployeeServiceMessage(Result<String, api::Error>),
    /// Result of the department service status fetch.
    DepartmentServiceMessage(Result<String, api::Error>),
    Settings(settings::Message),
    Notification(notifications::Message),
    /// Periodic tick driving the toast auto-dismiss timer.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional backend base URL override, taking precedence over the
    /// `[backend]` config section.
    pub backend_url: Option<String>,
}
