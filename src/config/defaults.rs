// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::ui::theming::ThemeMode;

/// Base URL of the API gateway fronting both microservices.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9191/api/v1";

/// Path prefix of the employee service behind the gateway.
pub const DEFAULT_EMPLOYEE_SERVICE: &str = "/employee-service/api/v1/employee-service";

/// Path prefix of the department service behind the gateway.
pub const DEFAULT_DEPARTMENT_SERVICE: &str = "/department-service/api/v1/department-service";

/// Request timeout applied to every backend call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub(super) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(super) fn default_employee_service() -> String {
    DEFAULT_EMPLOYEE_SERVICE.to_string()
}

pub(super) fn default_department_service() -> String {
    DEFAULT_DEPARTMENT_SERVICE.to_string()
}

pub(super) fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

pub(super) fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}
