// SPDX-License-Identifier: MPL-2.0
//! Department records as exchanged with the department service.

use serde::{Deserialize, Serialize};

/// A department as returned by the service. `department_code` is the natural
/// key used for lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(default)]
    pub id: i64,
    pub department_name: String,
    pub department_description: String,
    pub department_code: String,
}

/// Creation payload for `POST {department-service}/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    pub department_name: String,
    pub department_description: String,
    pub department_code: String,
}
