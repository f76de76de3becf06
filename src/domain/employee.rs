// SPDX-License-Identifier: MPL-2.0
//! Employee records as exchanged with the employee service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee as returned by the service, including the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_code: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
    /// Calendar date, `YYYY-MM-DD` on the wire.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

/// Creation payload for `POST {employee-service}/`.
///
/// An absent hire date serializes as `null`, never as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_code: String,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(hire_date: Option<NaiveDate>) -> NewEmployee {
        NewEmployee {
            first_name: "Ann".to_string(),
            last_name: "Smith".to_string(),
            email: "ann@example.com".to_string(),
            department_code: "DEP001".to_string(),
            position: None,
            salary: Some(50_000.0),
            hire_date,
        }
    }

    #[test]
    fn hire_date_serializes_as_iso_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
        let value = serde_json::to_value(payload(Some(date))).unwrap();
        assert_eq!(value["hireDate"], json!("2021-07-01"));
    }

    #[test]
    fn absent_hire_date_serializes_as_null() {
        let value = serde_json::to_value(payload(None)).unwrap();
        assert_eq!(value["hireDate"], serde_json::Value::Null);
    }

    #[test]
    fn payload_uses_camel_case_field_names() {
        let value = serde_json::to_value(payload(None)).unwrap();
        assert!(value.get("firstName").is_some());
        assert!(value.get("departmentCode").is_some());
        assert!(value.get("first_name").is_none());
    }

    #[test]
    fn employee_deserializes_from_service_json() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 42,
            "firstName": "Ann",
            "lastName": "Smith",
            "email": "ann@example.com",
            "departmentCode": "DEP001",
            "position": "Engineer",
            "salary": 50000.0,
            "hireDate": "2021-07-01"
        }))
        .unwrap();

        assert_eq!(employee.id, 42);
        assert_eq!(employee.first_name, "Ann");
        assert_eq!(
            employee.hire_date,
            Some(NaiveDate::from_ymd_opt(2021, 7, 1).unwrap())
        );
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 7,
            "firstName": "Bob",
            "lastName": "Jones",
            "email": "bob@example.com",
            "departmentCode": "DEP002"
        }))
        .unwrap();

        assert_eq!(employee.position, None);
        assert_eq!(employee.salary, None);
        assert_eq!(employee.hire_date, None);
    }
}
