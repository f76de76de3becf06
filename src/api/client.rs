// SPDX-License-Identifier: MPL-2.0
//! The HTTP client mapping logical operations onto the two microservices.

use super::Error;
use crate::config::BackendConfig;
use crate::domain::{Department, Employee, NewDepartment, NewEmployee};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Stateless client for both backend services.
///
/// Cloning is cheap (the inner `reqwest::Client` is reference-counted), so
/// clones can be moved into async tasks freely.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    employee_base: Url,
    department_base: Url,
}

impl ApiClient {
    /// Builds a client from the `[backend]` config section.
    ///
    /// Fails with [`Error::InvalidBaseUrl`] when the base URL or a service
    /// prefix does not form a valid absolute URL.
    pub fn new(backend: &BackendConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(backend.timeout_secs))
            .user_agent(concat!("EmployeePortal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let employee_base = service_root(&backend.base_url, &backend.employee_service)?;
        let department_base = service_root(&backend.base_url, &backend.department_service)?;

        Ok(Self {
            http,
            employee_base,
            department_base,
        })
    }

    /// `POST {employee-service}/` — create an employee, returning the stored
    /// record including its server-assigned id.
    pub async fn save_employee(&self, employee: NewEmployee) -> Result<Employee, Error> {
        let url = item_url(&self.employee_base, &[""])?;
        let response = self.http.post(url).json(&employee).send().await?;
        read_json(response).await
    }

    /// `GET {employee-service}/{id}` — fetch an employee by id.
    /// A missing id yields [`Error::NotFound`].
    pub async fn employee_by_id(&self, id: &str) -> Result<Employee, Error> {
        let url = item_url(&self.employee_base, &[id])?;
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }

    /// `GET {employee-service}/users/message` — plain-text service status.
    pub async fn employee_service_message(&self) -> Result<String, Error> {
        let url = item_url(&self.employee_base, &["users", "message"])?;
        let response = self.http.get(url).send().await?;
        read_text(response).await
    }

    /// `POST {department-service}/` — create a department.
    pub async fn save_department(&self, department: NewDepartment) -> Result<Department, Error> {
        let url = item_url(&self.department_base, &[""])?;
        let response = self.http.post(url).json(&department).send().await?;
        read_json(response).await
    }

    /// `GET {department-service}/{code}` — fetch a department by its code.
    /// A missing code yields [`Error::NotFound`].
    pub async fn department_by_code(&self, code: &str) -> Result<Department, Error> {
        let url = item_url(&self.department_base, &[code])?;
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }

    /// `GET {department-service}/message` — plain-text service status.
    pub async fn department_service_message(&self) -> Result<String, Error> {
        let url = item_url(&self.department_base, &["message"])?;
        let response = self.http.get(url).send().await?;
        read_text(response).await
    }
}

/// Joins the gateway base URL and a service prefix into the service root.
///
/// Concatenation semantics, not RFC 3986 resolution: a leading `/` in the
/// prefix does not discard the base path (the gateway mounts the services
/// under its own path).
fn service_root(base: &str, prefix: &str) -> Result<Url, Error> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        prefix.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|_| Error::InvalidBaseUrl(joined))
}

/// Appends path segments to the service root, URL-encoding each one.
/// An empty segment produces the trailing slash the create endpoints use.
fn item_url(base: &Url, segments: &[&str]) -> Result<Url, Error> {
    let mut url = base.clone();
    {
        let mut parts = url
            .path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(base.to_string()))?;
        parts.pop_if_empty();
        for segment in segments {
            parts.push(segment);
        }
    }
    Ok(url)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::from_response_parts(status.as_u16(), &body));
    }
    response.json::<T>().await.map_err(Error::from)
}

async fn read_text(response: Response) -> Result<String, Error> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::from_response_parts(status.as_u16(), &body));
    }
    response.text().await.map_err(Error::from)
}
