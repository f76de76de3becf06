// SPDX-License-Identifier: MPL-2.0
//! `iced_portal` is a desktop administration client for the Employee Portal
//! microservices, built with the Iced GUI framework.
//!
//! It provides create and lookup screens for employees and departments
//! backed by two HTTP services, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
