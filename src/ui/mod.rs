// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Landing screen with welcome copy
//! - [`employee_form`] - Create-employee form
//! - [`employee_lookup`] - Employee-by-id lookup
//! - [`department_form`] - Create-department form
//! - [`department_lookup`] - Department-by-code lookup
//! - [`service_status`] - Backend service status messages
//! - [`settings`] - Language and theme preferences
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (form field, record card)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon rasterization and caching
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod department_form;
pub mod department_lookup;
pub mod design_tokens;
pub mod employee_form;
pub mod employee_lookup;
pub mod home;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod service_status;
pub mod settings;
pub mod styles;
pub mod theming;
