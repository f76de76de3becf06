// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.
//!
//! Keeping style functions in one place keeps the screens declarative and
//! guarantees consistent visual treatment across the application.

pub mod button;
pub mod container;
