// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared between screens.

pub mod form_field;
pub mod record_card;
