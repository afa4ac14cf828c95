// SPDX-License-Identifier: MPL-2.0
//! Centralized styles.

pub mod container;
pub mod zoom;
