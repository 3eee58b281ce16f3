// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Presentational building blocks shared by the pages.

pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod header;
pub mod icons;
pub mod separator;
pub mod theme;

pub use alert::{AlertVariant, alert};
pub use badge::{BadgeVariant, badge};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{card, card_content, card_description, card_header, card_title};
pub use header::header;
pub use icons::Icon;
pub use separator::separator;
