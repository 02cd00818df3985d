// SPDX-License-Identifier: MPL-2.0
//! Styles partagés des boutons et des conteneurs.

pub mod button;
pub mod container;
