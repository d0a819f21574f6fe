// Copyright 2018 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Custom measure and placement passes for declarative UI layout.
//!
//! A layout pass hands each element a set of [`BoxConstraints`]; the element
//! [measures] itself and, if it has children, decides where each child goes.
//! This crate provides two custom layouts built on that contract:
//!
//! - [`VerticalStack`] stacks children top to bottom, starting a fixed
//!   distance below the top, and always fills its constraints.
//! - [`FirstBaselineToTop`] pads a child so its first text baseline sits a
//!   given distance below the top.
//!
//! Along with a few ordinary elements ([`Padding`], [`SizedBox`], [`Row`],
//! [`Text`]) and two scrolling columns ([`ScrollColumn`], [`LazyColumn`]).
//!
//! Nothing here draws: layouts return sizes and [`Placement`]s and the host
//! does the rest.
//!
//! [measures]: LayoutElement::measure

#![deny(rustdoc::broken_intra_doc_links, unsafe_code)]

pub use kurbo;

mod baseline;
mod box_constraints;
mod element;
mod env;
mod error;
mod lazy_list;
mod measured;
mod padding;
mod placement;
mod row;
mod scroll;
mod sized_box;
mod stack;
mod text;
mod units;

#[cfg(test)]
mod tests;

pub use baseline::{BaselinePadded, FirstBaselineToTop};
pub use box_constraints::BoxConstraints;
pub use element::{Fixed, LayoutElement};
pub use env::LayoutEnv;
pub use error::LayoutError;
pub use lazy_list::{LazyColumn, LazyListState};
pub use measured::{AlignmentLine, AlignmentLines, Measured};
pub use padding::Padding;
pub use placement::{Placement, SingleLayout, StackLayout};
pub use row::{CrossAxisAlignment, Row};
pub use scroll::{ScrollColumn, ScrollState};
pub use sized_box::SizedBox;
pub use stack::{CustomColumn, Overflow, VerticalStack, DEFAULT_INITIAL_OFFSET};
pub use text::{Text, TextStyle};
pub use units::{Density, Dp};
