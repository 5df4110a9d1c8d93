//! listkit
//!
//! Reconciliation and layout engine for list, grid and carousel components,
//! rendered in the terminal with ratatui.
//!
//! The layout policy and model are a pure core. Components, the state cache
//! and the viewer form the impure shell around it.

pub mod cache;
pub mod component;
pub mod config;
pub mod layout_policy;
pub mod logging;
pub mod model;
pub mod view;
