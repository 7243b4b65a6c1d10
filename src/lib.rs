//! mrk-picker - interactive Brewfile package selector
//!
//! This library parses a Brewfile into categories of formulae and casks,
//! drives a two-pane terminal picker over them, and formats the chosen
//! packages as `formula:name` / `cask:name` lines for a calling script.

pub mod error;
pub mod manifest;
pub mod output;
pub mod ui;

pub use error::PickerError;
