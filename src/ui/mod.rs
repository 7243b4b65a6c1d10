//! # UI Module
//!
//! The interactive two-pane picker.
//!
//! ## Components
//!
//! - [`App`] - selection model (cursors, focus, per-package selection)
//! - [`mod@render`] - draws a frame from the current [`App`]
//! - [`session`] - terminal setup and the event loop
//! - [`theme`] / [`config`] - colours and persisted user settings
//!
//! ## Layout
//!
//! ```text
//! mrk brew                                                 3 selected
//! ╭──────────────────────╮╭──────────────────────────────────────────╮
//! │▸ Shells          (2) ││✓ bash                    Modern shell    │
//! │  Tools         (1/4) ││● zsh                     Z shell         │
//! │  Applications   (12) ││  fish                    Friendly shell  │
//! ╰──────────────────────╯╰──────────────────────────────────────────╯
//! ↑↓/jk move · tab/hl switch pane · space toggle · a all · enter confirm · q quit
//! ```

pub mod app;
pub mod config;
pub mod render;
pub mod session;
pub mod theme;

pub use app::App;
pub use render::render;
