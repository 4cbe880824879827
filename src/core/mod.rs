//! # Core Application Logic
//!
//! This module contains Menagerie's browsing logic.
//! It knows nothing about terminals or HTTP. The only file it reads is the
//! config, in `config.rs`.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • filter / paginate    │
//!                    │  • navigation snapshot  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No network.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │  `list`    │
//!         │  Adapter   │                  │  command   │
//!         │ (ratatui)  │                  │  (stdout)  │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `Item` and the immutable `Catalog`
//! - [`filter`]: the Filter Engine and match highlighting
//! - [`paginate`]: page slicing and the visible-pages window
//! - [`nav_state`]: the read-once page/scroll snapshot
//! - [`view`]: the pure `(catalog, term, page)` render pipeline
//! - [`state`]: the `App` struct, all browsing state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings and their override hierarchy

pub mod action;
pub mod config;
pub mod filter;
pub mod item;
pub mod nav_state;
pub mod paginate;
pub mod state;
pub mod view;
