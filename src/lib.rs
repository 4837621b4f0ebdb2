//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory library** with a thin interactive
//! CLI on top. All record semantics live in the library; the binary only
//! renders menus and colors output.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs)                                        │
//! │  - Renders the banner/menu, colors output                   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - One operation per invocation: prompt, dispatch, save     │
//! │  - Input abstracted behind PromptSource (prompt.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the in-memory Inventory         │
//! │  - Returns structured CmdResult, no I/O assumptions         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract InventoryStore trait                            │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward, code never writes to stdout, never calls
//! `std::process::exit`, and never assumes a terminal: operator input comes
//! through [`prompt::PromptSource`] and results come back as
//! [`commands::CmdResult`]. The same core runs under a scripted prompter in
//! tests and batch harnesses.
//!
//! ## Module Overview
//!
//! - [`session`]: the operator session, entry point for one run
//! - [`commands`]: business logic for each operation
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types (`Product`, `Inventory`)
//! - [`price`]: the `x.xx` price format rule
//! - [`prompt`]: operator input abstraction
//! - [`config`]: store location configuration
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod price;
pub mod prompt;
pub mod session;
pub mod store;
