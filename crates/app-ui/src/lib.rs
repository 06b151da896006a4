//! User interface for the Techfix courier screens
//!
//! This crate turns courier list state into a serializable view tree and maps
//! the host's events back onto the controller and navigator.
//!
//! # Modules
//!
//! - [`theme`] - Color palette
//! - [`tokens`] - Design tokens (spacing, sizing, typography, icons)
//! - [`components`] - UI component library and the [`Element`] tree
//! - [`status`] - Status color, icon and label mappers
//! - [`format`] - Courier card formatting
//! - [`screens`] - Application screens
//! - [`navigation`] - Routes and navigation stack
//!
//! # Example
//!
//! ```rust
//! use app_ui::status::{status_label, status_color};
//! use app_ui::theme::colors;
//! use courier_client::CourierStatus;
//!
//! let status = CourierStatus::from("in_transit");
//! assert_eq!(status_label(&status), "In Transit");
//! assert_eq!(status_color(&status), colors::WARNING);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod format;
pub mod navigation;
pub mod screens;
pub mod status;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use components::{Element, EventHandler};
pub use format::CourierCard;
pub use navigation::{NavigationStack, Navigator, Route, RouteParams, StackEntry};
pub use screens::{render_all_couriers, AllCouriersScreen, ScreenAction};
pub use status::{filter_label, status_color, status_icon, status_label, StatusTone};
