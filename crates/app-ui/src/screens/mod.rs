//! Application screens

pub mod all_couriers;

pub use all_couriers::{render_all_couriers, render_card, AllCouriersScreen, ScreenAction};
