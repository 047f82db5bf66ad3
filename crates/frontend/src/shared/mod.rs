pub mod components;
pub mod date_utils;
pub mod icons;
pub mod modal;
pub mod number_utils;
pub mod state;
pub mod theme;
pub mod toast;
