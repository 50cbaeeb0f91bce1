pub mod action_buttons;
pub mod dialog;
pub mod table;
pub mod toast;
pub mod ui;
