pub mod editor;
pub mod search;
pub mod slash;
pub mod ui;
