pub mod editor_view;
pub mod footer;
pub mod header;
pub mod help;
pub mod helpers;
pub mod slash_menu;

pub use editor_view::{caret_position, EditorView};
pub use footer::Footer;
pub use header::Header;
pub use help::HelpModal;
pub use slash_menu::SlashMenu;
