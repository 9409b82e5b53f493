// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - render: Main orchestration function that coordinates all rendering
// - landing: Landing page (hero, floating letters, feature cards)
// - layout: Calculates the dashboard layout
// - theme: Per-theme icons, characters and messages
// - icons: Icon rendering (emoji and Nerd Fonts)
// - header: Title, theme buttons and the guide's tip
// - breadcrumb: Back/home buttons and the folder path
// - contents: Folder and file cards
// - uploader: Upload panel with progress and errors
// - search: Search input box with query and match count
// - legend: Hotkey legend
// - status_bar: Bottom status bar
// - dialogs: Create-folder and upload inputs
// - confetti: Celebration overlay
// - toast: Toast notifications (brief pop-up messages)

pub mod breadcrumb;
pub mod confetti;
pub mod contents;
pub mod dialogs;
pub mod header;
pub mod icons;
pub mod landing;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod theme;
pub mod toast;
pub mod uploader;

// Re-export main render function for convenience
pub use render::render;
