//! # TUI Components
//!
//! All UI pieces of the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `ChatHeader`: Name and status line at the top of the panel
//! - `Message`: A single transcript entry
//! - `Launcher`: The floating toggle button
//! - `LandingPage`: The home screen behind the panel
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: Draft field, emits `Submit`
//! - `MessageList`: Scrollable transcript with layout caching
//! - `ChatPanel`: Composes header, list and input box
//!
//! Components receive external data as props rather than reaching into
//! `App`, so each can be rendered alone in a `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── chat_header.rs   (Panel header)
//! ├── chat_panel.rs    (Overlay composition)
//! ├── landing.rs       (Home screen)
//! ├── launcher.rs      (Toggle button + hit test)
//! ├── message.rs       (Single entry renderer)
//! ├── message_list.rs  (Scrollable transcript)
//! └── input_box/       (Draft field + wrapping)
//! ```

pub mod chat_header;
pub mod chat_panel;
pub mod input_box;
pub mod landing;
pub mod launcher;
pub mod message;
pub mod message_list;

pub use chat_header::ChatHeader;
pub use chat_panel::{ChatPanel, panel_area};
pub use input_box::{InputBox, InputEvent};
pub use landing::LandingPage;
pub use launcher::{Launcher, hit_test_launcher, launcher_area};
pub use message::Message;
pub use message_list::{MessageList, MessageListState};
