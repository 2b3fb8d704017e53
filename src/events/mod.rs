pub mod cards;
pub mod contact;
pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use cards::wire_project_cards;
pub use contact::wire_contact_menu;
pub use keyboard::wire_escape;
pub use pointer::{wire_link_haptics, wire_pointer_handlers, PointerTarget};
pub use scroll::{wire_section_observer, wire_section_scroll};
