//! CLI command implementations

pub mod kind;
pub mod layout;
pub mod naming;

pub use kind::{KindCommand, handle_kind};
pub use layout::{LayoutArgs, handle_layout};
pub use naming::{NameCommand, handle_name};
