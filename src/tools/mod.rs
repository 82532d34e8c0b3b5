//! External collaborators: editor, chooser and clipboard.
//!
//! Each is a narrow trait so commands can run against fakes in tests.

pub mod chooser;
pub mod clipboard;
pub mod editor;

pub use chooser::{BuiltinChooser, Chooser, FzfChooser};
pub use clipboard::{Clipboard, SystemClipboard};
pub use editor::{CommandEditor, Editor};
