pub mod document;
pub mod sanitize;
pub mod selection;
pub mod tags;
pub mod vault;
