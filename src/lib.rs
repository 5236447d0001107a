pub mod config;
pub mod data_structure;
pub mod demo;
pub mod error;

pub use config::DemoConfig;
pub use data_structure::link_list::{InsertOrder, Iter, IterMut, IntoIter, LinkList};
pub use error::{ListError, Result};

#[cfg(test)]
mod tests;
