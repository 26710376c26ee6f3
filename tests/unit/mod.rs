mod catalog;
mod error;
mod time_entry;
mod tree;
