//! Reusable view components shared by the data pages.

pub mod data_table;
pub mod unit_explorer;
