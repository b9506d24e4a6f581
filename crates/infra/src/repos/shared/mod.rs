pub mod inmemory_repo;
pub mod sheet_table;
