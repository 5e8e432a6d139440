pub mod lookup_table;
