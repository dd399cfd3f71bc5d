pub mod stat_table;
