//! Workbook reading (xlsx, xlsm, xlsb, xls, ods).

mod cells;
mod reader;

pub use reader::read_workbook_table;
