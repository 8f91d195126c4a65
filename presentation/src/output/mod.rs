//! Output formatting for catalogs, topics and validation reports

pub mod console;
