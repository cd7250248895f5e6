//! Output emission

pub mod csv_writer;
