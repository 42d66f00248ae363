//! Library side of the notelint command line: settings files, document
//! stores, batch runs and logging.

pub mod batch;
pub mod config;
pub mod logging;
pub mod store;
