//! Reader for the Federal Reserve participant directories.
//!
//! This crate decodes the fixed-width directory files the Fed publishes for
//! its two payment networks and indexes the participants for lookup:
//!
//! - **FedACH** (`FedACHdir.txt`) — 155-character lines
//! - **Fedwire** (`fpddir.txt`) — 101-character lines
//!
//! Each load yields a [`Directory`] with an exact index by routing number and
//! a grouped index by customer name.
//!
//! # Quick start
//!
//! ```
//! use fed_directory::prelude::*;
//!
//! let line = format!("{:<155}", "011000015O011000015 012241500000000FEDERAL RESERVE BANK");
//! let directory = Directory::load::<Ach, _>(line.as_bytes()).unwrap();
//!
//! let frb = directory.by_routing_number("011000015").unwrap();
//! assert_eq!(frb.customer_name(), "FEDERAL RESERVE BANK");
//! assert_eq!(frb.ach().unwrap().office_code, "O");
//! ```

pub mod directory;
pub mod error;
pub mod format;
pub mod participant;
pub mod reader;
pub mod source;
pub mod writer;

pub use directory::Directory;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        directory::Directory,
        error::{DirectoryError, ErrorKind, ErrorList},
        format::{Ach, Format, RecordFormat, Wire},
        participant::{Details, Participant},
        reader::ParticipantReader,
        source::{SourceConfig, open},
        writer::ParticipantWriter,
    };
}
