//! Fixed-width record formats of the Fed directories.
//!
//! Each format is a marker type implementing [`RecordFormat`]: a record
//! length plus a pure decode (and encode) over a table of column ranges.
//! The directory builder and the streaming reader are generic over the trait,
//! so both formats share one load path.
//!
//! | Format | Line length | Marker |
//! |--------|-------------|--------|
//! | FedACH directory | 155 | [`Ach`] |
//! | Fedwire directory | 101 | [`Wire`] |
//!
//! # Example
//!
//! ```
//! use fed_directory::format::{Ach, RecordFormat};
//!
//! let line = format!("{:<155}", "011000015O011000015 0122415000000000");
//! let p = Ach::decode_line(&line, 1).unwrap();
//! assert_eq!(p.routing_number(), "011000015");
//! ```

pub mod ach;
mod line;
pub mod wire;

use std::fmt;

pub use line::FixedWidthLine;
pub(crate) use line::LineBuilder;

use crate::{
    error::{DirectoryError, Result},
    participant::Participant,
    source::SourceConfig,
};

/// Marker type for the FedACH directory format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ach;

/// Marker type for the Fedwire directory format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wire;

/// Decoding and encoding of one fixed-width directory line.
///
/// Implemented by the marker types ([`Ach`], [`Wire`]).
pub trait RecordFormat {
    /// Runtime tag of the format.
    const FORMAT: Format;

    /// Required line length in characters.
    const RECORD_LENGTH: usize;

    /// Decodes a line already known to be [`Self::RECORD_LENGTH`] characters.
    fn decode(line: &FixedWidthLine<'_>) -> Participant;

    /// Encodes a participant back into a fixed-width line (no terminator).
    ///
    /// Fails if the participant belongs to the other format or a value does
    /// not fit its column.
    fn encode(participant: &Participant) -> Result<String>;

    /// Checks the line length, then decodes.
    ///
    /// `line_no` is 1-based and only used for error reporting.
    fn decode_line(line: &str, line_no: usize) -> Result<Participant> {
        let line = FixedWidthLine::new(line);
        let actual = line.char_len();
        if actual != Self::RECORD_LENGTH {
            return Err(DirectoryError::RecordWrongLength {
                line: line_no,
                required: Self::RECORD_LENGTH,
                actual,
            });
        }
        Ok(Self::decode(&line))
    }
}

impl RecordFormat for Ach {
    const FORMAT: Format = Format::Ach;
    const RECORD_LENGTH: usize = ach::RECORD_LENGTH;

    fn decode(line: &FixedWidthLine<'_>) -> Participant {
        ach::decode(line)
    }

    fn encode(participant: &Participant) -> Result<String> {
        ach::encode(participant)
    }
}

impl RecordFormat for Wire {
    const FORMAT: Format = Format::Wire;
    const RECORD_LENGTH: usize = wire::RECORD_LENGTH;

    fn decode(line: &FixedWidthLine<'_>) -> Participant {
        wire::decode(line)
    }

    fn encode(participant: &Participant) -> Result<String> {
        wire::encode(participant)
    }
}

/// Format enum for runtime format selection.
///
/// Use this when the format is determined at runtime (e.g., from a file name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// FedACH participant directory.
    Ach,
    /// Fedwire participant directory.
    Wire,
}

impl Format {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ach => "ACH",
            Self::Wire => "WIRE",
        }
    }

    /// Required line length in characters.
    #[must_use]
    pub const fn record_length(&self) -> usize {
        match self {
            Self::Ach => Ach::RECORD_LENGTH,
            Self::Wire => Wire::RECORD_LENGTH,
        }
    }

    /// Determines the format from a file name using the default source names.
    ///
    /// # Examples
    ///
    /// ```
    /// use fed_directory::format::Format;
    ///
    /// assert_eq!(Format::from_file_name("FedACHdir.txt"), Some(Format::Ach));
    /// assert_eq!(Format::from_file_name("fpddir.txt"), Some(Format::Wire));
    /// assert_eq!(Format::from_file_name("routing.csv"), None);
    /// ```
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        SourceConfig::default().format_for(name)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn short_line_is_rejected_with_both_lengths() {
        let err = Wire::decode_line("021000021", 7).unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::RecordWrongLength { line: 7, required: 101, actual: 9 }
        ));
    }

    #[test]
    fn long_line_is_rejected() {
        let line = " ".repeat(156);
        assert_eq!(Ach::decode_line(&line, 1).unwrap_err().kind(), ErrorKind::RecordWrongLength);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 100 ASCII columns plus one two-byte character: 101 columns, 102 bytes.
        let line = format!("{:<100}é", "021000021");
        assert_eq!(line.len(), 102);
        assert!(Wire::decode_line(&line, 1).is_ok());
    }

    #[test]
    fn record_lengths() {
        assert_eq!(Format::Ach.record_length(), 155);
        assert_eq!(Format::Wire.record_length(), 101);
        assert_eq!(Format::Wire.to_string(), "WIRE");
    }
}
