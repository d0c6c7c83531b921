//! Fedwire directory line layout.
//!
//! ```text
//! 011000015FED BOS           FEDERAL RESERVE BANK OF BOSTON      MABOSTON                   Y Y20040910
//! ```

use std::ops::Range;

use super::{FixedWidthLine, LineBuilder};
use crate::{
    error::{DirectoryError, Result},
    participant::{Details, Participant, WireDetails, WireLocation},
};

/// Line length of a Fedwire record.
pub const RECORD_LENGTH: usize = 101;

pub const ROUTING_NUMBER: Range<usize> = 0..9;
pub const TELEGRAPHIC_NAME: Range<usize> = 9..27;
pub const CUSTOMER_NAME: Range<usize> = 27..63;
pub const STATE: Range<usize> = 63..65;
pub const CITY: Range<usize> = 65..90;
pub const FUNDS_TRANSFER_STATUS: Range<usize> = 90..91;
pub const FUNDS_SETTLEMENT_ONLY_STATUS: Range<usize> = 91..92;
pub const BOOK_ENTRY_SECURITIES_TRANSFER_STATUS: Range<usize> = 92..93;
pub const REVISED_DATE: Range<usize> = 93..101;

pub(crate) fn decode(line: &FixedWidthLine<'_>) -> Participant {
    let details = WireDetails {
        telegraphic_name: line.trimmed(TELEGRAPHIC_NAME).to_string(),
        location: WireLocation {
            city: line.trimmed(CITY).to_string(),
            state: line.field(STATE).to_string(),
        },
        funds_transfer_status: line.field(FUNDS_TRANSFER_STATUS).to_string(),
        funds_settlement_only_status: line.field(FUNDS_SETTLEMENT_ONLY_STATUS).to_string(),
        book_entry_securities_transfer_status: line
            .field(BOOK_ENTRY_SECURITIES_TRANSFER_STATUS)
            .to_string(),
        revised_date: line.field(REVISED_DATE).to_string(),
    };
    Participant::new(line.field(ROUTING_NUMBER), line.field(CUSTOMER_NAME), Details::Wire(details))
}

pub(crate) fn encode(participant: &Participant) -> Result<String> {
    let Some(wire) = participant.wire() else {
        return Err(DirectoryError::FormatMismatch {
            expected: "WIRE",
            found: participant.format().as_str(),
        });
    };

    let mut line = LineBuilder::with_length(RECORD_LENGTH);
    line.push("routingNumber", participant.routing_number(), ROUTING_NUMBER)?;
    line.push("telegraphicName", &wire.telegraphic_name, TELEGRAPHIC_NAME)?;
    line.push("customerName", participant.customer_name(), CUSTOMER_NAME)?;
    line.push("state", &wire.location.state, STATE)?;
    line.push("city", &wire.location.city, CITY)?;
    line.push("fundsTransferStatus", &wire.funds_transfer_status, FUNDS_TRANSFER_STATUS)?;
    line.push(
        "fundsSettlementOnlyStatus",
        &wire.funds_settlement_only_status,
        FUNDS_SETTLEMENT_ONLY_STATUS,
    )?;
    line.push(
        "bookEntrySecuritiesTransferStatus",
        &wire.book_entry_securities_transfer_status,
        BOOK_ENTRY_SECURITIES_TRANSFER_STATUS,
    )?;
    line.push("revisedDate", &wire.revised_date, REVISED_DATE)?;
    Ok(line.finish(RECORD_LENGTH))
}
