//! FedACH directory line layout.
//!
//! ```text
//! 011000015O0110000151122415000000000FEDERAL RESERVE BANK                1000 PEACHTREE ST N.E.              ATLANTA             GA303094470877372245711
//! ```
//!
//! Columns are character ranges, half-open. Columns 150..155 are filler.

use std::ops::Range;

use super::{FixedWidthLine, LineBuilder};
use crate::{
    error::{DirectoryError, Result},
    participant::{AchDetails, AchLocation, Details, Participant},
};

/// Line length of a FedACH record.
pub const RECORD_LENGTH: usize = 155;

pub const ROUTING_NUMBER: Range<usize> = 0..9;
pub const OFFICE_CODE: Range<usize> = 9..10;
pub const SERVICING_FRB_NUMBER: Range<usize> = 10..19;
pub const RECORD_TYPE_CODE: Range<usize> = 19..20;
pub const REVISED_DATE: Range<usize> = 20..26;
pub const NEW_ROUTING_NUMBER: Range<usize> = 26..35;
pub const CUSTOMER_NAME: Range<usize> = 35..71;
pub const ADDRESS: Range<usize> = 71..107;
pub const CITY: Range<usize> = 107..127;
pub const STATE: Range<usize> = 127..129;
pub const POSTAL_CODE: Range<usize> = 129..134;
pub const POSTAL_CODE_EXTENSION: Range<usize> = 134..138;
pub const PHONE_NUMBER: Range<usize> = 138..148;
pub const STATUS_CODE: Range<usize> = 148..149;
pub const VIEW_CODE: Range<usize> = 149..150;

pub(crate) fn decode(line: &FixedWidthLine<'_>) -> Participant {
    let details = AchDetails {
        office_code: line.field(OFFICE_CODE).to_string(),
        servicing_frb_number: line.field(SERVICING_FRB_NUMBER).to_string(),
        record_type_code: line.field(RECORD_TYPE_CODE).to_string(),
        revised_date: line.field(REVISED_DATE).to_string(),
        new_routing_number: line.field(NEW_ROUTING_NUMBER).to_string(),
        location: AchLocation {
            address: line.trimmed(ADDRESS).to_string(),
            city: line.trimmed(CITY).to_string(),
            state: line.field(STATE).to_string(),
            postal_code: line.field(POSTAL_CODE).to_string(),
            postal_code_extension: line.field(POSTAL_CODE_EXTENSION).to_string(),
        },
        phone_number: line.field(PHONE_NUMBER).to_string(),
        status_code: line.field(STATUS_CODE).to_string(),
        view_code: line.field(VIEW_CODE).to_string(),
    };
    Participant::new(line.field(ROUTING_NUMBER), line.field(CUSTOMER_NAME), Details::Ach(details))
}

pub(crate) fn encode(participant: &Participant) -> Result<String> {
    let Some(ach) = participant.ach() else {
        return Err(DirectoryError::FormatMismatch {
            expected: "ACH",
            found: participant.format().as_str(),
        });
    };

    let mut line = LineBuilder::with_length(RECORD_LENGTH);
    line.push("routingNumber", participant.routing_number(), ROUTING_NUMBER)?;
    line.push("officeCode", &ach.office_code, OFFICE_CODE)?;
    line.push("servicingFrbNumber", &ach.servicing_frb_number, SERVICING_FRB_NUMBER)?;
    line.push("recordTypeCode", &ach.record_type_code, RECORD_TYPE_CODE)?;
    line.push("revisedDate", &ach.revised_date, REVISED_DATE)?;
    line.push("newRoutingNumber", &ach.new_routing_number, NEW_ROUTING_NUMBER)?;
    line.push("customerName", participant.customer_name(), CUSTOMER_NAME)?;
    line.push("address", &ach.location.address, ADDRESS)?;
    line.push("city", &ach.location.city, CITY)?;
    line.push("state", &ach.location.state, STATE)?;
    line.push("postalCode", &ach.location.postal_code, POSTAL_CODE)?;
    line.push("postalCodeExtension", &ach.location.postal_code_extension, POSTAL_CODE_EXTENSION)?;
    line.push("phoneNumber", &ach.phone_number, PHONE_NUMBER)?;
    line.push("statusCode", &ach.status_code, STATUS_CODE)?;
    line.push("viewCode", &ach.view_code, VIEW_CODE)?;
    Ok(line.finish(RECORD_LENGTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Ach, RecordFormat};

    const FRB_ATLANTA: &str = "011000015O0110000151122415000000000FEDERAL RESERVE BANK                1000 PEACHTREE ST N.E.              ATLANTA             GA303094470877372245711     ";

    #[test]
    fn decodes_every_column() {
        assert_eq!(FRB_ATLANTA.len(), RECORD_LENGTH);
        let p = Ach::decode_line(FRB_ATLANTA, 1).unwrap();
        let ach = p.ach().unwrap();

        assert_eq!(p.routing_number(), "011000015");
        assert_eq!(p.customer_name(), "FEDERAL RESERVE BANK");
        assert_eq!(ach.office_code, "O");
        assert_eq!(ach.servicing_frb_number, "011000015");
        assert_eq!(ach.record_type_code, "1");
        assert_eq!(ach.revised_date, "122415");
        assert_eq!(ach.new_routing_number, "000000000");
        assert_eq!(ach.location.address, "1000 PEACHTREE ST N.E.");
        assert_eq!(ach.location.city, "ATLANTA");
        assert_eq!(ach.location.state, "GA");
        assert_eq!(ach.location.postal_code, "30309");
        assert_eq!(ach.location.postal_code_extension, "4470");
        assert_eq!(ach.phone_number, "8773722457");
        assert_eq!(ach.status_code, "1");
        assert_eq!(ach.view_code, "1");
    }

    #[test]
    fn untrimmed_columns_keep_padding() {
        let line = format!("{:<155}", "1234 678 O");
        let p = Ach::decode_line(&line, 1).unwrap();

        assert_eq!(p.routing_number(), "1234 678 ");
        assert_eq!(p.state(), "  ");
        assert_eq!(p.customer_name(), "");
    }

    #[test]
    fn encode_reproduces_the_line() {
        let p = Ach::decode_line(FRB_ATLANTA, 1).unwrap();
        assert_eq!(Ach::encode(&p).unwrap(), FRB_ATLANTA);
    }

    #[test]
    fn encode_rejects_wire_participant() {
        let p = Participant::new("021000021", "X", Details::Wire(Default::default()));
        assert!(matches!(
            Ach::encode(&p),
            Err(DirectoryError::FormatMismatch { expected: "ACH", found: "WIRE" })
        ));
    }
}
