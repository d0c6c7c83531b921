//! Participant record types.

use serde::{Deserialize, Serialize};

use crate::format::Format;

/// Delivery address of an ACH participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchLocation {
    /// Street address, trimmed.
    pub address: String,
    /// City, trimmed.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Five-digit postal code.
    pub postal_code: String,
    /// Four-digit postal code extension.
    pub postal_code_extension: String,
}

/// Fields reported only by the FedACH directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchDetails {
    /// Main office or branch: `O` = main, `B` = branch.
    pub office_code: String,
    /// Routing number of the servicing Fed's main office.
    pub servicing_frb_number: String,
    /// Which routing number ACH items are sent to:
    ///
    /// - `0` institution is a Federal Reserve Bank
    /// - `1` send items to the customer routing number
    /// - `2` send items to the customer using the new routing number field
    pub record_type_code: String,
    /// Date of last revision (`MMDDYY`), or blank.
    pub revised_date: String,
    /// Routing number resulting from a merger or renumber.
    pub new_routing_number: String,
    pub location: AchLocation,
    /// Ten-digit phone number.
    pub phone_number: String,
    /// Receiver code of the institution. `1` = receives Gov/Comm.
    pub status_code: String,
    pub view_code: String,
}

impl AchDetails {
    /// Whether the record describes a main (head) office.
    #[must_use]
    pub fn is_main_office(&self) -> bool {
        self.office_code == "O"
    }
}

/// Location of a Fedwire participant. Fedwire reports no street or postal fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireLocation {
    /// City, trimmed.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
}

/// Fields reported only by the Fedwire directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDetails {
    /// Short (telegraphic) name, trimmed.
    pub telegraphic_name: String,
    pub location: WireLocation,
    /// `Y` eligible, `N` ineligible.
    pub funds_transfer_status: String,
    /// `S` settlement-only, blank otherwise.
    pub funds_settlement_only_status: String,
    /// `Y` eligible, `N` ineligible.
    pub book_entry_securities_transfer_status: String,
    /// Date of last revision (`YYYYMMDD`), or blank.
    pub revised_date: String,
}

impl WireDetails {
    #[must_use]
    pub fn is_funds_transfer_eligible(&self) -> bool {
        self.funds_transfer_status == "Y"
    }

    #[must_use]
    pub fn is_settlement_only(&self) -> bool {
        self.funds_settlement_only_status == "S"
    }

    #[must_use]
    pub fn is_book_entry_eligible(&self) -> bool {
        self.book_entry_securities_transfer_status == "Y"
    }
}

/// Format-specific part of a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum Details {
    Ach(AchDetails),
    Wire(WireDetails),
}

/// One directory entry.
///
/// The customer name is trimmed on construction and the record exposes only
/// shared accessors, so a participant never changes after it is built.
///
/// # Example
///
/// ```
/// use fed_directory::participant::{Details, Participant, WireDetails};
///
/// let p = Participant::new("011000015", "  FEDERAL RESERVE BANK ", Details::Wire(WireDetails::default()));
/// assert_eq!(p.customer_name(), "FEDERAL RESERVE BANK");
/// assert!(p.wire().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawParticipant")]
pub struct Participant {
    routing_number: String,
    customer_name: String,
    details: Details,
}

/// Wire shape of [`Participant`]; deserialized values go through
/// [`Participant::new`] so the name is trimmed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParticipant {
    routing_number: String,
    customer_name: String,
    details: Details,
}

impl From<RawParticipant> for Participant {
    fn from(raw: RawParticipant) -> Self {
        Self::new(raw.routing_number, raw.customer_name, raw.details)
    }
}

impl Participant {
    /// Builds a participant. The routing number is stored verbatim, the
    /// customer name is trimmed.
    pub fn new(
        routing_number: impl Into<String>,
        customer_name: impl AsRef<str>,
        details: Details,
    ) -> Self {
        Self {
            routing_number: routing_number.into(),
            customer_name: customer_name.as_ref().trim().to_string(),
            details,
        }
    }

    /// Routing number as stored. Decoded records always carry the 9-character
    /// column; [`Participant::new`] does not check the length.
    #[must_use]
    pub fn routing_number(&self) -> &str {
        &self.routing_number
    }

    /// The institution's trimmed display name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[must_use]
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Format the participant was decoded from.
    #[must_use]
    pub const fn format(&self) -> Format {
        match self.details {
            Details::Ach(_) => Format::Ach,
            Details::Wire(_) => Format::Wire,
        }
    }

    #[must_use]
    pub fn ach(&self) -> Option<&AchDetails> {
        match &self.details {
            Details::Ach(ach) => Some(ach),
            Details::Wire(_) => None,
        }
    }

    #[must_use]
    pub fn wire(&self) -> Option<&WireDetails> {
        match &self.details {
            Details::Wire(wire) => Some(wire),
            Details::Ach(_) => None,
        }
    }

    /// City from whichever location the format reports.
    #[must_use]
    pub fn city(&self) -> &str {
        match &self.details {
            Details::Ach(ach) => &ach.location.city,
            Details::Wire(wire) => &wire.location.city,
        }
    }

    /// State code from whichever location the format reports.
    #[must_use]
    pub fn state(&self) -> &str {
        match &self.details {
            Details::Ach(ach) => &ach.location.state,
            Details::Wire(wire) => &wire.location.state,
        }
    }

    /// Date of last revision in the format's own layout.
    #[must_use]
    pub fn revised_date(&self) -> &str {
        match &self.details {
            Details::Ach(ach) => &ach.revised_date,
            Details::Wire(wire) => &wire.revised_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ach_participant() -> Participant {
        Participant::new(
            "011000015",
            "FEDERAL RESERVE BANK",
            Details::Ach(AchDetails {
                office_code: "O".to_string(),
                location: AchLocation {
                    city: "ATLANTA".to_string(),
                    state: "GA".to_string(),
                    ..AchLocation::default()
                },
                revised_date: "122415".to_string(),
                ..AchDetails::default()
            }),
        )
    }

    #[test]
    fn common_accessors_follow_the_payload() {
        let p = ach_participant();

        assert_eq!(p.format(), Format::Ach);
        assert_eq!(p.city(), "ATLANTA");
        assert_eq!(p.state(), "GA");
        assert_eq!(p.revised_date(), "122415");
        assert!(p.wire().is_none());
        assert!(p.ach().is_some_and(AchDetails::is_main_office));
    }

    #[test]
    fn routing_number_is_not_trimmed() {
        let p = Participant::new(" 1100001 ", "X", Details::Wire(WireDetails::default()));
        assert_eq!(p.routing_number(), " 1100001 ");
    }

    #[test]
    fn wire_flags() {
        let wire = WireDetails {
            funds_transfer_status: "Y".to_string(),
            funds_settlement_only_status: "S".to_string(),
            book_entry_securities_transfer_status: "N".to_string(),
            ..WireDetails::default()
        };

        assert!(wire.is_funds_transfer_eligible());
        assert!(wire.is_settlement_only());
        assert!(!wire.is_book_entry_eligible());
    }

    #[test]
    fn serializes_with_format_tag() {
        let value = serde_json::to_value(ach_participant()).unwrap();

        assert_eq!(value["routingNumber"], "011000015");
        assert_eq!(value["customerName"], "FEDERAL RESERVE BANK");
        assert_eq!(value["details"]["format"], "ach");
        assert_eq!(value["details"]["location"]["city"], "ATLANTA");

        let back: Participant = serde_json::from_value(value).unwrap();
        assert_eq!(back, ach_participant());
    }

    #[test]
    fn deserialize_trims_customer_name() {
        let mut value = serde_json::to_value(ach_participant()).unwrap();
        value["customerName"] = "  FEDERAL RESERVE BANK  ".into();

        let p: Participant = serde_json::from_value(value).unwrap();
        assert_eq!(p.customer_name(), "FEDERAL RESERVE BANK");
        assert_eq!(p, ach_participant());
    }
}
