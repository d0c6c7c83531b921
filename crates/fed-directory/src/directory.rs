//! Directory load and lookup.
//!
//! A [`Directory`] is built by a single sequential pass over a stream of
//! fixed-width lines, then a second pass over the decoded records that groups
//! them by customer name. Once built it is immutable; lookups behave the same
//! whichever format backs it.

use std::{collections::HashMap, io::Read, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
    error::ErrorList,
    format::{Ach, Format, RecordFormat, Wire},
    participant::Participant,
    reader::ParticipantReader,
};

/// Index of participants keyed by routing number.
pub type RoutingNumberIndex = HashMap<String, Arc<Participant>>;

/// Index of participants keyed by trimmed customer name, in file order.
pub type CustomerNameIndex = HashMap<String, Vec<Arc<Participant>>>;

/// The participants of one loaded directory file plus their lookup indexes.
///
/// # Example
///
/// ```
/// use fed_directory::{Directory, format::Wire};
///
/// let input = format!(
///     "{:<101}\n{:<101}\n",
///     "021000021JPMCHASE          JPMORGAN CHASE BANK, NA",
///     "021000089CITIBANK NYC      CITIBANK NA",
/// );
/// let directory = Directory::load::<Wire, _>(input.as_bytes()).unwrap();
///
/// assert_eq!(directory.len(), 2);
/// let citi = directory.by_routing_number("021000089").unwrap();
/// assert_eq!(citi.customer_name(), "CITIBANK NA");
/// assert_eq!(directory.by_customer_name("JPMORGAN CHASE BANK, NA").len(), 1);
/// assert!(directory.by_routing_number("000000000").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Directory {
    format: Format,
    participants: Vec<Arc<Participant>>,
    routing_number_index: RoutingNumberIndex,
    customer_name_index: CustomerNameIndex,
}

impl Directory {
    /// Loads every line of `reader` as a record of format `F`.
    ///
    /// The first line that fails the length check (or a read error) stops the
    /// load; the returned [`ErrorList`] holds that error and no directory is
    /// produced. An empty stream loads an empty directory.
    ///
    /// When a routing number repeats, the index keeps the later line while
    /// [`participants`](Self::participants) keeps both.
    pub fn load<F: RecordFormat, R: Read>(reader: R) -> Result<Self, ErrorList> {
        let mut participants = Vec::new();
        let mut routing_number_index = RoutingNumberIndex::new();

        for (idx, result) in ParticipantReader::<_, F>::new(reader).enumerate() {
            let participant = match result {
                Ok(participant) => Arc::new(participant),
                Err(e) => {
                    warn!(format = %F::FORMAT, line = idx + 1, error = %e, "directory load failed");
                    return Err(e.into());
                }
            };
            let key = participant.routing_number().to_string();
            if routing_number_index.insert(key, Arc::clone(&participant)).is_some() {
                debug!(
                    routing_number = participant.routing_number(),
                    line = idx + 1,
                    "duplicate routing number replaces earlier record"
                );
            }
            participants.push(participant);
        }

        let customer_name_index = index_customer_names(&participants);
        info!(
            format = %F::FORMAT,
            records = participants.len(),
            routing_numbers = routing_number_index.len(),
            names = customer_name_index.len(),
            "directory loaded"
        );

        Ok(Self { format: F::FORMAT, participants, routing_number_index, customer_name_index })
    }

    /// Loads `reader` with a format chosen at runtime.
    pub fn load_format<R: Read>(format: Format, reader: R) -> Result<Self, ErrorList> {
        match format {
            Format::Ach => Self::load::<Ach, _>(reader),
            Format::Wire => Self::load::<Wire, _>(reader),
        }
    }

    /// Format the directory was loaded from.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    /// The participant whose routing number is exactly `routing_number`.
    ///
    /// No normalization and no checksum validation is applied to the query.
    #[must_use]
    pub fn by_routing_number(&self, routing_number: &str) -> Option<&Participant> {
        self.routing_number_index.get(routing_number).map(Arc::as_ref)
    }

    /// Every participant whose trimmed customer name is exactly `name`, in
    /// file order. Empty when there is none.
    #[must_use]
    pub fn by_customer_name(&self, name: &str) -> &[Arc<Participant>] {
        self.customer_name_index.get(name).map_or(&[], Vec::as_slice)
    }

    /// All participants in file order, duplicate routing numbers included.
    #[must_use]
    pub fn participants(&self) -> &[Arc<Participant>] {
        &self.participants
    }

    #[must_use]
    pub fn routing_number_index(&self) -> &RoutingNumberIndex {
        &self.routing_number_index
    }

    #[must_use]
    pub fn customer_name_index(&self) -> &CustomerNameIndex {
        &self.customer_name_index
    }

    /// Number of participants (lines) loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Groups participants by customer name, keeping encounter order in each group.
fn index_customer_names(participants: &[Arc<Participant>]) -> CustomerNameIndex {
    let mut index = CustomerNameIndex::new();
    for participant in participants {
        index
            .entry(participant.customer_name().to_string())
            .or_default()
            .push(Arc::clone(participant));
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn ach_line(routing: &str, name: &str) -> String {
        format!("{routing}O0110000151122415000000000{name:<36}{:<84}", "")
    }

    fn wire_line(routing: &str, name: &str) -> String {
        format!("{routing}{:<18}{name:<36}{:<38}", "", "")
    }

    fn lines(lines: &[String]) -> String {
        lines.iter().map(|l| format!("{l}\n")).collect()
    }

    #[test]
    fn empty_input_loads_empty_directory() {
        let directory = Directory::load::<Ach, _>(&b""[..]).unwrap();

        assert!(directory.is_empty());
        assert!(directory.routing_number_index().is_empty());
        assert!(directory.customer_name_index().is_empty());
        assert_eq!(directory.format(), Format::Ach);
    }

    #[test]
    fn duplicate_routing_number_keeps_last_line() {
        let input = lines(&[ach_line("999999999", "FIRST BANK"), ach_line("999999999", "SECOND BANK")]);
        let directory = Directory::load::<Ach, _>(input.as_bytes()).unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.routing_number_index().len(), 1);
        assert_eq!(directory.by_routing_number("999999999").unwrap().customer_name(), "SECOND BANK");
        assert_eq!(directory.participants()[0].customer_name(), "FIRST BANK");
    }

    #[test]
    fn customer_name_groups_keep_file_order() {
        let input = lines(&[
            ach_line("324377516", "LOWER VALLEY CU"),
            ach_line("011000015", "FEDERAL RESERVE BANK"),
            ach_line("325182344", "LOWER VALLEY CU"),
            ach_line("325183657", "LOWER VALLEY CU"),
        ]);
        let directory = Directory::load::<Ach, _>(input.as_bytes()).unwrap();

        let group: Vec<_> =
            directory.by_customer_name("LOWER VALLEY CU").iter().map(|p| p.routing_number()).collect();
        assert_eq!(group, ["324377516", "325182344", "325183657"]);
        assert!(directory.by_customer_name("LOWER VALLEY").is_empty());
        assert!(directory.by_customer_name(" LOWER VALLEY CU").is_empty());
    }

    #[test]
    fn routing_lookup_is_exact() {
        let input = lines(&[wire_line("021000021", "JPMORGAN CHASE")]);
        let directory = Directory::load::<Wire, _>(input.as_bytes()).unwrap();

        assert!(directory.by_routing_number("021000021").is_some());
        assert!(directory.by_routing_number("21000021").is_none());
        assert!(directory.by_routing_number("021000021 ").is_none());
    }

    #[test]
    fn wrong_length_fails_the_whole_load() {
        let input = lines(&[wire_line("021000021", "A"), "021000089SHORT".to_string(), wire_line("026009593", "B")]);
        let errors = Directory::load::<Wire, _>(input.as_bytes()).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors.has(ErrorKind::RecordWrongLength));
        assert_eq!(errors.to_string(), "line 2: must be 101 characters and found 14");
    }

    #[test]
    fn ach_line_in_wire_load_is_rejected() {
        let input = lines(&[ach_line("011000015", "FEDERAL RESERVE BANK")]);
        let errors = Directory::load_format(Format::Wire, input.as_bytes()).unwrap_err();

        assert!(matches!(
            errors.first(),
            Some(crate::error::DirectoryError::RecordWrongLength { required: 101, actual: 155, .. })
        ));
    }

    #[test]
    fn index_entries_share_the_listed_records() {
        let input = lines(&[wire_line("021000021", "JPMORGAN CHASE")]);
        let directory = Directory::load_format(Format::Wire, input.as_bytes()).unwrap();

        let listed = &directory.participants()[0];
        let indexed = &directory.routing_number_index()["021000021"];
        assert!(Arc::ptr_eq(listed, indexed));
        assert!(Arc::ptr_eq(listed, &directory.by_customer_name("JPMORGAN CHASE")[0]));
    }

    #[test]
    fn directory_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Directory>();
    }
}
