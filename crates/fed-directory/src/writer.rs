//! Потоковый writer для записей справочника.
//!
//! Предоставляет [`ParticipantWriter`] для записи участников обратно
//! в fixed-width формат в любой тип, реализующий [`Write`].

use std::{
    io::{BufWriter, Write},
    marker::PhantomData,
};

use crate::{error::Result, format::RecordFormat, participant::Participant};

/// Потоковый writer для записей справочника.
///
/// Каждая запись пишется одной строкой с завершающим `\n`.
/// Использует буферизацию для эффективного I/O.
///
/// # Type Parameters
///
/// - `W`: целевой поток (реализует [`Write`])
/// - `F`: формат (реализует [`RecordFormat`])
///
/// # Пример
///
/// ```
/// use fed_directory::{
///     format::Wire,
///     participant::{Details, Participant, WireDetails},
///     writer::ParticipantWriter,
/// };
///
/// let p = Participant::new("021000021", "JPMORGAN CHASE", Details::Wire(WireDetails::default()));
///
/// let mut output = Vec::new();
/// let mut writer = ParticipantWriter::<_, Wire>::new(&mut output);
/// writer.write(&p).unwrap();
/// writer.flush().unwrap();
/// drop(writer);
///
/// assert_eq!(output.len(), 102);
/// ```
pub struct ParticipantWriter<W: Write, F: RecordFormat> {
    inner: BufWriter<W>,
    _format: PhantomData<F>,
    /// Счётчик записанных строк.
    records_written: usize,
}

impl<W: Write, F: RecordFormat> ParticipantWriter<W, F> {
    /// Создаёт новый writer.
    pub fn new(writer: W) -> Self {
        Self { inner: BufWriter::new(writer), _format: PhantomData, records_written: 0 }
    }

    /// Создаёт writer с указанным размером буфера.
    pub fn with_capacity(capacity: usize, writer: W) -> Self {
        Self {
            inner: BufWriter::with_capacity(capacity, writer),
            _format: PhantomData,
            records_written: 0,
        }
    }

    /// Записывает одного участника.
    ///
    /// Строка кодируется целиком до записи, поэтому при ошибке кодирования
    /// в поток ничего не попадает.
    pub fn write(&mut self, participant: &Participant) -> Result<()> {
        let line = F::encode(participant)?;
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }

    /// Записывает несколько участников.
    pub fn write_all<'a, I>(&mut self, participants: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Participant>,
    {
        for participant in participants {
            self.write(participant)?;
        }
        Ok(())
    }

    /// Принудительно сбрасывает буфер.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Возвращает количество записанных строк.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Получает ссылку на внутренний writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }

    /// Извлекает внутренний writer (с предварительным flush).
    ///
    /// Возвращает ошибку, если flush не удался.
    pub fn into_inner(self) -> std::result::Result<W, std::io::IntoInnerError<BufWriter<W>>> {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::DirectoryError,
        format::{Ach, Wire},
        participant::{AchDetails, AchLocation, Details, WireDetails},
        reader::ParticipantReader,
    };

    fn sample_participant() -> Participant {
        Participant::new(
            "091000019",
            "WELLS FARGO BANK, NA",
            Details::Ach(AchDetails {
                office_code: "O".to_string(),
                servicing_frb_number: "091000080".to_string(),
                record_type_code: "1".to_string(),
                revised_date: "081720".to_string(),
                new_routing_number: "000000000".to_string(),
                location: AchLocation {
                    address: "MAC N9301-041".to_string(),
                    city: "MINNEAPOLIS".to_string(),
                    state: "MN".to_string(),
                    postal_code: "55479".to_string(),
                    postal_code_extension: "0000".to_string(),
                },
                phone_number: "8004282817".to_string(),
                status_code: "1".to_string(),
                view_code: "1".to_string(),
            }),
        )
    }

    #[test]
    fn test_written_lines_read_back() {
        let mut output = Vec::new();
        {
            let mut writer = ParticipantWriter::<_, Ach>::new(&mut output);
            writer.write_all([&sample_participant(), &sample_participant()]).unwrap();
            writer.flush().unwrap();
        }

        let read: Result<Vec<_>> = ParticipantReader::<_, Ach>::new(output.as_slice()).collect();
        let read = read.unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0], sample_participant());
    }

    #[test]
    fn test_failed_encode_writes_nothing() {
        let wire = Participant::new("021000021", "X", Details::Wire(WireDetails::default()));
        let mut writer = ParticipantWriter::<_, Ach>::new(Vec::new());

        assert!(matches!(writer.write(&wire), Err(DirectoryError::FormatMismatch { .. })));
        assert_eq!(writer.records_written(), 0);
        assert!(writer.into_inner().unwrap().is_empty());
    }

    #[test]
    fn test_records_written_counter() {
        let p = Participant::new("021000021", "X", Details::Wire(WireDetails::default()));
        let mut writer = ParticipantWriter::<_, Wire>::with_capacity(64, Vec::new());

        assert_eq!(writer.records_written(), 0);
        writer.write(&p).unwrap();
        assert_eq!(writer.records_written(), 1);
        writer.write(&p).unwrap();
        assert_eq!(writer.records_written(), 2);
    }
}
