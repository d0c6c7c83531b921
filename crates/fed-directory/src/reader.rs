//! Потоковый reader для записей справочника.
//!
//! Предоставляет [`ParticipantReader`] — итератор, который читает
//! fixed-width строки из любого источника, реализующего [`Read`],
//! и декодирует их в [`Participant`].

use std::{
    borrow::Cow,
    io::{BufRead, BufReader, Read},
    marker::PhantomData,
};

use crate::{error::Result, format::RecordFormat, participant::Participant};

/// Потоковый reader для записей справочника.
///
/// Читает по одной строке (разделители `\n` или `\r\n`, последняя строка
/// может быть без перевода строки, `\r` в её конце тоже отбрасывается).
/// Каждый байт, не являющийся частью корректной последовательности UTF-8,
/// заменяется на отдельный `U+FFFD` и считается одним символом.
///
/// # Type Parameters
///
/// - `R`: источник данных (реализует [`Read`])
/// - `F`: формат (реализует [`RecordFormat`])
///
/// # Пример
///
/// ```
/// use fed_directory::{format::Wire, reader::ParticipantReader};
///
/// let input = format!("{:<101}\n", "021000021JPMCHASE");
/// let reader = ParticipantReader::<_, Wire>::new(input.as_bytes());
///
/// let participants: Result<Vec<_>, _> = reader.collect();
/// assert_eq!(participants.unwrap()[0].routing_number(), "021000021");
/// ```
pub struct ParticipantReader<R, F> {
    inner: BufReader<R>,
    _format: PhantomData<F>,
    /// Буфер текущей строки.
    buf: Vec<u8>,
    /// Счётчик прочитанных строк.
    lines_read: usize,
    /// Счётчик успешно декодированных записей.
    records_read: usize,
    /// Флаг достижения EOF или ошибки.
    finished: bool,
}

impl<R: Read, F: RecordFormat> ParticipantReader<R, F> {
    /// Создаёт новый reader.
    ///
    /// Входной reader оборачивается в [`BufReader`] для буферизации.
    pub fn new(reader: R) -> Self {
        Self::from_buf_reader(BufReader::new(reader))
    }

    /// Создаёт reader с указанным размером буфера.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self::from_buf_reader(BufReader::with_capacity(capacity, reader))
    }

    fn from_buf_reader(inner: BufReader<R>) -> Self {
        Self {
            inner,
            _format: PhantomData,
            buf: Vec::with_capacity(F::RECORD_LENGTH + 2),
            lines_read: 0,
            records_read: 0,
            finished: false,
        }
    }

    /// Возвращает количество успешно прочитанных записей.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Возвращает количество прочитанных строк, включая ошибочную.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Получает ссылку на внутренний reader.
    #[must_use]
    pub fn get_ref(&self) -> &R {
        self.inner.get_ref()
    }

    /// Извлекает внутренний reader.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    /// Читает следующую строку в буфер без разделителя. `false` на EOF.
    fn next_line(&mut self) -> Result<bool> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        self.lines_read += 1;
        Ok(true)
    }
}

impl<R: Read, F: RecordFormat> Iterator for ParticipantReader<R, F> {
    type Item = Result<Participant>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let decoded = match self.next_line() {
            Ok(true) => F::decode_line(&decode_lossy(&self.buf), self.lines_read),
            Ok(false) => {
                self.finished = true;
                return None;
            }
            Err(e) => Err(e),
        };

        match decoded {
            Ok(participant) => {
                self.records_read += 1;
                Some(Ok(participant))
            }
            Err(e) => {
                self.finished = true; // Остановка при ошибке
                Some(Err(e))
            }
        }
    }
}

/// Декодирует строку, заменяя каждый некорректный байт на `U+FFFD`.
///
/// В отличие от [`String::from_utf8_lossy`], обрезанная многобайтовая
/// последовательность (например `E9 A9`) даёт по символу на байт.
fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(line) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(line);
    }

    let mut line = String::with_capacity(bytes.len() + 2);
    for chunk in bytes.utf8_chunks() {
        line.push_str(chunk.valid());
        line.extend(std::iter::repeat_n(char::REPLACEMENT_CHARACTER, chunk.invalid().len()));
    }
    Cow::Owned(line)
}
