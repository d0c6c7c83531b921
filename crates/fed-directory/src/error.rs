//! Модуль ошибок загрузки справочников участников.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Главная ошибка работы со справочниками FedACH / Fedwire.
///
/// Объединяет ошибки чтения потока, проверки длины строки,
/// выбора формата по имени файла и записи fixed-width строк.
#[derive(Debug, Error)]
pub enum DirectoryError {
    // === Ошибки формата ===
    /// Длина строки не совпадает с длиной записи формата.
    #[error("line {line}: must be {required} characters and found {actual}")]
    RecordWrongLength {
        /// Номер строки (1-based).
        line: usize,
        /// Длина записи, требуемая форматом.
        required: usize,
        /// Фактическая длина строки в символах.
        actual: usize,
    },

    // === Ошибки выбора источника ===
    /// По имени файла невозможно определить тип справочника.
    #[error("cannot determine directory type for '{name}'")]
    UnknownDirectoryType {
        /// Имя файла, переданное селектору.
        name: String,
    },

    /// Не удалось открыть файл справочника.
    #[error("failed to open '{}': {source}", path.display())]
    Open {
        /// Путь к файлу.
        path: PathBuf,
        /// Исходная I/O ошибка.
        #[source]
        source: io::Error,
    },

    // === I/O ошибки ===
    /// Ошибка ввода/вывода при чтении или записи потока.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // === Ошибки записи ===
    /// Участник другого формата передан кодировщику.
    #[error("expected {expected} participant, got {found}")]
    FormatMismatch {
        /// Формат кодировщика.
        expected: &'static str,
        /// Формат участника.
        found: &'static str,
    },

    /// Значение поля шире своей колонки.
    #[error("field '{field}' is {actual} characters wide, column holds {width}")]
    FieldOverflow {
        /// Имя поля.
        field: &'static str,
        /// Ширина колонки.
        width: usize,
        /// Фактическая длина значения.
        actual: usize,
    },
}

/// Вид ошибки без данных, для проверки через [`ErrorList::has`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// [`DirectoryError::RecordWrongLength`].
    RecordWrongLength,
    /// [`DirectoryError::UnknownDirectoryType`].
    UnknownDirectoryType,
    /// [`DirectoryError::Open`].
    Open,
    /// [`DirectoryError::Io`].
    Io,
    /// [`DirectoryError::FormatMismatch`].
    FormatMismatch,
    /// [`DirectoryError::FieldOverflow`].
    FieldOverflow,
}

impl DirectoryError {
    /// Возвращает вид ошибки.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::RecordWrongLength { .. } => ErrorKind::RecordWrongLength,
            Self::UnknownDirectoryType { .. } => ErrorKind::UnknownDirectoryType,
            Self::Open { .. } => ErrorKind::Open,
            Self::Io(_) => ErrorKind::Io,
            Self::FormatMismatch { .. } => ErrorKind::FormatMismatch,
            Self::FieldOverflow { .. } => ErrorKind::FieldOverflow,
        }
    }
}

/// Удобный alias для Result с DirectoryError.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Упорядоченный список ошибок одной попытки загрузки.
///
/// Неудачная загрузка возвращает именно список, а не одну ошибку:
/// селектор добавляет свои ошибки к ошибкам разбора.
#[derive(Debug, Default)]
pub struct ErrorList(Vec<DirectoryError>);

impl ErrorList {
    /// Создаёт пустой список.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Добавляет ошибку в конец списка.
    pub fn add(&mut self, err: impl Into<DirectoryError>) {
        self.0.push(err.into());
    }

    /// Проверяет, есть ли в списке ошибка заданного вида.
    ///
    /// # Пример
    ///
    /// ```
    /// use fed_directory::error::{DirectoryError, ErrorKind, ErrorList};
    ///
    /// let mut errors = ErrorList::new();
    /// errors.add(DirectoryError::RecordWrongLength { line: 1, required: 155, actual: 10 });
    ///
    /// assert!(errors.has(ErrorKind::RecordWrongLength));
    /// assert!(!errors.has(ErrorKind::Open));
    /// ```
    #[must_use]
    pub fn has(&self, kind: ErrorKind) -> bool {
        self.0.iter().any(|err| err.kind() == kind)
    }

    /// Количество ошибок.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Пуст ли список.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Первая ошибка (причина остановки загрузки).
    #[must_use]
    pub fn first(&self) -> Option<&DirectoryError> {
        self.0.first()
    }

    /// Итератор по ошибкам в порядке добавления.
    pub fn iter(&self) -> std::slice::Iter<'_, DirectoryError> {
        self.0.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("no errors");
        }
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.first().map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl From<DirectoryError> for ErrorList {
    fn from(err: DirectoryError) -> Self {
        Self(vec![err])
    }
}

impl IntoIterator for ErrorList {
    type Item = DirectoryError;
    type IntoIter = std::vec::IntoIter<DirectoryError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a DirectoryError;
    type IntoIter = std::slice::Iter<'a, DirectoryError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Проверяет результат загрузки на наличие ошибки заданного вида.
///
/// Для `Ok` всегда возвращает `false`.
pub fn has<T>(result: &std::result::Result<T, ErrorList>, kind: ErrorKind) -> bool {
    match result {
        Ok(_) => false,
        Err(list) => list.has(kind),
    }
}
