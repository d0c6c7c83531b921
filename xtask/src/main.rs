//! # xtask - Автоматизация сборки проекта
//!
//! Этот крейт предоставляет команды автоматизации сборки для воркспейса.
//!
//! См. [`HELP_TEXT`] для полного списка доступных команд и информации по использованию.
use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use fed_directory::source;
use xshell::{Shell, cmd};

/// Текст справки для команды xtask.
///
/// Эта константа содержит полное сообщение справки, которое отображается
/// при запуске `cargo run -p xtask -- help`.
pub const HELP_TEXT: &str = r#"xtask

Использование:
  cargo run -p xtask -- <команда>

Команды:
  help            Показать это сообщение
  fmt             Запустить rustfmt
  fmt-check       Проверить форматирование (CI)
  clippy          Запустить clippy (воркспейс)
  test            Запустить тесты через nextest (воркспейс)
  check-fixtures  Загрузить все фикстуры справочников и проверить длину строк
  ci              Запустить fmt-check + clippy + check-fixtures + test (профиль CI)

Примечание:
  cargo-nextest устанавливается автоматически при первом запуске тестов
"#;

/// Директория с фикстурами справочников относительно корня воркспейса.
const FIXTURES_DIR: &str = "crates/fed-directory/tests/fixtures";

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let sh = Shell::new()?;

    match cmd.as_str() {
        "help" | "-h" | "--help" => help(),
        "fmt" => Ok(cmd!(sh, "cargo +nightly fmt --all").run()?),
        "fmt-check" => Ok(cmd!(sh, "cargo +nightly fmt --all -- --check").run()?),
        "clippy" => Ok(cmd!(sh, "cargo +nightly clippy --workspace -- -D warnings").run()?),
        "test" => {
            ensure_nextest(&sh)?;
            cmd!(sh, "cargo nextest run --workspace").run()?;
            // Run doctests separately (nextest doesn't support them)
            cmd!(sh, "cargo +nightly test --workspace --doc").run()?;
            Ok(())
        }
        "check-fixtures" => check_fixtures(),
        "ci" => {
            ensure_nextest(&sh)?;
            cmd!(sh, "cargo +nightly fmt --all -- --check").run()?;
            cmd!(sh, "cargo +nightly clippy --workspace -- -D warnings").run()?;
            check_fixtures()?;
            cmd!(sh, "cargo nextest run --workspace --profile ci").run()?;
            // Run doctests separately (nextest doesn't support them)
            cmd!(sh, "cargo +nightly test --workspace --doc").run()?;
            Ok(())
        }
        other => bail!("Неизвестная команда: {other}\n\nЗапустите: cargo run -p xtask -- help"),
    }
}

/// Показать сообщение справки.
fn help() -> Result<()> {
    println!("{}", HELP_TEXT);
    Ok(())
}

/// Загрузить каждую фикстуру справочника.
///
/// Формат выбирается по имени файла, как в библиотеке. Файлы с
/// неизвестными именами пропускаются, любая ошибка разбора завершает
/// команду с ошибкой.
fn check_fixtures() -> Result<()> {
    let dir = project_root()?.join(FIXTURES_DIR);
    let mut checked = 0;

    for entry in fs::read_dir(&dir).with_context(|| format!("не удалось прочитать {}", dir.display()))? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(format) = fed_directory::format::Format::from_file_name(name) else {
            eprintln!("  пропуск {name}: неизвестный тип справочника");
            continue;
        };

        let directory = source::open(&path)
            .with_context(|| format!("фикстура {} не загружается", path.display()))?;
        eprintln!(
            "  [✓] {name}: {format}, {} записей, {} имён",
            directory.len(),
            directory.customer_name_index().len()
        );
        checked += 1;
    }

    if checked == 0 {
        bail!("в {} не найдено ни одной фикстуры", dir.display());
    }
    Ok(())
}

/// Корень воркспейса (родитель директории крейта xtask).
fn project_root() -> Result<PathBuf> {
    Ok(std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)?
        .parent()
        .context("CARGO_MANIFEST_DIR не имеет родительской директории")?
        .to_path_buf())
}

/// Проверить наличие cargo-nextest и установить при необходимости.
///
/// Эта функция проверяет, установлен ли cargo-nextest в системе.
/// Если нет — автоматически устанавливает его через `cargo install`.
fn ensure_nextest(sh: &Shell) -> Result<()> {
    // Проверяем наличие nextest (quiet чтобы не выводить в консоль)
    // Без ignore_status(): если команда завершится с ошибкой, run() вернёт Err
    if cmd!(sh, "cargo nextest --version").quiet().run().is_ok() {
        return Ok(());
    }

    // Устанавливаем nextest
    eprintln!("cargo-nextest не найден, устанавливаю...");
    cmd!(sh, "cargo install cargo-nextest --locked").run()?;
    eprintln!("cargo-nextest успешно установлен");
    Ok(())
}
