use address_book::utils::error::{AddressBookError, ErrorSeverity};
use address_book::utils::logger;
use address_book::{open_from_config, CliConfig, Command, Contact, CsvAddressBook};
use anyhow::Context;
use clap::Parser;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 合併命令列與設定檔
    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    logger::init_cli_logger(settings.verbose, settings.log_format);
    tracing::debug!("Effective settings: {:?}", settings);

    let book = match open_from_config(&settings) {
        Ok(book) => book,
        Err(e) => exit_with(e),
    };

    let output = match answer(&book, &cli.command, cli.json) {
        Ok(output) => output,
        Err(e) => exit_with(e),
    };

    println!("{}", output);
    Ok(())
}

fn answer(book: &CsvAddressBook, command: &Command, as_json: bool) -> anyhow::Result<String> {
    let output = match command {
        Command::CountGender { gender } => {
            let count = book.count_by_gender(*gender);
            if as_json {
                json!({ "gender": gender, "count": count }).to_string()
            } else {
                format!("{} {}", count, gender)
            }
        }
        Command::Oldest => render_contacts(&book.find_oldest_people(), as_json)?,
        Command::AgeDiff { first, second } => {
            let days = book.age_difference_in_days(first, second)?;
            if as_json {
                json!({ "first": first, "second": second, "days": days }).to_string()
            } else {
                format!("{} days", days)
            }
        }
        Command::List => render_contacts(&book.find_all(), as_json)?,
    };
    Ok(output)
}

fn render_contacts(contacts: &[Contact], as_json: bool) -> anyhow::Result<String> {
    if as_json {
        return serde_json::to_string_pretty(contacts).context("failed to render contacts as JSON");
    }
    Ok(contacts
        .iter()
        .map(Contact::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn exit_with(err: impl Into<anyhow::Error>) -> ! {
    let err: anyhow::Error = err.into();

    let Some(e) = err.downcast_ref::<AddressBookError>() else {
        tracing::error!("❌ {:#}", err);
        eprintln!("❌ {:#}", err);
        std::process::exit(1);
    };

    tracing::error!(
        "❌ Address book query failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
