//! Interactive to-do list session.
//!
//! # Responsibility
//! - Drive the core item store through the list provider, one command
//!   per line: the command line plays the role of the list UI gestures.
//! - Keep the session alive across bad input; only `quit` or EOF ends it.

mod command;

use command::{parse, Command, ParseError, DUE_DATE_FORMAT};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use todolist_core::{
    core_version, default_log_level, init_logging, ItemListProvider, ItemStore, Section, ToDoItem,
};

fn main() {
    // Logging is best-effort here: a read-only disk should not keep the
    // session from starting.
    let log_dir = resolve_log_dir();
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }
    info!(
        "event=session_start module=cli status=ok version={}",
        core_version()
    );

    let mut provider = ItemListProvider::new(ItemStore::new());
    provider.set_selection_handler(|section, row, item| {
        println!("[{section} {row}] {}", describe(item));
    });

    println!("todolist {} - `help` lists commands", core_version());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("input error: {err}");
                break;
            }
        }

        match parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => run(&mut provider, command),
            Err(ParseError::Empty) => {}
            Err(err) => {
                warn!("event=command_rejected module=cli status=error reason={err}");
                println!("{err}");
            }
        }
    }

    info!("event=session_end module=cli status=ok");
}

fn run(provider: &mut ItemListProvider, command: Command) {
    match command {
        Command::Add(item) => {
            println!("Added `{}`.", item.title);
            provider.store_mut().add(item);
            info!(
                "event=item_added module=cli status=ok open_count={}",
                provider.store().to_do_count()
            );
        }
        Command::List => render(provider),
        Command::Check(row) => match provider.commit_toggle(Section::ToDo, row) {
            Ok(()) => {
                println!("Checked row {row}.");
                info!("event=item_checked module=cli status=ok row={row}");
            }
            Err(err) => println!("{err}"),
        },
        Command::Uncheck(row) => match provider.commit_toggle(Section::Done, row) {
            Ok(()) => {
                println!("Unchecked row {row}.");
                info!("event=item_unchecked module=cli status=ok row={row}");
            }
            Err(err) => println!("{err}"),
        },
        Command::Show(section, row) => {
            if let Err(err) = provider.select_row(section, row) {
                println!("{err}");
            }
        }
        Command::Clear => {
            provider.store_mut().remove_all();
            println!("Removed all items.");
            info!("event=items_cleared module=cli status=ok");
        }
        Command::Help => print_help(),
        // Quit never reaches here; the loop consumes it.
        Command::Quit => {}
    }
}

fn render(provider: &ItemListProvider) {
    for index in 0..provider.section_count() {
        let Some(section) = ItemListProvider::section_at(index) else {
            continue;
        };
        let rows = provider.rows_in(section);
        println!("{section} ({rows}):");
        for row in 0..rows {
            if let Some(item) = provider.item_at(section, row) {
                println!("  {row}. {}", describe(item));
            }
        }
    }
}

fn describe(item: &ToDoItem) -> String {
    let mut text = item.title.clone();
    if let Some(timestamp) = item.timestamp {
        text.push_str(&format!(" (due {})", format_due(timestamp)));
    }
    if let Some(location) = &item.location {
        text.push_str(&format!(" @ {}", location.name));
    }
    if let Some(description) = &item.description {
        text.push_str(&format!(" :: {description}"));
    }
    text
}

fn format_due(timestamp: i64) -> String {
    match chrono::DateTime::from_timestamp(timestamp, 0) {
        Some(moment) => moment.format(DUE_DATE_FORMAT).to_string(),
        None => timestamp.to_string(),
    }
}

fn resolve_log_dir() -> PathBuf {
    if let Ok(raw) = std::env::var("TODOLIST_LOG_DIR") {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join("todolist-logs")
}

fn print_help() {
    println!("Commands:");
    println!("  add <title> [-- due=MM/DD/YYYY loc=Name[@lat,lon] desc=<rest>]");
    println!("  list              show open and done items");
    println!("  check <n>         mark open row n as done");
    println!("  uncheck <n>       move done row n back to open");
    println!("  show [done] <n>   show one row in detail");
    println!("  clear             remove all items");
    println!("  quit              end the session");
}
