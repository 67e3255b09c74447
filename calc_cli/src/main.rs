//! # StructCalc CLI Application
//!
//! Line-oriented terminal front end for the steel weight estimator.
//! Elements are addressed by their 1-based position in the list.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g., `RUST_LOG=calc_core=debug`).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use calc_core::estimate::{ElementField, Estimate};
use calc_core::format::{format_currency, format_length, format_weight};
use calc_core::input::{parse_length, parse_price, parse_quantity};
use calc_core::profiles::reference_table;
use calc_core::report::save_report;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
Commands:
  add                      Add an element (IPR 100x50, 1 m, 1 pc)
  family <n> <family>      Change family of element n (size resets)
  size <n> <size>          Change size of element n
  length <n> <m>           Set length of element n (meters)
  qty <n> <count>          Set quantity of element n
  brand <n> <text>         Set brand label of element n
  rm <n>                   Remove element n
  price <amount>           Set unit price (per kg)
  list                     Show elements and totals
  tables [family]          Show profile families or sizes
  summary                  Print totals as JSON
  report [dir]             Save the text report (default: current dir)
  help                     Show this help
  quit                     Exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add,
    Family(usize, String),
    Size(usize, String),
    Length(usize, String),
    Quantity(usize, String),
    Brand(usize, String),
    Remove(usize),
    Price(String),
    List,
    Tables(Option<String>),
    Summary,
    Report(Option<PathBuf>),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}

fn main() {
    init_tracing();

    println!("StructCalc CLI - Calculadora de peso para estructuras metálicas");
    println!("================================================================");
    println!("Type 'help' for commands.");
    println!();

    let mut estimate = Estimate::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                tracing::error!(error = %e, "failed to read input");
                break;
            }
            None => break,
        };

        let command = parse_command(&line);
        if command == Command::Quit {
            break;
        }
        execute(&mut estimate, command);
    }

    tracing::info!(elements = estimate.len(), "session ended");
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Command::Empty,
        "add" => Command::Add,
        "family" => with_position(rest, Command::Family),
        "size" => with_position(rest, Command::Size),
        "length" => with_position(rest, Command::Length),
        "qty" => with_position(rest, Command::Quantity),
        "brand" => with_position(rest, Command::Brand),
        "rm" => match parse_position(rest) {
            Some(n) => Command::Remove(n),
            None => Command::Invalid("usage: rm <n>".to_string()),
        },
        "price" => Command::Price(rest.to_string()),
        "list" => Command::List,
        "tables" => Command::Tables(non_empty(rest)),
        "summary" => Command::Summary,
        "report" => Command::Report(non_empty(rest).map(PathBuf::from)),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command '{}'", other)),
    }
}

/// Split `<n> <value...>` and build the command from it.
fn with_position(rest: &str, build: fn(usize, String) -> Command) -> Command {
    let (pos, value) = match rest.split_once(char::is_whitespace) {
        Some((p, v)) => (p, v.trim()),
        None => (rest, ""),
    };

    match parse_position(pos) {
        Some(n) => build(n, value.to_string()),
        None => Command::Invalid("expected an element number (1, 2, ...)".to_string()),
    }
}

/// 1-based position to 0-based index
fn parse_position(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok().filter(|&n| n > 0).map(|n| n - 1)
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn execute(estimate: &mut Estimate, command: Command) {
    match command {
        Command::Add => {
            estimate.add_element();
            print_list(estimate);
        }
        Command::Family(index, family) => {
            update_at(estimate, index, |est, id| {
                if reference_table().family(&family).is_none() {
                    println!("Unknown family '{}' (weight will be 0). See 'tables'.", family);
                }
                est.change_profile_family(id, family);
            });
        }
        Command::Size(index, size) => {
            update_at(estimate, index, |est, id| {
                est.update_element(id, ElementField::Size(size));
            });
        }
        Command::Length(index, text) => {
            update_at(estimate, index, |est, id| {
                est.update_element(id, ElementField::Length(parse_length(&text)));
            });
        }
        Command::Quantity(index, text) => {
            update_at(estimate, index, |est, id| {
                est.update_element(id, ElementField::Quantity(parse_quantity(&text)));
            });
        }
        Command::Brand(index, brand) => {
            update_at(estimate, index, |est, id| {
                est.update_element(id, ElementField::Brand(brand));
            });
        }
        Command::Remove(index) => {
            update_at(estimate, index, |est, id| {
                est.remove_element(id);
            });
        }
        Command::Price(text) => {
            estimate.set_unit_price(parse_price(&text));
            print_totals(estimate);
        }
        Command::List => print_list(estimate),
        Command::Tables(family) => print_tables(family.as_deref()),
        Command::Summary => match serde_json::to_string_pretty(&estimate.summary()) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(error = %e, "failed to serialize summary"),
        },
        Command::Report(dir) => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            let report = estimate.generate_report();
            print!("{}", report.contents);
            match save_report(&report, &dir) {
                Ok(path) => println!("Saved {}", path.display()),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    if let Ok(json) = serde_json::to_string_pretty(&e) {
                        eprintln!("{}", json);
                    }
                }
            }
        }
        Command::Help => println!("{}", HELP),
        Command::Invalid(message) => println!("{} (type 'help')", message),
        Command::Empty | Command::Quit => {}
    }
}

/// Resolve a list position, run `action`, then show the list.
fn update_at(estimate: &mut Estimate, index: usize, action: impl FnOnce(&mut Estimate, calc_core::Uuid)) {
    match estimate.id_at(index) {
        Some(id) => {
            action(estimate, id);
            print_list(estimate);
        }
        None => println!("No element #{}", index + 1),
    }
}

fn print_list(estimate: &Estimate) {
    if estimate.is_empty() {
        println!("No elements yet. Use 'add' to start.");
        return;
    }

    for (i, e) in estimate.elements().iter().enumerate() {
        let brand = if e.brand().is_empty() {
            String::new()
        } else {
            format!(" [{}]", e.brand())
        };
        let flag = if e.is_resolved() { "" } else { "  (size not in family)" };
        println!(
            "{:>3}. {} {}{} - {}m x{} = {} kg{}",
            i + 1,
            e.profile_family(),
            e.size(),
            brand,
            format_length(e.length_m()),
            e.quantity(),
            format_weight(e.weight_kg()),
            flag
        );
    }
    print_totals(estimate);
}

fn print_totals(estimate: &Estimate) {
    let summary = estimate.summary();
    let symbol = &estimate.settings().currency_symbol;
    println!(
        "     {} elementos | {} kg total | {}{}/kg | costo estimado {}{}",
        summary.element_count,
        format_weight(summary.total_weight_kg),
        symbol,
        format_currency(summary.unit_price),
        symbol,
        format_currency(summary.total_cost)
    );
}

fn print_tables(family: Option<&str>) {
    let table = reference_table();
    match family {
        None => {
            for f in table.families() {
                println!("{} ({} sizes)", f.name, f.sizes.len());
            }
        }
        Some(name) => match table.family(name) {
            Some(f) => {
                for size in &f.sizes {
                    println!("{:<12} {:>7.2} kg/m", size.label, size.kg_per_m);
                }
            }
            None => println!("Unknown family '{}'", name),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("add"), Command::Add);
        assert_eq!(parse_command("  LIST "), Command::List);
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("summary"), Command::Summary);
    }

    #[test]
    fn test_parse_positional_commands() {
        assert_eq!(
            parse_command("family 2 Tubo Rectangular"),
            Command::Family(1, "Tubo Rectangular".to_string())
        );
        assert_eq!(parse_command("size 1 76x38"), Command::Size(0, "76x38".to_string()));
        assert_eq!(parse_command("length 1 2.5"), Command::Length(0, "2.5".to_string()));
        assert_eq!(parse_command("qty 3 4"), Command::Quantity(2, "4".to_string()));
        assert_eq!(parse_command("rm 1"), Command::Remove(0));
    }

    #[test]
    fn test_parse_invalid_positions() {
        assert!(matches!(parse_command("rm 0"), Command::Invalid(_)));
        assert!(matches!(parse_command("size x 76x38"), Command::Invalid(_)));
        assert!(matches!(parse_command("frobnicate"), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_optional_args() {
        assert_eq!(parse_command("tables"), Command::Tables(None));
        assert_eq!(parse_command("tables Canal"), Command::Tables(Some("Canal".to_string())));
        assert_eq!(parse_command("report /tmp"), Command::Report(Some(PathBuf::from("/tmp"))));
        assert_eq!(parse_command("price 30"), Command::Price("30".to_string()));
    }

    #[test]
    fn test_execute_updates_estimate() {
        let mut estimate = Estimate::new();
        execute(&mut estimate, parse_command("add"));
        execute(&mut estimate, parse_command("length 1 3"));
        execute(&mut estimate, parse_command("qty 1 2"));
        execute(&mut estimate, parse_command("family 1 Canal"));

        let element = &estimate.elements()[0];
        assert_eq!(element.profile_family(), "Canal");
        assert_eq!(element.size(), "76x38");
        assert!((element.weight_kg() - 5.90 * 6.0).abs() < 1e-9);

        execute(&mut estimate, parse_command("price abc"));
        assert_eq!(estimate.unit_price(), 0.0);

        execute(&mut estimate, parse_command("rm 5"));
        assert_eq!(estimate.len(), 1);
        execute(&mut estimate, parse_command("rm 1"));
        assert!(estimate.is_empty());
    }
}
