//! # SuperStore Inventory Shell
//!
//! A minimal line-driven shell over the screen view-models. This file is
//! presentation glue: it renders prompts and grids and forwards input; all
//! behavior lives in the library and its tests.
//!
//! ```text
//! superstore> help
//!   sign-in screen:   login | signup | quit
//!   sign-up screen:   register | back | quit
//!   inventory screen: list | search | select <row> | add | update
//!                     delete | reset | logout | quit
//! ```

use std::io::{self, Write};

use superstore_core::FieldInput;
use superstore_desktop::screens::{Confirmation, Deletion, InventoryScreen, Mutation, SignInOutcome};
use superstore_desktop::{Screen, Session};

#[tokio::main]
async fn main() {
    superstore_desktop::init_tracing();

    let mut session = match superstore_desktop::start().await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start: {e}");
            std::process::exit(1);
        }
    };

    println!("SuperStore Inventory. Type 'help' for commands.");

    loop {
        let command = prompt(&format!("superstore[{}]> ", session.screen().name()));
        let command = command.trim();
        if command.is_empty() {
            continue;
        }
        if command == "quit" || command == "exit" {
            break;
        }

        match session.screen() {
            Screen::SignIn => handle_sign_in(&mut session, command).await,
            Screen::SignUp => handle_sign_up(&mut session, command).await,
            Screen::Inventory(_) => handle_inventory(&mut session, command).await,
        }
    }
}

async fn handle_sign_in(session: &mut Session, command: &str) {
    match command {
        "login" => {
            let username = prompt("Username: ");
            let password = prompt("Password: ");
            match session.sign_in(&username, &password).await {
                Ok(SignInOutcome::Granted) => {
                    println!("Login successful.");
                    render_grid(session);
                }
                Ok(SignInOutcome::Denied) => println!("Invalid username or password."),
                Err(e) => println!("{e}"),
            }
        }
        "signup" => session.to_sign_up(),
        "help" => println!("Commands: login | signup | quit"),
        other => println!("Unknown command '{other}'. Type 'help'."),
    }
}

async fn handle_sign_up(session: &mut Session, command: &str) {
    match command {
        "register" => {
            let username = prompt("Username: ");
            let password = prompt("Password: ");
            let confirm = prompt("Confirm password: ");
            let role = prompt("Role (Admin/Manager/Cashier): ");
            match session.sign_up(&username, &password, &confirm, &role).await {
                Ok(()) => println!("Registration successful. Please log in."),
                Err(e) => println!("{e}"),
            }
        }
        "back" => session.to_sign_in(),
        "help" => println!("Commands: register | back | quit"),
        other => println!("Unknown command '{other}'. Type 'help'."),
    }
}

async fn handle_inventory(session: &mut Session, command: &str) {
    let mut parts = command.split_whitespace();
    let verb = parts.next().unwrap_or_default();

    if verb == "logout" {
        session.logout();
        return;
    }

    let Some(screen) = session.inventory_mut() else {
        return;
    };

    let result = match verb {
        "list" => screen.load().await.map(|_| true),
        "search" => {
            // The search fragment comes from the name input, as on the
            // legacy screen
            edit_field("Product name", &mut screen.form.product_name);
            screen.search().await.map(|_| true)
        }
        "select" => {
            match parts.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(index) => match screen.select_row(index) {
                    Some(pid) => println!("Selected product {pid}."),
                    None => println!("No row at index {index}."),
                },
                None => println!("Usage: select <row>"),
            }
            Ok(false)
        }
        "add" => {
            edit_form(screen);
            screen.add().await.map(|_| {
                println!("Product added successfully.");
                true
            })
        }
        "update" => {
            if screen.selection().is_some() {
                edit_form(screen);
            }
            screen.update().await.map(|outcome| {
                match outcome {
                    Mutation::Applied => println!("Product updated successfully."),
                    Mutation::NothingChanged => println!("No product matched; nothing changed."),
                }
                outcome == Mutation::Applied
            })
        }
        "delete" => {
            let confirmation = if screen.selection().is_some() {
                confirm_prompt("Are you sure you want to delete this product?")
            } else {
                Confirmation::Confirmed // SelectionRequired fires first
            };
            screen.delete(confirmation).await.map(|outcome| {
                match outcome {
                    Deletion::Deleted => println!("Product deleted successfully."),
                    Deletion::NothingChanged => println!("No product matched; nothing deleted."),
                    Deletion::Cancelled => {}
                }
                outcome == Deletion::Deleted
            })
        }
        "reset" => {
            screen.reset();
            Ok(false)
        }
        "help" => {
            println!(
                "Commands: list | search | select <row> | add | update | delete | reset | logout | quit"
            );
            Ok(false)
        }
        other => {
            println!("Unknown command '{other}'. Type 'help'.");
            Ok(false)
        }
    };

    match result {
        Ok(true) => render_grid(session),
        Ok(false) => {}
        Err(e) => println!("{e}"),
    }
}

/// Prompts for each of the six fields. Pressing enter keeps the field's
/// current content (placeholder or selected-row data).
fn edit_form(screen: &mut InventoryScreen) {
    edit_field("Product name", &mut screen.form.product_name);
    edit_field("Price", &mut screen.form.price);
    edit_field("Quantity", &mut screen.form.quantity);
    edit_field("Mfg date", &mut screen.form.mfg_date);
    edit_field("Expiry date", &mut screen.form.expiry_date);
    edit_field("Packing", &mut screen.form.packing);
}

fn edit_field(label: &str, field: &mut FieldInput) {
    let entered = prompt(&format!("{label} [{}]: ", field.display_text()));
    if !entered.trim().is_empty() {
        field.set(entered.trim().to_string());
    }
}

fn confirm_prompt(question: &str) -> Confirmation {
    let answer = prompt(&format!("{question} (y/n): "));
    if answer.trim().eq_ignore_ascii_case("y") {
        Confirmation::Confirmed
    } else {
        Confirmation::Declined
    }
}

fn render_grid(session: &mut Session) {
    let Some(screen) = session.inventory_mut() else {
        return;
    };

    println!(
        "{:>4}  {:>6}  {:<24} {:>8} {:>10}  {:<12} {:<12} {:<10}",
        "row", "pid", "name", "price", "quantity", "mfg", "expiry", "packing"
    );
    for (index, row) in screen.rows().iter().enumerate() {
        println!(
            "{:>4}  {:>6}  {:<24} {:>8} {:>10}  {:<12} {:<12} {:<10}",
            index,
            row.pid,
            row.product_name,
            display_opt(row.price),
            display_opt(row.quantity),
            display_opt(row.mfg_date),
            display_opt(row.expiry_date),
            row.packing.as_deref().unwrap_or("-"),
        );
    }
    println!("({} rows)", screen.rows().len());
}

fn display_opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn prompt(text: &str) -> String {
    print!("{text}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim_end_matches(['\r', '\n']).to_string()
}
