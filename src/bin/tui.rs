use anyhow::Result;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        print_help();
        return Ok(());
    }

    evlist::tui::run().await
}

fn print_help() {
    println!(
        "Evlist v{} - Terminal event-list manager backed by a REST API",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    evlist              Start interactive TUI");
    println!("    evlist --help       Show this help message");
    println!();
    println!("BACKEND:");
    println!("    Events are read from and written to {{url}}/events as JSON");
    println!("    (GET, POST, PUT, DELETE). The base URL lives in the config");
    println!("    file created on first run.");
    println!();
    println!("KEYBINDINGS:");
    println!("    a               Add a new event row");
    println!("    e / Enter       Edit the selected event");
    println!("    d               Delete the selected event");
    println!("    Tab / BackTab   Cycle input fields (while editing)");
    println!("    Enter           Save the open edit row");
    println!("    Esc             Discard the open edit row");
    println!("    r               Refresh from the backend");
    println!("    j/k, arrows     Move selection");
    println!("    q               Quit");
}
