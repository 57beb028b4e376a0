//! Captain election demo.
//!
//! # Responsibility
//! - Request the team captain twice and show that both requests yield the
//!   same instance.
//! - Always exit with status 0.

use captain_core::{default_log_level, init_logging, status_message, Captain, LogTarget};

const ANSI_RESET: &str = "\u{1b}[0m";
const ANSI_GREEN: &str = "\u{1b}[32m";
const ANSI_BLUE: &str = "\u{1b}[34m";
const RULE: &str = "================================================================";

fn main() {
    if let Err(err) = init_logging(default_log_level(), LogTarget::Stderr) {
        eprintln!("logging disabled: {err}");
    }

    println!("{ANSI_BLUE}{RULE}{ANSI_RESET}");
    println!("{ANSI_GREEN}***Singleton Pattern Demo***");

    println!("Trying to make a captain for your team: ");
    let (captain2, outcome) = Captain::acquire();
    println!("{}", status_message(outcome));

    println!("Trying to make another captain for your team:");
    let (captain3, outcome) = Captain::acquire();
    println!("{}", status_message(outcome));

    if captain2.is_same(captain3) {
        println!("captain2 and captain3 are same instance.{ANSI_RESET}");
    } else {
        print!("{ANSI_RESET}");
        log::error!(
            "event=identity_check module=cli status=error first={} second={}",
            captain2,
            captain3
        );
    }

    println!("{ANSI_BLUE}{RULE}{ANSI_RESET}");
}
