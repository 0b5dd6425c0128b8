use std::env;
use std::io;

use capuchin::repl;

fn main() -> io::Result<()> {
    let username = env::var("USER").unwrap_or_else(|_| String::from("friend"));
    println!("Welcome {}, this is the Capuchin REPL:", username);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::start(stdin.lock(), stdout.lock())
}
