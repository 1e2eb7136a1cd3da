extern crate vital_statistics;
use std::io;
use std::process;
use vital_statistics::run;


fn main() {
    env_logger::init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(stdin.lock(), stdout.lock()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
