use std::env;
use std::process;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use brasileirao::client::{ApiClient, HttpTransport};
use brasileirao::settings::load_settings;
use brasileirao::Command;

fn main() {
    // stderr only, stdout is the report
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("Problem starting logger: {err}");
    }

    let command = Command::build(env::args()).unwrap_or_else(|err| err.exit());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Problem starting runtime: {err}");
            process::exit(1);
        });

    let api = ApiClient::new(HttpTransport::new(&load_settings()));

    let report = rt.block_on(brasileirao::run(&command, &api));

    report.print();
    process::exit(report.exit.code());
}
