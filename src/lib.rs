use clap::Parser;

pub mod client;
pub mod error;
pub mod models;
pub mod presenter;
pub mod settings;

use client::{ApiClient, Transport};
use presenter::{Query, Report};

// Flags spelled with a single dash, e.g. `-ano=2023`
const FLAG_NAMES: [&str; 2] = ["ano", "rodada"];

#[derive(Parser, Debug)]
#[command(
    name = "brasileirao",
    about = "Jogos e campeões do Brasileirão",
    args_override_self = true
)]
struct Args {
    /// ano do campeonato (ex: 2023)
    #[arg(long = "ano", value_name = "ANO")]
    year: Option<String>,

    /// número da rodada (ex: 37)
    #[arg(long = "rodada", value_name = "RODADA")]
    round: Option<String>,

    // flag parsing stops at the first positional, the rest is ignored
    #[arg(hide = true, trailing_var_arg = true)]
    rest: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub year: Option<String>,
    pub round: Option<String>,
}

impl Command {
    pub fn build(
        mut args: impl Iterator<Item = String>,
    ) -> Result<Command, clap::Error> {
        let bin = args.next().unwrap_or_else(|| String::from("brasileirao"));
        let normalized = std::iter::once(bin).chain(args.map(normalize_flag));

        let parsed = Args::try_parse_from(normalized)?;
        if !parsed.rest.is_empty() {
            log::debug!("ignoring trailing arguments {:?}", parsed.rest);
        }

        // an empty value counts as not given
        Ok(Command {
            year: parsed.year.filter(|year| !year.is_empty()),
            round: parsed.round.filter(|round| !round.is_empty()),
        })
    }

    /// `None` when the year is missing.
    pub fn query(&self) -> Option<Query> {
        self.year.as_ref().map(|year| Query {
            year: year.clone(),
            round: self.round.clone(),
        })
    }
}

fn normalize_flag(arg: String) -> String {
    let is_single_dash_flag = FLAG_NAMES.iter().any(|name| {
        arg.strip_prefix('-')
            .and_then(|rest| rest.strip_prefix(name))
            .map_or(false, |tail| tail.is_empty() || tail.starts_with('='))
    });

    if is_single_dash_flag {
        format!("-{}", arg)
    } else {
        arg
    }
}

pub async fn run<T: Transport>(cmd: &Command, api: &ApiClient<T>) -> Report {
    match cmd.query() {
        Some(query) => presenter::present(api, &query).await,
        None => {
            log::debug!("no year given, printing usage");
            presenter::usage()
        }
    }
}
