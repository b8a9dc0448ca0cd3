use log::{debug, info};

use crate::client::{ApiClient, Transport};
use crate::models::{Champion, Round};
use crate::settings::{HINT, USAGE};

/// What the user asked for. `round: None` means the champion query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub year: String,
    pub round: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
}

impl Exit {
    pub fn code(self) -> i32 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
        }
    }
}

/// Everything one invocation prints, plus how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
    pub exit: Exit,
}

impl Report {
    fn success(lines: Vec<String>) -> Report {
        Report { lines, exit: Exit::Success }
    }

    fn failure(lines: Vec<String>) -> Report {
        Report { lines, exit: Exit::Failure }
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }
}

pub fn usage() -> Report {
    Report::failure(vec![USAGE.to_string(), HINT.to_string()])
}

pub async fn present<T: Transport>(api: &ApiClient<T>, query: &Query) -> Report {
    match &query.round {
        None => champion_report(api, &query.year).await,
        Some(round) => round_report(api, &query.year, round).await,
    }
}

async fn champion_report<T: Transport>(api: &ApiClient<T>, year: &str) -> Report {
    debug!("champion query for {}", year);

    match api.fetch_champion(year).await {
        Ok(champion) if champion.is_decided() => Report::success(vec![format_champion(&champion, year)]),
        Ok(_) => Report::success(vec![format!("Ainda não houve campeão para o Brasileirão {}", year)]),
        // champion lookups never fail the process
        Err(err) => Report::success(vec![err.to_string()]),
    }
}

async fn round_report<T: Transport>(api: &ApiClient<T>, year: &str, round: &str) -> Report {
    debug!("round query for {} / {}", year, round);

    match api.fetch_round(year, round).await {
        Ok(data) if data.matches.is_empty() => {
            Report::success(vec![format!("Ainda não há jogos disponíveis para o Brasileirão {}", year)])
        }
        Ok(data) => {
            info!("{} matches in round {}", data.matches.len(), data.number);
            Report::success(format_round(&data, year, round))
        }
        Err(err) => Report::failure(vec![format!("Erro: {}", err)]),
    }
}

// server value first, the queried one when the server left it empty
fn or_queried<'a>(served: &'a str, queried: &'a str) -> &'a str {
    if served.is_empty() {
        queried
    } else {
        served
    }
}

fn format_champion(champion: &Champion, year: &str) -> String {
    format!("Campeão do Brasileirão {}: {}", or_queried(&champion.year, year), champion.team)
}

// Output formatting
fn format_round(data: &Round, year: &str, round: &str) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Jogos da rodada {} do Brasileirão {}:",
            or_queried(&data.number, round),
            or_queried(&data.year, year)
        ),
        String::new(),
    ];
    lines.extend(data.matches.iter().map(|game| game.to_string()));
    lines
}
