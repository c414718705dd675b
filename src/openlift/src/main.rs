use std::str::FromStr;

use anyhow::anyhow;
use chrono::{NaiveDateTime, TimeDelta, Utc};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use openlift::{DatabaseHandler, OpenLift};
use openlift_algos::helpers::format_hm::FormatHM;
use openlift_algos::BodyPart;
use openlift_db::SearchSessions;
use openlift_types::{ExerciseEntry, Feeling, NewFeedback, NewSession, TrainingSession};
use uuid::Uuid;

#[derive(Parser)]
pub struct OpenLiftCli {
    #[arg(env, long)]
    pub database_url: String,
    #[clap(subcommand)]
    pub subcommand: OpenLiftCommand,
}

#[derive(Subcommand)]
pub enum OpenLiftCommand {
    ///
    /// Record a workout session
    ///
    Log {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        started_at: Option<NaiveDateTime>,
        #[arg(long)]
        ended_at: Option<NaiveDateTime>,
        /// name:part1/part2:sets, e.g. bench:chest/triceps:4
        #[arg(long = "exercise", required = true)]
        exercises: Vec<ExerciseSpec>,
    },
    ///
    /// Archive a session so it stops feeding readiness
    ///
    Archive { session_id: Uuid },
    ///
    /// List recent sessions
    ///
    Sessions {
        #[arg(long, default_value_t = 30)]
        days: i64,
    },
    ///
    /// Record how a body part feels (GOOD, TIGHT, SORE or INJURED)
    ///
    Feedback {
        body_part: String,
        feeling: Feeling,
        #[arg(long)]
        intensity: Option<u8>,
        #[arg(long)]
        note: Option<String>,
    },
    ///
    /// Per-body-part readiness verdicts and the day's summary
    ///
    Readiness,
    ///
    /// Per-day set volume for one body part
    ///
    Trend {
        body_part: String,
        #[arg(long, default_value_t = 30)]
        days: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("sqlx::query", log::LevelFilter::Off)
        .filter_module("sea_orm_migration::migrator", log::LevelFilter::Off)
        .init();

    let cli = OpenLiftCli::parse();
    let db_handler = DatabaseHandler::new(cli.database_url).await;
    let openlift = OpenLift::new(db_handler);

    match cli.subcommand {
        OpenLiftCommand::Log {
            title,
            started_at,
            ended_at,
            exercises,
        } => {
            let session = NewSession {
                title,
                started_at: started_at.or_else(|| Some(Utc::now().naive_utc())),
                ended_at,
                exercises: exercises.into_iter().map(ExerciseSpec::into_entry).collect(),
            };

            let id = openlift.log_session(session).await?;
            println!("{}", id);
            Ok(())
        }
        OpenLiftCommand::Archive { session_id } => {
            if openlift.database.archive_session(session_id).await? {
                println!("archived {}", session_id);
            } else {
                println!("no session {}", session_id);
            }
            Ok(())
        }
        OpenLiftCommand::Sessions { days } => {
            let since = Utc::now().naive_utc() - TimeDelta::days(days);
            let sessions = openlift
                .database
                .search_sessions(SearchSessions::default().since(since))
                .await?;

            for session in &sessions {
                println!("{}", format_session(session));
            }
            Ok(())
        }
        OpenLiftCommand::Feedback {
            body_part,
            feeling,
            intensity,
            note,
        } => {
            let ids = openlift
                .log_feedback(vec![NewFeedback {
                    body_part,
                    feeling,
                    intensity,
                    note,
                }])
                .await?;

            for id in ids {
                println!("{}", id);
            }
            Ok(())
        }
        OpenLiftCommand::Readiness => {
            let (states, summary) = openlift.readiness(Utc::now().naive_utc()).await?;

            for state in &states {
                println!("{}", state);
            }
            println!();
            println!("{}", summary);
            Ok(())
        }
        OpenLiftCommand::Trend { body_part, days } => {
            let key = BodyPart::parse(&body_part).key;
            let (states, _) = openlift
                .readiness_within(Utc::now().naive_utc(), TimeDelta::days(days))
                .await?;

            let Some(state) = states.iter().find(|s| s.body_part.key == key) else {
                println!("no training recorded for {}", key);
                return Ok(());
            };

            for (date, sets) in &state.daily_trend {
                println!("{}  {:>3} sets", date, sets);
            }
            Ok(())
        }
    }
}

fn format_session(session: &TrainingSession) -> String {
    let mut line = format!("{}", session.id);

    if let Some(time) = session.effective_time() {
        line.push_str(&format!("  {}", time));
    }
    if let (Some(start), Some(end)) = (session.started_at, session.ended_at) {
        line.push_str(&format!("  ({})", (end - start).format_hm()));
    }
    if let Some(title) = &session.title {
        line.push_str(&format!("  {}", title));
    }

    let parts = session
        .exercises
        .iter()
        .flat_map(|e| e.body_parts.iter())
        .map(|raw| BodyPart::parse(raw).key)
        .collect::<std::collections::BTreeSet<_>>();
    if !parts.is_empty() {
        line.push_str(&format!(
            "  [{}]",
            parts.into_iter().collect::<Vec<_>>().join(", ")
        ));
    }

    line
}

/// `name:part1/part2:sets` command-line form of one exercise, e.g.
/// `bench:chest/triceps:4`. Parts and sets are optional.
#[derive(Clone, Debug)]
pub struct ExerciseSpec {
    name: String,
    body_parts: Vec<String>,
    sets: Option<u32>,
}

impl FromStr for ExerciseSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.splitn(3, ':');

        let name = fields
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| anyhow!("empty exercise name"))?;

        let body_parts = fields
            .next()
            .map(|tags| {
                tags.split('/')
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let sets = fields.next().map(str::parse).transpose()?;

        Ok(ExerciseSpec {
            name: name.to_string(),
            body_parts,
            sets,
        })
    }
}

impl ExerciseSpec {
    fn into_entry(self) -> ExerciseEntry {
        ExerciseEntry {
            name: self.name,
            body_parts: self.body_parts,
            completed_sets: self.sets,
            planned_sets: None,
        }
    }
}
