use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Authenticator, EmailFormatAuthenticator, ReportService, SurveyService};
use storage::repository::Storage;
use survey_core::model::{
    Gender, LearningEnvironment, LearningStyle, PrimaryDevice, ResponseDraft, SatisfactionScore,
    StudyTime,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    survey: Arc<SurveyService>,
    reports: Arc<ReportService>,
    authenticator: Arc<dyn Authenticator>,
}

impl UiApp for DesktopApp {
    fn survey(&self) -> Arc<SurveyService> {
        Arc::clone(&self.survey)
    }

    fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }

    fn authenticator(&self) -> Arc<dyn Authenticator> {
        Arc::clone(&self.authenticator)
    }
}

struct Args {
    db_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- seed [--db <sqlite_url>]  # insert sample responses");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --db sqlite:survey.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SURVEY_DB_URL");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("SURVEY_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://survey.sqlite3".into(), normalize_sqlite_url);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if matches!(cmd, Command::Ui | Command::Seed) && !argv.is_empty() && !argv[0].starts_with("--")
    {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;

    let survey = Arc::new(SurveyService::new(Arc::clone(&storage.responses)));

    match cmd {
        Command::Ui => {
            let reports = Arc::new(ReportService::new(Arc::clone(&storage.responses)));
            let authenticator: Arc<dyn Authenticator> = Arc::new(EmailFormatAuthenticator);

            let app = DesktopApp {
                survey,
                reports,
                authenticator,
            };

            let app: Arc<dyn UiApp> = Arc::new(app);
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Student Learning Habits Analysis")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Seed => {
            let mut appended = 0u32;
            for draft in sample_responses() {
                survey.submit(&draft).await?;
                appended += 1;
            }
            eprintln!("seed: appended {appended} responses (db={}).", parsed.db_url);
            Ok(())
        }
    }
}

/// A handful of plausible submissions so the charts page has something to
/// show on a fresh database.
fn sample_responses() -> Vec<ResponseDraft> {
    let rows: [(&str, &str, Gender, LearningEnvironment, &str, StudyTime, &str, PrimaryDevice, LearningStyle, i64); 5] = [
        (
            "Asha",
            "21",
            Gender::Female,
            LearningEnvironment::Online,
            "10",
            StudyTime::Evening,
            "Laptop notes",
            PrimaryDevice::Laptop,
            LearningStyle::Visual,
            7,
        ),
        (
            "Bram",
            "24",
            Gender::Male,
            LearningEnvironment::Classroom,
            "6",
            StudyTime::Morning,
            "Textbooks",
            PrimaryDevice::Laptop,
            LearningStyle::ReadingWriting,
            5,
        ),
        (
            "Chen",
            "19",
            Gender::Other,
            LearningEnvironment::Hybrid,
            "14",
            StudyTime::Night,
            "Flashcards",
            PrimaryDevice::Tablet,
            LearningStyle::Kinesthetic,
            9,
        ),
        (
            "Dalia",
            "27",
            Gender::Female,
            LearningEnvironment::Online,
            "8",
            StudyTime::Afternoon,
            "Video lectures",
            PrimaryDevice::Smartphone,
            LearningStyle::Auditory,
            6,
        ),
        (
            "Emre",
            "22",
            Gender::Male,
            LearningEnvironment::Classroom,
            "12",
            StudyTime::Evening,
            "Whiteboard",
            PrimaryDevice::Desktop,
            LearningStyle::Visual,
            8,
        ),
    ];

    rows.into_iter()
        .map(
            |(name, age, gender, environment, hours, time, tools, device, style, satisfaction)| {
                ResponseDraft {
                    name: name.into(),
                    age: age.into(),
                    gender: Some(gender),
                    environment: Some(environment),
                    study_hours: hours.into(),
                    study_time: Some(time),
                    study_tools: tools.into(),
                    device: Some(device),
                    learning_style: Some(style),
                    satisfaction: Some(SatisfactionScore::clamped(satisfaction)),
                }
            },
        )
        .collect()
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
