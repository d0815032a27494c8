use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, ClassificationService, ClassifyOutcome, DEFAULT_ADVANCE_DELAY, QuizService,
    ShapeAdvisorService, error_message,
};
use storage::FsArtifactRepository;
use storage::fs::DEFAULT_MODEL_DIR;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::platform::{DesktopLinkOpener, LinkOpenerRef};
use ui::{ClassifierApp, TutorApp, UiApp, WINDOW_TITLE, build_app_context};

const MODEL_DIR_ENV: &str = "TUTOR_MODEL_DIR";
const ADVANCE_DELAY_ENV: &str = "TUTOR_ADVANCE_DELAY_MS";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDelay { raw: String },
    InvalidModelDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --advance-delay-ms value: {raw}"),
            ArgsError::InvalidModelDir { raw } => write!(f, "invalid --models value: {raw:?}"),
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

fn parse_delay(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().map(Duration::from_millis)
}

struct DesktopApp {
    services: AppServices,
    opener: LinkOpenerRef,
}

impl UiApp for DesktopApp {
    fn advisor(&self) -> ShapeAdvisorService {
        self.services.advisor()
    }

    fn quiz(&self) -> QuizService {
        self.services.quiz()
    }

    fn classifier(&self) -> Option<Arc<ClassificationService>> {
        self.services.classifier()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.opener)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [tutor] [--advance-delay-ms <ms>]");
    eprintln!("  app classifier [--models <dir>]");
    eprintln!("  app classify [--models <dir>] [--json] <text...>");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --advance-delay-ms 2000");
    eprintln!("  --models {DEFAULT_MODEL_DIR}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ADVANCE_DELAY_ENV}, {MODEL_DIR_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Tutor,
    Classifier,
    Classify,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "tutor" => Some(Self::Tutor),
            "classifier" => Some(Self::Classifier),
            "classify" => Some(Self::Classify),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    command: Command,
    advance_delay: Duration,
    model_dir: PathBuf,
    json: bool,
    text: Vec<String>,
}

impl Args {
    /// Parse `argv` (without the program name), reading defaults through `env`.
    fn parse(
        argv: Vec<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut iter = argv.into_iter().peekable();

        let command = match iter.peek().map(String::as_str) {
            None => Command::Tutor,
            Some("--help" | "-h") => return Ok(None),
            Some(first) if first.starts_with("--") => Command::Tutor,
            Some(first) => {
                let command = Command::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownCommand(first.to_owned()))?;
                iter.next();
                command
            }
        };

        let mut args = Self {
            command,
            advance_delay: env(ADVANCE_DELAY_ENV)
                .as_deref()
                .and_then(parse_delay)
                .unwrap_or(DEFAULT_ADVANCE_DELAY),
            model_dir: env(MODEL_DIR_ENV)
                .filter(|dir| !dir.trim().is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR), PathBuf::from),
            json: false,
            text: Vec::new(),
        };

        while let Some(arg) = iter.next() {
            match (command, arg.as_str()) {
                (_, "--help" | "-h") => return Ok(None),
                (Command::Tutor, "--advance-delay-ms") => {
                    let value = require_value(&mut iter, "--advance-delay-ms")?;
                    args.advance_delay =
                        parse_delay(&value).ok_or(ArgsError::InvalidDelay { raw: value })?;
                }
                (Command::Classifier | Command::Classify, "--models") => {
                    let value = require_value(&mut iter, "--models")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidModelDir { raw: value });
                    }
                    args.model_dir = PathBuf::from(value);
                }
                (Command::Classify, "--json") => args.json = true,
                (Command::Classify, "--") => args.text.extend(iter.by_ref()),
                (Command::Classify, word) if !word.starts_with("--") => args.text.push(arg),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(args))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn desktop_config(title: &str) -> DesktopConfig {
    DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    )
}

fn launch(services: AppServices, title: &str, root: fn() -> dioxus::prelude::Element) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        opener: Arc::new(DesktopLinkOpener),
    });
    let context = build_app_context(&app);

    LaunchBuilder::desktop()
        .with_cfg(desktop_config(title))
        .with_context(context)
        .launch(root);
}

fn print_outcome(outcome: &ClassifyOutcome, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }
    println!("{}", outcome.message());
    if let Some(line) = outcome.confidence_line() {
        println!("{line}");
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = Args::parse(argv, |key| std::env::var(key).ok()).map_err(|e| {
        print_usage();
        e
    })?;
    let Some(args) = parsed else {
        print_usage();
        return Ok(());
    };

    match args.command {
        Command::Tutor => {
            info!(delay_ms = args.advance_delay.as_millis(), "launching tutor");
            launch(AppServices::tutor(args.advance_delay), WINDOW_TITLE, TutorApp);
            Ok(())
        }
        Command::Classifier => {
            let repo = FsArtifactRepository::new(&args.model_dir);
            info!(dir = %repo.dir().display(), "loading classifier artifacts");
            // Artifacts are loaded on a short-lived runtime; the desktop launcher
            // brings its own.
            let runtime = tokio::runtime::Runtime::new()?;
            let services =
                runtime.block_on(AppServices::with_classifier(args.advance_delay, &repo))?;
            drop(runtime);
            launch(services, ui::app::CLASSIFIER_TITLE, ClassifierApp);
            Ok(())
        }
        Command::Classify => {
            let repo = FsArtifactRepository::new(&args.model_dir);
            let runtime = tokio::runtime::Runtime::new()?;
            let service = runtime.block_on(ClassificationService::load(&repo))?;
            let outcome = service
                .classify(&args.text.join(" "))
                .map_err(|err| error_message(&err))?;
            print_outcome(&outcome, args.json)?;
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
