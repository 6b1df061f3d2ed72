use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::Difficulty;
use services::{
    DEFAULT_QUESTION_COUNT, QuestionSource, QuizLoopService, TriviaClient, TriviaConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAmount { raw: String },
    InvalidDifficulty { raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAmount { raw } => {
                write!(f, "invalid --amount value: {raw} (expected 1..=50)")
            }
            ArgsError::InvalidDifficulty { raw } => {
                write!(f, "invalid --difficulty value: {raw} (expected easy, medium or hard)")
            }
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
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
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    amount: u32,
    difficulty: Difficulty,
    api_url: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            amount: DEFAULT_QUESTION_COUNT,
            difficulty: Difficulty::Easy,
            api_url: TriviaConfig::default().base_url,
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--amount <n>] [--difficulty <level>] [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --amount {DEFAULT_QUESTION_COUNT}");
    eprintln!("  --difficulty easy");
    eprintln!("  --api-url {}", TriviaConfig::default().base_url);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_AMOUNT, TRIVIA_DIFFICULTY, TRIVIA_API_URL, RUST_LOG");
}

fn parse_amount(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(amount) if (1..=50).contains(&amount) => Ok(amount),
        _ => Err(ArgsError::InvalidAmount { raw }),
    }
}

fn parse_difficulty(raw: String) -> Result<Difficulty, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidDifficulty { raw })
}

fn parse_api_url(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ArgsError::InvalidApiUrl { raw })
    }
}

impl Args {
    /// Environment first, flags override.
    fn parse(
        env: impl Fn(&str) -> Option<String>,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Parsed, ArgsError> {
        let mut parsed = Self::default();

        if let Some(value) = env("TRIVIA_AMOUNT") {
            parsed.amount = parse_amount(value)?;
        }
        if let Some(value) = env("TRIVIA_DIFFICULTY") {
            parsed.difficulty = parse_difficulty(value)?;
        }
        if let Some(value) = env("TRIVIA_API_URL").filter(|v| !v.trim().is_empty()) {
            parsed.api_url = parse_api_url(value)?;
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--amount" => parsed.amount = parse_amount(require_value(args, "--amount")?)?,
                "--difficulty" => {
                    parsed.difficulty = parse_difficulty(require_value(args, "--difficulty")?)?;
                }
                "--api-url" => parsed.api_url = parse_api_url(require_value(args, "--api-url")?)?,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(parsed))
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(|key| std::env::var(key).ok(), &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    init_tracing();
    info!(
        amount = args.amount,
        difficulty = %args.difficulty,
        api_url = %args.api_url,
        "starting trivia quiz"
    );

    let client: Arc<dyn QuestionSource> = Arc::new(TriviaClient::new(TriviaConfig {
        base_url: args.api_url,
    }));
    let quiz_loop = Arc::new(
        QuizLoopService::new(client)
            .with_amount(args.amount)
            .with_difficulty(args.difficulty),
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz_loop });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
