use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::info;
use planning_core::model::PageId;
use services::{Catalog, PlanningService};
use ui::{App, UiApp, build_app_context};

const LOG_ENV: &str = "PLANNER_LOG";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPage { raw: String },
    CatalogRead { path: String, source: std::io::Error },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPage { raw } => write!(f, "invalid --page value: {raw}"),
            ArgsError::CatalogRead { path, source } => {
                write!(f, "cannot read catalog {path}: {source}")
            }
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::CatalogRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    planning: Arc<PlanningService>,
    start_page: Option<PageId>,
}

impl UiApp for DesktopApp {
    fn planning(&self) -> Arc<PlanningService> {
        Arc::clone(&self.planning)
    }

    fn start_page(&self) -> Option<PageId> {
        self.start_page
    }
}

#[derive(Debug, Default)]
struct Args {
    start_page: Option<PageId>,
    catalog_path: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--page <slug>] [--catalog <path.json>]");
    eprintln!();
    eprintln!("Pages:");
    for page in PageId::ALL {
        eprintln!("  {page}");
    }
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PLANNER_START_PAGE, PLANNER_CATALOG, {LOG_ENV} (default: info)");
}

fn parse_page(raw: String) -> Result<PageId, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidPage { raw })
}

/// Values read from `PLANNER_*` variables, overridden by flags.
#[derive(Debug, Default)]
struct EnvDefaults {
    start_page: Option<String>,
    catalog_path: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            start_page: std::env::var("PLANNER_START_PAGE").ok(),
            catalog_path: std::env::var("PLANNER_CATALOG").ok(),
        }
    }
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        defaults: EnvDefaults,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            start_page: defaults.start_page.map(parse_page).transpose()?,
            catalog_path: defaults.catalog_path,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--page" => {
                    let value = require_value(args, "--page")?;
                    parsed.start_page = Some(parse_page(value)?);
                }
                "--catalog" => {
                    parsed.catalog_path = Some(require_value(args, "--catalog")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn load_catalog(path: Option<&str>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Catalog::builtin()?);
    };
    let text = std::fs::read_to_string(path).map_err(|source| ArgsError::CatalogRead {
        path: path.to_string(),
        source,
    })?;
    info!("loading catalog from {path}");
    Ok(Catalog::from_json(&text)?)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "info")).init();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, EnvDefaults::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = load_catalog(parsed.catalog_path.as_deref())?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        planning: Arc::new(PlanningService::new(catalog)),
        start_page: parsed.start_page,
    });
    let context = build_app_context(&app);

    // Some dev setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Sustainability Planner")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
