use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use dialpick::config::{self, Config};
use dialpick::{
    dataset, extract_digits, CountriesMap, CountryCatalog, LabelMode, LibPhoneNumber, PhoneValidator,
};

#[derive(Parser, Debug)]
#[command(name = "dialpick", about = "Country picker and phone number tools")]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Country dataset JSON file (defaults to the bundled dataset)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Resolve names for a right-to-left layout
    #[arg(long, global = true, default_value_t = false)]
    rtl: bool,

    /// Label mode: `en` or `locale`
    #[arg(long, global = true)]
    label: Option<LabelMode>,

    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List countries matching a query, grouped by first letter
    Search(SearchArgs),
    /// Check a national number against a country
    Validate(ValidateArgs),
    /// Print the ASCII digits of the input
    Digits(DigitsArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Search term; empty lists every country
    #[arg(default_value = "")]
    query: String,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// National number; non-digits are ignored
    number: String,

    /// Region code (defaults to `default_country` from config)
    #[arg(long)]
    country: Option<String>,
}

#[derive(Args, Debug)]
struct DigitsArgs {
    text: String,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(path) = &config.config_path {
        debug!(path = %path.display(), "loaded configuration");
    }
    if cli.dataset.is_some() {
        config.dataset = cli.dataset.clone();
    }
    if cli.rtl {
        config.rtl = true;
    }
    if let Some(mode) = cli.label {
        config.label_mode = mode;
    }

    match cli.command {
        Command::Search(args) => handle_search(args, &config),
        Command::Validate(args) => handle_validate(args, &config),
        Command::Digits(args) => {
            println!("{}", extract_digits(&args.text));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_countries(config: &Config) -> Result<CountriesMap> {
    match &config.dataset {
        Some(path) => dataset::load_file(path)
            .with_context(|| format!("failed to load dataset {}", path.display())),
        None => dataset::bundled().context("bundled dataset is invalid"),
    }
}

fn handle_search(args: SearchArgs, config: &Config) -> Result<ExitCode> {
    let mut catalog = CountryCatalog::new(load_countries(config)?);
    let sections = catalog.sections(&args.query, config.rtl, config.label_mode);

    if sections.is_empty() {
        println!("No matches for \"{}\"", args.query);
        return Ok(ExitCode::SUCCESS);
    }

    for section in sections.iter() {
        println!("== {}", section.title);
        for country in &section.items {
            let calling = if country.calling_code.is_empty() {
                "-".to_string()
            } else {
                format!("+{}", country.calling_code)
            };
            println!(
                "  {} {} {}",
                country.region_code,
                calling,
                config.label_mode.label(country, config.rtl)
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_validate(args: ValidateArgs, config: &Config) -> Result<ExitCode> {
    let Some(region) = args.country.clone().or_else(|| config.default_country.clone()) else {
        bail!("no country given; pass --country or set `default_country` in configuration");
    };

    let mut catalog = CountryCatalog::new(load_countries(config)?);
    let Some(country) = catalog.find(&region, config.rtl, config.label_mode) else {
        bail!("unknown country `{}`", region);
    };

    let digits = extract_digits(&args.number);
    let validator = PhoneValidator::<LibPhoneNumber>::default();
    let valid = validator.is_valid(&digits, &country);

    println!("country: {} +{}", country.region_code, country.calling_code);
    println!("digits: {}", digits);
    println!("possible: {}", yes_no(validator.is_possible(&digits, &country)));
    println!("valid: {}", yes_no(valid));
    if let Some(e164) = validator.format_e164(&digits, &country) {
        println!("e164: {}", e164);
    }

    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
