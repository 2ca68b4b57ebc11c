use clap::{Parser, Subcommand};
use oman_guide::clock::SystemClock;
use oman_guide::export::{self, ExportService, Notice, PngBarcode};
use oman_guide::journey::{GuideError, GuideSettings, JourneyGuide, JourneyPhase};
use oman_guide::locale::UiContext;
use oman_guide::{config, generate, itinerary, output, preferences};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "oman-guide")]
#[command(about = "Oman heritage showcase and journey planner")]
#[command(long_about = "\
Oman heritage showcase and journey planner

Builds a static bilingual site (English and Arabic) of Oman's heritage,
traditions, wellness and culture, with a journey form that turns a
traveller's preferences into a day-by-day itinerary.

Source directory:

  content/
  └── config.toml        # Site config (optional)

Preferences file (for guide and check):

  name = \"Amal\"
  places_to_visit = [\"beaches\"]
  tradition_interests = [\"dates\", \"frankincense\", \"pottery\", \"halwa\"]
  wellness_interest = \"yes\"
  culture_interests = [\"traditional-dress\", \"festivals-and-arts\", \"vision2040\"]
  days_to_explore = \"7-8 Days\"

Run 'oman-guide gen-config' to generate a documented config.toml.
Set RUST_LOG=oman_guide=debug to trace journey transitions.")]
#[command(version)]
struct Cli {
    /// Content directory holding config.toml
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the static site for every locale
    Build,
    /// Print the itinerary for a trip length
    Plan {
        /// Trip length, e.g. "3-4 Days" or "extended". Unknown values get the 7-8 day plan
        #[arg(long)]
        days: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the journey guide on a preferences file
    Guide {
        /// Preferences TOML file
        prefs: PathBuf,
        /// Write the printable itinerary to the output directory
        #[arg(long)]
        export: bool,
        /// Write a QR code of the share link to the output directory
        #[arg(long)]
        qr: bool,
        /// Viewport width used to pick the offered export action
        #[arg(long, default_value_t = 1280)]
        width: u32,
    },
    /// Open a shared journey link
    Open {
        /// Results link, e.g. https://example.com/journey/results?data=...
        link: String,
    },
    /// Validate a preferences file without generating
    Check {
        /// Preferences TOML file
        prefs: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            println!("==> Generating site → {}", cli.output.display());
            let pages = generate::generate(&config, &cli.output)?;
            output::print_generate_output(&pages);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Plan { days, json } => {
            let plan = itinerary::select_itinerary(days.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                output::print_plan(&plan, None);
            }
        }
        Command::Guide {
            prefs,
            export,
            qr,
            width,
        } => {
            let config = config::load_config(&cli.source)?;
            let form = preferences::load_form(&prefs)?;
            let mut guide = new_guide(&config)?;
            guide.mount_viewport(width);

            if let Err(e) = guide.submit(form) {
                if let GuideError::Invalid(rejected) = &e {
                    output::print_validation_errors(&rejected.errors);
                }
                return Err(e.into());
            }
            println!("Curating your journey...");
            drive(&mut guide);

            let ctx = UiContext::new(config.site.locale);
            let results = guide
                .results()
                .ok_or("journey guide stopped before results were ready")?;
            let name = results.preferences().name();
            let mut notice = Notice::default();

            let exported = if export {
                let document = generate::render_printable(&ctx, &config, results).into_string();
                export::export_itinerary(
                    export_service(&config).as_ref(),
                    &document,
                    name,
                    &cli.output,
                    &mut notice,
                )
            } else {
                None
            };

            let mut notices = Vec::new();
            notices.extend(notice.take());
            let code = match (qr, results.scan_link()) {
                (true, Some(link)) => {
                    let dest = cli
                        .output
                        .join(format!("{}.png", export::export_filename(name)));
                    export::share_code(&PngBarcode::new(), &link, &dest, &mut notice)
                }
                _ => None,
            };
            notices.extend(notice.take());

            output::print_results(
                &ctx,
                results,
                &output::Artifacts {
                    action: guide.export_action(),
                    export: exported.as_deref(),
                    qr: code.as_ref(),
                    notice: (!notices.is_empty()).then(|| notices.join(" ")),
                },
            );
            guide.teardown();
        }
        Command::Open { link } => {
            let config = config::load_config(&cli.source)?;
            let ctx = UiContext::new(config.site.locale);
            let mut guide = new_guide(&config)?;
            guide.open_link(link)?;
            drive(&mut guide);

            match guide.phase() {
                JourneyPhase::Ready(results) => {
                    output::print_results(&ctx, results, &output::Artifacts::default());
                }
                JourneyPhase::NotFound { reason } => output::print_not_found(&ctx, reason),
                other => return Err(format!("unexpected journey state: {:?}", other.kind()).into()),
            }
            guide.teardown();
        }
        Command::Check { prefs } => {
            println!("==> Checking {}", prefs.display());
            let form = preferences::load_form(&prefs)?;
            match form.submit() {
                Ok(set) => output::print_check_ok(&set),
                Err(rejected) => {
                    output::print_validation_errors(&rejected.errors);
                    return Err("preferences are incomplete".into());
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` overrides the default of warnings only.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn new_guide(config: &config::SiteConfig) -> Result<JourneyGuide<SystemClock>, url::ParseError> {
    Ok(JourneyGuide::new(
        SystemClock::new(),
        GuideSettings::from_config(config)?,
    ))
}

/// Sleep until each pending transition is due, then fire it.
fn drive(guide: &mut JourneyGuide<SystemClock>) {
    while let Some(wait) = guide.time_until_next_transition() {
        std::thread::sleep(wait);
        guide.poll();
    }
}

#[cfg(feature = "pdf")]
fn export_service(config: &config::SiteConfig) -> Box<dyn ExportService> {
    Box::new(export::ChromePdfExport::new(export::PaperInches::from(
        &config.export,
    )))
}

#[cfg(not(feature = "pdf"))]
fn export_service(_config: &config::SiteConfig) -> Box<dyn ExportService> {
    Box::new(export::PrintableHtmlExport)
}
