//! route-estimator: resolve two cities and compare travel times.
//!
//! Data source
//! -----------
//!
//! Without `--gazetteer` the bundled `cities.csv` of `route-core` is used.
//! A user-supplied gazetteer is loaded through a binary snapshot written
//! next to it (`<file>.gaz.bin`) unless `--no-cache` is given. Set
//! `RUST_LOG=debug` to follow resolver and model decisions.
use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;
use route_cli::args::{CliArgs, Commands};
use route_cli::{chart, export, session::Console};
use route_core::{plan, Gazetteer, ModeTable, RouteError};
use std::borrow::Cow;
use std::io;

fn load_gazetteer(args: &CliArgs) -> Result<Cow<'static, Gazetteer>> {
    let gaz = match &args.gazetteer {
        None => Cow::Borrowed(Gazetteer::load().context("loading bundled gazetteer")?),
        Some(path) if args.no_cache => Cow::Owned(
            Gazetteer::load_from_path(path).with_context(|| format!("loading {}", path.display()))?,
        ),
        Some(path) => Cow::Owned(
            Gazetteer::load_cached(path).with_context(|| format!("loading {}", path.display()))?,
        ),
    };
    Ok(gaz)
}

fn load_modes(args: &CliArgs) -> Result<Cow<'static, ModeTable>> {
    let modes = match &args.modes {
        None => Cow::Borrowed(ModeTable::load().context("loading bundled mode table")?),
        Some(path) => Cow::Owned(
            ModeTable::load_csv(path).with_context(|| format!("loading {}", path.display()))?,
        ),
    };
    Ok(modes)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    debug!("{args:?}");

    let gaz = load_gazetteer(&args)?;
    let modes = load_modes(&args)?;

    match args.command {
        Commands::Stats => {
            let stats = gaz.stats();
            println!("Gazetteer statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Countries: {}", stats.countries);
            println!("  Ambiguous names: {}", stats.ambiguous_names);
            println!("  Modes: {}", modes.labels().collect::<Vec<_>>().join(", "));
        }

        Commands::Suggest { query } => match gaz.suggest(&query) {
            Some(s) => println!("{} (edit distance {})", s.city, s.distance),
            None => eprintln!("The gazetteer is empty."),
        },

        Commands::Estimate {
            origin,
            destination,
            chart: with_chart,
            json,
        } => {
            let o = resolve_or_hint(&gaz, &origin)?;
            let d = resolve_or_hint(&gaz, &destination)?;
            let report = plan(o, d, &modes)?;

            if json {
                print_json(&report)?;
            } else {
                println!("{} ({} km)", report.title(), report.distance_km);
                for (mode, e) in modes.modes().iter().zip(&report.estimates) {
                    println!("  Via {:<16} {e}", mode.label);
                }
                println!("Recommended travel: {}", report.recommended(&modes).label);
            }
            if with_chart {
                println!();
                println!("{}", chart::render(&report, &modes, chart::DEFAULT_WIDTH));
            }
        }

        Commands::Interactive => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            console.run(&gaz, &modes)?;
        }

        Commands::Export { dir, force, pairs } => {
            let path = export::export(&dir, force, pairs.as_deref(), &gaz, &modes)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Exact lookup; a miss reports the closest name and fails.
fn resolve_or_hint<'a>(gaz: &'a Gazetteer, query: &str) -> Result<&'a route_core::CityRecord> {
    match gaz.resolve_exact(query) {
        Ok(city) => Ok(city),
        Err(RouteError::NotFound(q)) => match gaz.suggest(&q) {
            Some(s) => bail!("no city named '{q}'. Did you mean {}?", s.city.name()),
            None => bail!("no city named '{q}'"),
        },
        Err(e) => Err(e.into()),
    }
}

#[cfg(feature = "json")]
fn print_json(report: &route_core::RouteReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_json(_report: &route_core::RouteReport) -> Result<()> {
    bail!("JSON output needs the 'json' feature")
}
