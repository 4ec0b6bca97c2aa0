mod app;

use anyhow::{Context, Result};
use app::{App, Commands};
use clap::Parser;
use seekpath::{
    Locations, LocationsBuilder, Locator, LocatorConfig, Resolver, join_paths, multi_path_append,
};
use seekpath_platform::{Environment, System};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let app = App::parse();
    init_tracing(app.verbose);

    let mut out = io::stdout().lock();
    match run(app, &System, &mut out) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

struct ConfigSource {
    file:   Option<PathBuf>,
    prefix: Option<PathBuf>,
}

impl ConfigSource {
    fn load(&self, env: &impl Environment) -> Result<LocatorConfig> {
        let config = match &self.file {
            Some(path) => LocatorConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => LocatorConfig::discover(env, &System).context("discovering config")?,
        };
        Ok(match &self.prefix {
            Some(prefix) => config.with_install_prefix(prefix),
            None => config,
        })
    }
}

/// Returns whether anything was found; `false` maps to exit status 1.
///
/// Config is only read by the commands that derive fallback locations.
fn run(app: App, env: &impl Environment, out: &mut impl Write) -> Result<bool> {
    let source = ConfigSource {
        file:   app.config,
        prefix: app.prefix,
    };

    match app.cmd {
        Commands::Locate(arg) => {
            let locations = if !arg.dir.is_empty() {
                arg.dir.into_iter().collect::<Locations>()
            } else if let Some(var) = &arg.var {
                LocationsBuilder::new().from_env(var).build(env, &System)
            } else {
                let config = source.load(env)?;
                Locator::for_kind_in(arg.kind, &config, env).locations(false)
            };

            let found = locate(&arg.name, &locations, arg.all);
            for path in &found {
                writeln!(out, "{}", path.display())?;
            }
            if found.is_empty() {
                tracing::warn!(
                    name = %arg.name.display(),
                    searched = locations.len(),
                    "not found"
                );
            }
            Ok(!found.is_empty())
        }
        Commands::Locations(arg) => {
            let config = source.load(env)?;
            let locations = Locator::for_kind_in(arg.kind, &config, env).locations(arg.existing);
            for location in &locations {
                writeln!(out, "{}", location.display())?;
            }
            Ok(true)
        }
        Commands::Join(arg) => {
            writeln!(out, "{}", join_paths(&arg.paths))?;
            Ok(true)
        }
        Commands::Expand(arg) => {
            for path in multi_path_append(&arg.bases, &arg.suffixes) {
                writeln!(out, "{}", path.display())?;
            }
            Ok(true)
        }
    }
}

fn locate(name: &Path, locations: &[PathBuf], all: bool) -> Vec<PathBuf> {
    let resolver = Resolver::system();
    if all {
        resolver.resolve_all(name, locations)
    } else {
        resolver.find_first(name, locations).into_iter().collect()
    }
}
