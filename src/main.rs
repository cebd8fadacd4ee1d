mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};

use psl_extract::{format_fields, hostname_from_url, SuffixResolver, SuffixStore};

use crate::cli::Cli;

fn init_logger(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    builder.format_timestamp(None);
    // A second initialisation is harmless
    let _ = builder.try_init();
}

fn main() -> anyhow::Result<ExitCode> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    let fields = cli.fields(&matches);

    let verbose = cli.verbose || cli.interactive;
    init_logger(verbose);

    let mut store = SuffixStore::new()
        .with_cache_path(&cli.cache_file)
        .with_url(&cli.list_url)
        .with_verbose(verbose);
    if let Some(depth) = cli.max_depth {
        store = store.with_max_depth(depth);
    }
    let resolver = SuffixResolver::with_store(store);

    if cli.update {
        if !resolver.delete_cache() {
            log::error!("Could not empty {}", cli.cache_file.display());
        }
        if !cli.interactive && fields.is_empty() && cli.target.is_none() {
            return Ok(ExitCode::SUCCESS);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.interactive {
        cli::interactive(&resolver, io::stdin().lock(), &mut out, cli.json)?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(target) = cli.target.as_deref() else {
        if !fields.is_empty() {
            eprintln!("This option requires an [URL].");
        } else {
            Cli::command().print_help()?;
        }
        return Ok(ExitCode::FAILURE);
    };

    let host = resolver.resolve(hostname_from_url(target));
    if fields.is_empty() || cli.json {
        cli::write_report(&mut out, &host, cli.json)?;
    } else {
        writeln!(out, "{}", format_fields(&host, &fields))?;
    }
    Ok(ExitCode::SUCCESS)
}
