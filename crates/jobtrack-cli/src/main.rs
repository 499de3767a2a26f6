// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use jobtrack_app::AppState;
use runtime::{ApiRuntime, DemoRuntime};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `jobtrack --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let show_stats = config.show_stats();
    let mut state = AppState::default();

    if options.demo {
        if options.check_only {
            return Ok(());
        }
        let mut runtime = DemoRuntime::seeded();
        return jobtrack_tui::run_app(&mut state, &mut runtime, show_stats);
    }

    let server_url = options
        .server_url
        .clone()
        .map(|url| url.trim_end_matches('/').to_owned())
        .unwrap_or_else(|| config.server_url());
    let client = jobtrack_api::Client::new(&server_url, config.timeout()?).with_context(|| {
        format!(
            "invalid server URL {server_url:?}; fix [server].base_url in {} or pass --server",
            options.config_path.display()
        )
    })?;
    if options.check_only {
        return Ok(());
    }

    let mut runtime = ApiRuntime::new(client);
    jobtrack_tui::run_app(&mut state, &mut runtime, show_stats)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    server_url: Option<String>,
    print_config_path: bool,
    print_example: bool,
    demo: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        server_url: None,
        print_config_path: false,
        print_example: false,
        demo: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--server" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--server requires a URL"))?;
                options.server_url = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("jobtrack");
    println!("  --config <path>          Use a specific config path");
    println!("  --server <url>           Override the tracker server URL");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Launch with seeded in-memory data, no server");
    println!("  --check                  Validate config and server URL, then exit");
    println!("  --help                   Show this help");
}
