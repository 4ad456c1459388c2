// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{anyhow, bail, Context, Result};
use hepconf::blocks;
use hepconf::config::{FragmentLoader, Settings};
use hepconf::jobs::JobFactory;
use hepconf::observability::init_tracing;
use serde::Serialize;
use std::env;

/// How a configuration is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DumpFormat {
    Yaml,
    Json,
    Toml,
}

impl DumpFormat {
    fn parse(name: &str) -> Result<Self> {
        match name {
            "yaml" => Ok(DumpFormat::Yaml),
            "json" => Ok(DumpFormat::Json),
            "toml" => Ok(DumpFormat::Toml),
            other => bail!("unknown format '{}', expected yaml, json or toml", other),
        }
    }

    fn dump<T: Serialize>(self, value: &T) -> Result<String> {
        Ok(match self {
            DumpFormat::Yaml => serde_yaml::to_string(value)?,
            DumpFormat::Json => serde_json::to_string_pretty(value)?,
            DumpFormat::Toml => toml::to_string_pretty(value)?,
        })
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--format=yaml|json|toml] <job> [key=value ...]", program);
    eprintln!("       {} [--format=yaml|json|toml] --block=<name>", program);
    eprintln!("       {} --list-jobs", program);
    eprintln!("       {} --list-blocks", program);
    eprintln!("Example: {} hgcal_digi_study geometry=D88", program);
    eprintln!("Example: {} --format=json hgc_geom_analyzer geom=v11", program);
}

fn dump_block(name: &str, format: DumpFormat) -> Result<String> {
    let pset = blocks::lookup(name)
        .ok_or_else(|| anyhow!("unknown block '{}'", name))?
        .with_context(|| format!("failed to build block '{}'", name))?;
    format.dump(&pset)
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "hepconf".to_string());

    let mut format = DumpFormat::Yaml;
    let mut rest = Vec::new();
    for arg in args {
        match arg.strip_prefix("--format=") {
            Some(name) => format = DumpFormat::parse(name)?,
            None => rest.push(arg),
        }
    }

    let Some((command, tokens)) = rest.split_first() else {
        print_usage(&program);
        std::process::exit(1);
    };

    if let Some(name) = command.strip_prefix("--block=") {
        println!("{}", dump_block(name, format)?);
        return Ok(());
    }

    match command.as_str() {
        "--help" | "-h" => print_usage(&program),
        "--list-jobs" => {
            for name in JobFactory::list_available_jobs() {
                let job = JobFactory::create(name)?;
                println!("{:<24} {}", name, job.description());
            }
        }
        "--list-blocks" => {
            for name in blocks::list_blocks() {
                println!("{}", name);
            }
        }
        flag if flag.starts_with("--") => {
            print_usage(&program);
            bail!("unknown flag '{}'", flag);
        }
        job_name => {
            let settings = Settings::from_env();
            let loader = FragmentLoader::from_settings(&settings);
            let job = JobFactory::create(job_name)?;
            let process = job
                .run(tokens, &loader)
                .with_context(|| format!("failed to configure job '{}'", job_name))?;
            println!("{}", format.dump(&process)?);
        }
    }

    Ok(())
}
