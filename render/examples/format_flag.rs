//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! # Format Flag Example
//!
//! A small command line tool that prints a service status report in the
//! format named by `--format`, the way most CLIs expose output formats.
//!
//! ## What This Example Shows
//!
//! - Deriving `Renderable` for a report type
//! - Validating the flag against `Renderer::formats`
//! - Switching between compact and pretty output
//! - Logging render errors through `observability::log_error`
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run --example format_flag -- --format yaml
//! cargo run --example format_flag -- --format json --pretty
//! RUST_LOG=render=debug cargo run --example format_flag -- --format xml
//! ```

use clap::Parser;
use render::{Renderable, defaults, observability};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Status report for a running service.
#[derive(Serialize, Renderable)]
#[renderable(serialize, display)]
struct Status {
    service: String,
    healthy: bool,
    uptime_secs: u64,
    endpoints: Vec<String>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.healthy { "healthy" } else { "unhealthy" };
        writeln!(f, "{} is {state} (up {}s)", self.service, self.uptime_secs)?;
        for endpoint in &self.endpoints {
            writeln!(f, "  - {endpoint}")?;
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
#[command(name = "format_flag")]
#[command(about = "Print a status report in the requested format", long_about = None)]
struct Args {
    /// Output format (json, yaml, yml, xml, text, txt, plain)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Human-friendly output where the format supports it
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let renderer = defaults::standard();

    if !renderer.supports(&args.format) {
        eprintln!(
            "unknown format '{}', expected one of: {}",
            args.format,
            renderer.formats().join(", ")
        );
        return ExitCode::FAILURE;
    }

    let status = Status {
        service: "render-demo".to_string(),
        healthy: true,
        uptime_secs: 3600,
        endpoints: vec!["127.0.0.1:8080".to_string(), "[::1]:8080".to_string()],
    };

    let mut stdout = io::stdout().lock();
    let result = renderer
        .render(&mut stdout, &args.format, args.pretty, &status)
        .and_then(|()| stdout.flush().map_err(render::RenderError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            observability::log_error(&error);
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
