use std::io::{self, Write};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use algotrace::api::{self, Cli};
use algotrace::core::{TraceError, TraceResult};
use algotrace::services::trace::{JsonLinesSink, TraceContext};
use algotrace::utils::logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                process::exit(0);
            }
            _ => fail(&TraceError::Usage(usage_reason(&err))),
        },
    };

    let code = match execute(&cli) {
        Ok(()) => 0,
        Err(err) => {
            report(&err);
            err.exit_code()
        }
    };

    logging::shutdown();
    process::exit(code);
}

fn execute(cli: &Cli) -> TraceResult<()> {
    let config = cli.resolve_config()?;
    logging::init(&config.log)?;

    let request = cli.to_request(&config)?;
    let stdout = io::stdout();
    let mut ctx = TraceContext::new(JsonLinesSink::new(stdout.lock()));
    api::run(&request, &mut ctx)?;
    Ok(())
}

/// 在错误通道上写出唯一一条结构化错误记录
fn report(err: &TraceError) {
    let line = serde_json::to_string(&err.to_record())
        .unwrap_or_else(|_| format!("{{\"type\":\"error\",\"message\":{:?}}}", err.to_string()));
    {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", line);
        let _ = stderr.flush();
    }
    log::debug!("run failed with {}", err.kind());
}

fn fail(err: &TraceError) -> ! {
    report(err);
    process::exit(err.exit_code());
}

fn usage_reason(err: &clap::Error) -> String {
    err.to_string()
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}
