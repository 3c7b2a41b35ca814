// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::process::ExitCode;
use string_calc::args::Args;
use string_calc::config::Config;
use string_calc::error::Result;
use string_calc::options::OutputFormat;
use string_calc::{input, presentation};
use string_calc_core::Calculator;

fn main() -> ExitCode {
    let args = Args::parse();
    let format = args.format;

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", presentation::render_error(&e, OutputFormat::Plain));
            return e.exit_code();
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
    log::debug!("string_calc v{} config: {config:?}", string_calc::VERSION);

    match run(&config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::info!("evaluation failed: {}", e.kind());
            let rendered = presentation::render_error(&e, format);
            match format {
                OutputFormat::Json => println!("{rendered}"),
                OutputFormat::Plain => eprintln!("{rendered}"),
            }
            e.exit_code()
        }
    }
}

fn run(config: &Config) -> Result<String> {
    let expression = input::read_expression(config)?;
    log::trace!("expression: {expression:?}");

    let evaluation = Calculator::new(config.calculator).evaluate(&expression)?;
    log::debug!(
        "delimiters={} tokens={} ignored={:?}",
        evaluation.delimiters,
        evaluation.tokens.len(),
        evaluation.ignored
    );

    presentation::render_evaluation(&evaluation, config)
}
