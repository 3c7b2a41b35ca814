// src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options::{InputSource, OutputFormat};
use derive_builder::Builder;
use string_calc_core::CalculatorConfig;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub source: InputSource,
    /// Decode backslash escapes in an inline expression.
    #[builder(default)]
    pub escapes: bool,
    #[builder(default)]
    pub calculator: CalculatorConfig,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub explain: bool,
    #[builder(default)]
    pub verbosity: u8,
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let source = match (args.expression, args.file) {
            (Some(expression), _) => InputSource::Inline(expression),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        };

        ConfigBuilder::default()
            .source(source)
            .escapes(args.escapes)
            .calculator(CalculatorConfig::with_threshold(args.threshold))
            .format(args.format)
            .explain(args.explain)
            .verbosity(args.verbose)
            .build()
            .map_err(|err| AppError::Config(err.to_string()))
    }
}

impl Config {
    /// Log level derived from `-v` occurrences.
    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
