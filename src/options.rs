// src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 合計値のみ
    #[default]
    Plain,
    Json,
}

/// Where the expression is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(std::path::PathBuf),
    #[default]
    Stdin,
}
