// src/args.rs
use crate::options::OutputFormat;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "string_calc",
    version,
    about = "区切り文字付きの数値リストを合計する",
    long_about = "区切り文字付きの数値リストを合計する。\n\
                  既定の区切り文字はカンマと改行。先頭行 `//;` や `//[***][%]` で独自の区切り文字を宣言できる。\n\
                  負の数はエラー、1000 を超える値は無視される。"
)]
pub struct Args {
    /// 計算式 (省略時は --file または標準入力から読む)
    ///
    /// `-` で始まる式は `--` の後に置く。
    #[arg(conflicts_with = "file")]
    pub expression: Option<String>,

    /// 計算式を読み込むファイル
    #[arg(long, short = 'f', value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// `\n`, `\t`, `\\` などのエスケープを解釈する
    #[arg(long, short = 'e')]
    pub escapes: bool,

    /// この値を超える数は無視する
    #[arg(long, default_value_t = string_calc_core::DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: i32,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// 区切り文字・トークン・無視した値も出力する
    #[arg(long)]
    pub explain: bool,

    /// ログを詳細にする (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}
