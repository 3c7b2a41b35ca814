// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod temp;

use assert_cmd::Command;

#[allow(unused_imports)]
pub use temp::TempDir;

pub fn string_calc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_string_calc"));
    cmd.env_remove("RUST_LOG");
    cmd
}
