// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::options::{OutputFormat, Visibility};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "verstamp",
    version = crate::version::DISPLAY,
    about = "ビルド時にバージョン番号とリビジョンを定数ファイルへ埋め込むツール"
)]
pub struct Args {
    /// ログを詳細にする (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// エラー以外のログを出さない
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 定数ファイルを生成する
    Generate(GenerateArgs),
    /// 解決されたバージョンを表示する
    Show(ShowArgs),
    /// ファイルに未解決のプレースホルダ (@NAME@) が残っていないか検査する
    Check(CheckArgs),
}

/// Where the four values come from.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// メジャーバージョン
    #[arg(long, value_name = "N", help_heading = "バージョン")]
    pub major: Option<String>,

    /// マイナーバージョン
    #[arg(long, value_name = "N", help_heading = "バージョン")]
    pub minor: Option<String>,

    /// パッチバージョン
    #[arg(long, value_name = "N", help_heading = "バージョン")]
    pub patch: Option<String>,

    /// MAJOR.MINOR.PATCH 形式でまとめて指定
    #[arg(long, value_name = "X.Y.Z", help_heading = "バージョン")]
    pub semver: Option<String>,

    /// CARGO_PKG_VERSION_{MAJOR,MINOR,PATCH} から読み込む（個別指定が優先）
    #[arg(long, help_heading = "バージョン")]
    pub from_env: bool,

    /// リビジョンを明示する（git を参照しない）
    #[arg(long, value_name = "TOKEN", conflicts_with = "no_revision", help_heading = "リビジョン")]
    pub revision: Option<String>,

    /// リビジョンなし（空文字列）として生成する
    #[arg(long, help_heading = "リビジョン")]
    pub no_revision: bool,

    /// リビジョンを取得するリポジトリ
    #[arg(long, value_name = "DIR", default_value = ".", value_hint = ValueHint::DirPath, help_heading = "リビジョン")]
    pub repo: PathBuf,

    /// 短縮ハッシュの桁数
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(4..=40), help_heading = "リビジョン")]
    pub abbrev: u8,

    /// 作業ツリーに変更があれば -dirty を付ける
    #[arg(long, help_heading = "リビジョン")]
    pub dirty: bool,

    /// リビジョンが取得できなくても失敗せず空文字列を埋め込む
    #[arg(long, help_heading = "リビジョン")]
    pub allow_missing_revision: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "rust", help_heading = "出力")]
    pub format: OutputFormat,

    /// 定数名の接頭辞 (例: CALC_)。json では指定不可
    #[arg(long, value_name = "PREFIX", help_heading = "出力")]
    pub prefix: Option<String>,

    /// Rust 出力の可視性。json では指定不可
    #[arg(long, value_enum, default_value = "pub", help_heading = "出力")]
    pub visibility: Visibility,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON で表示
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// 検査するファイル
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
