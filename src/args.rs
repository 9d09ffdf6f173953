// src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "route_count",
    version,
    about = "ディレクトリ配下の routes.xml に含まれる <route> 要素の総数を数える",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// 走査の起点ディレクトリ (自身も対象)
    #[arg(
        value_name = "DIRECTORY",
        value_hint = ValueHint::DirPath,
        value_parser = parsers::parse_directory,
        help_heading = "走査/入力"
    )]
    pub directory: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// ファイルごとの件数も表示
    #[arg(long, help_heading = "出力")]
    pub per_file: bool,

    /// 進捗表示 (stderr)
    #[arg(long, help_heading = "出力")]
    pub progress: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// シンボリックリンクを辿らない (既定では辿る)
    #[arg(long, help_heading = "走査/入力")]
    pub no_follow: bool,

    /// 最大深さ (0 = 起点のみ)
    #[arg(long, value_parser = parsers::parse_depth, help_heading = "走査/入力")]
    pub max_depth: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 読めないディレクトリや壊れた XML を警告してスキップ
    #[arg(long, help_heading = "動作")]
    pub keep_going: bool,

    /// ログの詳細度 (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
