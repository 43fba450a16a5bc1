use clap::ValueEnum;

/// 出力フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Rust の定数 (include! 用)
    #[default]
    Rust,
    /// C/C++ ヘッダ (#define)
    CHeader,
    /// JSON
    Json,
}

/// Rust 出力の定数の可視性
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Visibility {
    /// pub
    #[default]
    Pub,
    /// pub(crate)
    Crate,
}

impl From<OutputFormat> for verstamp::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Rust => Self::Rust,
            OutputFormat::CHeader => Self::CHeader,
            OutputFormat::Json => Self::Json,
        }
    }
}

impl From<Visibility> for verstamp::Visibility {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Pub => Self::Public,
            Visibility::Crate => Self::Crate,
        }
    }
}
