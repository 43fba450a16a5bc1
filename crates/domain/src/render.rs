//! Emitters turning a [`VersionStamp`] into the text of a generated file.

mod c_header;
mod json;
mod rust;

use verstamp_shared_kernel::Result;

use crate::model::VersionStamp;
use crate::value_objects::{ComponentField, ConstPrefix};

/// Marker written at the top of every generated source file.
pub const GENERATED_MARKER: &str = "@generated by verstamp. Do not edit.";

/// Name of the revision constant, before any prefix is applied.
pub const REVISION_CONST: &str = "GIT_HASH";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Rust,
    CHeader,
    Json,
}

/// Visibility of the constants in Rust output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Crate,
}

impl Visibility {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "pub",
            Self::Crate => "pub(crate)",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub prefix: Option<ConstPrefix>,
    pub visibility: Visibility,
}

impl RenderOptions {
    pub fn new(format: OutputFormat) -> Self {
        Self { format, ..Self::default() }
    }

    fn const_name(&self, base: &str) -> String {
        match &self.prefix {
            Some(prefix) => prefix.apply(base),
            None => base.to_string(),
        }
    }

    pub(crate) fn component_name(&self, field: ComponentField) -> String {
        self.const_name(field.const_name())
    }

    pub(crate) fn revision_name(&self) -> String {
        self.const_name(REVISION_CONST)
    }
}

/// Renders `stamp` in the format selected by `options`. The output always
/// ends with a newline.
pub fn render(stamp: &VersionStamp, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Rust => Ok(rust::render(stamp, options)),
        OutputFormat::CHeader => Ok(c_header::render(stamp, options)),
        OutputFormat::Json => json::render(stamp),
    }
}
