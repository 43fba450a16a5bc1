use crate::model::VersionStamp;
use crate::render::{GENERATED_MARKER, RenderOptions};
use crate::value_objects::ComponentField;

pub(super) fn render(stamp: &VersionStamp, options: &RenderOptions) -> String {
    let mut file = GeneratedFile::new(options.visibility.keyword());
    for field in ComponentField::ALL {
        file.add_const(&options.component_name(field), stamp.component(field).get());
    }
    file.add_const(&options.revision_name(), stamp.revision().as_str());
    file.contents
}

struct GeneratedFile {
    visibility: &'static str,
    contents: String,
}

impl GeneratedFile {
    fn new(visibility: &'static str) -> Self {
        Self { visibility, contents: format!("// {GENERATED_MARKER}\n") }
    }

    fn add_const<T: RustLiteral>(&mut self, name: &str, value: T) -> &mut Self {
        self.contents.push_str(self.visibility);
        self.contents.push_str(" const ");
        self.contents.push_str(name);
        self.contents.push_str(": ");
        self.contents.push_str(T::TYPE);
        self.contents.push_str(" = ");
        value.push_literal(&mut self.contents);
        self.contents.push_str(";\n");
        self
    }
}

trait RustLiteral {
    const TYPE: &'static str;
    fn push_literal(&self, buf: &mut String);
}

impl RustLiteral for u32 {
    const TYPE: &'static str = "u32";

    fn push_literal(&self, buf: &mut String) {
        buf.push_str(&self.to_string());
    }
}

impl RustLiteral for &str {
    const TYPE: &'static str = "&str";

    fn push_literal(&self, buf: &mut String) {
        // Debug formatting of a str is a valid Rust string literal.
        buf.push_str(&format!("{self:?}"));
    }
}
