use crate::model::VersionStamp;
use crate::render::{GENERATED_MARKER, RenderOptions};
use crate::value_objects::ComponentField;

pub(super) fn render(stamp: &VersionStamp, options: &RenderOptions) -> String {
    let guard = match &options.prefix {
        Some(prefix) => prefix.apply("VERSION_H"),
        None => "VERSION_H".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("/* {GENERATED_MARKER} */\n"));
    out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
    for field in ComponentField::ALL {
        out.push_str(&format!(
            "#define {} {}\n",
            options.component_name(field),
            stamp.component(field)
        ));
    }
    // Revision tokens never contain quotes or backslashes.
    out.push_str(&format!(
        "#define {} \"{}\"\n",
        options.revision_name(),
        stamp.revision().as_str()
    ));
    out.push_str(&format!("\n#endif /* {guard} */\n"));
    out
}
