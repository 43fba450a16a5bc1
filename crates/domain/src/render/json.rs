use verstamp_shared_kernel::Result;

use crate::model::VersionStamp;

pub(super) fn render(stamp: &VersionStamp) -> Result<String> {
    let mut out = serde_json::to_string_pretty(stamp)?;
    out.push('\n');
    Ok(out)
}
