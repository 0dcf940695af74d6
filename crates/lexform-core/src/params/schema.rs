//! Parameter schema generation

use crate::fingerprint::Fingerprint;
use crate::template::ScanResult;
use std::fmt::Write;

const HEADER: &str = "# This is a TOML file containing parameters for this contract\n";
const META_COMMENT: &str =
    "# This must match the hash of the local template.md file. DO NOT CHANGE IT\n";

/// Build an empty `params.toml` for a scanned template
///
/// The output depends only on its inputs: an unchanged template always yields
/// a byte-identical file.
pub fn build_parameter_schema(scan: &ScanResult, template: &Fingerprint) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\n[meta]\n");
    out.push_str(META_COMMENT);
    // Writing to a String cannot fail
    let _ = writeln!(out, "template = \"{}\"", template);

    for (section, names) in [
        ("var", &scan.variables),
        ("exhibit", &scan.exhibits),
        ("sign", &scan.signatures),
    ] {
        let _ = writeln!(out, "\n[{}]", section);
        for name in names {
            let _ = writeln!(out, "{} = \"\"", toml_key(name));
        }
        // Each section ends with a blank line of its own
        out.push('\n');
    }

    out
}

/// Render `name` as a TOML key, quoting it unless it is a valid bare key
fn toml_key(name: &str) -> String {
    let bare = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if bare {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
