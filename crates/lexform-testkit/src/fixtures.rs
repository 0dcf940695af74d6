//! Fixture templates and parameter files
//!
//! The consultant agreement exercises every placeholder kind: variables,
//! exhibit labels, exhibit bodies and signature fields.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

pub const CONSULTANT_TEMPLATE: &str = r#"# CONSULTING AGREEMENT

This Agreement is made as of {{ Date }} between My Corp, Inc. (the "Company")
and {{Consultant}} ("Consultant").

Consultant will provide the services described on {{exhibit.services}}
({{Schedule}}). Fees are specified in {{exhibit.compensation}}; the services
of {{exhibit.services}} are billed monthly.

# Signatures

![Company Signature]({{sign.image}})

By: {{sign.signer}}

\pagebreak

# {{exhibit.services}}

{{exhibit.services.value}}

# {{exhibit.compensation}}

{{exhibit.compensation.value}}
"#;

/// `params.toml` for [`CONSULTANT_TEMPLATE`] with every value filled in
pub fn consultant_params() -> String {
    format!(
        r#"[meta]
template = "{}"

[var]
Date = "2017-05-04"
Consultant = "John Smith"
Schedule = "Full Time"

[exhibit]
services = "Software Development"
compensation = "$100/hr"

[sign]
image = "franklin.png"
signer = "Ben Franklin, President"
"#,
        fingerprint(CONSULTANT_TEMPLATE.as_bytes())
    )
}

/// What [`CONSULTANT_TEMPLATE`] compiles to with [`consultant_params`]
pub const CONSULTANT_CONTRACT: &str = r#"# CONSULTING AGREEMENT

This Agreement is made as of 2017-05-04 between My Corp, Inc. (the "Company")
and John Smith ("Consultant").

Consultant will provide the services described on Exhibit 1
(Full Time). Fees are specified in Exhibit 2; the services
of Exhibit 1 are billed monthly.

# Signatures

![Company Signature](franklin.png)

By: Ben Franklin, President

\pagebreak

# Exhibit 1

Software Development

# Exhibit 2

$100/hr
"#;

/// Uppercase hex SHA-256, as recorded in `[meta] template`
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode_upper(Sha256::digest(bytes))
}

/// Write [`CONSULTANT_TEMPLATE`] to `dir/consultant.md`
pub fn write_template(dir: &Path) -> PathBuf {
    let path = dir.join("consultant.md");
    std::fs::write(&path, CONSULTANT_TEMPLATE).expect("Failed to write fixture template");
    path
}

/// Overwrite `params.toml` in an engagement with [`consultant_params`]
pub fn fill_params(engagement: &Path) {
    std::fs::write(engagement.join("params.toml"), consultant_params())
        .expect("Failed to write fixture params");
}

/// A stand-in `pandoc` that copies its input to the `-o` path
///
/// Lets PDF compilation run end to end without a TeX installation.
#[cfg(unix)]
pub fn fake_pandoc(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-pandoc");
    let script = r#"#!/bin/sh
input="$1"
while [ "$#" -gt 0 ]; do
  if [ "$1" = "-o" ]; then
    shift
    output="$1"
  fi
  shift
done
printf '%%PDF-FAKE\n' > "$output"
cat "$input" >> "$output"
"#;
    std::fs::write(&path, script).expect("Failed to write fake pandoc");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake pandoc executable");
    path
}

/// A stand-in `pandoc` whose output is `found` or `missing`, depending on
/// whether `resource` exists relative to its working directory
#[cfg(unix)]
pub fn resource_checking_pandoc(dir: &Path, resource: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("resource-checking-pandoc");
    let script = format!(
        r#"#!/bin/sh
while [ "$#" -gt 0 ]; do
  if [ "$1" = "-o" ]; then
    shift
    output="$1"
  fi
  shift
done
if [ -f '{}' ]; then echo found > "$output"; else echo missing > "$output"; fi
"#,
        resource
    );
    std::fs::write(&path, script).expect("Failed to write fake pandoc");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake pandoc executable");
    path
}
