//! The allowed line patterns for an h2o CRAN submission check.

/// Allowed check log lines, in match order.
pub const ALLOWED_PATTERNS: &[&str] = &[
    r"^\* using log directory",
    r"^\* using R version",
    r"^\* using platform",
    r"^\* using session charset",
    r"^\* using option .*",
    r"^\* checking .* \.\.\. OK",
    r"^\* checking extension type \.\.\. Package",
    r"^\* this is package",
    r"^\* checking CRAN incoming feasibility \.\.\. NOTE",
    r"^Maintainer:",
    r"^New maintainer:",
    r"^\s*Tom Kraljevic",
    r"^Days since last update: .*",
    r"^Old maintainer\(s\):",
    r"^\s*Anqi Fu",
    r"^NOTE: There was 1 note.",
    r"^The Title field starts with the package name.",
    r"^The Date field is over a month old.",
    // Blank line.
    r"^$",
    r"^New submission",
    r"^Package was archived on CRAN",
    r"^CRAN repository db overrides:",
    r"^  X-CRAN-Comment: Archived on 2014-09-23 as did not comply with CRAN",
    r"^    policies on use of multiple threads.",
    r"^\* checking installed package size ... NOTE",
    r"^  installed size is .*Mb",
    r"^  sub-directories of 1Mb or more:",
    r"^    java  .*Mb",
    r"^NOTE: There were 2 notes.",
    r"^Package has FOSS license, installs .class/.jar but has no 'java' directory.",
    r"^\* DONE",
    r"^Checking URLs requires 'libcurl' support in the R build",
    r"^Status: 2 NOTEs",
];
