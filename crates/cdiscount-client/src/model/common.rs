// Request types shared by the offer and product sections

use serde::Serialize;

/// Location of a package to integrate
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageRequest {
    pub zip_file_full_path: String,
}

/// Identifies a submitted package
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PackageFilter {
    #[serde(rename = "PackageID")]
    pub package_id: i64,
}
