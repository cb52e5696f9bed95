use serde::Serialize;

use crate::client::API_URL;
use crate::config::DEFAULT_TIMEOUT_MS;

/// Static package metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub api_url: &'static str,
    pub requires_api_key: bool,
    pub default_timeout_ms: u64,
    /// Names of the exported operations
    pub exports: &'static [&'static str],
}

/// Get package metadata: name, version, endpoint, and exported operations.
pub fn package_info() -> PackageInfo {
    PackageInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        api_url: API_URL,
        requires_api_key: true,
        default_timeout_ms: DEFAULT_TIMEOUT_MS,
        exports: &[
            "ReactionClient::new",
            "ReactionClient::send_reaction",
            "ReactionClient::send_batch_reactions",
            "ReactionClient::get_config",
            "ReactionClient::set_config",
            "validate_url",
            "package_info",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_info_matches_manifest() {
        let info = package_info();
        assert_eq!(info.name, "nvrch");
        assert_eq!(info.version, "3.0.0");
        assert_eq!(info.api_url, API_URL);
        assert!(info.requires_api_key);
        assert_eq!(info.default_timeout_ms, 30_000);
        assert!(info.exports.contains(&"ReactionClient::send_reaction"));
    }
}
