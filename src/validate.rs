use url::Url;

/// Hosts accepted for channel post URLs
const VALID_HOSTS: [&str; 2] = ["whatsapp.com", "www.whatsapp.com"];

/// Check whether a string is a valid WhatsApp Channel post URL.
///
/// A valid URL parses, points at `whatsapp.com` (or `www.whatsapp.com`,
/// case-insensitive), and has a path of the shape
/// `/channel/{channelId}/{postId}`. No check is made that the channel or
/// post actually exists.
///
/// Malformed input yields `false`, never an error.
pub fn validate_url(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }

    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    let Some(host) = parsed.host_str() else {
        return false;
    };
    if !VALID_HOSTS.contains(&host.to_ascii_lowercase().as_str()) {
        return false;
    }

    // Path must be /channel/{channelId}/{postId}
    let segments: Vec<&str> = parsed
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    segments.len() >= 3 && segments[0] == "channel"
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bare_host("https://whatsapp.com/channel/0029VbAzDjIBFLgbEyadQb3y/178")]
    #[case::www_host("https://www.whatsapp.com/channel/0029VbAzDjIBFLgbEyadQb3y/178")]
    #[case::mixed_case_host("https://WhatsApp.com/channel/abc/1")]
    #[case::extra_segments("https://whatsapp.com/channel/abc/1/extra")]
    #[case::double_slashes("https://whatsapp.com//channel//abc//1")]
    fn test_valid_channel_urls(#[case] url: &str) {
        assert!(validate_url(url));
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    #[case::not_a_url("not a url")]
    #[case::wrong_host("https://example.com/channel/abc/1")]
    #[case::subdomain("https://chat.whatsapp.com/channel/abc/1")]
    #[case::too_few_segments("https://whatsapp.com/channel/abc")]
    #[case::wrong_first_segment("https://whatsapp.com/group/abc/1")]
    #[case::no_path("https://whatsapp.com")]
    #[case::relative_path("/channel/abc/1")]
    fn test_invalid_channel_urls(#[case] url: &str) {
        assert!(!validate_url(url));
    }
}
