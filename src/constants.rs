pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const IMPORT_MEDIA_TYPE: &str = "application/vnd.github.golden-comet-preview+json";
pub const USER_AGENT: &str = "gc2gh";
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

// Default file name of the Google Takeout issue export
pub const DEFAULT_EXPORT_FILE: &str = "GoogleCodeProjectHosting.json";

pub const PLACEHOLDER_BODY: &str = "Issue missing from Google Code";
pub const PLACEHOLDER_LABEL: &str = "invalid";
