/// Colon-separated directories searched for fragment files, before built-ins
pub const FRAGMENT_PATH_ENV: &str = "HEPCONF_FRAGMENT_PATH";
/// Whether fragments that can't be found are passed to the engine by name
pub const ALLOW_EXTERNAL_ENV: &str = "HEPCONF_ALLOW_EXTERNAL";
/// Extension of fragment files on the search path
pub const FRAGMENT_EXTENSION: &str = "yaml";
