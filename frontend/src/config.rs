
/// Connection settings for the hosted table that stores leads.
#[derive(Clone, Debug, PartialEq)]
pub struct SinkConfig {
    pub base_url: String,
    pub anon_key: String,
    pub table: String,
}

impl SinkConfig {
    /// Reads the settings baked in at build time. `None` when the URL or key is missing.
    pub fn from_env() -> Option<Self> {
        Self::from_parts(
            option_env!("SUPABASE_URL"),
            option_env!("SUPABASE_ANON_KEY"),
            option_env!("LEADS_TABLE"),
        )
    }

    fn from_parts(url: Option<&str>, key: Option<&str>, table: Option<&str>) -> Option<Self> {
        let base_url = url.map(str::trim).filter(|u| !u.is_empty())?;
        let anon_key = key.map(str::trim).filter(|k| !k.is_empty())?;
        let table = table
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_LEADS_TABLE);

        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            table: table.to_string(),
        })
    }

    pub fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

pub const DEFAULT_LEADS_TABLE: &str = "leads";

/// Tag attached to every lead submitted from this site.
pub const LEAD_SOURCE: &str = "company-profile";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_or_key_yields_none() {
        assert_eq!(SinkConfig::from_parts(None, Some("key"), None), None);
        assert_eq!(SinkConfig::from_parts(Some("https://x.supabase.co"), None, None), None);
        assert_eq!(SinkConfig::from_parts(Some("  "), Some("key"), None), None);
    }

    #[test]
    fn table_defaults_to_leads() {
        let config = SinkConfig::from_parts(Some("https://x.supabase.co/"), Some("key"), None).unwrap();
        assert_eq!(config.table, "leads");
        assert_eq!(config.insert_url(), "https://x.supabase.co/rest/v1/leads");
    }

    #[test]
    fn table_override_is_used() {
        let config =
            SinkConfig::from_parts(Some("https://x.supabase.co"), Some("key"), Some("inquiries")).unwrap();
        assert_eq!(config.insert_url(), "https://x.supabase.co/rest/v1/inquiries");
    }
}
