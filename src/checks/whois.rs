//! WHOIS expiry probe
//!
//! Performs WHOIS queries using the `whois-rust` crate with an embedded
//! node-whois style servers.json table, then pulls the registration expiry
//! out of the free-form response.

use crate::config::WhoisSettings;
use crate::utils::{dates, WhoisError};
use chrono::NaiveDate;
use tracing::debug;
use whois_rust::{WhoIs, WhoIsError, WhoIsLookupOptions, WhoIsServerValue};

/// Embedded WHOIS server table keyed by TLD
const SERVERS_JSON: &str = include_str!("servers.json");

/// Root-zone WHOIS, consulted for TLDs missing from the table
const IANA_SERVER: &str = "whois.iana.org";

/// Suffixes under which names are registered at the third label
const TWO_PART_TLDS: &[&str] = &[
    "co.uk", "org.uk", "me.uk", "net.uk", "ac.uk", "gov.uk",
    "co.jp", "or.jp", "ne.jp", "ac.jp",
    "com.au", "net.au", "org.au", "edu.au", "gov.au",
    "co.nz", "net.nz", "org.nz",
    "co.za", "org.za", "web.za",
    "com.br", "net.br", "org.br", "gov.br",
    "com.mx", "org.mx", "net.mx",
    "com.cn", "net.cn", "org.cn", "edu.cn",
    "co.in", "net.in", "org.in", "gov.in",
    "co.kr", "or.kr", "ne.kr",
    "com.tw", "org.tw", "net.tw",
    "com.sg", "net.sg", "org.sg",
    "com.hk", "net.hk", "org.hk",
    "co.il", "org.il", "net.il",
    "com.ar", "net.ar", "org.ar",
    "com.tr", "net.tr", "org.tr",
    "com.ua", "net.ua", "org.ua",
    "com.pl", "net.pl", "org.pl",
    "com.es", "org.es", "nom.es",
];

/// Field map of a WHOIS response.
///
/// Keeps `Key: value` lines in response order. When a key repeats, the first
/// occurrence wins. After referrals the text is the last server's answer only.
#[derive(Debug, Clone, Default)]
pub struct WhoisRecord {
    fields: Vec<(String, String)>,
}

impl WhoisRecord {
    /// Parse a raw WHOIS response
    pub fn parse(raw: &str) -> Self {
        let mut record = Self::default();

        for line in raw.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('%') || trimmed.starts_with('#') {
                continue;
            }

            let Some((key, value)) = trimmed.split_once(':') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() || record.get(key).is_some() {
                continue;
            }

            record.fields.push((key.to_string(), value.to_string()));
        }

        record
    }

    /// Value of a field, matched ASCII case-insensitively
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Expiry date from the first candidate field present.
    ///
    /// Candidates are tried in order and only the first one found is used:
    /// if its value does not parse as a date the result is `None`.
    pub fn expiry<S: AsRef<str>>(&self, candidates: &[S]) -> Option<NaiveDate> {
        let value = candidates
            .iter()
            .find_map(|candidate| self.get(candidate.as_ref()))?;
        dates::parse_expiry_text(value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// WHOIS expiry checker
pub struct WhoisChecker {
    settings: WhoisSettings,
}

impl WhoisChecker {
    /// Create a new WHOIS checker
    pub fn new(settings: WhoisSettings) -> Self {
        Self { settings }
    }

    /// Registration expiry for `domain`.
    ///
    /// `Ok(None)` means the registry answered but no usable expiry field was
    /// present. Transport problems are returned as errors.
    pub async fn expiry(&self, domain: &str) -> Result<Option<NaiveDate>, WhoisError> {
        let raw = self.lookup(domain).await?;
        let record = WhoisRecord::parse(&raw);
        let expiry = record.expiry(self.settings.expiry_fields.as_slice());

        if expiry.is_none() {
            debug!(
                "No expiry field in WHOIS response for {} ({} fields)",
                domain,
                record.len()
            );
        }

        Ok(expiry)
    }

    /// Perform a WHOIS lookup and return the raw response.
    /// Automatically extracts the registered domain (strips subdomains like www.).
    ///
    /// TLDs missing from the embedded table are resolved through IANA's
    /// `whois:` referral. The timeout covers the whole exchange.
    pub async fn lookup(&self, domain: &str) -> Result<String, WhoisError> {
        let domain = extract_registered_domain(domain);

        tokio::time::timeout(self.settings.timeout(), self.lookup_registry(&domain))
            .await
            .map_err(|_| WhoisError::Timeout {
                domain: domain.clone(),
            })?
    }

    async fn lookup_registry(&self, domain: &str) -> Result<String, WhoisError> {
        let whois = WhoIs::from_string(SERVERS_JSON).map_err(|e| WhoisError::ServerList {
            message: e.to_string(),
        })?;

        let mut options = WhoIsLookupOptions::from_string(domain)
            .map_err(|e| lookup_failed(domain, format!("Invalid domain: {}", e)))?;
        options.timeout = Some(self.settings.timeout());
        options.follow = self.settings.follow_referrals;
        if let Some(server) = &self.settings.server {
            options.server = Some(parse_server(domain, server)?);
        }

        debug!("Querying WHOIS for {}", domain);
        match whois.lookup_async(options.clone()).await {
            // Raised before any I/O when the table has no entry for the TLD
            Err(WhoIsError::MapError(_)) if options.server.is_none() => {
                let server = self.discover_server(&whois, domain).await?;
                debug!("Using IANA referral {} for {}", server, domain);
                options.server = Some(parse_server(domain, &server)?);
                whois
                    .lookup_async(options)
                    .await
                    .map_err(|e| map_lookup_error(domain, e))
            }
            result => result.map_err(|e| map_lookup_error(domain, e)),
        }
    }

    /// Ask IANA which server is authoritative for the domain's TLD
    async fn discover_server(&self, whois: &WhoIs, domain: &str) -> Result<String, WhoisError> {
        let mut options = WhoIsLookupOptions::from_string(domain)
            .map_err(|e| lookup_failed(domain, format!("Invalid domain: {}", e)))?;
        options.timeout = Some(self.settings.timeout());
        options.follow = 0;
        options.server = Some(parse_server(domain, IANA_SERVER)?);

        let raw = whois
            .lookup_async(options)
            .await
            .map_err(|e| map_lookup_error(domain, e))?;

        iana_referral(&raw).ok_or_else(|| lookup_failed(domain, "No WHOIS server for this TLD"))
    }
}

/// Server named by an IANA root-zone record (`whois:`, else `refer:`)
pub fn iana_referral(raw: &str) -> Option<String> {
    let record = WhoisRecord::parse(raw);
    record
        .get("whois")
        .or_else(|| record.get("refer"))
        .map(|server| server.to_string())
}

fn parse_server(domain: &str, server: &str) -> Result<WhoIsServerValue, WhoisError> {
    WhoIsServerValue::from_string(server)
        .map_err(|e| lookup_failed(domain, format!("Invalid WHOIS server {}: {}", server, e)))
}

fn map_lookup_error(domain: &str, error: WhoIsError) -> WhoisError {
    match error {
        WhoIsError::Elapsed(_) => WhoisError::Timeout {
            domain: domain.to_string(),
        },
        other => lookup_failed(domain, other.to_string()),
    }
}

fn lookup_failed(domain: &str, message: impl Into<String>) -> WhoisError {
    WhoisError::LookupFailed {
        domain: domain.to_string(),
        message: message.into(),
    }
}

impl Default for WhoisChecker {
    fn default() -> Self {
        Self::new(WhoisSettings::default())
    }
}

/// Extract the registered domain from a full domain name.
/// e.g. "www.russ.fm" → "russ.fm", "sub.example.co.uk" → "example.co.uk"
pub fn extract_registered_domain(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('.').to_lowercase();

    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() <= 2 {
        return domain;
    }

    let keep = if TWO_PART_TLDS
        .iter()
        .any(|suffix| domain.ends_with(&format!(".{}", suffix)))
    {
        3
    } else {
        2
    };

    parts[parts.len() - keep..].join(".")
}
