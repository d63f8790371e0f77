use std::sync::OnceLock;

use tracing::trace;

use super::error::Result;
use super::matcher::RuleMatcher;
use super::normalize::normalize;
use super::rules::{Rule, RULES};
use super::types::*;
use super::version::*;

const OTHER: &str = "Other";

/// Classifies `User-Agent` headers against an ordered rule table.
///
/// Classification is total: any input, including an empty or malformed header,
/// yields a `UserAgent` whose client type, client name, device type and OS name
/// are populated.
pub struct Classifier {
    matcher: RuleMatcher,
}

/// Slots filled first-match-wins while walking the rule table.
#[derive(Default)]
struct Slots {
    device_type: Option<DeviceType>,
    os_name: Option<&'static str>,
    client_type: Option<ClientType>,
    client_name: Option<&'static str>,
    client_version: String,
}

impl Slots {
    fn is_complete(&self) -> bool {
        self.device_type.is_some()
            && self.os_name.is_some()
            && self.client_type.is_some()
            && self.client_name.is_some()
    }

    fn apply(&mut self, rule: &Rule, fields: &[String]) {
        if self.device_type.is_none() {
            self.device_type = rule.device_type;
        }
        if self.os_name.is_none() {
            self.os_name = rule.os_name;
        }
        if self.client_type.is_none() {
            self.client_type = rule.client_type;
        }
        if self.client_name.is_none() && rule.client_name.is_some() {
            self.client_name = rule.client_name;
            self.client_version = client_version(fields, rule.find);
        }
    }
}

impl Classifier {
    /// Build a classifier over the built-in rule table.
    pub fn new() -> Self {
        Self::with_rules(RULES).expect("built-in rule table compiles")
    }

    /// Build a classifier over a custom rule table. Rules are evaluated in
    /// slice order with first-match-wins per slot.
    pub fn with_rules(rules: &'static [Rule]) -> Result<Self> {
        Ok(Self {
            matcher: RuleMatcher::build(rules)?,
        })
    }

    /// Process-wide classifier over the built-in rule table, built on first use.
    pub fn shared() -> &'static Classifier {
        static SHARED: OnceLock<Classifier> = OnceLock::new();
        SHARED.get_or_init(Classifier::new)
    }

    /// Extract client, device and operating system information from a header.
    ///
    /// Versions and the URL are empty when the header does not provide them;
    /// the other fields fall back to "Other" (or a platform default) when the
    /// determination is inconclusive.
    pub fn parse(&self, header: &str) -> UserAgent {
        let (header, fields) = normalize(header);
        let mut slots = Slots::default();
        let mut url = String::new();

        // A URL always indicates a bot.
        if header.contains("://") {
            slots.client_type = Some(ClientType::Bot);
            url = bot_url(&fields);
        }

        // 1. Rule table, first match wins per slot.
        let buffer = fields.join(" ");
        for rule in self.matcher.matching(&buffer) {
            slots.apply(rule, &fields);
            if slots.is_complete() {
                break;
            }
        }

        // 2. Defaults and version fix-ups.
        let os_name = slots.os_name.unwrap_or(OTHER);
        let os_version = match slots.os_name {
            Some(name) => os_version(&fields, name),
            None => String::new(),
        };

        let device_type = slots.device_type.unwrap_or(DeviceType::Desktop);

        let client_name = match slots.client_name {
            Some(name) => name,
            None if is_apple_os(os_name) => {
                slots.client_type = slots.client_type.or(Some(ClientType::Browser));
                "Safari"
            }
            None if os_name == "Android" => {
                slots.client_type = slots.client_type.or(Some(ClientType::Browser));
                "Chrome"
            }
            None => OTHER,
        };

        let mut client_version = slots.client_version;
        let override_version = match client_name {
            // Safari's own token is a fixed build number.
            "Safari" => version(&fields),
            "InternetExplorer" => release_version(&fields),
            _ => String::new(),
        };
        if !override_version.is_empty() {
            client_version = override_version;
        }

        let ua = UserAgent {
            header,
            fields,
            client_type: slots.client_type.unwrap_or(ClientType::Other),
            client_name: client_name.to_string(),
            client_version,
            device_type,
            os_name: os_name.to_string(),
            os_version,
            url,
        };
        trace!(header = %ua.header, result = %ua, "classified user agent");
        ua
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// URL advertised by a bot, from the first field containing a scheme separator.
/// Some bots prefix it with `+`, so anything before `http` is dropped.
fn bot_url(fields: &[String]) -> String {
    fields
        .iter()
        .find(|f| f.contains("://"))
        .map(|f| match f.find("http") {
            Some(idx) => f[idx..].to_string(),
            None => f.clone(),
        })
        .unwrap_or_default()
}
