use super::types::DeviceType::{Desktop, Mobile, Tablet};
use super::types::{ClientType, DeviceType};

/// A catalog entry: when `find` occurs in the cleaned header, each slot the
/// rule specifies is filled unless an earlier rule already filled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub find: &'static str,
    pub device_type: Option<DeviceType>,
    pub os_name: Option<&'static str>,
    pub client_type: Option<ClientType>,
    pub client_name: Option<&'static str>,
}

impl Rule {
    /// Device category and operating system.
    pub const fn platform(
        find: &'static str,
        device_type: DeviceType,
        os_name: &'static str,
    ) -> Self {
        Self {
            find,
            device_type: Some(device_type),
            os_name: Some(os_name),
            client_type: None,
            client_name: None,
        }
    }

    pub const fn device(find: &'static str, device_type: DeviceType) -> Self {
        Self {
            find,
            device_type: Some(device_type),
            os_name: None,
            client_type: None,
            client_name: None,
        }
    }

    pub const fn os(find: &'static str, os_name: &'static str) -> Self {
        Self {
            find,
            device_type: None,
            os_name: Some(os_name),
            client_type: None,
            client_name: None,
        }
    }

    pub const fn client(
        find: &'static str,
        client_type: ClientType,
        client_name: &'static str,
    ) -> Self {
        Self {
            find,
            device_type: None,
            os_name: None,
            client_type: Some(client_type),
            client_name: Some(client_name),
        }
    }

    const fn bot(find: &'static str, client_name: &'static str) -> Self {
        Self::client(find, ClientType::Bot, client_name)
    }

    const fn app(find: &'static str, client_name: &'static str) -> Self {
        Self::client(find, ClientType::App, client_name)
    }

    const fn browser(find: &'static str, client_name: &'static str) -> Self {
        Self::client(find, ClientType::Browser, client_name)
    }
}

/// Built-in rule table. Rules are evaluated top to bottom and the first match
/// wins per slot, so order encodes precedence: "Mobile" must precede "Android"
/// and "Windows" (Android Mobile, Windows Mobile), bot signatures precede the
/// browser signatures they embed, and "Chrome"/"Safari" come last because
/// nearly every WebKit client claims them.
pub static RULES: &[Rule] = &[
    // Platforms
    Rule::platform("Macintosh", Desktop, "macOS"),
    Rule::platform("iPad", Tablet, "iPadOS"),
    Rule::platform("iPhone", Mobile, "iOS"),
    Rule::device("Mobile", Mobile),
    Rule::platform("Android", Tablet, "Android"),
    Rule::platform("Windows", Desktop, "Windows"),
    Rule::platform("CrOS", Desktop, "ChromeOS"),
    Rule::os("Tizen", "Tizen"),
    Rule::os("Linux", "Linux"),
    // Bots
    Rule::bot("pa11y", "Pa11y"),
    Rule::bot("AhrefsBot", "AhrefsBot"),
    Rule::bot("Applebot", "Applebot"),
    Rule::bot("Baiduspider", "Baiduspider"),
    Rule::bot("adidxbot", "AdIdxBot"),
    Rule::bot("bingbot", "Bingbot"),
    Rule::bot("BingPreview", "BingPreview"),
    Rule::bot("Cincraw", "Cincraw"),
    Rule::bot("facebookexternalhit", "FacebookBot"),
    Rule::bot("Googlebot", "Googlebot"),
    Rule::bot("AdsBot-Google", "Google-AdsBot"),
    Rule::bot("Google-Adwords", "Google-AdWords"),
    Rule::bot("Google-Read-Aloud", "Google-Read-Aloud"),
    Rule::bot("Google-Structured-Data-Testing-Tool", "Google-Testing"),
    Rule::bot("HeadlessChrome", "HeadlessChrome"),
    Rule::bot("HubSpot", "HubSpot"),
    Rule::bot("Linespider", "Linespider"),
    Rule::bot("PagePeeker", "PagePeeker"),
    Rule::bot("Pinterestbot", "Pinterestbot"),
    Rule::bot("Seekport", "Seekport"),
    Rule::bot("SeoSiteCheckup", "SeoSiteCheckup"),
    Rule::bot("Sitebulb", "Sitebulb"),
    Rule::bot("SiteScoreBot", "SiteScoreBot"),
    Rule::bot("SMTBot", "SMTBot"),
    Rule::bot("Yeti", "Yeti"),
    Rule::bot("YisouSpider", "YisouSpider"),
    // Applications
    Rule::app("FBSV", "Facebook"), // iOS
    Rule::app("FBAV", "Facebook"), // Android
    Rule::app("GSA/", "GoogleSearch"),
    Rule::app("Instagram", "Instagram"),
    Rule::app("LinkedInApp", "LinkedIn"),
    Rule::app("Pinterest", "Pinterest"),
    Rule::app("Snapchat", "Snapchat"),
    Rule::app("MicroMessenger", "WeChat"),
    // Browsers
    Rule::browser("ADG/", "AOLDesktop"),
    Rule::browser("Silk", "Silk"),
    Rule::browser("FxiOS", "Firefox"),
    Rule::browser("Klarna", "Firefox"),
    Rule::browser("Firefox", "Firefox"),
    Rule::browser("EdgA/", "Edge"),
    Rule::browser("EdgiOS/", "Edge"),
    Rule::browser("EdgW/", "Edge"),
    Rule::browser("Edg/", "Edge"),
    Rule::browser("Edge/", "Edge"),
    Rule::browser("MSIE", "InternetExplorer"),
    Rule::browser("Trident", "InternetExplorer"),
    Rule::browser("OPR/", "Opera"),
    Rule::browser("OPT/", "Opera"),
    Rule::browser("DuckDuckGo", "DuckDuckGo"),
    Rule::browser("SamsungBrowser", "SamsungBrowser"),
    Rule::browser("CriOS", "Chrome"),
    Rule::browser("Chrome", "Chrome"),
    Rule::browser("Safari", "Safari"),
];
