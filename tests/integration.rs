use fixtures::fixtures;
use serde::Deserialize;
use user_agent::{parse, ClientType, Classifier, DeviceType, UserAgent};

#[derive(Debug, Deserialize)]
struct Fixture {
    user_agent: String,
    /// Canonical rendering of the expected result.
    expected: String,
}

fn load(path: &std::path::Path) -> Vec<Fixture> {
    let content = std::fs::read_to_string(path).unwrap();
    serde_yaml::from_str(&content).unwrap()
}

fn assert_populated(ua: &UserAgent) {
    assert!(!ua.client_name.is_empty(), "empty client name for {:?}", ua.header);
    assert!(!ua.os_name.is_empty(), "empty OS name for {:?}", ua.header);
}

// ---------------------------------------------------------------------------
// Fixture corpus
// ---------------------------------------------------------------------------

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_canonical_fixtures(path: &std::path::Path) {
    let fixtures = load(path);
    assert!(!fixtures.is_empty(), "no fixtures in {:?}", path);

    for f in &fixtures {
        let result = parse(&f.user_agent);
        assert_eq!(
            result.to_string(),
            f.expected,
            "canonical mismatch for UA: {}",
            f.user_agent
        );
        assert_populated(&result);
    }
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_quote_invariance(path: &std::path::Path) {
    let classifier = Classifier::shared();
    for f in &load(path) {
        let plain = classifier.parse(&f.user_agent);
        for quoted in [
            format!("\"{}\"", f.user_agent),
            format!("'{}", f.user_agent),
            format!("'\"{}\"'", f.user_agent.replace(' ', "' ")),
        ] {
            assert_eq!(
                classifier.parse(&quoted),
                plain,
                "quoting changed the result for UA: {}",
                f.user_agent
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_totality_on_degenerate_input() {
    let inputs = [
        "",
        " ",
        "\"\"",
        "'",
        "()",
        "(((",
        ")))[[[",
        ";;;,,,",
        ",",
        "://",
        "+http://",
        "Mozilla/5.0",
        "Mozilla/5.0 (",
        "AppleWebKit/537.36",
        "Version/",
        "rv:",
        "OS",
        "Windows",
        "Mac OS X 10_",
        "\u{1F600} Chrome/\u{00e9}.1",
        "\t\n\r",
    ];
    for input in inputs {
        let ua = parse(input);
        assert_populated(&ua);
        assert!(ua.to_string().split(' ').count() >= 4, "short rendering for {:?}", input);
    }
}

#[test]
fn test_url_only_from_scheme_marker() {
    let ua = parse("SiteScoreBot v20210315 - https://sitescore.ai");
    assert!(ua.is_bot());
    assert_eq!(ua.url, "https://sitescore.ai");

    let ua = parse("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) HeadlessChrome/78.0.3882.0 Safari/537.36");
    assert!(ua.is_bot());
    assert_eq!(ua.url, "");
}

#[test]
fn test_result_fields() {
    let ua = UserAgent::parse(
        "Mozilla/5.0 (iPad; CPU OS 15_4_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.4.1 Mobile/15E148 Safari/605.1.15 BingSapphire/1.0.400324001",
    );
    assert_eq!(ua.client_type, ClientType::Browser);
    assert_eq!(ua.client_name, "Safari");
    assert_eq!(ua.client_version, "15.4");
    assert_eq!(ua.device_type, DeviceType::Tablet);
    assert_eq!(ua.os_name, "iPadOS");
    assert_eq!(ua.os_version, "15.4");
    assert_eq!(ua.url, "");
    assert_eq!(
        ua.fields,
        vec![
            "iPad",
            "OS",
            "15_4_1",
            "Version/15.4.1",
            "Mobile/15E148",
            "Safari/605.1.15",
            "BingSapphire/1.0.400324001"
        ]
    );
}

#[test]
fn test_json_document() {
    let ua = parse("facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)");
    let json = serde_json::to_value(&ua).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "header": "facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)",
            "fields": ["facebookexternalhit/1.1", "+http://www.facebook.com/externalhit_uatext.php"],
            "clientType": "Bot",
            "clientName": "FacebookBot",
            "clientVersion": "1.1",
            "deviceType": "Desktop",
            "osName": "Other",
            "url": "http://www.facebook.com/externalhit_uatext.php"
        })
    );
}

#[test]
fn test_concurrent_parsing_is_consistent() {
    let header = "Mozilla/5.0 (Linux; Android 12; SM-G991B Build/SP1A.210812.016) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/100.0.4896.88 Mobile Safari/537.36 OPT/2.9";
    let expected = parse(header);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || parse(header)))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
    assert_eq!(expected.to_string(), "Browser Opera 2.9 Mobile Android 12");
}
