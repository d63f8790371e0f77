/// Boilerplate removed (or rewritten) before tokenizing, applied in order.
///
/// The verbose Apple name collapses to the `OS` marker that the OS-version
/// extractor looks for; `AppleWebKit/...` tokens are dropped after splitting.
const BOILERPLATE: &[(&str, &str)] = &[
    ("Mozilla/5.0", ""),
    ("Safari/537.36", ""),
    ("KHTML", ""),
    ("like Gecko", ""),
    ("compatible", ""),
    (" like Mac OS X", ""),
    ("CPU ", ""),
    ("Intel ", ""),
    ("Mac OS X", "OS"),
    ("Windows NT", "Windows"),
    ("WOW64", ""),
    ("Win64", ""),
    ("x86_64", ""),
    ("x64", ""),
    ("aarch64", ""),
];

const ENGINE_PREFIX: &str = "AppleWebKit";

/// Split a raw header into its unquoted form and the cleaned token sequence.
pub fn normalize(raw: &str) -> (String, Vec<String>) {
    let header = unquote(raw);
    let fields = parse_fields(&header);
    (header, fields)
}

/// Strip every single and double quote. Headers sometimes arrive quoted the way
/// one would write a string literal in code, occasionally unbalanced.
pub fn unquote(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(*c, '\'' | '"')).collect()
}

/// Remove meaningless text and split the header into segments for matching.
pub fn parse_fields(header: &str) -> Vec<String> {
    let mut s = header.to_string();
    for &(from, to) in BOILERPLATE {
        if s.contains(from) {
            s = s.replace(from, to);
        }
    }

    let flattened: String = s
        .chars()
        .filter(|c| !matches!(*c, '[' | ']'))
        .map(|c| match c {
            '(' | ')' | ';' => ' ',
            c => c,
        })
        .collect();

    flattened
        .split_whitespace()
        .filter(|f| *f != "," && !f.starts_with(ENGINE_PREFIX))
        .map(str::to_string)
        .collect()
}
