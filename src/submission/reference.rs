use std::sync::LazyLock;

use regex::Regex;

use super::countries::COUNTRIES;

/// Postal patterns keyed by alpha-2 code. Only three countries are covered;
/// every other country falls back to `FALLBACK_POSTAL_RE`.
static POSTAL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        ("US", Regex::new(r"^\d{5}(-\d{4})?$").unwrap()),
        ("CA", Regex::new(r"(?i)^[A-Z]\d[A-Z] ?\d[A-Z]\d$").unwrap()),
        (
            "GB",
            Regex::new(r"(?i)^[A-Z]{1,2}\d[A-Z\d]? ?\d[A-Z]{2}$").unwrap(),
        ),
    ]
});

static FALLBACK_POSTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4,10}$").unwrap());

/// True when `name` is exactly a canonical country name.
pub fn is_known_country(name: &str) -> bool {
    COUNTRIES.iter().any(|(_, known)| *known == name)
}

/// Resolve a country given by canonical name or alpha-2 code.
pub fn alpha2(country: &str) -> Option<&'static str> {
    let country = country.trim();
    if country.eq_ignore_ascii_case("UK") {
        return Some("GB");
    }
    COUNTRIES
        .iter()
        .find(|(code, name)| *name == country || code.eq_ignore_ascii_case(country))
        .map(|(code, _)| *code)
}

pub fn postal_pattern(country: &str) -> &'static Regex {
    alpha2(country)
        .and_then(|code| {
            POSTAL_PATTERNS
                .iter()
                .find(|(c, _)| *c == code)
                .map(|(_, re)| re)
        })
        .unwrap_or(&FALLBACK_POSTAL_RE)
}

pub fn is_valid_postal(code: &str, country: &str) -> bool {
    postal_pattern(country).is_match(code)
}

/// Parse `phone` in the numbering plan of `country` and check it is a valid
/// number belonging to that country. Unresolvable countries parse without a
/// region, so only `+`-prefixed international numbers can pass.
pub fn is_valid_phone(phone: &str, country: &str) -> bool {
    let region = alpha2(country).and_then(|code| code.parse::<phonenumber::country::Id>().ok());

    match phonenumber::parse(region, phone) {
        Ok(number) => {
            phonenumber::is_valid(&number)
                && region.is_none_or(|region| number.country().id() == Some(region))
        }
        Err(_) => false,
    }
}
