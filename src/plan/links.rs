//! Locale decoration for step links.

use crate::model::Locale;

/// Name of the query parameter that carries the language.
pub const LANG_PARAM: &str = "lang";

const EXTERNAL_SCHEMES: [&str; 4] = ["http:", "https:", "mailto:", "tel:"];

/// Append `lang=<code>` to an in-app link.
///
/// External links and links that already name a language are returned
/// unchanged. A `#fragment` stays at the end.
#[must_use]
pub fn localize_href(href: &str, locale: Locale) -> String {
    if is_external(href) || has_lang_param(href) {
        return href.to_string();
    }

    let (base, fragment) = match href.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (href, None),
    };
    let separator = match base.find('?') {
        None => "?",
        Some(_) if base.ends_with('?') || base.ends_with('&') => "",
        Some(_) => "&",
    };

    let mut localized = format!("{base}{separator}{LANG_PARAM}={}", locale.code());
    if let Some(fragment) = fragment {
        localized.push('#');
        localized.push_str(fragment);
    }
    localized
}

/// Whether a link leaves the app.
#[must_use]
pub fn is_external(href: &str) -> bool {
    let href = href.trim_start();
    EXTERNAL_SCHEMES.iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

fn has_lang_param(href: &str) -> bool {
    let base = href.split_once('#').map_or(href, |(base, _)| base);
    base.split_once('?').is_some_and(|(_, query)| {
        query
            .split('&')
            .any(|pair| pair.split_once('=').map_or(pair, |(key, _)| key) == LANG_PARAM)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_gets_query() {
        assert_eq!(localize_href("/lessons/x", Locale::Es), "/lessons/x?lang=es");
    }

    #[test]
    fn test_existing_query_gets_ampersand() {
        assert_eq!(
            localize_href("/lessons/x?level=intro", Locale::En),
            "/lessons/x?level=intro&lang=en"
        );
        assert_eq!(localize_href("/x?", Locale::En), "/x?lang=en");
    }

    #[test]
    fn test_fragment_stays_last() {
        assert_eq!(localize_href("/tools/checkin#start", Locale::Es), "/tools/checkin?lang=es#start");
        assert_eq!(localize_href("/t?a=1#s", Locale::En), "/t?a=1&lang=en#s");
    }

    #[test]
    fn test_external_links_untouched() {
        for href in [
            "https://example.org/a",
            "HTTP://example.org",
            "mailto:help@example.org",
            "tel:+15555550100",
        ] {
            assert!(is_external(href));
            assert_eq!(localize_href(href, Locale::Es), href);
        }
    }

    #[test]
    fn test_existing_lang_untouched() {
        assert_eq!(localize_href("/a?lang=en", Locale::Es), "/a?lang=en");
        assert_eq!(localize_href("/a?x=1&lang#f", Locale::Es), "/a?x=1&lang#f");
        // Only the exact key counts.
        assert_eq!(localize_href("/a?language=en", Locale::Es), "/a?language=en&lang=es");
    }
}
