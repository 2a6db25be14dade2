use crate::model::Source;
use crate::HarvestError;
use url::Url;

/// Returns the book segment of `path`: the segment directly under `base_path`
///
/// The segment runs up to the next `/` or the end of the path (query and
/// fragment excluded). A final segment containing a `.` is a page directly
/// under the base path, not a book, and yields None, as does a path outside
/// the base path.
pub fn book_segment<'a>(path: &'a str, base_path: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(base_path)?;
    let segment = match rest.split_once('/') {
        Some((segment, _)) => segment,
        None => {
            let end = rest.find(|c: char| c == '?' || c == '#').unwrap_or(rest.len());
            let segment = &rest[..end];
            if segment.contains('.') {
                return None;
            }
            segment
        }
    };

    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

/// Converts a camel-case URL segment into a catalog key
///
/// An underscore is inserted before every uppercase letter and the result
/// is uppercased: `advancedPlayersGuide` → `ADVANCED_PLAYERS_GUIDE`.
pub fn derive_source_key(segment: &str) -> String {
    let mut key = String::with_capacity(segment.len() + 4);
    for c in segment.chars() {
        if c.is_uppercase() {
            key.push('_');
        }
        key.extend(c.to_uppercase());
    }
    key
}

/// Maps a document link to its source book
///
/// Absolute links are reduced to their path when they point at the same
/// origin as `base_url`; links elsewhere resolve to None, as do paths outside
/// the base path.
///
/// The core bestiary lives under `bestiary/` without a volume number and is
/// mapped to [`Source::Bestiary1`].
///
/// # Errors
///
/// Returns `HarvestError::UnknownSource` if the derived key matches no
/// catalog entry.
pub fn resolve_source(href: &str, base_url: &Url) -> Result<Option<Source>, HarvestError> {
    let href = href.trim();
    let absolute_path;
    let path = match Url::parse(href) {
        Ok(absolute) if absolute.origin() == base_url.origin() => {
            absolute_path = absolute.path().to_string();
            absolute_path.as_str()
        }
        Ok(_) => return Ok(None),
        Err(_) => href,
    };

    let Some(segment) = book_segment(path, base_url.path()) else {
        return Ok(None);
    };

    let key = derive_source_key(segment);
    if key == "BESTIARY" {
        return Ok(Some(Source::Bestiary1));
    }

    match Source::from_key(&key) {
        Some(source) => Ok(Some(source)),
        None => Err(HarvestError::UnknownSource {
            reference: href.to_string(),
            key,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("http://paizo.com/pathfinderRPG/prd/").unwrap()
    }

    #[test]
    fn test_book_segment() {
        let base = "/pathfinderRPG/prd/";
        assert_eq!(
            book_segment("/pathfinderRPG/prd/coreRulebook/feats.html", base),
            Some("coreRulebook")
        );
        assert_eq!(book_segment("/pathfinderRPG/prd/index.html", base), None);
        assert_eq!(book_segment("/pathfinderRPG/prd//x.html", base), None);
        assert_eq!(book_segment("/other/coreRulebook/feats.html", base), None);
    }

    #[test]
    fn test_book_segment_at_end_of_path() {
        let base = "/pathfinderRPG/prd/";
        assert_eq!(
            book_segment("/pathfinderRPG/prd/ultimateCombat", base),
            Some("ultimateCombat")
        );
        assert_eq!(
            book_segment("/pathfinderRPG/prd/ultimateMagic#spells", base),
            Some("ultimateMagic")
        );
        assert_eq!(book_segment("/pathfinderRPG/prd/", base), None);
        assert_eq!(book_segment("/pathfinderRPG/prd/index.html#top", base), None);
    }

    #[test]
    fn test_derive_source_key() {
        assert_eq!(derive_source_key("coreRulebook"), "CORE_RULEBOOK");
        assert_eq!(derive_source_key("advancedPlayersGuide"), "ADVANCED_PLAYERS_GUIDE");
        assert_eq!(derive_source_key("bestiary2"), "BESTIARY2");
        assert_eq!(derive_source_key("npcCodex"), "NPC_CODEX");
        assert_eq!(derive_source_key("unchained"), "UNCHAINED");
    }

    #[test]
    fn test_resolve_catalog_entries() {
        let base = base_url();
        assert_eq!(
            resolve_source("/pathfinderRPG/prd/coreRulebook/feats.html#dodge", &base).unwrap(),
            Some(Source::CoreRulebook)
        );
        assert_eq!(
            resolve_source("/pathfinderRPG/prd/ultimateCombat/ucFeats.html", &base).unwrap(),
            Some(Source::UltimateCombat)
        );
        assert_eq!(
            resolve_source("/pathfinderRPG/prd/technologyGuide/feats.html", &base).unwrap(),
            Some(Source::TechnologyGuide)
        );
    }

    #[test]
    fn test_core_bestiary_maps_to_first_volume() {
        assert_eq!(
            resolve_source("/pathfinderRPG/prd/bestiary/monsterA", &base_url()).unwrap(),
            Some(Source::Bestiary1)
        );
        assert_eq!(
            resolve_source("/pathfinderRPG/prd/bestiary3/monsterA", &base_url()).unwrap(),
            Some(Source::Bestiary3)
        );
    }

    #[test]
    fn test_outside_base_path_is_none() {
        assert_eq!(resolve_source("/store/books/core.html", &base_url()).unwrap(), None);
        assert_eq!(resolve_source("feats.html", &base_url()).unwrap(), None);
    }

    #[test]
    fn test_absolute_links() {
        let base = base_url();
        assert_eq!(
            resolve_source("http://paizo.com/pathfinderRPG/prd/ultimateMagic/x.html", &base)
                .unwrap(),
            Some(Source::UltimateMagic)
        );
        assert_eq!(
            resolve_source("http://example.com/pathfinderRPG/prd/ultimateMagic/x.html", &base)
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_unknown_book_is_error() {
        let err = resolve_source("/pathfinderRPG/prd/homebrewCompendium/x.html", &base_url())
            .unwrap_err();
        match err {
            HarvestError::UnknownSource { key, .. } => assert_eq!(key, "HOMEBREW_COMPENDIUM"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
