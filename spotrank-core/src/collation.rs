/// Korean-locale title ordering.
///
/// Backed by the ICU4X collator with the `ko` locale and compiled-in CLDR
/// data, so results agree with `Intl.Collator("ko")`. Strings the collator
/// considers equal (e.g. decomposed vs precomposed Hangul) fall back to code
/// point order so the ordering stays total.
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;

/// A `ko` collator. Build one per sort and reuse it across comparisons.
pub struct KoreanCollator {
    // None only if the compiled data lacks `ko`, in which case we compare
    // by code point.
    inner: Option<Collator>,
}

impl KoreanCollator {
    pub fn new() -> Self {
        let locale = locale!("ko").into();
        KoreanCollator {
            inner: Collator::try_new(&locale, CollatorOptions::new()).ok(),
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.inner {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        };
        collated.then_with(|| a.cmp(b))
    }
}

impl Default for KoreanCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two titles in Korean collation order.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    KoreanCollator::new().compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_dictionary_order() {
        assert_eq!(compare_titles("가", "나"), Ordering::Less);
        assert_eq!(compare_titles("다", "나"), Ordering::Greater);
        assert_eq!(compare_titles("강릉", "경주"), Ordering::Less);
        assert_eq!(compare_titles("부산", "부산역"), Ordering::Less);
    }

    #[test]
    fn test_compatibility_jamo_sorts_after_first_syllable() {
        assert_eq!(compare_titles("ㄴ", "가"), Ordering::Greater);
    }

    #[test]
    fn test_decomposed_jamo_is_ordered_with_syllables() {
        // "한" written as conjoining jamo.
        let decomposed = "\u{1112}\u{1161}\u{11AB}";
        assert_ne!(compare_titles(decomposed, "한"), Ordering::Equal);
        assert_eq!(compare_titles(decomposed, "할"), Ordering::Less);
        assert_eq!(compare_titles(decomposed, "하"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(compare_titles("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("apple", "apple"), Ordering::Equal);
    }

    #[test]
    fn test_accented_latin_sorts_with_base_letter() {
        assert_eq!(compare_titles("Zoo", "École"), Ordering::Greater);
        assert_eq!(compare_titles("École", "Ecole"), Ordering::Greater);
    }

    #[test]
    fn test_spaces_symbols_digits_before_letters() {
        let mut titles = vec!["서울", "2024 축제", "#여행", " 공백"];
        titles.sort_by(|a, b| compare_titles(a, b));
        assert_eq!(titles, vec![" 공백", "#여행", "2024 축제", "서울"]);
    }

    #[test]
    fn test_empty_title_sorts_first() {
        assert_eq!(compare_titles("", "가"), Ordering::Less);
        assert_eq!(compare_titles("", ""), Ordering::Equal);
    }

    #[test]
    fn test_collator_is_reusable() {
        let collator = KoreanCollator::default();
        let mut titles = vec!["해운대", "경복궁", "남산"];
        titles.sort_by(|a, b| collator.compare(a, b));
        assert_eq!(titles, vec!["경복궁", "남산", "해운대"]);
    }
}
