/// Popularity ranking for "Top N" lists.
///
/// Pure function, no IO. The caller fetches records however it likes and
/// hands them over as a slice; nothing is mutated and nothing is cached.
use crate::collation::KoreanCollator;
use crate::types::{RankOptions, RankedItem, Rankable};

/// Composite popularity score: views + likes + bookmarks.
///
/// Absent and negative counters count as 0. Saturates instead of overflowing.
pub fn score_of<T: Rankable + ?Sized>(item: &T) -> u64 {
    [item.views(), item.likes(), item.bookmarks()]
        .into_iter()
        .map(normalize_counter)
        .fold(0u64, u64::saturating_add)
}

fn normalize_counter(value: Option<i64>) -> u64 {
    value.map_or(0, |v| v.max(0) as u64)
}

/// Assign dense ranks to scores that are already sorted in descending order.
///
/// The first entry gets rank 1. Each later entry reuses the previous rank when
/// its score is exactly equal to the previous score, otherwise it takes its
/// 1-based position.
pub fn assign_dense_ranks(sorted_scores: &[u64]) -> Vec<usize> {
    let mut ranks = Vec::with_capacity(sorted_scores.len());
    for (idx, &score) in sorted_scores.iter().enumerate() {
        let rank = match ranks.last() {
            Some(&prev_rank) if sorted_scores[idx - 1] == score => prev_rank,
            _ => idx + 1,
        };
        ranks.push(rank);
    }
    ranks
}

/// Rank `items` by popularity and return at most `options.limit` of them
/// (never more than `MAX_RANKED_ITEMS`).
///
/// Order: descending score, then ascending Korean collation of the title
/// field (absent title = empty string), then input order. The result is the
/// same on every call for the same input.
pub fn rank_top_items<T: Rankable + Clone>(items: &[T], options: &RankOptions) -> Vec<RankedItem<T>> {
    let limit = options.effective_limit();
    if limit == 0 || items.is_empty() {
        return Vec::new();
    }

    let collator = KoreanCollator::new();
    let mut keyed: Vec<(u64, &str, usize)> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let title = item.title(&options.title_field).unwrap_or("");
            (score_of(item), title, idx)
        })
        .collect();
    keyed.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| collator.compare(a.1, b.1))
            .then(a.2.cmp(&b.2))
    });
    keyed.truncate(limit);

    let scores: Vec<u64> = keyed.iter().map(|(score, _, _)| *score).collect();
    let ranks = assign_dense_ranks(&scores);

    keyed
        .into_iter()
        .zip(ranks)
        .map(|((score, _, idx), rank)| RankedItem {
            item: items[idx].clone(),
            score,
            rank,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_RANKED_ITEMS;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Spot {
        name: Option<String>,
        views: Option<i64>,
        likes: Option<i64>,
        bookmarks: Option<i64>,
    }

    impl Rankable for Spot {
        fn views(&self) -> Option<i64> {
            self.views
        }

        fn likes(&self) -> Option<i64> {
            self.likes
        }

        fn bookmarks(&self) -> Option<i64> {
            self.bookmarks
        }

        fn title(&self, field: &str) -> Option<&str> {
            match field {
                "title" => self.name.as_deref(),
                _ => None,
            }
        }
    }

    fn spot(name: &str, views: i64) -> Spot {
        Spot {
            name: Some(name.to_string()),
            views: Some(views),
            ..Default::default()
        }
    }

    fn names(ranked: &[RankedItem<Spot>]) -> Vec<&str> {
        ranked.iter().map(|r| r.item.name.as_deref().unwrap_or("")).collect()
    }

    #[test]
    fn test_score_defaults_missing_and_negative_counters() {
        let s = Spot {
            name: None,
            views: Some(10),
            likes: None,
            bookmarks: Some(-4),
        };
        assert_eq!(score_of(&s), 10);
        assert_eq!(score_of(&Spot::default()), 0);

        let huge = Spot {
            views: Some(i64::MAX),
            likes: Some(i64::MAX),
            bookmarks: Some(i64::MAX),
            ..Default::default()
        };
        assert_eq!(score_of(&huge), u64::MAX);
    }

    #[test]
    fn test_korean_tie_break() {
        let items = vec![spot("가", 5), spot("나", 5), spot("다", 10)];
        let ranked = rank_top_items(&items, &RankOptions::new("title"));

        assert_eq!(names(&ranked), vec!["다", "가", "나"]);
        assert_eq!(ranked.iter().map(|r| r.score).collect::<Vec<_>>(), vec![10, 5, 5]);
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 2]);
    }

    #[test]
    fn test_latin_tie_break_follows_korean_locale() {
        let items = vec![spot("Zoo", 3), spot("Apple", 3), spot("École", 3), spot("apple", 3), spot("ㄴ", 3), spot("가", 3)];
        let ranked = rank_top_items(&items, &RankOptions::new("title"));

        let order = names(&ranked);
        let pos = |name: &str| order.iter().position(|n| *n == name).unwrap();
        assert!(pos("apple") < pos("Apple"));
        assert!(pos("Apple") < pos("École"));
        assert!(pos("École") < pos("Zoo"));
        assert!(pos("가") < pos("ㄴ"));
        assert!(ranked.iter().all(|r| r.rank == 1));
    }

    #[test]
    fn test_rank_after_tie_is_position() {
        let items = vec![spot("a", 9), spot("b", 7), spot("c", 7), spot("d", 3), spot("e", 3), spot("f", 1)];
        let ranked = rank_top_items(&items, &RankOptions::new("title"));
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 2, 4, 4, 6]);
    }

    #[test]
    fn test_truncates_to_ten() {
        let items: Vec<Spot> = (0..25).map(|i| spot(&format!("spot{i:02}"), i)).collect();
        let ranked = rank_top_items(&items, &RankOptions::new("title").with_limit(100));

        assert_eq!(ranked.len(), MAX_RANKED_ITEMS);
        assert_eq!(ranked[0].score, 24);
        assert_eq!(ranked[9].score, 15);
        assert_eq!(ranked[9].rank, 10);
    }

    #[test]
    fn test_custom_limit() {
        let items: Vec<Spot> = (0..6).map(|i| spot(&format!("{i}"), i)).collect();
        let ranked = rank_top_items(&items, &RankOptions::new("title").with_limit(3));
        assert_eq!(names(&ranked), vec!["5", "4", "3"]);

        assert!(rank_top_items(&items, &RankOptions::new("title").with_limit(0)).is_empty());
    }

    #[test]
    fn test_empty_and_short_input() {
        let ranked = rank_top_items::<Spot>(&[], &RankOptions::new("title"));
        assert!(ranked.is_empty());

        let items = vec![spot("only", 0)];
        let ranked = rank_top_items(&items, &RankOptions::new("title"));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].score, 0);
    }

    #[test]
    fn test_absent_title_sorts_as_empty() {
        let untitled = Spot {
            views: Some(5),
            ..Default::default()
        };
        let items = vec![spot("가", 5), untitled.clone()];
        let ranked = rank_top_items(&items, &RankOptions::new("title"));
        assert_eq!(ranked[0].item, untitled);

        // Unknown title field: every title is empty, so input order decides.
        let items = vec![spot("나", 5), spot("가", 5)];
        let ranked = rank_top_items(&items, &RankOptions::new("spotName"));
        assert_eq!(names(&ranked), vec!["나", "가"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = vec![spot("b", 1), spot("a", 2)];
        let before = items.clone();
        let _ = rank_top_items(&items, &RankOptions::new("title"));
        assert_eq!(items, before);
    }

    #[test]
    fn test_assign_dense_ranks() {
        assert!(assign_dense_ranks(&[]).is_empty());
        assert_eq!(assign_dense_ranks(&[4, 4, 4]), vec![1, 1, 1]);
        assert_eq!(assign_dense_ranks(&[9, 8, 8, 2]), vec![1, 2, 2, 4]);
    }

    #[test]
    fn test_random_inputs_hold_ranking_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5107);
        let titles = ["가", "나", "다", "라", "Busan", "busan", "제주", ""];

        for _ in 0..200 {
            let len = rng.random_range(0..30);
            let items: Vec<Spot> = (0..len)
                .map(|_| Spot {
                    name: Some(titles[rng.random_range(0..titles.len())].to_string()),
                    views: Some(rng.random_range(-2..6)),
                    likes: if rng.random_bool(0.5) { Some(rng.random_range(0..3)) } else { None },
                    bookmarks: None,
                })
                .collect();

            let options = RankOptions::new("title");
            let ranked = rank_top_items(&items, &options);

            assert!(ranked.len() <= MAX_RANKED_ITEMS);
            assert!(ranked.len() <= items.len());
            if let Some(first) = ranked.first() {
                assert_eq!(first.rank, 1);
            }
            for (i, pair) in ranked.windows(2).enumerate() {
                assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    assert_eq!(pair[0].rank, pair[1].rank);
                } else {
                    assert_eq!(pair[1].rank, i + 2);
                }
            }

            assert_eq!(rank_top_items(&items, &options), ranked);
        }
    }

    #[test]
    fn test_shuffled_input_gives_same_scores_and_titles() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<Spot> = ["해운대", "경복궁", "남산", "한라산", "Gamcheon", "불국사"]
            .iter()
            .enumerate()
            .map(|(i, name)| spot(name, (i % 3) as i64))
            .collect();

        let expected = names(&rank_top_items(&items, &RankOptions::new("title")))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        for _ in 0..10 {
            items.shuffle(&mut rng);
            let ranked = rank_top_items(&items, &RankOptions::new("title"));
            assert_eq!(names(&ranked), expected);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rank_json_records() {
        let items = vec![
            serde_json::json!({ "spotName": "다", "views": 10 }),
            serde_json::json!({ "spotName": "가", "views": 2, "likes": 3 }),
            serde_json::json!({ "spotName": "나", "bookmarks": "5", "likes": null }),
        ];
        let ranked = rank_top_items(&items, &RankOptions::new("spotName"));

        let titles: Vec<&str> = ranked.iter().map(|r| r.item["spotName"].as_str().unwrap()).collect();
        assert_eq!(titles, vec!["다", "가", "나"]);
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 2]);
    }
}
