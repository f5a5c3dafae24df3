use std::sync::Arc;

use ad_selection::dao::{InMemoryContentDao, InMemoryTargetingGroupDao};
use ad_selection::{
    AdvertisementContent, AdvertisementSelector, RankingPolicy, RequestContext, TargetingGroup,
    TargetingVerdict,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 每个候选的定向组列表：(点击率, 是否命中)
fn catalog_strategy() -> impl Strategy<Value = Vec<Vec<(f64, bool)>>> {
    prop::collection::vec(prop::collection::vec((0.0..1.0f64, any::<bool>()), 0..4), 0..8)
}

fn build(catalog: &[Vec<(f64, bool)>], policy: RankingPolicy) -> AdvertisementSelector {
    let contents = (0..catalog.len())
        .map(|i| AdvertisementContent::new(&format!("c{i}"), "1", ""))
        .collect();
    let groups = catalog
        .iter()
        .enumerate()
        .flat_map(|(i, groups)| {
            groups.iter().enumerate().map(move |(j, (ctr, hit))| {
                let id = format!("c{i}-g{j}-{}", if *hit { "hit" } else { "miss" });
                TargetingGroup::new(&id, &format!("c{i}"), *ctr)
            })
        })
        .collect();
    AdvertisementSelector::new(
        Arc::new(InMemoryContentDao::new(contents)),
        Arc::new(InMemoryTargetingGroupDao::new(groups)),
        Arc::new(|_: &RequestContext, g: &TargetingGroup| {
            TargetingVerdict::from(g.targeting_group_id.ends_with("-hit"))
        }),
        policy,
    )
}

fn is_eligible(groups: &[(f64, bool)]) -> bool {
    groups.iter().any(|(_, hit)| *hit)
}

fn best_ctr(groups: &[(f64, bool)]) -> f64 {
    groups.iter().map(|(ctr, _)| *ctr).fold(f64::MIN, f64::max)
}

fn index_of(content_id: &str) -> usize {
    content_id.trim_start_matches('c').parse().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, failure_persistence: None, .. ProptestConfig::default() })]

    #[test]
    fn winner_is_always_eligible(catalog in catalog_strategy(), seed in any::<u64>()) {
        for policy in [RankingPolicy::HighestClickThroughRate, RankingPolicy::UniformRandom] {
            let selector = build(&catalog, policy);
            let ad = selector
                .select_advertisement_with_rng("c", "1", &mut StdRng::seed_from_u64(seed))
                .unwrap();
            let any_eligible = catalog.iter().any(|groups| is_eligible(groups));
            prop_assert_eq!(ad.is_empty(), !any_eligible);
            if let Some(id) = ad.content_id() {
                prop_assert!(is_eligible(&catalog[index_of(id)]));
            }
        }
    }

    #[test]
    fn highest_ctr_winner_is_first_maximum(catalog in catalog_strategy()) {
        let selector = build(&catalog, RankingPolicy::HighestClickThroughRate);
        let ad = selector.select_advertisement("c", "1").unwrap();
        if let Some(id) = ad.content_id() {
            let winner = index_of(id);
            let winning_ctr = best_ctr(&catalog[winner]);
            for (i, groups) in catalog.iter().enumerate().filter(|(_, g)| is_eligible(g)) {
                prop_assert!(best_ctr(groups) <= winning_ctr);
                if i < winner {
                    prop_assert!(best_ctr(groups) < winning_ctr);
                }
            }
        }
    }
}
