//! Lookup metric accounting.
//!
//! Kept in its own test binary so no other test touches the global
//! recommendation counters while these assertions run.

use marquee_core::{metrics::RECOMMENDATIONS, sample_catalog, SimilarityRecommender};

#[test]
fn test_only_recommendation_misses_count_as_not_found() {
    let rec = SimilarityRecommender::build(sample_catalog()).unwrap();
    let not_found = RECOMMENDATIONS.with_label_values(&["not_found"]);
    let ok = RECOMMENDATIONS.with_label_values(&["ok"]);
    let before = not_found.get();

    assert!(rec.similarity("Alien", "Unknown Title").is_err());
    assert!(rec.similarity("Unknown Title", "Alien").is_err());
    assert!(rec.find("Unknown Title").is_err());
    assert_eq!(not_found.get(), before);

    assert!(rec.recommend("Unknown Title", 5).is_err());
    assert_eq!(not_found.get(), before + 1);

    let ok_before = ok.get();
    rec.recommend("Alien", 5).unwrap();
    assert_eq!(ok.get(), ok_before + 1);
}
