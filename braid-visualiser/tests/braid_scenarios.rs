//! End-to-end scenarios: tracking results and the diagrams built from them.

use braid_visualiser::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_two_strand_over_crossing() {
    let braid = Braid::new(2, &[1]).unwrap();
    assert_eq!(braid.bottom_labels(), &[1, 2]);
    assert_eq!(braid.top_labels(), &[2, 1]);
    assert_eq!(braid.undercrossing_labels(), &[1]);
}

#[test]
fn test_two_strand_under_crossing() {
    let braid = Braid::new(2, &[-1]).unwrap();
    assert_eq!(braid.bottom_labels(), &[1, 2]);
    assert_eq!(braid.top_labels(), &[2, 1]);
    assert_eq!(braid.undercrossing_labels(), &[2]);
}

#[test]
fn test_three_strand_word() {
    let braid = Braid::new(3, &[1, 2]).unwrap();
    assert_eq!(braid.bottom_labels(), &[1, 2, 3]);
    assert_eq!(braid.top_labels(), &[3, 1, 2]);
    assert_eq!(braid.undercrossing_labels(), &[1, 2]);
}

#[test]
fn test_generator_equal_to_strand_count_rejected() {
    let err = Braid::new(3, &[3]).unwrap_err();
    assert!(
        matches!(err, BraidError::InvalidOperation { generator: 3, strand_count: 3, .. }),
        "expected InvalidOperation, got {:?}",
        err
    );
}

#[test]
fn test_empty_word_on_five_strands() {
    let braid = Braid::new(5, &[]).unwrap();
    assert_eq!(braid.top_labels(), &[1, 2, 3, 4, 5]);
    assert_eq!(braid.bottom_labels(), &[1, 2, 3, 4, 5]);
    assert!(braid.undercrossing_labels().is_empty());
}

#[test]
fn test_braid_relation_preserves_permutation() {
    // s1 s2 s1 = s2 s1 s2 as permutations.
    let a = Braid::new(3, &[1, 2, 1]).unwrap();
    let b = Braid::new(3, &[2, 1, 2]).unwrap();
    assert_eq!(a.top_labels(), b.top_labels());
}

#[test]
fn test_parsed_and_constructed_braids_agree() {
    let parsed: Braid = "4: 1, -2, 3, -1".parse().unwrap();
    let built = Braid::new(4, &[1, -2, 3, -1]).unwrap();
    assert_eq!(parsed, built);
    assert_eq!(parsed.to_string(), built.to_string());
}

#[test]
fn test_diagram_gaps_match_undercrossings() {
    let mut rng = StdRng::seed_from_u64(7);
    let word = random_word(6, 40, &mut rng);
    let braid = Braid::new(6, &word).unwrap();

    for style in [DrawStyle::Compact, DrawStyle::Extended] {
        let layout = Layout::new(braid.word(), style);
        let paths = strand_paths(&braid, &layout, 3).unwrap();
        for path in &paths {
            let unders = braid
                .undercrossing_labels()
                .iter()
                .filter(|&&l| l == path.label)
                .count();
            assert_eq!(
                path.gap_count(),
                unders,
                "strand {} should be broken once per under-crossing ({:?})",
                path.label,
                style
            );
        }
    }
}

#[test]
fn test_compact_diagram_is_never_deeper() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let word = random_word(8, 30, &mut rng);
        let braid = Braid::new(8, &word).unwrap();
        let compact = Layout::new(braid.word(), DrawStyle::Compact);
        let extended = Layout::new(braid.word(), DrawStyle::Extended);
        assert!(compact.height() <= extended.height());
        assert_eq!(extended.height(), 2.0 * word.len() as f64);
    }
}

#[test]
fn test_render_extended_svg() {
    let braid = Braid::new(4, &[1, -3, 2]).unwrap();
    let config = DrawConfig {
        style: DrawStyle::Extended,
        color: StrandColor::Fixed(ColorCode::Blue),
        ..DrawConfig::default()
    };
    let svg = render_svg(&braid, &config).unwrap();
    assert!(svg.contains("Braid:   [1, -3, 2]"));
    assert_eq!(svg.matches("class=\"strand\"").count(), 4);
    assert_eq!(svg.matches("<polyline").count(), 4 + 3);
}
