//! Board construction from stock, explicit and serialized layouts.

use mahjong_solitaire::board::{BoardBuilder, CoverLink, Coverage, Layout};
use mahjong_solitaire::core::{GameRng, LayoutError, SlotRef, TileId, TileKind};
use mahjong_solitaire::rules::{Evaluator, GameStatus};

// =============================================================================
// Kind Validation
// =============================================================================

#[test]
fn test_six_slot_three_kind_builds() {
    let board = BoardBuilder::new(Layout::two_layer())
        .build(&TileKind::pairs(3, 1), &mut GameRng::new(1))
        .unwrap();
    assert_eq!(board.len(), 6);
}

#[test]
fn test_odd_count_fails() {
    let kinds = [0, 0, 0, 1, 1, 1].map(TileKind::new);
    let err = BoardBuilder::new(Layout::two_layer())
        .build(&kinds, &mut GameRng::new(1))
        .unwrap_err();
    assert_eq!(err, LayoutError::OddKindCount { kind: TileKind::new(0), count: 3 });
}

#[test]
fn test_wrong_label_total_fails() {
    let err = BoardBuilder::new(Layout::two_layer())
        .build(&TileKind::pairs(2, 1), &mut GameRng::new(1))
        .unwrap_err();
    assert_eq!(err, LayoutError::KindCountMismatch { slots: 6, kinds: 4 });
}

#[test]
fn test_any_rng_can_deal() {
    use rand::SeedableRng;

    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(9);
    let board = BoardBuilder::new(Layout::pyramid(4, 2))
        .build(&TileKind::pairs(3, 1), &mut rng)
        .unwrap();
    assert_eq!(board.len(), 6);
}

// =============================================================================
// Explicit Coverage
// =============================================================================

/// A bridge: one top tile resting on the two middle tiles of a row of four,
/// plus a tile two layers up covering the bridge.
fn bridge() -> Layout {
    Layout::new(
        vec![vec![0, 1, 2, 3], vec![10], vec![10]],
        Coverage::Explicit(vec![
            CoverLink::new(SlotRef::new(1, 10), SlotRef::new(0, 1)),
            CoverLink::new(SlotRef::new(1, 10), SlotRef::new(0, 2)),
            CoverLink::new(SlotRef::new(2, 10), SlotRef::new(1, 10)),
        ]),
    )
}

#[test]
fn test_explicit_bridge() {
    // IDs: 0..=3 row, 4 bridge, 5 cap.
    let kinds = [0, 1, 1, 0, 2, 2].map(TileKind::new);
    let mut board = BoardBuilder::new(bridge()).build_with_kinds(&kinds).unwrap();

    assert_eq!(board.tile(TileId(4)).unwrap().coverers(), &[TileId(5)]);
    assert_eq!(board.tile(TileId(1)).unwrap().coverers(), &[TileId(4)]);
    assert!(board.tile(TileId(0)).unwrap().coverers().is_empty());

    // Row ends and the cap are free; the bridge is covered.
    let free: Vec<_> = board.free_tiles().map(|t| t.id()).collect();
    assert_eq!(free, vec![TileId(0), TileId(3), TileId(5)]);
    assert_eq!(Evaluator::check(&board), GameStatus::InProgress);

    board.mark_removed(TileId(5)).unwrap();
    assert!(board.is_free(TileId(4)).unwrap());
}

#[test]
fn test_explicit_cover_across_two_layers() {
    let layout = Layout::new(
        vec![vec![0, 1], vec![5], vec![0]],
        Coverage::Explicit(vec![CoverLink::new(SlotRef::new(2, 0), SlotRef::new(0, 0))]),
    );
    let board = BoardBuilder::new(layout)
        .build_with_kinds(&[0, 0, 1, 1].map(TileKind::new))
        .unwrap();

    assert_eq!(board.tile(TileId(0)).unwrap().coverers(), &[TileId(3)]);
    assert!(!board.is_free(TileId(0)).unwrap());
}

#[test]
fn test_explicit_same_layer_link_fails() {
    let layout = Layout::new(
        vec![vec![0, 1]],
        Coverage::Explicit(vec![CoverLink::new(SlotRef::new(0, 0), SlotRef::new(0, 1))]),
    );
    let err = BoardBuilder::new(layout).build_with_kinds(&TileKind::pairs(1, 1)).unwrap_err();
    assert_eq!(
        err,
        LayoutError::CoverNotAbove {
            upper: SlotRef::new(0, 0),
            lower: SlotRef::new(0, 1),
        }
    );
}

// =============================================================================
// Larger Shapes
// =============================================================================

#[test]
fn test_odd_slot_pyramid_cannot_be_dealt() {
    // 16 + 8 + 4 + 2 + 1 = 31 slots: no even multiset fits.
    let builder = BoardBuilder::new(Layout::pyramid(16, 5));
    for kinds in [TileKind::pairs(15, 1), TileKind::pairs(16, 1)] {
        assert!(matches!(
            builder.build(&kinds, &mut GameRng::new(3)),
            Err(LayoutError::KindCountMismatch { slots: 31, .. })
        ));
    }
}

#[test]
fn test_pyramid_top_only_free() {
    let board = BoardBuilder::new(Layout::pyramid(16, 4))
        .build(&TileKind::pairs(15, 1), &mut GameRng::new(3))
        .unwrap();
    assert_eq!(board.len(), 30);

    // Two tiles on top, side by side: both free, nothing below is.
    let free: Vec<_> = board.free_tiles().map(|t| t.layer()).collect();
    assert_eq!(free, vec![3, 3]);
}

#[test]
fn test_stacked_tower() {
    let board = BoardBuilder::new(Layout::stacked(2, 3))
        .build_with_kinds(&[0, 1, 1, 0, 2, 2].map(TileKind::new))
        .unwrap();

    let free: Vec<_> = board.free_tiles().map(|t| t.id()).collect();
    assert_eq!(free, vec![TileId(4), TileId(5)]);
    assert_eq!(board.tile(TileId(0)).unwrap().coverers(), &[TileId(2)]);
}

// =============================================================================
// Serialized Layouts
// =============================================================================

#[test]
fn test_layout_from_json() {
    let json = r#"{
        "layers": [[0, 1, 2, 3], [0, 1]],
        "coverage": { "Explicit": [
            { "upper": { "layer": 1, "position": 0 }, "lower": { "layer": 0, "position": 0 } },
            { "upper": { "layer": 1, "position": 0 }, "lower": { "layer": 0, "position": 1 } },
            { "upper": { "layer": 1, "position": 1 }, "lower": { "layer": 0, "position": 2 } },
            { "upper": { "layer": 1, "position": 1 }, "lower": { "layer": 0, "position": 3 } }
        ] }
    }"#;
    let explicit: Layout = serde_json::from_str(json).unwrap();

    let kinds = [1, 2, 2, 1, 0, 0].map(TileKind::new);
    let from_json = BoardBuilder::new(explicit).build_with_kinds(&kinds).unwrap();
    let stock = BoardBuilder::new(Layout::two_layer()).build_with_kinds(&kinds).unwrap();

    let shape = |b: &mahjong_solitaire::Board| -> Vec<_> {
        b.tiles().map(|t| (t.left(), t.right(), t.coverers().to_vec())).collect()
    };
    assert_eq!(shape(&from_json), shape(&stock));
}
