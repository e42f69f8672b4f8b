//! Tests for draft sessions built from hand-made packs, including short packs.

use cube_draft::{
    Card, Color, DraftSession, EXPECTED_PICKS, Pack, PassDirection, PickOutcome, RandomPicker,
};

fn pack(index: usize, size: usize) -> Pack {
    (0..size)
        .map(|i| {
            let colors = if i % 2 == 0 { vec![Color::Green] } else { Vec::new() };
            Card::new(
                format!("p{index}-c{i}"),
                format!("Card {i}"),
                colors,
                "Instant".to_string(),
            )
        })
        .collect()
}

/// Twelve packs for a four-seat table, with `short` packs one card light.
fn packs_with_short(short: &[usize]) -> Vec<Pack> {
    (0..12)
        .map(|i| pack(i, if short.contains(&i) { 14 } else { 15 }))
        .collect()
}

fn run_to_completion(session: &mut DraftSession, picker: &mut RandomPicker) -> Vec<PickOutcome> {
    let mut outcomes = Vec::new();
    while !session.is_complete() {
        let card_id = session.current_pack()[0].id().clone();
        outcomes.push(session.pick(&card_id, picker));
    }
    outcomes
}

#[test]
fn test_packs_dealt_round_major() {
    let session = DraftSession::new(3, packs_with_short(&[]));

    for (seat_index, seat) in session.seats().iter().enumerate() {
        let first = seat.current_pack()[0].id();
        assert_eq!(first, &format!("p{seat_index}-c0"));
    }
    assert_eq!(session.human().name(), "You");
    assert_eq!(session.seats()[2].name(), "Bot 2");
    assert_eq!(session.direction(), PassDirection::Left);
}

#[test]
fn test_round_two_deals_second_batch_and_passes_right() {
    let mut session = DraftSession::new(3, packs_with_short(&[]));
    let mut picker = RandomPicker::new(Some(11));

    for _ in 0..15 {
        let card_id = session.current_pack()[0].id().clone();
        session.pick(&card_id, &mut picker);
    }

    assert_eq!(session.round(), 2);
    assert_eq!(session.pick_number(), 1);
    assert_eq!(session.direction(), PassDirection::Right);
    assert_eq!(session.current_pack()[0].id(), "p4-c0");

    // Passing right: the human receives seat 1's pack.
    let seat_one_before = session.seats()[1].current_pack().clone();
    let card_id = session.current_pack()[0].id().clone();
    session.pick(&card_id, &mut picker);

    let seat_one_pick = session
        .bot_picks_for(1)
        .last()
        .map(|event| event.card().id().clone())
        .expect("bot 1 picked");
    let expected: Vec<&String> = seat_one_before
        .iter()
        .map(|c| c.id())
        .filter(|id| **id != seat_one_pick)
        .collect();
    let received: Vec<&String> = session.current_pack().iter().map(|c| c.id()).collect();
    assert_eq!(received, expected);
}

#[test]
fn test_short_pack_leaves_bot_a_card_short() {
    // The human's round 1 pack is short; it runs dry in Bot 2's hands.
    let mut session = DraftSession::new(3, packs_with_short(&[0]));
    let mut picker = RandomPicker::new(Some(23));

    let outcomes = run_to_completion(&mut session, &mut picker);
    assert_eq!(outcomes.len(), EXPECTED_PICKS);

    let summary = session.summary().expect("complete");
    let counts: Vec<usize> = summary.seats().iter().map(|s| *s.picks()).collect();
    assert_eq!(counts, vec![45, 45, 44, 45]);

    assert_eq!(summary.advisories().len(), 2);
    assert!(summary.advisories()[0].contains("contained 14 cards"));
    assert_eq!(
        summary.advisories()[1],
        "Bot 2 drafted 44 cards instead of expected 45"
    );
    assert!(!summary.is_clean());
}

#[test]
fn test_human_handed_empty_pack_ends_round() {
    // Bot 2's round 1 pack is short; it runs dry just before reaching the human.
    let mut session = DraftSession::new(3, packs_with_short(&[2]));
    let mut picker = RandomPicker::new(Some(29));

    let mut outcome = None;
    for _ in 0..14 {
        let card_id = session.current_pack()[0].id().clone();
        outcome = Some(session.pick(&card_id, &mut picker));
    }

    assert_eq!(outcome, Some(PickOutcome::RoundAdvanced { round: 2 }));
    assert_eq!(session.round(), 2);
    assert_eq!(session.pick_number(), 1);
    assert!(session.seats().iter().all(|s| s.current_pack().len() == 15));

    run_to_completion(&mut session, &mut picker);
    let summary = session.summary().expect("complete");
    assert!(summary.seats().iter().all(|s| *s.picks() == 44));
    assert!(
        summary
            .advisories()
            .iter()
            .any(|note| note == "Round 1 ended early; 3 undrafted cards were discarded")
    );
}

#[test]
fn test_summary_only_after_completion() {
    let mut session = DraftSession::new(1, (0..6).map(|i| pack(i, 15)).collect());
    let mut picker = RandomPicker::new(Some(31));
    assert!(session.summary().is_none());

    run_to_completion(&mut session, &mut picker);
    let summary = session.summary().expect("complete");
    assert!(summary.is_clean());
    assert_eq!(*summary.expected_picks(), EXPECTED_PICKS);
    assert_eq!(summary.seats()[1].colors(), &vec![Color::Green]);
    assert!(summary.to_string().contains("you selected 45 cards"));
}

/// Twelve packs for a four-seat table with `empty` packs dealt bare.
fn packs_with_empty(empty: &[usize]) -> Vec<Pack> {
    (0..12)
        .map(|i| pack(i, if empty.contains(&i) { 0 } else { 15 }))
        .collect()
}

#[test]
fn test_empty_human_pack_at_round_start_skips_round() {
    // Pack 4 is the human's round 2 pack.
    let mut session = DraftSession::new(3, packs_with_empty(&[4]));
    let mut picker = RandomPicker::new(Some(37));

    let mut outcome = None;
    for _ in 0..15 {
        let card_id = session.current_pack()[0].id().clone();
        outcome = Some(session.pick(&card_id, &mut picker));
    }

    assert_eq!(outcome, Some(PickOutcome::RoundAdvanced { round: 3 }));
    assert_eq!(session.round(), 3);
    assert_eq!(session.pick_number(), 1);
    assert_eq!(session.direction(), PassDirection::Left);
    assert!(session.seats().iter().all(|s| s.current_pack().len() == 15));

    let outcomes = run_to_completion(&mut session, &mut picker);
    assert_eq!(outcomes.len(), 15);
    assert!(matches!(outcomes.last(), Some(PickOutcome::Completed(_))));

    let summary = session.summary().expect("complete");
    assert!(summary.seats().iter().all(|s| *s.picks() == 30));
    let expected_note = "Round 2 skipped; You received an empty pack and 45 cards were discarded";
    assert!(summary.advisories().iter().any(|note| note == expected_note));
}

#[test]
fn test_empty_human_pack_in_first_round() {
    let session = DraftSession::new(3, packs_with_empty(&[0]));

    assert_eq!(session.round(), 2);
    assert_eq!(session.direction(), PassDirection::Right);
    assert_eq!(session.current_pack().len(), 15);
    assert!(!session.is_complete());
}

#[test]
fn test_no_cards_at_all_completes_immediately() {
    let session = DraftSession::new(1, (0..6).map(|i| pack(i, 0)).collect());

    assert!(session.is_complete());
    let summary = session.summary().expect("complete");
    assert!(summary.seats().iter().all(|s| *s.picks() == 0));
}
