//! Card, deck and display tests.

use bataille::{
    Card, CardFace, Color, DECK_SIZE, Deck, HAND_SIZE, Locale, PresentationOptions, Rank,
    RoundOutcome, Suit, card_face, hand_progress_percent,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sorted_indices<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<usize> {
    let mut indices: Vec<usize> = cards.into_iter().map(Card::index).collect();
    indices.sort_unstable();
    indices
}

#[test]
fn ordered_deck_is_suit_major() {
    let deck = Deck::new();
    let cards = deck.cards();

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(cards[0], Card::new(Suit::Spades, Rank::Ace));
    assert_eq!(cards[12], Card::new(Suit::Spades, Rank::King));
    assert_eq!(cards[13], Card::new(Suit::Hearts, Rank::Ace));
    assert_eq!(cards[51], Card::new(Suit::Clubs, Rank::King));

    for (position, card) in cards.iter().enumerate() {
        assert_eq!(card.index(), position);
    }
}

#[test]
fn rank_values_run_from_ace_to_king() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::King.value(), 13);

    let values: Vec<u8> = Rank::ALL.iter().map(|rank| rank.value()).collect();
    assert_eq!(values, (1..=13).collect::<Vec<_>>());

    let card = Card::new(Suit::Hearts, Rank::Queen);
    assert_eq!(card.rank_value(), 12);
}

#[test]
fn suits_split_into_two_colors() {
    assert_eq!(Suit::Spades.color(), Color::Black);
    assert_eq!(Suit::Clubs.color(), Color::Black);
    assert_eq!(Suit::Hearts.color(), Color::Red);
    assert_eq!(Suit::Diamonds.color(), Color::Red);
    assert_eq!(Color::Red.as_str(), "red");
    assert_eq!(Color::Black.as_str(), "black");
}

#[test]
fn card_face_has_label_and_color() {
    assert_eq!(
        card_face(&Card::new(Suit::Spades, Rank::King)),
        CardFace {
            label: "K♠".to_string(),
            color: Color::Black,
        }
    );
    assert_eq!(
        card_face(&Card::new(Suit::Diamonds, Rank::Ten)).label,
        "10♦"
    );
    assert_eq!(Card::new(Suit::Hearts, Rank::Ace).to_string(), "A♥");
}

#[test]
fn split_hands_are_disjoint_halves() {
    let deck = Deck::new();
    let all = sorted_indices(deck.cards());

    let (player, computer) = deck.split();
    assert_eq!(player.len(), HAND_SIZE);
    assert_eq!(computer.len(), HAND_SIZE);
    assert_eq!(player.iter().next(), Some(&Card::new(Suit::Spades, Rank::Ace)));
    assert_eq!(
        computer.iter().next(),
        Some(&Card::new(Suit::Diamonds, Rank::Ace))
    );
    assert_eq!(sorted_indices(player.iter().chain(&computer)), all);
}

#[test]
fn progress_tracks_remaining_cards() {
    assert_eq!(hand_progress_percent(HAND_SIZE), 100);
    assert_eq!(hand_progress_percent(13), 50);
    assert_eq!(hand_progress_percent(0), 0);
    assert_eq!(hand_progress_percent(1), 3);
}

#[test]
fn french_strings_match_the_table() {
    let locale = Locale::default();
    assert_eq!(locale, Locale::French);
    assert_eq!(locale.round_message(RoundOutcome::Win), "🎉 VICTOIRE!");
    assert_eq!(locale.round_message(RoundOutcome::Tie), "🤝 Égalité");
    assert_eq!(
        locale.final_message(RoundOutcome::Lose),
        "L'ordinateur a gagné..."
    );
    assert_eq!(locale.final_title(RoundOutcome::Tie), "🤝 ÉGALITÉ 🤝");
    assert_eq!(locale.suit_name(Suit::Clubs), "Trèfle");
    assert_eq!(locale.player_label(), "Joueur");
    assert_eq!(Locale::English.computer_label(), "Computer");
}

#[test]
fn driver_notices_follow_the_locale() {
    let french = Locale::French;
    let english = Locale::English;

    assert_eq!(french.new_game_notice(), "Nouvelle partie.");
    assert_eq!(english.new_game_notice(), "New game.");
    assert_eq!(french.cards_label(), "cartes");
    assert_eq!(english.cards_label(), "cards");
    assert_eq!(french.score_label(), "points");
    assert_ne!(french.game_over_hint(), english.game_over_hint());
    assert_ne!(french.no_round_notice(), english.no_round_notice());
    assert_eq!(french.suit_name(Suit::Hearts), "Cœur");
    assert_eq!(english.suit_name(Suit::Hearts), "Hearts");
}

#[test]
fn presentation_defaults_follow_the_table() {
    let options = PresentationOptions::default();
    assert_eq!(options.reveal_delay_ms, 1000);
    assert_eq!(options.locale, Locale::French);
}

#[test]
fn outcome_compare_is_three_way() {
    assert_eq!(RoundOutcome::compare(13, 2), RoundOutcome::Win);
    assert_eq!(RoundOutcome::compare(1, 13), RoundOutcome::Lose);
    assert_eq!(RoundOutcome::compare(7, 7), RoundOutcome::Tie);
}

#[test]
fn seeded_shuffle_reorders_the_deck() {
    let shuffled = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(42));
    assert_ne!(shuffled, Deck::new());

    let moved = shuffled
        .cards()
        .iter()
        .enumerate()
        .filter(|(position, card)| card.index() != *position)
        .count();
    assert!(moved > DECK_SIZE / 2, "only {moved} cards moved");
}

#[test]
fn different_seeds_give_different_orders() {
    let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(1));
    let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(2));
    assert_ne!(first, second);
}

#[test]
fn shuffle_spreads_a_card_across_positions() {
    let ace_of_spades = Card::new(Suit::Spades, Rank::Ace);
    let mut positions_seen = [false; DECK_SIZE];
    let mut first_cards_seen = [false; DECK_SIZE];

    for seed in 0..400 {
        let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        let position = deck
            .cards()
            .iter()
            .position(|card| *card == ace_of_spades)
            .unwrap();
        positions_seen[position] = true;
        first_cards_seen[deck.cards()[0].index()] = true;
    }

    let positions = positions_seen.iter().filter(|seen| **seen).count();
    let first_cards = first_cards_seen.iter().filter(|seen| **seen).count();
    assert!(positions >= 40, "ace of spades seen at only {positions} positions");
    assert!(first_cards >= 40, "only {first_cards} distinct top cards");
}

#[test]
fn shuffle_keeps_reordering_on_the_same_stream() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    let once = deck.clone();
    deck.shuffle(&mut rng);
    assert_ne!(deck, once);
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(sorted_indices(deck.cards()), (0..DECK_SIZE).collect::<Vec<_>>());
        prop_assert!(Deck::from_cards(deck.cards().to_vec()).is_ok());
    }

    #[test]
    fn shuffle_is_seed_deterministic(seed in any::<u64>()) {
        let first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        let second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }
}
