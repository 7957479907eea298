//! Property-based tests for dealing, turn resolution and role assignment.

use std::collections::HashSet;

use president::{
    Card, Computer, DECK_SIZE, Deck, Game, GameOptions, GameState, Hand, Role, RoleAssigner,
    TurnEvent,
};
use proptest::prelude::*;

fn seated_game(players: usize, seed: u64) -> Game {
    let mut game = Game::new(GameOptions::default(), seed);
    for index in 0..players {
        game.join(format!("p{index}")).unwrap();
    }
    game
}

proptest! {
    #[test]
    fn shuffled_deal_is_a_partition(players in 2usize..=8, seed in any::<u64>(), offset in 0usize..8) {
        let mut rng = <rand_chacha::ChaCha8Rng as rand::SeedableRng>::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut hands = vec![Hand::new(); players];
        deck.deal(&mut hands, offset);

        let cards: Vec<Card> = hands.iter().flat_map(|h| h.cards().iter().copied()).collect();
        let distinct: HashSet<Card> = cards.iter().copied().collect();
        prop_assert_eq!(cards.len(), DECK_SIZE);
        prop_assert_eq!(distinct.len(), DECK_SIZE);

        let max = hands.iter().map(Hand::len).max().unwrap();
        let min = hands.iter().map(Hand::len).min().unwrap();
        prop_assert!(max - min <= 1);
    }

    #[test]
    fn computer_rounds_follow_the_rules(players in 2usize..=8, seed in any::<u64>()) {
        let mut game = seated_game(players, seed);
        game.start_round().unwrap();

        let mut steps = 0;
        while let GameState::AwaitingPlay(player_id) = game.state() {
            steps += 1;
            prop_assert!(steps < 10_000, "round did not terminate");

            let pile: Option<Vec<Card>> = game.table().last_play().map(<[Card]>::to_vec);
            let active = game.table().active_count();
            let skips = game.table().consecutive_skips();
            let play = Computer::choose(&game.view(player_id).unwrap());
            let events = game.play(player_id, play).unwrap();

            for event in &events {
                match event {
                    TurnEvent::Played { cards, .. } => {
                        if let Some(pile) = &pile {
                            prop_assert_eq!(cards.len(), pile.len());
                            prop_assert!(cards.iter().all(|c| pile.iter().all(|p| c.beats(p))));
                        }
                    }
                    TurnEvent::Bombed { .. } => {
                        prop_assert!(game.table().last_play().is_none());
                    }
                    TurnEvent::Skipped { .. } if skips + 1 >= active - 1 => {
                        prop_assert!(game.table().last_play().is_none());
                        prop_assert_eq!(game.table().consecutive_skips(), 0);
                    }
                    _ => {}
                }
            }
        }

        let result = game.last_result().unwrap();
        let ids: HashSet<u8> = result.standings.iter().map(|s| s.player_id).collect();
        prop_assert_eq!(ids.len(), players);

        let roles: Vec<Role> = result.standings.iter().map(|s| s.role).collect();
        prop_assert_eq!(roles, Role::standard_list(players));

        let finished = game.table().finished();
        prop_assert_eq!(result.standings[0].player_id, finished[0]);
        prop_assert_eq!(result.standings[players - 1].player_id, game.table().turn_order()[0]);
    }

    #[test]
    fn assignment_is_a_bijection(players in 2usize..=8, rotation in 0usize..8) {
        let mut order: Vec<u8> = (0..players as u8).collect();
        order.rotate_left(rotation % players);
        let (remaining, finished) = order.split_last().unwrap();

        let assigner = RoleAssigner::new(Role::standard_list(players));
        let standings = assigner.assign(finished, *remaining).unwrap();

        prop_assert_eq!(standings.len(), players);
        prop_assert_eq!(standings[0].role, Role::President);
        prop_assert_eq!(standings[0].player_id, order[0]);
        prop_assert_eq!(standings[players - 1].role, Role::Trash);
        prop_assert_eq!(standings[players - 1].player_id, *remaining);
    }
}
