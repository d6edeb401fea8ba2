//! Per-trick point aggregation and end-of-hand scoring.

use tracing::info;

use super::cards::Suit;
use super::events::Event;
use super::position::{Position, Team, TeamMap};
use super::state::{GameState, Phase};
use super::trick::Trick;

/// Points earned by each team from a single completed trick, and who
/// won it. The 2-of-trump rule: whoever played the 2 of
/// trump keeps its one point for their own team even if a partner or
/// opponent won the trick; the trick winner's team takes the rest. If
/// the winner played the 2 of trump themselves, their team simply gets
/// the full total, since both halves land on the same team.
pub fn trick_points(trick: &Trick, trump: Suit) -> (Position, TeamMap<u32>) {
    let winner = trick.winner(trump).expect("a completed trick has a winner");
    let total = trick.point_total(trump);
    let mut per_team = TeamMap::new(0u32);
    match trick.two_of_trump_player(trump) {
        Some(two_pos) if two_pos != winner => {
            per_team[two_pos.team()] += 1;
            per_team[winner.team()] += total.saturating_sub(1);
        }
        _ => {
            per_team[winner.team()] += total;
        }
    }
    (winner, per_team)
}

/// Apply the bidding team's made/failed outcome to the cumulative
/// scores, check for a game winner, and emit the corresponding events.
/// On a completed game, sets `phase = Complete`. Otherwise sets
/// `phase = DealerSelection` so the engine's cascade starts the next
/// hand; `current_dealer` is left at the hand just played so dealer
/// rotation happens in one place (`engine::run_dealer_selection`).
pub fn run_scoring(state: &GameState) -> (GameState, Vec<Event>) {
    debug_assert_eq!(state.phase, Phase::Scoring);
    let mut state = state.clone();
    let bidding_team = state
        .bidding_team
        .expect("bidding team is set once bidding completes");
    let (_, bid_amount) = state
        .highest_bid
        .expect("highest bid is set once bidding completes");
    let other_team = bidding_team.other();

    let made = state.hand_points[bidding_team] >= bid_amount as i32;
    if made {
        state.cumulative_scores[bidding_team] += state.hand_points[bidding_team];
    } else {
        state.cumulative_scores[bidding_team] -= bid_amount as i32;
    }
    state.cumulative_scores[other_team] += state.hand_points[other_team];

    info!(
        ?bidding_team,
        bid_amount, made, scores = ?state.cumulative_scores.0, "hand scored"
    );
    let mut events = vec![Event::HandScored {
        hand_points: state.hand_points,
        cumulative_scores: state.cumulative_scores,
    }];

    if let Some(winner) = game_winner(&state, bidding_team) {
        state.phase = Phase::Complete;
        state.winner = Some(winner);
        state.current_turn = None;
        events.push(Event::GameWon {
            winner,
            final_scores: state.cumulative_scores,
        });
    } else {
        state.phase = Phase::DealerSelection;
        state.current_turn = None;
        state.hand_number += 1;
    }
    (state, events)
}

/// Which team won the game, if either has reached `winning_score`. If
/// both clear it in the same hand the bidding team wins the tie-break
/// they took the risk of the bid.
fn game_winner(state: &GameState, bidding_team: Team) -> Option<Team> {
    let threshold = state.config.winning_score;
    let bidding_made_it = state.cumulative_scores[bidding_team] >= threshold;
    let other_made_it = state.cumulative_scores[bidding_team.other()] >= threshold;
    match (bidding_made_it, other_made_it) {
        (true, _) => Some(bidding_team),
        (false, true) => Some(bidding_team.other()),
        (false, false) => None,
    }
}
