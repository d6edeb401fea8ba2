//! Scenario and property tests for end-of-hand scoring and game-over
//! detection.

use proptest::prelude::*;

use super::position::{Position, Team, TeamMap};
use super::scoring::run_scoring;
use super::state::Phase;
use super::test_support::{bare_state, proptest_config};

fn scoring_state(
    bidding_team: Team,
    bid_amount: u8,
    cumulative: TeamMap<i32>,
    hand_points: TeamMap<i32>,
) -> super::state::GameState {
    let mut state = bare_state(Position::North, Phase::Scoring);
    state.bidding_team = Some(bidding_team);
    state.highest_bid = Some((
        if bidding_team == Team::NorthSouth { Position::North } else { Position::East },
        bid_amount,
    ));
    state.cumulative_scores = cumulative;
    state.hand_points = hand_points;
    state
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Whatever the bid outcome, the defending team's cumulative score
    /// always increases by exactly their hand points.
    #[test]
    fn prop_defending_team_always_gains_their_points(
        bid_amount in 6u8..=14u8,
        bidding_points in 0i32..=14,
        defending_points in 0i32..=14,
        start_bidding in -30i32..100,
        start_defending in -30i32..100,
    ) {
        let cumulative = TeamMap([start_bidding, start_defending]);
        let hand_points = TeamMap([bidding_points, defending_points]);
        let state = scoring_state(Team::NorthSouth, bid_amount, cumulative, hand_points);
        let (state, _) = run_scoring(&state);
        prop_assert_eq!(
            state.cumulative_scores[Team::EastWest],
            start_defending + defending_points
        );
    }

    /// A bid is made iff the bidding team's cumulative score goes up by
    /// their hand points; otherwise it goes down by the bid amount.
    #[test]
    fn prop_bid_made_or_set_matches_points_vs_bid(
        bid_amount in 6u8..=14u8,
        bidding_points in 0i32..=14,
        start_bidding in -30i32..100,
    ) {
        let cumulative = TeamMap([start_bidding, 0]);
        let hand_points = TeamMap([bidding_points, 14 - bidding_points]);
        let state = scoring_state(Team::NorthSouth, bid_amount, cumulative, hand_points);
        let (state, _) = run_scoring(&state);
        if bidding_points >= bid_amount as i32 {
            prop_assert_eq!(state.cumulative_scores[Team::NorthSouth], start_bidding + bidding_points);
        } else {
            prop_assert_eq!(state.cumulative_scores[Team::NorthSouth], start_bidding - bid_amount as i32);
        }
    }
}

/// A failed bid can drive the bidding team's score
/// negative with no floor.
#[test]
fn negative_score_scenario() {
    let state = scoring_state(
        Team::NorthSouth,
        10,
        TeamMap([0, 0]),
        TeamMap([4, 10]),
    );
    let (state, _) = run_scoring(&state);
    assert_eq!(state.cumulative_scores[Team::NorthSouth], -10);
    assert_eq!(state.cumulative_scores[Team::EastWest], 10);
    assert_eq!(state.phase, Phase::DealerSelection);
}

/// When both teams clear 62 in the same hand, the
/// bidding team wins the tie-break.
#[test]
fn double_sixty_two_tie_break_favors_bidder() {
    let state = scoring_state(
        Team::NorthSouth,
        8,
        TeamMap([58, 58]),
        TeamMap([8, 6]),
    );
    let (state, _) = run_scoring(&state);
    assert_eq!(state.cumulative_scores[Team::NorthSouth], 66);
    assert_eq!(state.cumulative_scores[Team::EastWest], 64);
    assert_eq!(state.phase, Phase::Complete);
    assert_eq!(state.winner, Some(Team::NorthSouth));
}

#[test]
fn only_bidding_team_crossing_threshold_wins_outright() {
    let state = scoring_state(
        Team::EastWest,
        9,
        TeamMap([20, 55]),
        TeamMap([3, 9]),
    );
    let (state, _) = run_scoring(&state);
    assert_eq!(state.cumulative_scores[Team::EastWest], 64);
    assert_eq!(state.phase, Phase::Complete);
    assert_eq!(state.winner, Some(Team::EastWest));
}

#[test]
fn defending_team_alone_crossing_threshold_wins() {
    // Bidding team fails their bid and falls further behind while the
    // defenders cross 62 on their own points.
    let state = scoring_state(
        Team::NorthSouth,
        8,
        TeamMap([10, 56]),
        TeamMap([2, 12]),
    );
    let (state, _) = run_scoring(&state);
    assert_eq!(state.cumulative_scores[Team::NorthSouth], 2); // 10 - 8
    assert_eq!(state.cumulative_scores[Team::EastWest], 68);
    assert_eq!(state.phase, Phase::Complete);
    assert_eq!(state.winner, Some(Team::EastWest));
}

#[test]
fn hand_under_threshold_rotates_dealer_instead_of_ending() {
    let state = scoring_state(
        Team::NorthSouth,
        7,
        TeamMap([10, 10]),
        TeamMap([7, 7]),
    );
    let (state, _) = run_scoring(&state);
    assert_eq!(state.phase, Phase::DealerSelection);
    assert_eq!(state.winner, None);
}
