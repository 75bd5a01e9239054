//! Сайд-поты и шоудаун.
//!
//! Здесь мы проверяем:
//! - нарезку банков по уровням all-in (равные уровни, L1 < L2 < L3);
//! - фишки сфолдивших мест;
//! - раздачу банков по силе рук и остаток при делёжке;
//! - сохранение фишек на длинной серии раздач.

use std::sync::Arc;

use holdem_engine::api::TableView;
use holdem_engine::domain::{
    parse_cards, Card, Chips, Player, SeatIndex, Stage, Table, TableConfig,
};
use holdem_engine::engine::{carve_pots, EngineError, PlayerAction, RoundOutcome};
use holdem_engine::eval::{HandRanker, Score};

/// Ранкер, у которого все руки равны.
struct DummyRanker;

impl HandRanker for DummyRanker {
    fn best_five_of_seven(&self, _hole: [Card; 2], board: [Card; 5]) -> ([Card; 5], Score) {
        (board, 0)
    }
}

fn contributor(in_hand: bool, stack: u64, total: u64) -> Player {
    Player {
        ready: true,
        in_hand,
        stack: Chips(stack),
        total_bet: Chips(total),
        ..Player::new()
    }
}

fn cards(s: &str) -> [Option<Card>; 2] {
    let c = parse_cards(s).unwrap();
    [Some(c[0]), Some(c[1])]
}

/// Стол на ривере: раунд ставок закрыт, остаётся подвести итог.
/// `seats`: (стек, вклад за раздачу, в раздаче, карманные карты).
fn river_view(seats: &[(u64, u64, bool, &str)], board: &str) -> TableView {
    let players = seats
        .iter()
        .map(|&(stack, total, in_hand, hole)| Player {
            ready: true,
            in_hand,
            acted: true,
            stack: Chips(stack),
            total_bet: Chips(total),
            cards: cards(hole),
            ..Player::new()
        })
        .collect();

    TableView {
        community_cards: parse_cards(board).unwrap(),
        stage: Stage::River,
        betting: true,
        config: TableConfig::new(Chips(1000), Chips(1), Chips(2), 3),
        players,
        min_raise: Chips(2),
        ..TableView::default()
    }
}

fn stacks(t: &Table) -> Vec<u64> {
    t.players().iter().map(|p| p.stack.0).collect()
}

//
// ====================== НАРЕЗКА БАНКОВ ======================
//

#[test]
fn equal_all_ins_make_one_pot() {
    let players = vec![
        contributor(true, 0, 100),
        contributor(true, 0, 100),
        contributor(true, 0, 100),
    ];
    let pots = carve_pots(&players);

    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].amt, Chips(300));
    assert_eq!(pots[0].top_share, Chips(100));
    assert_eq!(pots[0].eligible_player_nums, vec![0, 1, 2]);
}

#[test]
fn three_levels_shrink_eligibility() {
    let players = vec![
        contributor(true, 0, 300),
        contributor(true, 0, 100),
        contributor(true, 0, 200),
        contributor(true, 50, 400),
    ];
    let pots = carve_pots(&players);
    let summary: Vec<(u64, u64, Vec<SeatIndex>)> = pots
        .iter()
        .map(|p| (p.top_share.0, p.amt.0, p.eligible_player_nums.clone()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (100, 400, vec![0, 1, 2, 3]),
            (100, 300, vec![0, 2, 3]),
            (100, 200, vec![0, 3]),
            (0, 100, vec![3]),
        ]
    );
}

#[test]
fn folded_chips_stay_in_the_pots() {
    let players = vec![
        contributor(true, 0, 50),
        contributor(false, 20, 80),
        contributor(true, 10, 120),
    ];
    let pots = carve_pots(&players);

    let total: Chips = pots.iter().map(|p| p.amt).sum();
    assert_eq!(total, Chips(250));
    assert_eq!(pots[0].amt, Chips(150));
    assert_eq!(pots[0].eligible_player_nums, vec![0, 2]);
    assert_eq!(pots[1].amt, Chips(100));
    assert_eq!(pots[1].eligible_player_nums, vec![2]);
    assert!(pots.iter().all(|p| !p.is_eligible(1)));
}

//
// ====================== ШОУДАУН ======================
//

#[test]
fn best_hand_takes_main_pot_and_side_pot_goes_to_runner_up() {
    let view = river_view(
        &[
            (0, 50, true, "Ah Ad"),
            (0, 100, true, "Kh Qc"),
            (20, 100, true, "5h 4c"),
        ],
        "2c 3d 8h 9s Kd",
    );
    let mut t = Table::from_view(&view).unwrap();

    assert_eq!(t.update_round_info(), RoundOutcome::Showdown);
    assert_eq!(stacks(&t), vec![150, 100, 20]);
    assert_eq!(t.stage(), Stage::PreDeal);

    let pots = t.pots();
    assert_eq!(pots.len(), 2);
    assert_eq!(pots[0].winning_player_nums, vec![0]);
    assert_eq!(pots[0].winning_hand.len(), 5);
    assert!(pots[0].winning_score.is_some());
    assert_eq!(pots[1].winning_player_nums, vec![1]);
}

#[test]
fn split_pot_odd_chip_goes_left_of_dealer() {
    let view = river_view(
        &[
            (10, 2, true, "Ah Kd"),
            (10, 2, true, "Qs Jc"),
            (10, 1, false, "2h 3h"),
        ],
        "4c 7d 9h Ts 2s",
    );
    let mut t = Table::from_view_with_ranker(&view, Arc::new(DummyRanker)).unwrap();

    assert_eq!(t.update_round_info(), RoundOutcome::Showdown);
    // 5 фишек на двоих: 2 + 2 и одна лишняя первому после дилера (место 1).
    assert_eq!(stacks(&t), vec![12, 13, 10]);
    assert_eq!(t.chips_in_play(), Chips(35));
    assert_eq!(t.pots()[0].winning_player_nums, vec![0, 1]);
}

#[test]
fn exact_tie_on_the_board_splits_evenly() {
    let view = river_view(
        &[(0, 40, true, "2c 3c"), (0, 40, true, "2d 3d")],
        "Ah Kh Qh Jh Th",
    );
    let mut t = Table::from_view(&view).unwrap();

    t.update_round_info();
    assert_eq!(stacks(&t), vec![40, 40]);
}

//
// ====================== СОХРАНЕНИЕ ФИШЕК ======================
//

/// Сыграть раздачи простой стратегией, пока за столом больше одного готового.
/// После каждого шага сумма фишек стола не меняется.
#[test]
fn chips_are_conserved_over_many_hands() {
    let mut t = Table::new(TableConfig::new(Chips(1000), Chips(5), Chips(10), 77)).unwrap();
    for _ in 0..4 {
        let seat = t.add_seat().unwrap();
        t.buy_in(seat, Chips(200)).unwrap();
        t.toggle_ready(seat).unwrap();
    }
    let total = t.chips_in_play();

    let mut hands = 0;
    for step in 0..20_000u32 {
        if !t.betting() {
            if t.stage() == Stage::PreDeal {
                hands += 1;
            }
            match t.deal(t.dealer_num()) {
                Ok(_) => {}
                Err(EngineError::NotEnoughPlayers) => break,
                Err(e) => panic!("раздача не удалась: {e}"),
            }
        } else {
            let seat = t.action_num();
            let p = &t.players()[seat as usize];
            let owed = t.to_call() - p.bet;
            let action = match step % 7 {
                0 => PlayerAction::AllIn,
                1 if !owed.is_zero() => PlayerAction::Fold,
                _ if owed.is_zero() => PlayerAction::Check,
                _ => PlayerAction::Call,
            };
            t.apply_action(seat, action).unwrap();
        }
        assert_eq!(t.chips_in_play(), total, "шаг {step}");
    }

    assert!(hands > 1);
    assert!(t.ready_count() < 4, "кто-то должен был вылететь");
}
