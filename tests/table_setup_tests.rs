//! Базовые тесты стола: статус, конфиг, управление местами.

use holdem_engine::domain::{
    Chips, Stage, Table, TableConfig, TableStatus, MAX_SEATS,
};
use holdem_engine::engine::{ConfigError, EngineError, PlayerAction};

fn config() -> TableConfig {
    TableConfig::new(Chips(1000), Chips(5), Chips(10), 1)
}

//
// ====================== СТАТУС ======================
//

#[test]
fn status_fields_are_independent() {
    let mut st = TableStatus::new(Stage::PreDeal, false);

    st.set_betting(true);
    assert_eq!(st.stage(), Stage::PreDeal);
    assert!(st.betting());

    st.set_stage(Stage::Turn);
    assert_eq!(st.stage(), Stage::Turn);
    assert!(st.betting(), "смена стадии не трогает флаг ставок");

    st.set_stage_and_betting(Stage::River, false);
    assert_eq!(st.stage_and_betting(), (Stage::River, false));
}

#[test]
fn every_stage_survives_both_flag_values() {
    let stages = [
        Stage::PreDeal,
        Stage::PreFlop,
        Stage::Flop,
        Stage::Turn,
        Stage::River,
        Stage::Over,
    ];
    for stage in stages {
        for betting in [false, true] {
            let st = TableStatus::new(stage, betting);
            assert_eq!(st.stage(), stage);
            assert_eq!(st.betting(), betting);
        }
    }
}

#[test]
fn streets_follow_in_order() {
    assert_eq!(Stage::PreDeal.next_street(), Some(Stage::PreFlop));
    assert_eq!(Stage::PreFlop.next_street(), Some(Stage::Flop));
    assert_eq!(Stage::Turn.next_street(), Some(Stage::River));
    assert_eq!(Stage::River.next_street(), None);
    assert_eq!(Stage::Flop.board_cards_dealt(), 3);
    assert_eq!(Stage::River.board_cards_dealt(), 1);
}

//
// ====================== КОНФИГ ======================
//

#[test]
fn config_validation() {
    assert!(config().validate().is_ok());

    let zero_bb = TableConfig::new(Chips(1000), Chips(0), Chips(0), 1);
    assert!(matches!(zero_bb.validate(), Err(ConfigError::ZeroBigBlind)));

    let inverted = TableConfig::new(Chips(1000), Chips(20), Chips(10), 1);
    assert!(matches!(
        inverted.validate(),
        Err(ConfigError::SmallBlindAboveBig { .. })
    ));

    let tiny_buy = TableConfig::new(Chips(5), Chips(5), Chips(10), 1);
    assert!(matches!(
        tiny_buy.validate(),
        Err(ConfigError::MaxBuyBelowBigBlind { .. })
    ));

    assert!(matches!(
        Table::new(inverted),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn config_from_json() {
    let json = r#"{"max_buy":500,"big_blind":4,"small_blind":2,"seed":99}"#;
    let cfg = TableConfig::from_json(json).unwrap();
    assert_eq!(cfg, TableConfig::new(Chips(500), Chips(2), Chips(4), 99));

    assert!(matches!(
        TableConfig::from_json("{not json"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        TableConfig::from_json(r#"{"max_buy":500,"big_blind":0,"small_blind":0,"seed":1}"#),
        Err(ConfigError::ZeroBigBlind)
    ));
}

//
// ====================== МЕСТА ======================
//

#[test]
fn seats_are_dense_and_capped() {
    let mut table = Table::new(config()).unwrap();
    for expected in 0..MAX_SEATS {
        assert_eq!(table.add_seat().unwrap() as usize, expected);
    }
    assert!(matches!(table.add_seat(), Err(EngineError::TableFull)));
    assert_eq!(table.seat_count(), MAX_SEATS);
}

#[test]
fn buy_in_respects_max_buy() {
    let mut table = Table::new(config()).unwrap();
    let seat = table.add_seat().unwrap();

    table.buy_in(seat, Chips(600)).unwrap();
    assert!(matches!(
        table.buy_in(seat, Chips(401)),
        Err(EngineError::BadBuyIn { .. })
    ));
    table.buy_in(seat, Chips(400)).unwrap();
    assert_eq!(table.seat(seat).unwrap().stack, Chips(1000));

    assert!(matches!(
        table.buy_in(7, Chips(10)),
        Err(EngineError::BadSeat(7))
    ));
}

#[test]
fn empty_stack_cannot_become_ready() {
    let mut table = Table::new(config()).unwrap();
    let seat = table.add_seat().unwrap();

    assert!(matches!(
        table.toggle_ready(seat),
        Err(EngineError::NoChips(0))
    ));

    table.buy_in(seat, Chips(100)).unwrap();
    assert!(table.toggle_ready(seat).unwrap());
    assert_eq!(table.ready_count(), 1);
    assert!(!table.toggle_ready(seat).unwrap());
    assert_eq!(table.ready_count(), 0);
}

#[test]
fn no_buy_in_while_hand_runs() {
    let mut table = Table::new(config()).unwrap();
    for _ in 0..3 {
        let seat = table.add_seat().unwrap();
        table.buy_in(seat, Chips(200)).unwrap();
        table.toggle_ready(seat).unwrap();
    }
    table.deal(0).unwrap();
    table.apply_action(0, PlayerAction::Fold).unwrap();

    // Место 0 уже сфолдило, но раздача ещё идёт.
    assert!(!table.players()[0].in_hand);
    assert!(matches!(
        table.buy_in(0, Chips(100)),
        Err(EngineError::HandInProgress)
    ));
    assert_eq!(table.chips_in_play(), Chips(600));

    table.apply_action(1, PlayerAction::Fold).unwrap();
    assert_eq!(table.stage(), Stage::PreDeal);
    table.buy_in(0, Chips(100)).unwrap();
    assert_eq!(table.players()[0].stack, Chips(300));
}
