use serde::{Deserialize, Serialize};

/// Стадия раздачи.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Между раздачами: блайнды ещё не поставлены, карт нет.
    #[default]
    PreDeal,
    PreFlop,
    Flop,
    Turn,
    River,
    /// Терминальная метка.
    Over,
}

impl Stage {
    /// Следующая улица после этой (для PreDeal..Turn).
    pub fn next_street(self) -> Option<Stage> {
        match self {
            Stage::PreDeal => Some(Stage::PreFlop),
            Stage::PreFlop => Some(Stage::Flop),
            Stage::Flop => Some(Stage::Turn),
            Stage::Turn => Some(Stage::River),
            Stage::River | Stage::Over => None,
        }
    }

    /// Сколько общих карт открывается при переходе на эту улицу.
    pub fn board_cards_dealt(self) -> usize {
        match self {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            _ => 0,
        }
    }
}

/// Статус стола: (стадия, идут ли ставки).
///
/// Два независимых поля. Наружу (view, restore) они всегда уходят раздельно.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableStatus {
    stage: Stage,
    betting: bool,
}

impl TableStatus {
    pub fn new(stage: Stage, betting: bool) -> Self {
        Self { stage, betting }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }

    pub fn betting(&self) -> bool {
        self.betting
    }

    pub fn set_betting(&mut self, betting: bool) {
        self.betting = betting;
    }

    pub fn stage_and_betting(&self) -> (Stage, bool) {
        (self.stage, self.betting)
    }

    /// Поменять оба поля разом – например, при завершении раунда.
    pub fn set_stage_and_betting(&mut self, stage: Stage, betting: bool) {
        self.stage = stage;
        self.betting = betting;
    }
}
