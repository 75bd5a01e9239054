use crate::domain::{Chips, Player, SeatIndex};
use crate::engine::pot::Pot;

/// Нарезать банки из вкладов игроков (`total_bet`) на момент шоудауна.
///
/// Для каждого различного уровня all-in (по возрастанию) вырезается один
/// сайд-пот: каждое место кладёт туда `min(доля, остаток)`, претендуют те
/// участники раздачи, кто покрыл долю целиком. Остаток от всех мест
/// уходит в финальный банк для тех, кто не в all-in.
///
/// Фишки сфолдивших мест попадают в банки, но претендовать на них эти места не могут.
/// Сумма всех банков всегда равна сумме `total_bet`.
pub fn carve_pots(players: &[Player]) -> Vec<Pot> {
    let mut remaining: Vec<Chips> = players.iter().map(|p| p.total_bet).collect();

    let mut all_in: Vec<usize> = (0..players.len())
        .filter(|&i| players[i].is_all_in())
        .collect();
    all_in.sort_by_key(|&i| players[i].total_bet);

    let mut pots = Vec::new();

    for &seat in &all_in {
        let share = remaining[seat];
        // Второй all-in на том же уровне: слой уже вырезан.
        if share.is_zero() {
            continue;
        }

        let mut pot = Pot::new(share);
        for (i, rest) in remaining.iter_mut().enumerate() {
            if *rest >= share {
                if players[i].in_hand {
                    pot.eligible_player_nums.push(i as SeatIndex);
                }
                pot.add(share);
                *rest -= share;
            } else {
                pot.add(*rest);
                *rest = Chips::ZERO;
            }
        }
        pots.push(pot);
    }

    let leftover: Chips = remaining.iter().copied().sum();
    if leftover.is_zero() {
        return pots;
    }

    let eligible: Vec<SeatIndex> = (0..players.len())
        .filter(|&i| players[i].in_hand && !players[i].is_all_in())
        .map(|i| i as SeatIndex)
        .collect();

    match pots.last_mut() {
        // Некому претендовать на остаток (одни сфолдившие излишки) – в последний слой.
        Some(last) if eligible.is_empty() => last.add(leftover),
        _ => {
            let mut final_pot = Pot::new(Chips::ZERO);
            final_pot.add(leftover);
            final_pot.eligible_player_nums = eligible;
            pots.push(final_pot);
        }
    }

    pots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(in_hand: bool, stack: u64, total: u64) -> Player {
        Player {
            ready: true,
            in_hand,
            stack: Chips(stack),
            total_bet: Chips(total),
            ..Player::new()
        }
    }

    #[test]
    fn folded_excess_without_eligible_goes_to_last_layer() {
        let players = vec![
            player(true, 0, 50),
            player(true, 0, 50),
            player(false, 100, 80),
        ];
        let pots = carve_pots(&players);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].amt, Chips(180));
        assert_eq!(pots[0].eligible_player_nums, vec![0, 1]);
    }

    #[test]
    fn no_all_in_means_single_final_pot() {
        let players = vec![
            player(true, 10, 40),
            player(false, 10, 20),
            player(true, 10, 40),
        ];
        let pots = carve_pots(&players);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].top_share, Chips::ZERO);
        assert_eq!(pots[0].amt, Chips(100));
        assert_eq!(pots[0].eligible_player_nums, vec![0, 2]);
    }
}
