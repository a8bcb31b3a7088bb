//! Formatting utilities for terminal output

use crate::core::{Hand, PowerTable};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (u64::from(value.min(max)) * width as u64 / u64::from(max)) as usize
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Hit points as a bar followed by `hp/max`
#[must_use]
pub fn hp_bar(hp: u32, max: u32, width: usize) -> String {
    format!("{} {hp:>3}/{max}", create_progress_bar(hp, max, width))
}

/// Hand letters with their power, e.g. `C3 A1 T1`
#[must_use]
pub fn hand_with_powers(hand: &Hand, table: &PowerTable) -> String {
    hand.letters()
        .iter()
        .map(|&c| format!("{}{}", c.to_ascii_uppercase(), table.power_of(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letter-by-letter power sum, e.g. `C(3) + A(1) + T(1) = 5`
#[must_use]
pub fn power_breakdown(breakdown: &[(char, u32)]) -> String {
    let total: u32 = breakdown.iter().map(|(_, p)| p).sum();
    let terms: Vec<String> = breakdown
        .iter()
        .map(|(c, p)| format!("{}({p})", c.to_ascii_uppercase()))
        .collect();

    format!("{} = {total}", terms.join(" + "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 50, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(50, 50, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(25, 50, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0, 0, 4), "░░░░");
    }

    #[test]
    fn hp_bar_shows_numbers() {
        assert_eq!(hp_bar(48, 50, 5), "████░  48/50");
    }

    #[test]
    fn hand_powers() {
        let hand = Hand::from_letters(['c', 'a', 't', 'd', 'o', 'g', 'q']);
        assert_eq!(
            hand_with_powers(&hand, &PowerTable::STANDARD),
            "C3 A1 T1 D2 O1 G2 Q10"
        );
    }

    #[test]
    fn breakdown_sums() {
        assert_eq!(
            power_breakdown(&[('c', 3), ('a', 1), ('t', 1)]),
            "C(3) + A(1) + T(1) = 5"
        );
    }
}
