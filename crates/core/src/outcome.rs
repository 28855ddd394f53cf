//! Outcome module - payout evaluation for one spin
//!
//! A pure function of the three displayed symbols and the bet:
//!
//! - three of a kind pays `3 x bet` (jackpot)
//! - exactly two of a kind pays `2 x bet` (pair)
//! - anything else pays nothing
//!
//! Only the multiset of symbols matters; reel order is ignored.

use crate::types::{PayoutTier, SymbolType, REEL_COUNT};

/// Result of evaluating one spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub payout: u32,
    pub matched: Option<SymbolType>,
    pub tier: Option<PayoutTier>,
    /// How many reels show `matched` (0 when there is no match).
    pub count: u8,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        self.payout > 0
    }

    /// Two-line win message, e.g. `"JACKPOT!\n3 Silver Star!"`.
    pub fn message(&self) -> Option<String> {
        let tier = self.tier?;
        let symbol = self.matched?;
        Some(format!(
            "{}\n{} {}!",
            tier.headline(),
            self.count,
            symbol.display_name()
        ))
    }
}

/// Evaluate the displayed symbols against `bet`.
pub fn evaluate(symbols: &[SymbolType; REEL_COUNT], bet: u32) -> Outcome {
    let mut counts = [0u8; SymbolType::ALL.len()];
    for symbol in symbols {
        counts[symbol.index()] += 1;
    }

    // At most one symbol can reach a count of two with three reels.
    for symbol in SymbolType::ALL {
        let count = counts[symbol.index()];
        let Some(tier) = [PayoutTier::Jackpot, PayoutTier::Pair]
            .into_iter()
            .find(|tier| tier.match_count() == count)
        else {
            continue;
        };
        return Outcome {
            payout: bet.saturating_mul(tier.multiplier()),
            matched: Some(symbol),
            tier: Some(tier),
            count,
        };
    }

    Outcome::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use SymbolType::*;

    #[test]
    fn test_three_of_a_kind() {
        let o = evaluate(&[Sym4, Sym4, Sym4], 1);
        assert_eq!(o.payout, 3);
        assert_eq!(o.matched, Some(Sym4));
        assert_eq!(o.tier, Some(PayoutTier::Jackpot));
        assert_eq!(o.count, 3);
        assert!(o.is_win());
    }

    #[test]
    fn test_pair_any_position() {
        for symbols in [[Sym1, Sym1, Sym3], [Sym1, Sym3, Sym1], [Sym3, Sym1, Sym1]] {
            let o = evaluate(&symbols, 1);
            assert_eq!(o.payout, 2, "{:?}", symbols);
            assert_eq!(o.matched, Some(Sym1));
            assert_eq!(o.tier, Some(PayoutTier::Pair));
            assert_eq!(o.count, 2);
        }
    }

    #[test]
    fn test_no_match() {
        let o = evaluate(&[Sym1, Sym2, Sym3], 1);
        assert_eq!(o, Outcome::default());
        assert!(!o.is_win());
        assert_eq!(o.message(), None);
    }

    #[test]
    fn test_payout_scales_with_bet() {
        assert_eq!(evaluate(&[Sym6, Sym6, Sym6], 5).payout, 15);
        assert_eq!(evaluate(&[Sym6, Sym2, Sym6], 5).payout, 10);
        assert_eq!(evaluate(&[Sym6, Sym6, Sym6], u32::MAX).payout, u32::MAX);
    }

    #[test]
    fn test_order_independent() {
        let a = evaluate(&[Sym5, Sym2, Sym5], 1);
        let b = evaluate(&[Sym2, Sym5, Sym5], 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            evaluate(&[Sym1, Sym1, Sym1], 1).message().as_deref(),
            Some("JACKPOT!\n3 Silver Star!")
        );
        assert_eq!(
            evaluate(&[Sym2, Sym5, Sym5], 1).message().as_deref(),
            Some("Nice Win!\n2 Red Diamond!")
        );
    }
}
