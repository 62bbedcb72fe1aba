//! Coins, pill inventory, and timed boosts.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Consumable kinds sold by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PillKind {
    Stamina,
    Speed,
    NoDrain,
}

impl PillKind {
    /// Wire name used by the shop buttons and the key bindings.
    pub fn as_str(&self) -> &'static str {
        match self {
            PillKind::Stamina => "stamina",
            PillKind::Speed => "speed",
            PillKind::NoDrain => "nostamina",
        }
    }

    pub fn from_str(s: &str) -> Option<PillKind> {
        match s {
            "stamina" => Some(PillKind::Stamina),
            "speed" => Some(PillKind::Speed),
            "nostamina" => Some(PillKind::NoDrain),
            _ => None,
        }
    }

    pub fn cost(&self, tuning: &Tuning) -> u32 {
        match self {
            PillKind::Stamina => tuning.stamina_pill_cost,
            PillKind::Speed => tuning.speed_pill_cost,
            PillKind::NoDrain => tuning.no_drain_pill_cost,
        }
    }
}

/// Owned pill counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub stamina: u32,
    pub speed: u32,
    pub nostamina: u32,
}

impl Inventory {
    pub fn count(&self, kind: PillKind) -> u32 {
        match kind {
            PillKind::Stamina => self.stamina,
            PillKind::Speed => self.speed,
            PillKind::NoDrain => self.nostamina,
        }
    }

    fn count_mut(&mut self, kind: PillKind) -> &mut u32 {
        match kind {
            PillKind::Stamina => &mut self.stamina,
            PillKind::Speed => &mut self.speed,
            PillKind::NoDrain => &mut self.nostamina,
        }
    }

    pub fn add(&mut self, kind: PillKind) {
        *self.count_mut(kind) += 1;
    }

    /// Take one pill of `kind` if any is left.
    pub fn take(&mut self, kind: PillKind) -> bool {
        let n = self.count_mut(kind);
        if *n == 0 {
            return false;
        }
        *n -= 1;
        true
    }
}

/// Shop feedback line, shown verbatim by the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopMessage {
    NotEnoughCoins,
    Added(PillKind),
}

impl ShopMessage {
    pub fn text(&self) -> &'static str {
        match self {
            ShopMessage::NotEnoughCoins => "Not enough coins.",
            ShopMessage::Added(PillKind::Stamina) => "Stamina pill added.",
            ShopMessage::Added(PillKind::Speed) => "Speed pill added.",
            ShopMessage::Added(PillKind::NoDrain) => "No-stamina pill added.",
        }
    }
}

/// Run-scoped wallet and boost bookkeeping. Boost deadlines are session-clock
/// timestamps; a deadline at or before now means the boost is off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Economy {
    pub coins: u32,
    pub inventory: Inventory,
    /// Set when a level is cleared, consumed when the shop opens.
    pub reward_pending: bool,
    pub speed_boost_until_ms: f64,
    pub no_drain_until_ms: f64,
    pub last_message: Option<ShopMessage>,
}

impl Economy {
    /// Buy one pill. Sets the feedback line either way.
    pub fn try_purchase(&mut self, kind: PillKind, tuning: &Tuning) -> bool {
        let cost = kind.cost(tuning);
        if self.coins < cost {
            self.last_message = Some(ShopMessage::NotEnoughCoins);
            return false;
        }
        self.coins -= cost;
        self.inventory.add(kind);
        self.last_message = Some(ShopMessage::Added(kind));
        true
    }

    pub fn speed_boost_active(&self, now_ms: f64) -> bool {
        now_ms < self.speed_boost_until_ms
    }

    pub fn no_drain_active(&self, now_ms: f64) -> bool {
        now_ms < self.no_drain_until_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_kind_names_round_trip() {
        for kind in [PillKind::Stamina, PillKind::Speed, PillKind::NoDrain] {
            assert_eq!(PillKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PillKind::from_str("espresso"), None);
    }

    #[test]
    fn test_purchase_with_exact_coins() {
        let tuning = Tuning::default();
        let mut eco = Economy {
            coins: 50,
            ..Economy::default()
        };
        assert!(eco.try_purchase(PillKind::Stamina, &tuning));
        assert_eq!(eco.coins, 0);
        assert_eq!(eco.inventory.stamina, 1);
        assert_eq!(eco.last_message, Some(ShopMessage::Added(PillKind::Stamina)));
    }

    #[test]
    fn test_purchase_insufficient_coins_changes_nothing() {
        let tuning = Tuning::default();
        let mut eco = Economy {
            coins: 100,
            ..Economy::default()
        };
        assert!(!eco.try_purchase(PillKind::Speed, &tuning));
        assert_eq!(eco.coins, 100);
        assert_eq!(eco.inventory.speed, 0);
        assert_eq!(eco.last_message, Some(ShopMessage::NotEnoughCoins));
    }

    #[test]
    fn test_message_texts() {
        assert_eq!(ShopMessage::NotEnoughCoins.text(), "Not enough coins.");
        assert_eq!(
            ShopMessage::Added(PillKind::Stamina).text(),
            "Stamina pill added."
        );
        assert_eq!(ShopMessage::Added(PillKind::Speed).text(), "Speed pill added.");
        assert_eq!(
            ShopMessage::Added(PillKind::NoDrain).text(),
            "No-stamina pill added."
        );
    }

    #[test]
    fn test_inventory_take_until_empty() {
        let mut inv = Inventory::default();
        inv.add(PillKind::Speed);
        assert!(inv.take(PillKind::Speed));
        assert!(!inv.take(PillKind::Speed));
        assert_eq!(inv.count(PillKind::Speed), 0);
    }

    #[test]
    fn test_boost_windows() {
        let eco = Economy {
            speed_boost_until_ms: 5000.0,
            no_drain_until_ms: 0.0,
            ..Economy::default()
        };
        assert!(eco.speed_boost_active(4999.0));
        assert!(!eco.speed_boost_active(5000.0));
        assert!(!eco.no_drain_active(0.0));
    }
}
