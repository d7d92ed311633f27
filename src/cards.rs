//! Card records and the static sample provider.
//!
//! Cards are built once at startup, immutable for the session, and never
//! persisted. The views only ever see them through [`CardSource`].

use uuid::Uuid;

/// Named palette entry for a card face. Carries the two gradient stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Blue,
    Purple,
    Orange,
}

impl CardColor {
    /// Top gradient stop.
    pub fn top(self) -> egui::Color32 {
        match self {
            CardColor::Blue => egui::Color32::from_rgb(96, 160, 255),
            CardColor::Purple => egui::Color32::from_rgb(186, 120, 255),
            CardColor::Orange => egui::Color32::from_rgb(255, 178, 82),
        }
    }

    /// Bottom gradient stop.
    pub fn bottom(self) -> egui::Color32 {
        match self {
            CardColor::Blue => egui::Color32::from_rgb(10, 90, 220),
            CardColor::Purple => egui::Color32::from_rgb(118, 44, 200),
            CardColor::Orange => egui::Color32::from_rgb(232, 110, 10),
        }
    }
}

/// One payment card shown in the wallet.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: Uuid,
    pub color: CardColor,
    pub name: String,
    /// Key into the glyph set, see [`crate::ui::icon_glyph`].
    pub icon: &'static str,
    /// Pre-formatted display string. Nothing does arithmetic on it.
    pub balance: String,
}

impl Card {
    pub fn new(color: CardColor, name: &str, icon: &'static str, balance: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            name: name.to_string(),
            icon,
            balance: balance.to_string(),
        }
    }
}

/// Read-only supplier of the ordered card sequence.
///
/// The demo ships a fixed in-memory list; real storage can be swapped in
/// behind this trait without touching any view code.
pub trait CardSource {
    fn list(&self) -> &[Card];
}

/// The fixed demo card set.
pub struct SampleCards {
    cards: Vec<Card>,
}

impl SampleCards {
    pub fn new() -> Self {
        Self {
            cards: vec![
                Card::new(CardColor::Blue, "Tarjeta Azul", "creditcard.fill", "125,30 €"),
                Card::new(CardColor::Purple, "Tarjeta Morada", "bolt.fill", "642,00 €"),
                Card::new(CardColor::Orange, "Tarjeta Naranja", "sun.max.fill", "89,90 €"),
            ],
        }
    }
}

impl Default for SampleCards {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSource for SampleCards {
    fn list(&self) -> &[Card] {
        &self.cards
    }
}
