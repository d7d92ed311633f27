//! Application state — plain data, no async, no Arc.
//!
//! `AppState` holds everything the UI needs to render. Views call its
//! transition methods on user interaction; every screen is a pure function
//! of this state, re-evaluated per frame.

use std::time::Instant;

use crate::cards::{Card, CardSource};
use crate::transactions::{generate_history, TransactionGenerator, TransactionRow};

/// Screens the app can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Wallet,
    CardDetail { index: usize },
    Settings,
    SettingsEntry { section: usize, entry: usize },
}

/// One item in a settings section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    /// The profile row — rendered from config, not a navigation link.
    Profile,
    /// A menu entry linking to a placeholder destination.
    Link {
        label: &'static str,
        icon: &'static str,
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            SettingsItem::Profile => "Perfil",
            SettingsItem::Link { label, .. } => label,
        }
    }
}

/// One section of the settings menu.
#[derive(Debug, Clone, Copy)]
pub struct SettingsSection {
    pub header: Option<&'static str>,
    pub entries: &'static [SettingsItem],
}

/// The fixed settings menu: profile, management, help.
pub const SETTINGS_SECTIONS: &[SettingsSection] = &[
    SettingsSection {
        header: None,
        entries: &[SettingsItem::Profile],
    },
    SettingsSection {
        header: Some("Gestión"),
        entries: &[
            SettingsItem::Link {
                label: "Gestionar tarjetas",
                icon: "creditcard.fill",
            },
            SettingsItem::Link {
                label: "Configuración",
                icon: "gearshape.fill",
            },
        ],
    },
    SettingsSection {
        header: Some("Ayuda"),
        entries: &[SettingsItem::Link {
            label: "Ayuda",
            icon: "questionmark.circle.fill",
        }],
    },
];

/// Look up a settings entry label, empty for an out-of-range address.
pub fn settings_entry_label(section: usize, entry: usize) -> &'static str {
    SETTINGS_SECTIONS
        .get(section)
        .and_then(|s| s.entries.get(entry))
        .map(|item| item.label())
        .unwrap_or("")
}

/// All application state needed for rendering.
#[derive(Debug)]
pub struct AppState {
    /// Navigation stack; the last entry is the visible screen. Never empty.
    nav: Vec<Screen>,
    pub cards: Vec<Card>,
    /// Rows for the currently open detail screen. Redrawn on every entry.
    pub history: Vec<TransactionRow>,
    /// When the open detail screen appeared; drives the pulse ring.
    pub pulse_started: Option<Instant>,
}

impl AppState {
    pub fn new(source: &dyn CardSource) -> Self {
        Self {
            nav: vec![Screen::Wallet],
            cards: source.list().to_vec(),
            history: Vec::new(),
            pulse_started: None,
        }
    }

    /// The visible screen.
    pub fn screen(&self) -> Screen {
        self.nav.last().copied().unwrap_or(Screen::Wallet)
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.len() > 1
    }

    /// Open the detail screen for `cards[index]`, drawing a fresh history
    /// and restarting the pulse clock. Out-of-range indices are ignored.
    pub fn open_card(&mut self, index: usize, generator: &mut dyn TransactionGenerator) {
        if index >= self.cards.len() {
            return;
        }
        self.history = generate_history(generator);
        self.pulse_started = Some(Instant::now());
        self.nav.push(Screen::CardDetail { index });
        log::debug!("Opened card {} ({})", index, self.cards[index].name);
    }

    pub fn open_settings(&mut self) {
        self.nav.push(Screen::Settings);
    }

    pub fn open_settings_entry(&mut self, section: usize, entry: usize) {
        self.nav.push(Screen::SettingsEntry { section, entry });
    }

    /// Pop one screen. The root wallet screen is never popped.
    pub fn back(&mut self) {
        if self.nav.len() > 1 {
            let left = self.nav.pop();
            if matches!(left, Some(Screen::CardDetail { .. })) {
                self.history.clear();
                self.pulse_started = None;
            }
        }
    }

    /// The card shown by the visible detail screen, if any.
    pub fn current_card(&self) -> Option<&Card> {
        match self.screen() {
            Screen::CardDetail { index } => self.cards.get(index),
            _ => None,
        }
    }

    /// Title for the top bar.
    pub fn title(&self) -> &str {
        match self.screen() {
            Screen::Wallet => "Wallet",
            Screen::CardDetail { index } => self
                .cards
                .get(index)
                .map(|c| c.name.as_str())
                .unwrap_or("Wallet"),
            Screen::Settings => "Cuenta",
            Screen::SettingsEntry { section, entry } => settings_entry_label(section, entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SampleCards;
    use crate::transactions::{FixedAmounts, AMOUNT_RANGE, HISTORY_LEN};

    fn state() -> AppState {
        AppState::new(&SampleCards::new())
    }

    #[test]
    fn test_starts_on_wallet_screen() {
        let state = state();
        assert_eq!(state.screen(), Screen::Wallet);
        assert!(!state.can_go_back());
        assert_eq!(state.cards.len(), 3);
        assert!(state.history.is_empty());
        assert!(state.pulse_started.is_none());
    }

    #[test]
    fn test_open_card_pushes_detail_with_history() {
        let mut state = state();
        let mut generator = FixedAmounts::new(vec![50]);
        state.open_card(0, &mut generator);

        assert_eq!(state.screen(), Screen::CardDetail { index: 0 });
        assert_eq!(state.history.len(), HISTORY_LEN);
        for (i, row) in state.history.iter().enumerate() {
            assert_eq!(row.index, i);
            assert!(AMOUNT_RANGE.contains(&row.amount));
        }
        assert!(state.pulse_started.is_some());
    }

    #[test]
    fn test_open_card_matches_source_by_identity() {
        let source = SampleCards::new();
        let mut state = AppState::new(&source);
        let mut generator = FixedAmounts::new(vec![10]);

        for i in 0..source.list().len() {
            state.open_card(i, &mut generator);
            assert_eq!(state.current_card().map(|c| c.id), Some(source.list()[i].id));
            state.back();
        }
    }

    #[test]
    fn test_open_card_out_of_range_is_ignored() {
        let mut state = state();
        let mut generator = FixedAmounts::new(vec![10]);
        state.open_card(99, &mut generator);
        assert_eq!(state.screen(), Screen::Wallet);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_reentry_redraws_history() {
        let mut state = state();
        let mut generator = FixedAmounts::new(vec![5, 6, 7, 8, 9, 90, 91, 92, 93, 94]);

        state.open_card(0, &mut generator);
        let first: Vec<u32> = state.history.iter().map(|r| r.amount).collect();
        state.back();
        state.open_card(0, &mut generator);
        let second: Vec<u32> = state.history.iter().map(|r| r.amount).collect();

        assert_eq!(first, vec![5, 6, 7, 8, 9]);
        assert_eq!(second, vec![90, 91, 92, 93, 94]);
    }

    #[test]
    fn test_back_never_pops_root() {
        let mut state = state();
        state.back();
        state.back();
        assert_eq!(state.screen(), Screen::Wallet);

        state.open_settings();
        assert_eq!(state.screen(), Screen::Settings);
        state.back();
        assert_eq!(state.screen(), Screen::Wallet);
    }

    #[test]
    fn test_back_from_detail_clears_history() {
        let mut state = state();
        let mut generator = FixedAmounts::new(vec![10]);
        state.open_card(1, &mut generator);
        state.back();
        assert!(state.history.is_empty());
        assert!(state.pulse_started.is_none());
    }

    #[test]
    fn test_settings_sections_fixed_shape() {
        assert_eq!(SETTINGS_SECTIONS.len(), 3);
        assert_eq!(SETTINGS_SECTIONS[0].entries.len(), 1);
        assert_eq!(SETTINGS_SECTIONS[1].entries.len(), 2);
        assert_eq!(SETTINGS_SECTIONS[2].entries.len(), 1);
        assert_eq!(SETTINGS_SECTIONS[1].header, Some("Gestión"));
        assert_eq!(SETTINGS_SECTIONS[2].header, Some("Ayuda"));
    }

    #[test]
    fn test_settings_entry_navigation_and_title() {
        let mut state = state();
        state.open_settings();
        assert_eq!(state.title(), "Cuenta");

        state.open_settings_entry(1, 0);
        assert_eq!(
            state.screen(),
            Screen::SettingsEntry {
                section: 1,
                entry: 0
            }
        );
        assert_eq!(state.title(), "Gestionar tarjetas");

        state.back();
        assert_eq!(state.screen(), Screen::Settings);
    }

    #[test]
    fn test_settings_entry_label_out_of_range() {
        assert_eq!(settings_entry_label(9, 9), "");
    }

    #[test]
    fn test_end_to_end_second_card() {
        // Sample cards → open row 1 → header shows "Tarjeta Morada" / 642,00 €.
        let mut state = state();
        let mut generator = FixedAmounts::new(vec![10]);

        assert_eq!(state.cards.len(), 3);
        state.open_card(1, &mut generator);

        let card = state.current_card().expect("detail card");
        assert_eq!(card.name, "Tarjeta Morada");
        assert_eq!(card.balance, "642,00 €");
        assert_eq!(state.title(), "Tarjeta Morada");
    }
}
