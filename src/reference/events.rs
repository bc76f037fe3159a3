//! Random life-event catalog
//!
//! A fixed set of named events with a monetary impact and polarity. Selection
//! is uniform over the catalog; the random source is injected so tests can
//! pass a seeded generator.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Whether an event adds income or adds expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Expense,
    Income,
}

/// A life event with a monetary impact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomEvent {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Signed impact: negative for expenses, positive for income
    pub impact: Money,
    pub kind: EventKind,
    pub emoji: &'static str,
}

/// The fixed event catalog
pub const RANDOM_EVENTS: [RandomEvent; 8] = [
    RandomEvent {
        id: "health-emergency",
        title: "Sakit Mendadak",
        description: "Kamu harus ke klinik karena demam tinggi. Biaya obat dan konsultasi.",
        impact: Money::from_rupiah(-250_000),
        kind: EventKind::Expense,
        emoji: "\u{1F3E5}",
    },
    RandomEvent {
        id: "transport-breakdown",
        title: "Motor Mogok",
        description: "Motor rusak dan harus ke bengkel. Ganti spare part lumayan mahal.",
        impact: Money::from_rupiah(-400_000),
        kind: EventKind::Expense,
        emoji: "\u{1F6F5}",
    },
    RandomEvent {
        id: "price-increase",
        title: "Harga Naik",
        description: "Harga sembako dan bensin naik. Pengeluaran bulanan meningkat.",
        impact: Money::from_rupiah(-200_000),
        kind: EventKind::Expense,
        emoji: "\u{1F4C8}",
    },
    RandomEvent {
        id: "family-emergency",
        title: "Darurat Keluarga",
        description: "Keluarga butuh bantuan mendadak. Kamu harus transfer uang.",
        impact: Money::from_rupiah(-500_000),
        kind: EventKind::Expense,
        emoji: "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}",
    },
    RandomEvent {
        id: "phone-broken",
        title: "HP Rusak",
        description: "Layar HP pecah. Harus ganti atau service segera.",
        impact: Money::from_rupiah(-300_000),
        kind: EventKind::Expense,
        emoji: "\u{1F4F1}",
    },
    RandomEvent {
        id: "bonus-job",
        title: "Dapat Kerjaan Sampingan",
        description: "Freelance project berhasil! Dapat tambahan pemasukan.",
        impact: Money::from_rupiah(500_000),
        kind: EventKind::Income,
        emoji: "\u{1F4BC}",
    },
    RandomEvent {
        id: "unexpected-gift",
        title: "Rezeki Nomplok",
        description: "Dapat hadiah atau bonus tak terduga dari keluarga.",
        impact: Money::from_rupiah(300_000),
        kind: EventKind::Income,
        emoji: "\u{1F381}",
    },
    RandomEvent {
        id: "friend-birthday",
        title: "Ulang Tahun Teman",
        description: "Teman dekat ultah, harus kasih kado dan ikut nongkrong.",
        impact: Money::from_rupiah(-150_000),
        kind: EventKind::Expense,
        emoji: "\u{1F382}",
    },
];

/// Pick one event uniformly at random from the catalog
pub fn pick_random_event<R: Rng + ?Sized>(rng: &mut R) -> &'static RandomEvent {
    let idx = rng.gen_range(0..RANDOM_EVENTS.len());
    &RANDOM_EVENTS[idx]
}

/// Pick one event using the thread-local generator
pub fn random_event() -> &'static RandomEvent {
    pick_random_event(&mut rand::thread_rng())
}

/// Look up an event by its stable id
pub fn find_event(id: &str) -> Option<&'static RandomEvent> {
    RANDOM_EVENTS.iter().find(|e| e.id == id)
}
