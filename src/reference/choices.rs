//! Future-choice catalog
//!
//! Reflective choices a user can attach to a tight month. Each choice maps to
//! a fixed outcome: a timeline, an expected state, and a reflection text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Expected state after following a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeState {
    Stable,
    Safer,
    Unchanged,
}

impl OutcomeState {
    /// Indonesian display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stable => "Stabil",
            Self::Safer => "Lebih Aman",
            Self::Unchanged => "Tidak Berubah",
        }
    }
}

impl fmt::Display for OutcomeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The fixed outcome attached to a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOutcome {
    pub timeline: &'static str,
    pub state: OutcomeState,
    pub reflection: &'static str,
}

/// A reflective future choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FutureChoice {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub outcome: ChoiceOutcome,
}

/// The fixed choice catalog
pub const FUTURE_CHOICES: [FutureChoice; 4] = [
    FutureChoice {
        id: "saving-small",
        title: "Menabung kecil (Rp50.000 / bulan)",
        description: "Menyisihkan nominal kecil secara konsisten untuk masa depan",
        outcome: ChoiceOutcome {
            timeline: "3-12 bulan",
            state: OutcomeState::Safer,
            reflection: "Menabung kecil terasa berat di awal, tapi memberi rasa aman. \
                         Dalam 6 bulan, kamu bisa punya Rp300.000 untuk situasi darurat.",
        },
    },
    FutureChoice {
        id: "emergency-fund",
        title: "Dana darurat",
        description: "Menyiapkan cadangan untuk kebutuhan mendesak yang tidak terduga",
        outcome: ChoiceOutcome {
            timeline: "6-12 bulan",
            state: OutcomeState::Safer,
            reflection: "Dana darurat memberikan ketenangan pikiran. Tidak semua orang mampu \
                         memulainya, tapi langkah kecil sudah berarti.",
        },
    },
    FutureChoice {
        id: "learn-skill",
        title: "Belajar / kursus murah",
        description: "Investasi pada diri sendiri melalui pembelajaran keterampilan baru",
        outcome: ChoiceOutcome {
            timeline: "3-6 bulan",
            state: OutcomeState::Stable,
            reflection: "Belajar hal baru bisa membuka peluang di masa depan. Prosesnya butuh \
                         waktu, tapi bisa jadi aset jangka panjang.",
        },
    },
    FutureChoice {
        id: "no-saving",
        title: "Tidak menyisihkan uang bulan ini",
        description: "Fokus memenuhi kebutuhan dasar dulu tanpa beban tambahan",
        outcome: ChoiceOutcome {
            timeline: "1 bulan",
            state: OutcomeState::Unchanged,
            reflection: "Tidak semua orang punya ruang untuk menyiapkan masa depan. Pilihan ini \
                         wajar dalam kondisi ekonomi tertentu. Yang penting kebutuhan dasar \
                         terpenuhi.",
        },
    },
];

/// Look up a choice by its stable id
pub fn find_choice(id: &str) -> Option<&'static FutureChoice> {
    FUTURE_CHOICES.iter().find(|c| c.id == id)
}
