//! Dominant profile classification
//!
//! A rider's profile is the label whose formula scores highest on the raw
//! specialty values. Formulas are evaluated in the fixed order of
//! [`PROFILE_FORMULAS`]; on a tie the earlier label wins.

use ridersim_core::{Specialty, SpecialtyScores};
use serde::Serialize;
use std::fmt;

/// The dominant skill category of a rider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Profile {
    Sprinter,
    Climber,
    Classics,
    TimeTrialist,
    GeneralClassification,
    AllTerrain,
}

impl Profile {
    pub fn label(self) -> &'static str {
        match self {
            Profile::Sprinter => "Sprinter",
            Profile::Climber => "Climber",
            Profile::Classics => "Classics",
            Profile::TimeTrialist => "TimeTrialist",
            Profile::GeneralClassification => "GeneralClassification",
            Profile::AllTerrain => "AllTerrain",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type ProfileFormula = fn(&SpecialtyScores) -> f64;

fn mean(scores: &SpecialtyScores, specialties: &[Specialty]) -> f64 {
    specialties.iter().map(|&s| scores.get(s)).sum::<f64>() / specialties.len() as f64
}

/// Profile formulas in tie-break order
pub const PROFILE_FORMULAS: [(Profile, ProfileFormula); 6] = [
    (Profile::Sprinter, |s| s.get(Specialty::Sprint)),
    (Profile::Climber, |s| {
        mean(s, &[Specialty::Mountain, Specialty::Hills])
    }),
    (Profile::Classics, |s| {
        mean(
            s,
            &[
                Specialty::Cobbles,
                Specialty::Flat,
                Specialty::OneDayRaces,
                Specialty::Hills,
            ],
        )
    }),
    (Profile::TimeTrialist, |s| s.get(Specialty::TimeTrial)),
    (Profile::GeneralClassification, |s| {
        s.get(Specialty::GeneralClassification)
    }),
    (Profile::AllTerrain, |s| s.get(Specialty::OneDayRaces)),
];

/// Classify raw specialty scores, returning the dominant profile and its score
pub fn classify(scores: &SpecialtyScores) -> (Profile, f64) {
    let (first, rest) = PROFILE_FORMULAS.split_at(1);
    let (mut best, formula) = first[0];
    let mut best_score = formula(scores);

    for &(profile, formula) in rest {
        let score = formula(scores);
        // Strict comparison keeps the earliest label on ties
        if score > best_score {
            best = profile;
            best_score = score;
        }
    }

    (best, best_score)
}
