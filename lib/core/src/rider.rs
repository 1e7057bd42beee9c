//! Rider records and their attributes
//!
//! A rider carries a fixed set of specialty scores (always present, 0-100
//! scale) and a fixed set of physical measurements (height and weight may
//! be unknown). Unknown measurements are `None`; the zero sentinel used by
//! raw datasets is converted at the boundary with [`measured`].

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Skill dimensions scored for every rider, in fixed enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialty {
    /// Flat stages (`FLT`)
    Flat,
    /// Cobbled classics (`COB`)
    Cobbles,
    /// Hilly terrain (`HLL`)
    Hills,
    /// High mountains (`MTN`)
    Mountain,
    /// Sprinting (`SPR`)
    Sprint,
    /// Individual time trial (`ITT`)
    TimeTrial,
    /// General classification (`GC`)
    GeneralClassification,
    /// One-day races (`OR`)
    OneDayRaces,
}

impl Specialty {
    pub const COUNT: usize = 8;

    /// All specialties in enumeration order
    pub const ALL: [Specialty; Specialty::COUNT] = [
        Specialty::Flat,
        Specialty::Cobbles,
        Specialty::Hills,
        Specialty::Mountain,
        Specialty::Sprint,
        Specialty::TimeTrial,
        Specialty::GeneralClassification,
        Specialty::OneDayRaces,
    ];

    /// Column code used by rider datasets
    pub fn code(self) -> &'static str {
        match self {
            Specialty::Flat => "FLT",
            Specialty::Cobbles => "COB",
            Specialty::Hills => "HLL",
            Specialty::Mountain => "MTN",
            Specialty::Sprint => "SPR",
            Specialty::TimeTrial => "ITT",
            Specialty::GeneralClassification => "GC",
            Specialty::OneDayRaces => "OR",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Specialty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Body measurements compared by physical similarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalAttribute {
    Height,
    Weight,
    Age,
}

impl PhysicalAttribute {
    pub const COUNT: usize = 3;

    pub const ALL: [PhysicalAttribute; PhysicalAttribute::COUNT] = [
        PhysicalAttribute::Height,
        PhysicalAttribute::Weight,
        PhysicalAttribute::Age,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PhysicalAttribute::Height => "Length",
            PhysicalAttribute::Weight => "Weight",
            PhysicalAttribute::Age => "Age",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Convert a raw dataset measurement into an optional one.
///
/// Raw datasets record "not measured" as zero, so zero (and NaN) map to
/// `None`. Every other value is kept as-is.
#[inline]
pub fn measured(raw: f64) -> Option<f64> {
    if raw == 0.0 || raw.is_nan() {
        None
    } else {
        Some(raw)
    }
}

/// Raw specialty scores indexed by [`Specialty`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpecialtyScores([f64; Specialty::COUNT]);

impl SpecialtyScores {
    #[inline]
    #[must_use]
    pub fn new(values: [f64; Specialty::COUNT]) -> Self {
        Self(values)
    }

    #[inline]
    pub fn get(&self, specialty: Specialty) -> f64 {
        self.0[specialty.index()]
    }

    #[inline]
    pub fn set(&mut self, specialty: Specialty, value: f64) {
        self.0[specialty.index()] = value;
    }

    #[inline]
    #[must_use]
    pub fn with(mut self, specialty: Specialty, value: f64) -> Self {
        self.set(specialty, value);
        self
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate `(specialty, value)` pairs in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Specialty, f64)> + '_ {
        Specialty::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

impl Serialize for SpecialtyScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Specialty::COUNT))?;
        for (specialty, value) in self.iter() {
            map.serialize_entry(specialty.code(), &value)?;
        }
        map.end()
    }
}

/// Physical measurements indexed by [`PhysicalAttribute`]; `None` is unknown
pub type PhysicalMeasurements = [Option<f64>; PhysicalAttribute::COUNT];

/// One row of the rider dataset, in raw (unnormalized) units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiderRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub age: f64,
    /// Overall rating, display only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    pub specialties: SpecialtyScores,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl RiderRecord {
    pub fn new(name: impl Into<String>, age: f64, specialties: SpecialtyScores) -> Self {
        Self {
            name: name.into(),
            team: None,
            age,
            average: None,
            specialties,
            height: None,
            weight: None,
        }
    }

    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    #[must_use]
    pub fn with_average(mut self, average: f64) -> Self {
        self.average = Some(average);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: Option<f64>) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: Option<f64>) -> Self {
        self.weight = weight;
        self
    }

    /// Physical measurements in [`PhysicalAttribute`] order. Age is always known.
    pub fn physical(&self) -> PhysicalMeasurements {
        [self.height, self.weight, Some(self.age)]
    }
}
