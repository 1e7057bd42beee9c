//! Feature normalization
//!
//! Fits normalization parameters once over the full roster and applies
//! them to every rider, producing the immutable normalized table that all
//! queries read from.
//!
//! - Specialties are min-max scaled into `[0, 1]`. A constant column maps
//!   every rider to `0.0`.
//! - Physical measurements are standardized with the mean and sample
//!   standard deviation of the known values. Unknown values stay `None`.
//!   When the deviation is zero or undefined (fewer than two known values)
//!   every known value standardizes to the neutral `0.0`.

use ridersim_core::{
    FeatureVector, PhysicalAttribute, PhysicalMeasurements, RiderRecord, Roster, Specialty,
};
use tracing::info;

/// Observed range of one specialty column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    fn fit(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, v| Self {
                min: acc.min.min(v),
                max: acc.max.max(v),
            },
        )
    }

    #[inline]
    pub fn scale(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range > 0.0 {
            (value - self.min) / range
        } else {
            0.0
        }
    }
}

/// Mean and sample standard deviation of one physical column's known values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standardization {
    pub mean: f64,
    /// `None` when the deviation is zero or undefined
    pub std_dev: Option<f64>,
    /// Number of known values the parameters were fitted on
    pub known: usize,
}

impl Standardization {
    fn fit(values: impl Iterator<Item = Option<f64>>) -> Self {
        let known: Vec<f64> = values.flatten().collect();
        let n = known.len();
        if n == 0 {
            return Self {
                mean: 0.0,
                std_dev: None,
                known: 0,
            };
        }

        let mean = known.iter().sum::<f64>() / n as f64;
        let std_dev = if n > 1 {
            let variance =
                known.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1) as f64;
            Some(variance.sqrt()).filter(|s| *s > 0.0)
        } else {
            None
        };

        Self {
            mean,
            std_dev,
            known: n,
        }
    }

    #[inline]
    pub fn standardize(&self, value: Option<f64>) -> Option<f64> {
        value.map(|v| match self.std_dev {
            Some(std_dev) => (v - self.mean) / std_dev,
            None => 0.0,
        })
    }
}

/// Parameters fitted once over the full roster
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationParams {
    pub specialties: [MinMax; Specialty::COUNT],
    pub physical: [Standardization; PhysicalAttribute::COUNT],
}

impl NormalizationParams {
    pub fn fit(roster: &Roster) -> Self {
        let specialties = Specialty::ALL
            .map(|s| MinMax::fit(roster.iter().map(|r| r.specialties.get(s))));
        let physical = PhysicalAttribute::ALL
            .map(|a| Standardization::fit(roster.iter().map(|r| r.physical()[a.index()])));
        Self {
            specialties,
            physical,
        }
    }

    pub fn apply(&self, rider: &RiderRecord) -> NormalizedRider {
        let specialties = FeatureVector::new(
            Specialty::ALL
                .iter()
                .map(|&s| self.specialties[s.index()].scale(rider.specialties.get(s)))
                .collect(),
        );
        let raw = rider.physical();
        let physical = PhysicalAttribute::ALL
            .map(|a| self.physical[a.index()].standardize(raw[a.index()]));
        NormalizedRider {
            specialties,
            physical,
        }
    }
}

/// A rider's normalized features
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRider {
    /// Min-max scaled specialties in [`Specialty`] order
    pub specialties: FeatureVector,
    /// Standardized physical measurements; `None` stays unknown
    pub physical: PhysicalMeasurements,
}

/// Normalized rows aligned with roster positions
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    params: NormalizationParams,
    rows: Vec<NormalizedRider>,
}

impl NormalizedTable {
    /// Fit parameters over the roster and normalize every rider
    pub fn build(roster: &Roster) -> Self {
        let params = NormalizationParams::fit(roster);
        let rows: Vec<NormalizedRider> = roster.iter().map(|r| params.apply(r)).collect();

        for attribute in PhysicalAttribute::ALL {
            let fitted = &params.physical[attribute.index()];
            if fitted.std_dev.is_none() && fitted.known > 0 {
                info!(
                    "Physical attribute {} has no spread over {} known values; standardizing to 0",
                    attribute.code(),
                    fitted.known
                );
            }
        }
        info!("Normalized {} riders", rows.len());

        Self { params, rows }
    }

    pub fn params(&self) -> &NormalizationParams {
        &self.params
    }

    pub fn rows(&self) -> &[NormalizedRider] {
        &self.rows
    }

    pub fn row(&self, position: usize) -> Option<&NormalizedRider> {
        self.rows.get(position)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
