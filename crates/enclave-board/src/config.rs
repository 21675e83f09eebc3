//! Board configuration, parameter resolution, and error types.
//!
//! [`BoardConfig`] is the builder-input for constructing a board.
//! Resolution runs once, at construction, and turns the four population
//! forms and scalar-or-per-species parameter specs into dense tables
//! indexed by species id. Everything here is fatal on failure: a
//! misconfigured board is never half-built.

use std::error::Error;
use std::fmt;

/// Proximity bias applied when none is configured.
pub const DEFAULT_PROXIMITY_BIAS: f64 = 0.75;

// ── PopulationSpec ─────────────────────────────────────────────────

/// How many agents of each species to place at construction.
///
/// Exactly one form is supplied; the enum makes supplying two
/// conflicting forms unrepresentable. Forms that carry one entry per
/// species also pin the species count (see
/// [`BoardConfig::species_count`]).
#[derive(Clone, Debug, PartialEq)]
pub enum PopulationSpec {
    /// Explicit per-species head counts.
    Counts(Vec<usize>),
    /// A total head count, split evenly across species (integer
    /// division; the remainder is left vacant).
    Total(usize),
    /// Per-species proportions of the board area, each in (0, 1].
    Proportions(Vec<f64>),
    /// A total proportion of the board area in (0, 1], split evenly
    /// across species.
    TotalProportion(f64),
}

// ── ParamSpec ──────────────────────────────────────────────────────

/// A per-species parameter: one value for everyone, or one per species.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamSpec {
    /// The same value for every species.
    Uniform(f64),
    /// One value per species, indexed by species id.
    PerSpecies(Vec<f64>),
}

impl ParamSpec {
    /// Broadcast to a dense per-species table of length `count`.
    fn broadcast(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Uniform(v) => vec![*v; count],
            Self::PerSpecies(v) => v.clone(),
        }
    }

    /// The species count this spec pins, if any.
    fn implied_species(&self) -> Option<usize> {
        match self {
            Self::Uniform(_) => None,
            Self::PerSpecies(v) => Some(v.len()),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while resolving a [`BoardConfig`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A required parameter cannot be determined from what was supplied.
    Underdetermined {
        /// What could not be determined.
        subject: &'static str,
    },
    /// Two supplied parameters disagree about the same fact.
    Overdetermined {
        /// What they disagree about.
        subject: &'static str,
    },
    /// The species count resolved to zero.
    ZeroSpecies,
    /// The requested total population does not fit on the board.
    PopulationExceedsArea {
        /// Sum of the per-species populations.
        requested: usize,
        /// Number of cells on the board.
        area: usize,
    },
    /// A species resolved to zero agents.
    ZeroPopulation {
        /// The species id with no agents.
        species: usize,
    },
    /// A satisfaction threshold lies outside [0, 1].
    ThresholdOutOfRange {
        /// The offending species id.
        species: usize,
        /// The configured value.
        value: f64,
    },
    /// A proximity bias lies outside (0, 1].
    BiasOutOfRange {
        /// The offending species id.
        species: usize,
        /// The configured value.
        value: f64,
    },
    /// A fill proportion lies outside (0, 1].
    ProportionOutOfRange {
        /// The offending species id (0 for a total proportion).
        species: usize,
        /// The configured value.
        value: f64,
    },
    /// The search-radius cap must be at least 1.
    ZeroSearchRadius,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underdetermined { subject } => write!(f, "cannot determine {subject}"),
            Self::Overdetermined { subject } => {
                write!(f, "conflicting information provided for {subject}")
            }
            Self::ZeroSpecies => write!(f, "species count must be at least 1"),
            Self::PopulationExceedsArea { requested, area } => {
                write!(f, "{requested} agents do not fit on a board of {area} cells")
            }
            Self::ZeroPopulation { species } => {
                write!(f, "species {species} resolved to zero agents")
            }
            Self::ThresholdOutOfRange { species, value } => {
                write!(f, "threshold for species {species} must be in [0, 1], got {value}")
            }
            Self::BiasOutOfRange { species, value } => {
                write!(f, "proximity bias for species {species} must be in (0, 1], got {value}")
            }
            Self::ProportionOutOfRange { species, value } => {
                write!(f, "fill proportion for species {species} must be in (0, 1], got {value}")
            }
            Self::ZeroSearchRadius => write!(f, "max search radius must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── BoardConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a board.
///
/// The species count is taken from [`species_count`](Self::species_count)
/// when set, otherwise inferred from any per-species vector
/// (populations, thresholds, biases). Every per-species vector present
/// must agree on the count.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    /// How many agents of each species to place. Required.
    pub population: Option<PopulationSpec>,
    /// Minimum conspecificity per species, each in [0, 1]. Required.
    pub thresholds: Option<ParamSpec>,
    /// Per-step probability of stopping search expansion, each in
    /// (0, 1]. Default: [`DEFAULT_PROXIMITY_BIAS`] for every species.
    pub proximity_bias: Option<ParamSpec>,
    /// Explicit species count, when no per-species vector implies one.
    pub species_count: Option<usize>,
    /// Record a move log. When false the board has no log at all.
    pub record_moves: bool,
    /// Seed for the board's ChaCha8 random stream.
    pub seed: u64,
    /// Hard cap on the expanding relocation search radius.
    ///
    /// The expansion stops by coin flip with per-trial probability
    /// equal to the agent's proximity bias, which is unbounded in the
    /// worst case; the cap bounds latency for biases near zero. `None`
    /// derives `max(width, height)`; past that, no shell intersects
    /// the board anyway.
    pub max_search_radius: Option<u32>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            population: None,
            thresholds: None,
            proximity_bias: None,
            species_count: None,
            record_moves: false,
            seed: 0,
            max_search_radius: None,
        }
    }
}

/// Dense per-species tables produced by [`BoardConfig::resolve`].
#[derive(Clone, Debug)]
pub(crate) struct Resolved {
    pub(crate) populations: Vec<usize>,
    pub(crate) thresholds: Vec<f64>,
    pub(crate) biases: Vec<f64>,
}

impl BoardConfig {
    /// Resolve and validate against a board of `area` cells.
    pub(crate) fn resolve(&self, area: usize) -> Result<Resolved, ConfigError> {
        // 1. Species count: explicit, or pinned by a per-species
        //    vector; every source present must agree.
        let mut species: Option<usize> = self.species_count;
        let implied = [
            match &self.population {
                Some(PopulationSpec::Counts(v)) => Some(v.len()),
                Some(PopulationSpec::Proportions(v)) => Some(v.len()),
                _ => None,
            },
            self.thresholds.as_ref().and_then(ParamSpec::implied_species),
            self.proximity_bias.as_ref().and_then(ParamSpec::implied_species),
        ];
        for candidate in implied.into_iter().flatten() {
            match species {
                None => species = Some(candidate),
                Some(k) if k != candidate => {
                    return Err(ConfigError::Overdetermined {
                        subject: "number of species",
                    })
                }
                Some(_) => {}
            }
        }
        let species = species.ok_or(ConfigError::Underdetermined {
            subject: "number of species",
        })?;
        if species == 0 {
            return Err(ConfigError::ZeroSpecies);
        }

        // 2. Populations from whichever form was supplied.
        let spec = self.population.as_ref().ok_or(ConfigError::Underdetermined {
            subject: "population",
        })?;
        let populations: Vec<usize> = match spec {
            PopulationSpec::Counts(v) => v.clone(),
            PopulationSpec::Total(n) => vec![n / species; species],
            PopulationSpec::Proportions(v) => {
                let mut counts = Vec::with_capacity(v.len());
                for (i, &p) in v.iter().enumerate() {
                    if !(p > 0.0 && p <= 1.0) {
                        return Err(ConfigError::ProportionOutOfRange {
                            species: i,
                            value: p,
                        });
                    }
                    counts.push((p * area as f64) as usize);
                }
                counts
            }
            PopulationSpec::TotalProportion(p) => {
                if !(*p > 0.0 && *p <= 1.0) {
                    return Err(ConfigError::ProportionOutOfRange {
                        species: 0,
                        value: *p,
                    });
                }
                vec![(p * area as f64) as usize / species; species]
            }
        };
        for (i, &count) in populations.iter().enumerate() {
            if count == 0 {
                return Err(ConfigError::ZeroPopulation { species: i });
            }
        }
        let requested: usize = populations.iter().sum();
        if requested > area {
            return Err(ConfigError::PopulationExceedsArea { requested, area });
        }

        // 3. Thresholds: required, each in [0, 1].
        let thresholds = self
            .thresholds
            .as_ref()
            .ok_or(ConfigError::Underdetermined {
                subject: "thresholds",
            })?
            .broadcast(species);
        for (i, &t) in thresholds.iter().enumerate() {
            if !(0.0..=1.0).contains(&t) {
                return Err(ConfigError::ThresholdOutOfRange {
                    species: i,
                    value: t,
                });
            }
        }

        // 4. Proximity biases: optional, each in (0, 1].
        let biases = match &self.proximity_bias {
            Some(spec) => spec.broadcast(species),
            None => vec![DEFAULT_PROXIMITY_BIAS; species],
        };
        for (i, &b) in biases.iter().enumerate() {
            if !(b > 0.0 && b <= 1.0) {
                return Err(ConfigError::BiasOutOfRange {
                    species: i,
                    value: b,
                });
            }
        }

        // 5. The search cap, when explicit, must be usable.
        if self.max_search_radius == Some(0) {
            return Err(ConfigError::ZeroSearchRadius);
        }

        Ok(Resolved {
            populations,
            thresholds,
            biases,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BoardConfig {
        BoardConfig {
            population: Some(PopulationSpec::Counts(vec![3, 3])),
            thresholds: Some(ParamSpec::Uniform(0.5)),
            ..BoardConfig::default()
        }
    }

    // ── Species count inference ─────────────────────────────────

    #[test]
    fn species_count_inferred_from_counts() {
        let resolved = base().resolve(25).unwrap();
        assert_eq!(resolved.populations, vec![3, 3]);
        assert_eq!(resolved.thresholds, vec![0.5, 0.5]);
        assert_eq!(resolved.biases, vec![DEFAULT_PROXIMITY_BIAS; 2]);
    }

    #[test]
    fn species_count_inferred_from_thresholds() {
        let cfg = BoardConfig {
            population: Some(PopulationSpec::Total(9)),
            thresholds: Some(ParamSpec::PerSpecies(vec![0.1, 0.2, 0.3])),
            ..BoardConfig::default()
        };
        let resolved = cfg.resolve(25).unwrap();
        assert_eq!(resolved.populations, vec![3, 3, 3]);
    }

    #[test]
    fn disagreeing_vectors_are_overdetermined() {
        let cfg = BoardConfig {
            population: Some(PopulationSpec::Counts(vec![3, 3])),
            thresholds: Some(ParamSpec::PerSpecies(vec![0.1, 0.2, 0.3])),
            ..BoardConfig::default()
        };
        match cfg.resolve(25) {
            Err(ConfigError::Overdetermined {
                subject: "number of species",
            }) => {}
            other => panic!("expected Overdetermined, got {other:?}"),
        }
    }

    #[test]
    fn explicit_species_count_must_agree() {
        let cfg = BoardConfig {
            species_count: Some(3),
            ..base()
        };
        match cfg.resolve(25) {
            Err(ConfigError::Overdetermined { .. }) => {}
            other => panic!("expected Overdetermined, got {other:?}"),
        }
    }

    #[test]
    fn no_species_source_is_underdetermined() {
        let cfg = BoardConfig {
            population: Some(PopulationSpec::Total(10)),
            thresholds: Some(ParamSpec::Uniform(0.5)),
            ..BoardConfig::default()
        };
        match cfg.resolve(25) {
            Err(ConfigError::Underdetermined {
                subject: "number of species",
            }) => {}
            other => panic!("expected Underdetermined, got {other:?}"),
        }
    }

    #[test]
    fn zero_species_is_rejected() {
        let cfg = BoardConfig {
            species_count: Some(0),
            population: Some(PopulationSpec::Total(10)),
            thresholds: Some(ParamSpec::Uniform(0.5)),
            ..BoardConfig::default()
        };
        match cfg.resolve(25) {
            Err(ConfigError::ZeroSpecies) => {}
            other => panic!("expected ZeroSpecies, got {other:?}"),
        }
    }

    // ── Population forms ────────────────────────────────────────

    #[test]
    fn missing_population_is_underdetermined() {
        let cfg = BoardConfig {
            population: None,
            thresholds: Some(ParamSpec::PerSpecies(vec![0.5, 0.5])),
            ..BoardConfig::default()
        };
        match cfg.resolve(25) {
            Err(ConfigError::Underdetermined {
                subject: "population",
            }) => {}
            other => panic!("expected Underdetermined, got {other:?}"),
        }
    }

    #[test]
    fn total_splits_evenly_with_truncation() {
        let cfg = BoardConfig {
            population: Some(PopulationSpec::Total(10)),
            species_count: Some(3),
            thresholds: Some(ParamSpec::Uniform(0.0)),
            ..BoardConfig::default()
        };
        assert_eq!(cfg.resolve(25).unwrap().populations, vec![3, 3, 3]);
    }

    #[test]
    fn proportions_scale_by_area() {
        let cfg = BoardConfig {
            population: Some(PopulationSpec::Proportions(vec![0.25, 0.5])),
            thresholds: Some(ParamSpec::Uniform(0.0)),
            ..BoardConfig::default()
        };
        assert_eq!(cfg.resolve(100).unwrap().populations, vec![25, 50]);
    }

    #[test]
    fn total_proportion_scales_then_splits() {
        let cfg = BoardConfig {
            population: Some(PopulationSpec::TotalProportion(0.5)),
            species_count: Some(2),
            thresholds: Some(ParamSpec::Uniform(0.0)),
            ..BoardConfig::default()
        };
        assert_eq!(cfg.resolve(100).unwrap().populations, vec![25, 25]);
    }

    #[test]
    fn proportion_above_one_is_rejected() {
        let cfg = BoardConfig {
            population: Some(PopulationSpec::Proportions(vec![0.5, 1.5])),
            thresholds: Some(ParamSpec::Uniform(0.0)),
            ..BoardConfig::default()
        };
        match cfg.resolve(100) {
            Err(ConfigError::ProportionOutOfRange {
                species: 1,
                ..
            }) => {}
            other => panic!("expected ProportionOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn overfull_board_is_rejected() {
        let cfg = BoardConfig {
            population: Some(PopulationSpec::Counts(vec![5, 5])),
            thresholds: Some(ParamSpec::Uniform(0.0)),
            ..BoardConfig::default()
        };
        match cfg.resolve(9) {
            Err(ConfigError::PopulationExceedsArea {
                requested: 10,
                area: 9,
            }) => {}
            other => panic!("expected PopulationExceedsArea, got {other:?}"),
        }
    }

    #[test]
    fn full_board_is_allowed() {
        let cfg = BoardConfig {
            population: Some(PopulationSpec::Counts(vec![5, 4])),
            thresholds: Some(ParamSpec::Uniform(0.0)),
            ..BoardConfig::default()
        };
        assert!(cfg.resolve(9).is_ok());
    }

    #[test]
    fn zero_count_species_is_rejected() {
        let cfg = BoardConfig {
            population: Some(PopulationSpec::Counts(vec![3, 0])),
            thresholds: Some(ParamSpec::Uniform(0.0)),
            ..BoardConfig::default()
        };
        match cfg.resolve(25) {
            Err(ConfigError::ZeroPopulation { species: 1 }) => {}
            other => panic!("expected ZeroPopulation, got {other:?}"),
        }
    }

    // ── Parameter ranges ────────────────────────────────────────

    #[test]
    fn missing_thresholds_are_underdetermined() {
        let cfg = BoardConfig {
            thresholds: None,
            ..base()
        };
        match cfg.resolve(25) {
            Err(ConfigError::Underdetermined {
                subject: "thresholds",
            }) => {}
            other => panic!("expected Underdetermined, got {other:?}"),
        }
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        for bad in [-0.1, 1.1, f64::NAN] {
            let cfg = BoardConfig {
                thresholds: Some(ParamSpec::Uniform(bad)),
                ..base()
            };
            match cfg.resolve(25) {
                Err(ConfigError::ThresholdOutOfRange { species: 0, .. }) => {}
                other => panic!("expected ThresholdOutOfRange for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn threshold_boundaries_are_inclusive() {
        for ok in [0.0, 1.0] {
            let cfg = BoardConfig {
                thresholds: Some(ParamSpec::Uniform(ok)),
                ..base()
            };
            assert!(cfg.resolve(25).is_ok(), "threshold {ok} should be valid");
        }
    }

    #[test]
    fn zero_bias_is_rejected() {
        for bad in [0.0, -0.5, 1.5, f64::NAN] {
            let cfg = BoardConfig {
                proximity_bias: Some(ParamSpec::Uniform(bad)),
                ..base()
            };
            match cfg.resolve(25) {
                Err(ConfigError::BiasOutOfRange { .. }) => {}
                other => panic!("expected BiasOutOfRange for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn bias_of_one_never_expands_but_is_valid() {
        let cfg = BoardConfig {
            proximity_bias: Some(ParamSpec::Uniform(1.0)),
            ..base()
        };
        assert_eq!(cfg.resolve(25).unwrap().biases, vec![1.0, 1.0]);
    }

    #[test]
    fn zero_search_radius_is_rejected() {
        let cfg = BoardConfig {
            max_search_radius: Some(0),
            ..base()
        };
        match cfg.resolve(25) {
            Err(ConfigError::ZeroSearchRadius) => {}
            other => panic!("expected ZeroSearchRadius, got {other:?}"),
        }
    }
}
