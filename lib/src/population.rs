//! A 1-dimensional population of genotypes.
//!
//! This is a restricted variant of the grid engine: individual `i` of the
//! next generation is the offspring of individuals `i` and `i + 1`
//! (wrapping around) of the current generation.

use crate::{error::Error, rules::cross, states::Genotype};
use log::debug;
use rand::Rng;
use std::fmt::{self, Display, Formatter};

/// Generates a population of `size` individuals.
///
/// Each individual is [`Recessive`](Genotype::Recessive) with probability
/// `recessive_frequency`, and [`Dominant`](Genotype::Dominant) otherwise.
pub fn init_population<G: Rng + ?Sized>(
    size: usize,
    recessive_frequency: f64,
    rng: &mut G,
) -> Result<Vec<Genotype>, Error> {
    if !(0.0..=1.0).contains(&recessive_frequency) {
        return Err(Error::ProbabilityOutOfRange(recessive_frequency));
    }
    let population: Vec<_> = (0..size)
        .map(|_| {
            if rng.gen_bool(recessive_frequency) {
                Genotype::Recessive
            } else {
                Genotype::Dominant
            }
        })
        .collect();
    debug!(
        "Initialized a population of {} with recessive frequency {}",
        size, recessive_frequency
    );
    Ok(population)
}

/// Computes the next generation.
///
/// The whole next generation is computed from the current one.
pub fn simulate_generation<G: Rng + ?Sized>(population: &[Genotype], rng: &mut G) -> Vec<Genotype> {
    let len = population.len();
    (0..len)
        .map(|i| cross(population[i], population[(i + 1) % len], rng))
        .collect()
}

/// Number of individuals of each genotype.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    /// `GG`.
    pub dominant: usize,
    /// `Gg`.
    pub heterozygous: usize,
    /// `gg`.
    pub recessive: usize,
}

impl Census {
    /// Counts the genotypes of a population.
    pub fn of(population: &[Genotype]) -> Self {
        let mut census = Census::default();
        for genotype in population {
            match genotype {
                Genotype::Dominant => census.dominant += 1,
                Genotype::Heterozygous => census.heterozygous += 1,
                Genotype::Recessive => census.recessive += 1,
            }
        }
        census
    }

    /// Size of the population.
    pub fn total(&self) -> usize {
        self.dominant + self.heterozygous + self.recessive
    }

    /// Frequency of the recessive allele `g` among all alleles.
    ///
    /// `0` for an empty population.
    pub fn recessive_allele_frequency(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            (2 * self.recessive + self.heterozygous) as f64 / (2 * total) as f64
        }
    }
}

impl Display for Census {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dominant = {}, Heterozygous = {}, Recessive = {}, recessive allele frequency = {:.4}",
            self.dominant,
            self.heterozygous,
            self.recessive,
            self.recessive_allele_frequency()
        )
    }
}
