//! Packs circles whose areas follow a set of weights, then fits the whole
//! layout into the unit circle centered at the origin.
//!
//! ```
//! let circles = circlify::pack_and_enclose(vec![("a", 1.0), ("b", 1.0)], false).unwrap();
//! assert_eq!(circles["a"], circlify::Circle::new(0.5, 0.0, 0.5));
//! ```

pub mod candidate;
pub mod circle;
pub mod config;
pub mod enclose;
pub mod error;
pub mod pack;
pub mod render;
pub mod scale;

pub use circle::{Circle, Intersection, Point};
pub use config::Config;
pub use error::{CirclifyError, Result};
pub use render::Render;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Packs, encloses and normalizes `weights` with the default [`Config`].
///
/// With `include_unit_circle`, the unit circle is added under `L::default()`
/// (the empty string for string labels).
pub fn pack_and_enclose<L, I>(weights: I, include_unit_circle: bool) -> Result<HashMap<L, Circle>>
where
    L: Clone + Eq + Hash + Debug + Default,
    I: IntoIterator<Item = (L, f64)>,
{
    Circlify::new(Config::default().with_unit(include_unit_circle)).run(weights)
}

pub struct Circlify<'a, L> {
    config: Config,
    hook: Option<&'a mut dyn Render<L>>,
}

impl<'a, L> Circlify<'a, L>
where
    L: Clone + Eq + Hash + Debug + Default,
{
    pub fn new(config: Config) -> Self {
        Self { config, hook: None }
    }

    /// Hands the layout to `hook` after packing, after enclosing and once
    /// normalized.
    pub fn render_with(mut self, hook: &'a mut dyn Render<L>) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Lays out `weights`. A label given twice takes its last weight but
    /// keeps its first position.
    ///
    /// Only the ratios between weights matter. The hook sees the packed
    /// layout with the largest weight taken as 1.
    ///
    /// Labels that could not be placed are missing from the result.
    pub fn run<I>(&mut self, weights: I) -> Result<HashMap<L, Circle>>
    where
        I: IntoIterator<Item = (L, f64)>,
    {
        let weights = relative_weights(collect_weights(weights)?);

        let packed = pack::pack(&weights, self.config.parallel);
        self.render(&packed, None);

        let circles: Vec<Circle> = packed.iter().map(|(_, circle)| *circle).collect();
        let enclosure = match self.config.seed {
            Some(seed) => enclose::enclose(&circles, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => enclose::enclose(&circles, &mut rand::thread_rng()),
        }
        .ok_or(CirclifyError::EmptyInput)?;
        self.render(&packed, Some(&enclosure));

        let mut scaled = scale::scale(&packed, &enclosure);
        self.render(&scaled, Some(&Circle::UNIT));
        if self.config.with_unit {
            scaled.push((L::default(), Circle::UNIT));
        }

        Ok(scaled.into_iter().collect())
    }

    fn render(&mut self, circles: &[(L, Circle)], enclosure: Option<&Circle>) {
        if let Some(hook) = self.hook.as_deref_mut() {
            hook.render(circles, enclosure);
        }
    }
}

fn collect_weights<L, I>(weights: I) -> Result<Vec<(L, f64)>>
where
    L: Clone + Eq + Hash + Debug,
    I: IntoIterator<Item = (L, f64)>,
{
    let mut index: HashMap<L, usize> = HashMap::new();
    let mut collected: Vec<(L, f64)> = Vec::new();
    for (label, weight) in weights {
        match index.get(&label).copied() {
            Some(i) => collected[i].1 = weight,
            None => {
                index.insert(label.clone(), collected.len());
                collected.push((label, weight));
            }
        }
    }

    if collected.is_empty() {
        return Err(CirclifyError::EmptyInput);
    }
    if let Some((label, weight)) = collected
        .iter()
        .find(|(_, weight)| !(weight.is_finite() && *weight > 0.0))
    {
        return Err(CirclifyError::InvalidWeight {
            label: format!("{:?}", label),
            weight: *weight,
        });
    }

    Ok(collected)
}

/// Divides every weight by the largest, so packing and enclosing always run
/// at unit scale where the fixed tolerances hold.
fn relative_weights<L>(mut weights: Vec<(L, f64)>) -> Vec<(L, f64)> {
    let largest = weights.iter().map(|(_, weight)| *weight).fold(0.0, f64::max);
    for (_, weight) in weights.iter_mut() {
        *weight /= largest;
    }
    weights
}
