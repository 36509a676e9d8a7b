// rust/engine/src/engine/config.rs
#![forbid(unsafe_code)]

/*
Grid configuration
------------------
`GridConfig` is validated on construction (positive dimensions whose cell
count fits in `usize`, at least one direction), so generation itself has no failure path.

Two presets cover the variants the generator is used with:
- classic: all four directions, longest word first, 100 attempts per word.
- simple: horizontal/vertical only, shuffled order, 50 attempts per word.

Serialized form is `GridConfigSpec`, a loose document (names instead of enums,
optional fields) that converts through the same validation.
*/

use serde::{Deserialize, Serialize};

use crate::engine::constants::{DEFAULT_RETRY_BUDGET, SIMPLE_RETRY_BUDGET};
use crate::engine::direction::{Direction, DirectionSet};
use crate::engine::words::WordOrder;
use crate::error::ConfigError;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridConfigSpec", into = "GridConfigSpec")]
pub struct GridConfig {
    width: usize,
    height: usize,
    directions: DirectionSet,
    retry_budget: u32,
    order: WordOrder,
}

impl GridConfig {
    /// Length-first order and the default retry budget.
    pub fn new<I>(width: usize, height: usize, directions: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Direction>,
    {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if width.checked_mul(height).is_none() {
            return Err(ConfigError::TooLarge { width, height });
        }
        let directions = DirectionSet::new(directions).ok_or(ConfigError::NoDirections)?;
        Ok(Self {
            width,
            height,
            directions,
            retry_budget: DEFAULT_RETRY_BUDGET,
            order: WordOrder::LengthDescending,
        })
    }

    pub fn classic(width: usize, height: usize) -> Result<Self, ConfigError> {
        Self::new(width, height, Direction::all().iter().copied())
    }

    pub fn simple(width: usize, height: usize) -> Result<Self, ConfigError> {
        Ok(Self::new(width, height, [Direction::Horizontal, Direction::Vertical])?
            .with_order(WordOrder::Shuffled)
            .with_retry_budget(SIMPLE_RETRY_BUDGET))
    }

    pub fn with_retry_budget(mut self, retry_budget: u32) -> Self {
        self.retry_budget = retry_budget;
        self
    }

    pub fn with_order(mut self, order: WordOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn directions(&self) -> &DirectionSet {
        &self.directions
    }

    pub fn retry_budget(&self) -> u32 {
        self.retry_budget
    }

    pub fn order(&self) -> WordOrder {
        self.order
    }

    /// Longest word that fits in at least one enabled direction.
    pub fn max_word_len(&self) -> usize {
        self.directions.max_span(self.width, self.height)
    }

    pub fn to_spec(&self) -> GridConfigSpec {
        GridConfigSpec {
            width: self.width,
            height: self.height,
            directions: self
                .directions
                .as_slice()
                .iter()
                .map(|d| d.name().to_string())
                .collect(),
            retry_budget: Some(self.retry_budget),
            order: Some(self.order.name().to_string()),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 12,
            height: 12,
            directions: DirectionSet::all(),
            retry_budget: DEFAULT_RETRY_BUDGET,
            order: WordOrder::LengthDescending,
        }
    }
}

/// Unvalidated configuration document (e.g. a TOML file).
///
/// Directions and order are given by name; `Direction::parse` and
/// `WordOrder::parse` aliases are accepted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridConfigSpec {
    pub width: usize,
    pub height: usize,
    #[serde(default = "all_direction_names")]
    pub directions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_budget: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

fn all_direction_names() -> Vec<String> {
    Direction::all().iter().map(|d| d.name().to_string()).collect()
}

impl TryFrom<GridConfigSpec> for GridConfig {
    type Error = ConfigError;

    fn try_from(spec: GridConfigSpec) -> Result<Self, Self::Error> {
        let directions = spec
            .directions
            .iter()
            .map(|name| {
                Direction::parse(name).ok_or_else(|| ConfigError::UnknownDirection(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let order = match spec.order.as_deref() {
            None => WordOrder::default(),
            Some(name) => {
                WordOrder::parse(name).ok_or_else(|| ConfigError::UnknownOrder(name.to_string()))?
            }
        };

        Ok(Self::new(spec.width, spec.height, directions)?
            .with_order(order)
            .with_retry_budget(spec.retry_budget.unwrap_or(DEFAULT_RETRY_BUDGET)))
    }
}

impl From<GridConfig> for GridConfigSpec {
    fn from(cfg: GridConfig) -> Self {
        cfg.to_spec()
    }
}
