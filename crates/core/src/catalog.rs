//! Catalog module - weighted, anti-repetition piece generation
//!
//! Templates are partitioned into weight classes. A draw first picks a class
//! in proportion to its weight, then a template uniformly from that class,
//! skipping templates drawn within the recent-history window. When every
//! template of the class is in the window the whole class is eligible again.
//!
//! Colors are picked uniformly from the palette, skipping colors already used
//! by the active offer unless that leaves nothing to pick from.

use std::collections::VecDeque;

use block_grid_types::{Color, PieceId, HISTORY_WINDOW};
use tracing::trace;

use crate::error::CatalogError;
use crate::pieces::{Piece, Shape, STANDARD_TEMPLATES};
use crate::rng::SimpleRng;

/// A group of templates that share one selection weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightClass {
    pub name: String,
    pub weight: u32,
    /// Positions in the catalog's template list
    pub templates: Vec<usize>,
}

impl WeightClass {
    pub fn new(name: impl Into<String>, weight: u32, templates: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            weight,
            templates,
        }
    }
}

/// Everything needed to build a [`Catalog`]
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub templates: Vec<Shape>,
    pub classes: Vec<WeightClass>,
    pub history_window: usize,
}

impl CatalogConfig {
    /// The standard 19-template set in small (15), medium (10) and large (5)
    /// classes with a history window of 5.
    pub fn standard() -> Result<Self, CatalogError> {
        let templates = STANDARD_TEMPLATES
            .iter()
            .enumerate()
            .map(|(index, rows)| {
                Shape::from_bits(rows)
                    .map_err(|source| CatalogError::MalformedTemplate { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            templates,
            classes: vec![
                WeightClass::new("small", 15, vec![0, 1, 2]),
                WeightClass::new("medium", 10, (3..=10).collect()),
                WeightClass::new("large", 5, (11..=18).collect()),
            ],
            history_window: HISTORY_WINDOW,
        })
    }
}

/// Outcome of one template draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDraw {
    /// Template position in the catalog
    pub index: usize,
    /// Weight class position in the catalog
    pub class: usize,
    /// True when every template of the class was in the history window
    pub fell_back: bool,
}

/// Piece generator owning the templates, recent history and RNG
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<Shape>,
    classes: Vec<WeightClass>,
    total_weight: u32,
    history: VecDeque<usize>,
    history_window: usize,
    rng: SimpleRng,
}

impl Catalog {
    /// Validate `config` and build a catalog seeded with `seed`.
    pub fn new(config: CatalogConfig, seed: u32) -> Result<Self, CatalogError> {
        let CatalogConfig {
            templates,
            classes,
            history_window,
        } = config;

        if templates.is_empty() {
            return Err(CatalogError::NoTemplates);
        }
        if classes.is_empty() {
            return Err(CatalogError::NoClasses);
        }
        if history_window == 0 {
            return Err(CatalogError::ZeroHistoryWindow);
        }

        let mut total_weight: u32 = 0;
        for class in &classes {
            if class.weight == 0 {
                return Err(CatalogError::ZeroWeight {
                    class: class.name.clone(),
                });
            }
            if class.templates.is_empty() {
                return Err(CatalogError::EmptyClass {
                    class: class.name.clone(),
                });
            }
            if let Some(&index) = class.templates.iter().find(|&&i| i >= templates.len()) {
                return Err(CatalogError::UnknownTemplate {
                    class: class.name.clone(),
                    index,
                });
            }
            total_weight = total_weight.saturating_add(class.weight);
        }

        Ok(Self {
            templates,
            classes,
            total_weight,
            history: VecDeque::with_capacity(history_window + 1),
            history_window,
            rng: SimpleRng::new(seed),
        })
    }

    /// Standard catalog (see [`CatalogConfig::standard`])
    pub fn standard(seed: u32) -> Result<Self, CatalogError> {
        Self::new(CatalogConfig::standard()?, seed)
    }

    pub fn templates(&self) -> &[Shape] {
        &self.templates
    }

    pub fn classes(&self) -> &[WeightClass] {
        &self.classes
    }

    /// Sum of all class weights
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Recently drawn template indices, oldest first
    pub fn history(&self) -> impl Iterator<Item = usize> + '_ {
        self.history.iter().copied()
    }

    pub fn history_window(&self) -> usize {
        self.history_window
    }

    /// Pick a weight class in proportion to its weight.
    fn draw_class(&mut self) -> usize {
        let mut roll = self.rng.next_range(self.total_weight);
        for (i, class) in self.classes.iter().enumerate() {
            if roll < class.weight {
                return i;
            }
            roll -= class.weight;
        }
        // Unreachable while total_weight is the exact sum of the weights.
        self.classes.len() - 1
    }

    /// Draw a template index and record it in the history window.
    pub fn draw_template(&mut self) -> TemplateDraw {
        let class = self.draw_class();
        let members = &self.classes[class].templates;

        let fresh: Vec<usize> = members
            .iter()
            .copied()
            .filter(|i| !self.history.contains(i))
            .collect();
        let fell_back = fresh.is_empty();
        let candidates: &[usize] = if fell_back { members } else { &fresh };

        let index = candidates[self.rng.next_range(candidates.len() as u32) as usize];

        self.history.push_back(index);
        while self.history.len() > self.history_window {
            self.history.pop_front();
        }

        trace!(index, class, fell_back, "template drawn");
        TemplateDraw {
            index,
            class,
            fell_back,
        }
    }

    /// Draw a color not used by any piece in `active`, if one is left.
    pub fn draw_color(&mut self, active: &[Piece]) -> Color {
        let free: Vec<Color> = Color::ALL
            .iter()
            .copied()
            .filter(|c| active.iter().all(|p| p.color != *c))
            .collect();
        let candidates: &[Color] = if free.is_empty() { &Color::ALL } else { &free };

        candidates[self.rng.next_range(candidates.len() as u32) as usize]
    }

    /// Draw a complete piece with the given offer id.
    ///
    /// The returned shape is an independent copy of the template.
    pub fn draw_piece(&mut self, id: PieceId, active: &[Piece]) -> Piece {
        let draw = self.draw_template();
        let color = self.draw_color(active);
        Piece::new(id, self.templates[draw.index].clone(), color)
    }
}
