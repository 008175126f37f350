//! The generated width × depth grid of cells.
//!
//! Cells are stored column by column: every `z` of column `x = 0`, then column
//! `x = 1`, and so on. Generation, regeneration and export all index through
//! [`Grid::get`], so the same `(x, z)` always addresses the same cell.

use std::thread;

use serde::{Deserialize, Serialize};

use crate::color::{TierColor, evaluate_color};
use crate::config::HeightFieldConfig;
use crate::error::TerrainError;
use crate::heightmap::HeightFieldGenerator;

/// One generated grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub z: u32,
    /// Elevation in `[0, max_height]`.
    pub elevation: f64,
    pub color: TierColor,
}

/// A fully generated height field.
///
/// Deserialization rejects cell lists that do not match the stated size and
/// storage order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridParts")]
pub struct Grid {
    width: u32,
    depth: u32,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct GridParts {
    width: u32,
    depth: u32,
    cells: Vec<Cell>,
}

impl TryFrom<GridParts> for Grid {
    type Error = TerrainError;

    fn try_from(parts: GridParts) -> Result<Self, TerrainError> {
        let GridParts {
            width,
            depth,
            cells,
        } = parts;
        let expected = width as usize * depth as usize;
        if cells.len() != expected {
            return Err(TerrainError::InconsistentGrid(format!(
                "{width}x{depth} grid needs {expected} cells, got {}",
                cells.len()
            )));
        }
        for (index, cell) in cells.iter().enumerate() {
            let x = (index / depth as usize) as u32;
            let z = (index % depth as usize) as u32;
            if (cell.x, cell.z) != (x, z) {
                return Err(TerrainError::InconsistentGrid(format!(
                    "cell {index} is at ({}, {}), expected ({x}, {z})",
                    cell.x, cell.z
                )));
            }
        }
        Ok(Self {
            width,
            depth,
            cells,
        })
    }
}

impl Grid {
    /// Evaluate every cell on the calling thread.
    pub fn generate(generator: &HeightFieldGenerator) -> Self {
        let config = generator.config();
        let (width, depth) = (config.width, config.depth);
        let mut rng = rand::rng();
        let cells = (0..width)
            .flat_map(|x| (0..depth).map(move |z| (x, z)))
            .map(|(x, z)| generator.evaluate_with(x, z, &mut rng))
            .collect::<Vec<_>>();
        tracing::debug!(width, depth, "generated height field");
        Self {
            width,
            depth,
            cells,
        }
    }

    /// Evaluate cells across `threads` worker threads, one block of columns
    /// per worker. Passing `0` uses one worker per logical CPU.
    ///
    /// In noise mode the result equals [`generate`](Self::generate).
    pub fn generate_parallel(generator: &HeightFieldGenerator, threads: usize) -> Self {
        let config = generator.config();
        let (width, depth) = (config.width, config.depth);
        let requested = if threads == 0 { num_cpus::get() } else { threads };
        let workers = requested.clamp(1, width as usize) as u32;
        let columns_per_worker = width.div_ceil(workers);

        let evaluate_columns = |start: u32, end: u32| {
            let mut rng = rand::rng();
            (start..end)
                .flat_map(|x| (0..depth).map(move |z| (x, z)))
                .map(|(x, z)| generator.evaluate_with(x, z, &mut rng))
                .collect::<Vec<_>>()
        };

        let cells = thread::scope(|scope| {
            let mut blocks = Vec::with_capacity(workers as usize);
            for start in (0..width).step_by(columns_per_worker as usize) {
                let end = (start + columns_per_worker).min(width);
                let spawned = thread::Builder::new()
                    .name("heightfield-worker".into())
                    .spawn_scoped(scope, move || evaluate_columns(start, end));
                match spawned {
                    Ok(handle) => blocks.push(Block::Pending(handle)),
                    Err(err) => {
                        tracing::warn!(%err, start, end, "worker spawn failed, evaluating inline");
                        blocks.push(Block::Done(evaluate_columns(start, end)));
                    }
                }
            }

            let mut cells = Vec::with_capacity(config.cell_count());
            for block in blocks {
                match block {
                    Block::Pending(handle) => match handle.join() {
                        Ok(part) => cells.extend(part),
                        Err(payload) => std::panic::resume_unwind(payload),
                    },
                    Block::Done(part) => cells.extend(part),
                }
            }
            cells
        });

        tracing::debug!(width, depth, workers, "generated height field in parallel");
        Self {
            width,
            depth,
            cells,
        }
    }

    /// Build a grid from caller-supplied raw elevations.
    ///
    /// Each value passes through the generator's rounding and clamping before
    /// its color is derived, exactly as a sampled value would.
    pub fn from_fn(
        generator: &HeightFieldGenerator,
        mut raw_elevation: impl FnMut(u32, u32) -> f64,
    ) -> Self {
        let config = generator.config();
        let (width, depth) = (config.width, config.depth);
        let mut cells = Vec::with_capacity(config.cell_count());
        for x in 0..width {
            for z in 0..depth {
                let elevation = generator.finish_height(raw_elevation(x, z));
                cells.push(Cell {
                    x,
                    z,
                    elevation,
                    color: generator.evaluate_color(elevation),
                });
            }
        }
        Self {
            width,
            depth,
            cells,
        }
    }

    /// Re-evaluate every cell with `generator`, keeping this grid's size.
    ///
    /// Pass a generator from [`HeightFieldGenerator::reconfigure`] to apply
    /// new height settings under the original seed. A differing width or
    /// depth in the new configuration is ignored.
    pub fn regenerate(&self, generator: &HeightFieldGenerator) -> Self {
        self.warn_if_resized(generator.config());
        let mut rng = rand::rng();
        let cells = self
            .cells
            .iter()
            .map(|cell| generator.evaluate_with(cell.x, cell.z, &mut rng))
            .collect();
        Self {
            width: self.width,
            depth: self.depth,
            cells,
        }
    }

    /// Re-derive every cell's color from its stored elevation.
    ///
    /// `config` is validated first, so degenerate thresholds never recolor
    /// the grid.
    pub fn regenerate_colors(&self, config: &HeightFieldConfig) -> Result<Self, TerrainError> {
        config.validate()?;
        self.warn_if_resized(config);
        let cells = self
            .cells
            .iter()
            .map(|cell| Cell {
                color: evaluate_color(cell.elevation, config),
                ..*cell
            })
            .collect();
        Ok(Self {
            width: self.width,
            depth: self.depth,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `(x, z)`, or `None` outside the grid.
    pub fn get(&self, x: u32, z: u32) -> Option<&Cell> {
        if x >= self.width || z >= self.depth {
            return None;
        }
        self.cells.get(x as usize * self.depth as usize + z as usize)
    }

    /// All cells in storage order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn warn_if_resized(&self, config: &HeightFieldConfig) {
        if config.width != self.width || config.depth != self.depth {
            tracing::warn!(
                grid_width = self.width,
                grid_depth = self.depth,
                config_width = config.width,
                config_depth = config.depth,
                "grid size is fixed after generation, ignoring new dimensions"
            );
        }
    }
}

enum Block<'scope> {
    Pending(thread::ScopedJoinHandle<'scope, Vec<Cell>>),
    Done(Vec<Cell>),
}
