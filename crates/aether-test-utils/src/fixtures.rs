//! Reusable evolving simulations.
//!
//! Four standard models for exercising view re-validation:
//!
//! - [`GrowingWedge`]: a canonical wedge whose size grows by one per step.
//! - [`ShrinkingBox`]: a centred box whose half-width shrinks to zero.
//! - [`RandomWalkBox`]: a box translated by a seeded random walk.
//! - [`FailingSimulation`]: wraps any model and fails after N steps.

use std::path::Path;

use aether_core::{CellValues, GridError, Model, PartialCoord, Region, StepId};
use aether_grid::{wedge_max_coord, wedge_min_coord};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::{coordinate_sum, write_bounds_backup};

/// Canonical wedge `a0 ≥ a1 ≥ … ≥ 0` whose size grows by one per step.
#[derive(Clone, Debug)]
pub struct GrowingWedge {
    ndim: usize,
    size: i32,
    step: StepId,
    changed: Option<bool>,
}

impl GrowingWedge {
    pub fn new(ndim: usize, size: i32) -> Self {
        Self {
            ndim,
            size,
            step: StepId(0),
            changed: None,
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }
}

impl Region for GrowingWedge {
    fn ndim(&self) -> usize {
        self.ndim
    }

    fn min_coord(&self, _axis: usize) -> i32 {
        0
    }

    fn max_coord(&self, _axis: usize) -> i32 {
        self.size
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        wedge_min_coord(axis, fixed)
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        wedge_max_coord(axis, fixed, self.size)
    }
}

impl Model for GrowingWedge {
    fn advance_step(&mut self) -> Result<bool, GridError> {
        self.size += 1;
        self.step = self.step.next();
        self.changed = Some(true);
        Ok(true)
    }

    fn is_changed(&self) -> Option<bool> {
        self.changed
    }

    fn step(&self) -> StepId {
        self.step
    }

    fn name(&self) -> String {
        "growing-wedge".into()
    }

    fn subfolder_path(&self) -> String {
        self.name()
    }

    fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError> {
        write_bounds_backup(self, self.step, dir, name)
    }
}

impl CellValues<i64> for GrowingWedge {
    fn value_at(&self, coord: &[i32]) -> i64 {
        coordinate_sum(coord) + self.step.0 as i64
    }
}

/// Box `[-h, h]` on every axis whose half-width `h` shrinks by one per
/// step until it reaches zero.
#[derive(Clone, Debug)]
pub struct ShrinkingBox {
    ndim: usize,
    half_width: i32,
    step: StepId,
    changed: Option<bool>,
}

impl ShrinkingBox {
    pub fn new(ndim: usize, half_width: i32) -> Self {
        Self {
            ndim,
            half_width: half_width.max(0),
            step: StepId(0),
            changed: None,
        }
    }

    pub fn half_width(&self) -> i32 {
        self.half_width
    }
}

impl Region for ShrinkingBox {
    fn ndim(&self) -> usize {
        self.ndim
    }

    fn min_coord(&self, _axis: usize) -> i32 {
        -self.half_width
    }

    fn max_coord(&self, _axis: usize) -> i32 {
        self.half_width
    }
}

impl Model for ShrinkingBox {
    fn advance_step(&mut self) -> Result<bool, GridError> {
        let changed = self.half_width > 0;
        if changed {
            self.half_width -= 1;
        }
        self.step = self.step.next();
        self.changed = Some(changed);
        Ok(changed)
    }

    fn is_changed(&self) -> Option<bool> {
        self.changed
    }

    fn step(&self) -> StepId {
        self.step
    }

    fn name(&self) -> String {
        "shrinking-box".into()
    }

    fn subfolder_path(&self) -> String {
        self.name()
    }

    fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError> {
        write_bounds_backup(self, self.step, dir, name)
    }
}

impl CellValues<i64> for ShrinkingBox {
    fn value_at(&self, coord: &[i32]) -> i64 {
        coordinate_sum(coord) + self.step.0 as i64
    }
}

/// Box of fixed shape translated each step by `-1`, `0` or `+1` per axis.
///
/// The walk is drawn from a `ChaCha8Rng` seeded at construction, so two
/// boxes with the same seed follow the same path.
#[derive(Clone, Debug)]
pub struct RandomWalkBox {
    min: Vec<i32>,
    max: Vec<i32>,
    rng: ChaCha8Rng,
    step: StepId,
    changed: Option<bool>,
}

impl RandomWalkBox {
    /// # Panics
    ///
    /// If `min` and `max` differ in length or `min > max` on some axis.
    pub fn new(min: &[i32], max: &[i32], seed: u64) -> Self {
        assert_eq!(min.len(), max.len(), "min and max must have the same length");
        assert!(
            min.iter().zip(max).all(|(lo, hi)| lo <= hi),
            "min must not exceed max"
        );
        Self {
            min: min.to_vec(),
            max: max.to_vec(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            step: StepId(0),
            changed: None,
        }
    }
}

impl Region for RandomWalkBox {
    fn ndim(&self) -> usize {
        self.min.len()
    }

    fn min_coord(&self, axis: usize) -> i32 {
        self.min[axis]
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.max[axis]
    }
}

impl Model for RandomWalkBox {
    fn advance_step(&mut self) -> Result<bool, GridError> {
        let mut changed = false;
        for (lo, hi) in self.min.iter_mut().zip(self.max.iter_mut()) {
            let shift: i32 = self.rng.random_range(-1..=1);
            *lo += shift;
            *hi += shift;
            changed |= shift != 0;
        }
        self.step = self.step.next();
        self.changed = Some(changed);
        Ok(changed)
    }

    fn is_changed(&self) -> Option<bool> {
        self.changed
    }

    fn step(&self) -> StepId {
        self.step
    }

    fn name(&self) -> String {
        "random-walk-box".into()
    }

    fn subfolder_path(&self) -> String {
        self.name()
    }

    fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError> {
        write_bounds_backup(self, self.step, dir, name)
    }
}

impl CellValues<i64> for RandomWalkBox {
    fn value_at(&self, coord: &[i32]) -> i64 {
        coordinate_sum(coord) + self.step.0 as i64
    }
}

/// Wraps a model and fails deterministically once `ok_steps` steps have
/// succeeded.
///
/// Useful for checking that views pass simulation failures through
/// unchanged instead of reporting themselves invalidated.
pub struct FailingSimulation<M> {
    inner: M,
    remaining: usize,
}

impl<M> FailingSimulation<M> {
    pub fn new(inner: M, ok_steps: usize) -> Self {
        Self {
            inner,
            remaining: ok_steps,
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: Region> Region for FailingSimulation<M> {
    fn ndim(&self) -> usize {
        self.inner.ndim()
    }

    fn min_coord(&self, axis: usize) -> i32 {
        self.inner.min_coord(axis)
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.inner.max_coord(axis)
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.inner.min_coord_at(axis, fixed)
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.inner.max_coord_at(axis, fixed)
    }

    fn axis_label(&self, axis: usize) -> String {
        self.inner.axis_label(axis)
    }
}

impl<M: Model> Model for FailingSimulation<M> {
    fn advance_step(&mut self) -> Result<bool, GridError> {
        if self.remaining == 0 {
            return Err(GridError::Simulation {
                reason: format!("{} failed at step {}", self.inner.name(), self.inner.step().next()),
            });
        }
        self.remaining -= 1;
        self.inner.advance_step()
    }

    fn is_changed(&self) -> Option<bool> {
        self.inner.is_changed()
    }

    fn step(&self) -> StepId {
        self.inner.step()
    }

    fn name(&self) -> String {
        self.inner.name()
    }

    fn subfolder_path(&self) -> String {
        self.inner.subfolder_path()
    }

    fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError> {
        self.inner.back_up(dir, name)
    }
}

impl<T, M: CellValues<T>> CellValues<T> for FailingSimulation<M> {
    fn value_at(&self, coord: &[i32]) -> T {
        self.inner.value_at(coord)
    }
}
