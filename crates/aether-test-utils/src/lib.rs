//! Test utilities and mock simulations for Aether development.
//!
//! Provides a scripted [`MockSimulation`] whose bounds follow a fixed
//! sequence of regions, plus the evolving fixtures in [`fixtures`] for
//! exercising the re-validation of derived views across steps.
//!
//! Every mock reports [`coordinate_sum`] plus the current step as its
//! `i64` cell value, so tests can check which cell a view read.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{FailingSimulation, GrowingWedge, RandomWalkBox, ShrinkingBox};

use std::fs;
use std::path::Path;

use aether_core::{CellValues, GridError, Model, PartialCoord, Region, StepId};

/// Sum of the coordinates of a cell.
pub fn coordinate_sum(coord: &[i32]) -> i64 {
    coord.iter().map(|&c| i64::from(c)).sum()
}

/// Write the unconditional bounds of `region` to `dir/{name}.bounds`,
/// one `label min max` line per axis after a `step N` header.
pub fn write_bounds_backup(
    region: &dyn Region,
    step: StepId,
    dir: &Path,
    name: &str,
) -> Result<(), GridError> {
    let mut text = format!("step {step}\n");
    for axis in 0..region.ndim() {
        text += &format!(
            "{} {} {}\n",
            region.axis_label(axis),
            region.min_coord(axis),
            region.max_coord(axis)
        );
    }
    fs::write(dir.join(format!("{name}.bounds")), text).map_err(|err| GridError::Backup {
        path: dir.display().to_string(),
        reason: err.to_string(),
    })
}

/// A simulation whose bounds follow a scripted sequence of regions.
///
/// Step `n` exposes frame `n`; once the script runs out the last frame
/// stays current and steps report no change.
pub struct MockSimulation {
    name: String,
    frames: Vec<Box<dyn Region>>,
    step: StepId,
    changed: Option<bool>,
}

impl MockSimulation {
    /// A simulation showing `first` at step 0.
    pub fn new(name: impl Into<String>, first: impl Region + 'static) -> Self {
        Self {
            name: name.into(),
            frames: vec![Box::new(first)],
            step: StepId(0),
            changed: None,
        }
    }

    /// Append the frame shown at the next step.
    pub fn then(mut self, frame: impl Region + 'static) -> Self {
        self.frames.push(Box::new(frame));
        self
    }

    /// Number of scripted frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn frame(&self) -> &dyn Region {
        let last = self.frames.len() - 1;
        let index = usize::try_from(self.step.0).map_or(last, |s| s.min(last));
        &*self.frames[index]
    }
}

impl Region for MockSimulation {
    fn ndim(&self) -> usize {
        self.frame().ndim()
    }

    fn min_coord(&self, axis: usize) -> i32 {
        self.frame().min_coord(axis)
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.frame().max_coord(axis)
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.frame().min_coord_at(axis, fixed)
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.frame().max_coord_at(axis, fixed)
    }

    fn axis_label(&self, axis: usize) -> String {
        self.frame().axis_label(axis)
    }
}

impl Model for MockSimulation {
    fn advance_step(&mut self) -> Result<bool, GridError> {
        self.step = self.step.next();
        let changed = self.step.0 < self.frames.len() as u64;
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
        self.name.clone()
    }

    fn subfolder_path(&self) -> String {
        self.name.clone()
    }

    fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError> {
        write_bounds_backup(self, self.step, dir, name)
    }
}

impl CellValues<i64> for MockSimulation {
    fn value_at(&self, coord: &[i32]) -> i64 {
        coordinate_sum(coord) + self.step.0 as i64
    }
}
