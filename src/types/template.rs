// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-capacity minutia template ("xyt" record).

use core::fmt;

use crate::config::MAX_MINUTIAE;
use crate::error::{PrintError, PrintResult};

/// Three parallel columns of minutia coordinates plus the number of
/// significant rows.
///
/// Rows past `len()` are padding and always zero: templates only grow by
/// appending, so two templates with equal rows have equal backing storage.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MinutiaTemplate {
    count: usize,
    x: [i32; MAX_MINUTIAE],
    y: [i32; MAX_MINUTIAE],
    theta: [i32; MAX_MINUTIAE],
}

impl Default for MinutiaTemplate {
    fn default() -> Self {
        Self {
            count: 0,
            x: [0; MAX_MINUTIAE],
            y: [0; MAX_MINUTIAE],
            theta: [0; MAX_MINUTIAE],
        }
    }
}

impl MinutiaTemplate {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a template from three columns of equal length (at most `MAX_MINUTIAE`).
    pub fn from_columns(x: &[i32], y: &[i32], theta: &[i32]) -> PrintResult<Self> {
        if x.len() != y.len() || x.len() != theta.len() {
            return Err(PrintError::InvalidData(format!(
                "column lengths differ: x={}, y={}, theta={}",
                x.len(),
                y.len(),
                theta.len()
            )));
        }
        if x.len() > MAX_MINUTIAE {
            return Err(PrintError::InvalidData(format!(
                "{} minutiae exceed the template capacity of {}",
                x.len(),
                MAX_MINUTIAE
            )));
        }

        let mut template = Self::new();
        let n = x.len();
        template.x[..n].copy_from_slice(x);
        template.y[..n].copy_from_slice(y);
        template.theta[..n].copy_from_slice(theta);
        template.count = n;
        Ok(template)
    }

    /// Appends one row.
    pub fn push(&mut self, x: i32, y: i32, theta: i32) -> PrintResult<()> {
        if self.count >= MAX_MINUTIAE {
            return Err(PrintError::InvalidData(format!("template is full ({} minutiae)", MAX_MINUTIAE)));
        }
        self.x[self.count] = x;
        self.y[self.count] = y;
        self.theta[self.count] = theta;
        self.count += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn x(&self) -> &[i32] {
        &self.x[..self.count]
    }

    pub fn y(&self) -> &[i32] {
        &self.y[..self.count]
    }

    pub fn theta(&self) -> &[i32] {
        &self.theta[..self.count]
    }

    /// Significant rows as `(x, y, theta)`.
    pub fn rows(&self) -> impl Iterator<Item = (i32, i32, i32)> + '_ {
        (0..self.count).map(move |i| (self.x[i], self.y[i], self.theta[i]))
    }
}

impl fmt::Debug for MinutiaTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinutiaTemplate")
            .field("count", &self.count)
            .field("x", &self.x())
            .field("y", &self.y())
            .field("theta", &self.theta())
            .finish()
    }
}
