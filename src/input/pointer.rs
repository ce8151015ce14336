//! Pointer properties and coordinates for motion entries

use super::types::ToolType;
use crate::error::{EntryError, EntryResult};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum number of pointers in a single motion entry
pub const MAX_POINTERS: usize = 16;

/// Pointer ids must be below this value
pub const MAX_POINTER_ID: i32 = 31;

/// Axes a pointer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MotionAxis {
    X,
    Y,
    Pressure,
    Size,
    TouchMajor,
    TouchMinor,
    ToolMajor,
    ToolMinor,
    Orientation,
    Vscroll,
    Hscroll,
    Tilt,
    RelativeX,
    RelativeY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointerProperties {
    pub id: i32,
    pub tool_type: ToolType,
}

impl PointerProperties {
    pub fn new(id: i32, tool_type: ToolType) -> Self {
        Self { id, tool_type }
    }
}

/// Sparse per-axis values of one pointer
///
/// Axes that were never set read as `0.0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerCoords {
    values: BTreeMap<MotionAxis, f32>,
    pub is_resampled: bool,
}

impl PointerCoords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_xy(x: f32, y: f32) -> Self {
        let mut coords = Self::new();
        coords.set_axis_value(MotionAxis::X, x);
        coords.set_axis_value(MotionAxis::Y, y);
        coords
    }

    pub fn set_axis_value(&mut self, axis: MotionAxis, value: f32) {
        self.values.insert(axis, value);
    }

    pub fn axis_value(&self, axis: MotionAxis) -> f32 {
        self.values.get(&axis).copied().unwrap_or(0.0)
    }

    pub fn has_axis(&self, axis: MotionAxis) -> bool {
        self.values.contains_key(&axis)
    }

    pub fn x(&self) -> f32 {
        self.axis_value(MotionAxis::X)
    }

    pub fn y(&self) -> f32 {
        self.axis_value(MotionAxis::Y)
    }

    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    pub fn axes(&self) -> impl Iterator<Item = (MotionAxis, f32)> + '_ {
        self.values.iter().map(|(axis, value)| (*axis, *value))
    }
}

/// One pointer of a motion entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub properties: PointerProperties,
    pub coords: PointerCoords,
}

/// Non-empty, index-aligned list of pointers
///
/// Properties and coordinates are stored together, so the two can never
/// disagree on length. Index 0 is the primary pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pointers(Vec<Pointer>);

impl Pointers {
    /// Pair up parallel property and coordinate lists
    pub fn new(
        properties: Vec<PointerProperties>,
        coords: Vec<PointerCoords>,
    ) -> EntryResult<Self> {
        if properties.len() != coords.len() {
            return Err(EntryError::PointerCountMismatch {
                properties: properties.len(),
                coords: coords.len(),
            });
        }

        let pointers = properties
            .into_iter()
            .zip(coords)
            .map(|(properties, coords)| Pointer { properties, coords })
            .collect();
        Self::from_pointers(pointers)
    }

    pub fn from_pointers(pointers: Vec<Pointer>) -> EntryResult<Self> {
        if pointers.is_empty() {
            return Err(EntryError::NoPointers);
        }
        if pointers.len() > MAX_POINTERS {
            return Err(EntryError::TooManyPointers(pointers.len()));
        }

        let mut seen = 0u32;
        for pointer in &pointers {
            let id = pointer.properties.id;
            if !(0..MAX_POINTER_ID).contains(&id) {
                return Err(EntryError::InvalidPointerId(id));
            }
            if seen & (1 << id) != 0 {
                return Err(EntryError::DuplicatePointerId(id));
            }
            seen |= 1 << id;
        }

        Ok(Self(pointers))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn primary(&self) -> &Pointer {
        &self.0[0]
    }

    pub fn get(&self, index: usize) -> Option<&Pointer> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pointer> {
        self.0.iter()
    }

    pub fn properties(&self) -> impl Iterator<Item = &PointerProperties> + '_ {
        self.0.iter().map(|pointer| &pointer.properties)
    }

    pub fn coords(&self) -> impl Iterator<Item = &PointerCoords> + '_ {
        self.0.iter().map(|pointer| &pointer.coords)
    }
}

impl<'a> IntoIterator for &'a Pointers {
    type Item = &'a Pointer;
    type IntoIter = std::slice::Iter<'a, Pointer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
