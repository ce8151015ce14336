//! Coordinate transforms
//!
//! A `Transform` maps device coordinates into a target space. Which parts of
//! it apply to a given motion event depends on the event's source.

use super::source::Source;
use glam::{Affine2, Mat2, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform(Affine2);

impl Transform {
    pub const IDENTITY: Transform = Transform(Affine2::IDENTITY);

    pub fn from_affine(affine: Affine2) -> Self {
        Self(affine)
    }

    pub fn from_translation(tx: f32, ty: f32) -> Self {
        Self(Affine2::from_translation(Vec2::new(tx, ty)))
    }

    pub fn from_scale(sx: f32, sy: f32) -> Self {
        Self(Affine2::from_scale(Vec2::new(sx, sy)))
    }

    /// Row-major `[dsdx dtdx tx; dtdy dsdy ty]`
    pub fn from_matrix(dsdx: f32, dtdx: f32, tx: f32, dtdy: f32, dsdy: f32, ty: f32) -> Self {
        let matrix = Mat2::from_cols(Vec2::new(dsdx, dtdy), Vec2::new(dtdx, dsdy));
        Self(Affine2::from_mat2_translation(matrix, Vec2::new(tx, ty)))
    }

    /// Apply this transform after `self`
    pub fn then(&self, next: &Transform) -> Self {
        Self(next.0 * self.0)
    }

    pub fn inverse(&self) -> Self {
        Self(self.0.inverse())
    }

    pub fn is_identity(&self) -> bool {
        self.0 == Affine2::IDENTITY
    }

    pub fn affine(&self) -> &Affine2 {
        &self.0
    }

    /// Full transform including translation
    pub fn transform_point(&self, xy: Vec2) -> Vec2 {
        self.0.transform_point2(xy)
    }

    /// Rotation and scale only
    pub fn transform_vector(&self, xy: Vec2) -> Vec2 {
        self.0.transform_vector2(xy)
    }

    /// Transform a pointer location using the rule selected by `source`
    pub fn transform_xy_for_source(&self, source: Source, xy: Vec2) -> Vec2 {
        match TransformRule::for_source(source) {
            TransformRule::None => xy,
            TransformRule::WithoutTranslation => self.transform_vector(xy),
            TransformRule::Full => self.transform_point(xy),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0.matrix2;
        let t = self.0.translation;
        write!(
            f,
            "[{:.4} {:.4} {:.4}; {:.4} {:.4} {:.4}]",
            m.x_axis.x, m.y_axis.x, t.x, m.x_axis.y, m.y_axis.y, t.y
        )
    }
}

/// How much of a transform applies to a source's coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformRule {
    /// Joysticks, touchpads and relative mice report values that are not
    /// display positions
    None,
    /// Non-pointer sources are relative to nothing, so translation is dropped
    WithoutTranslation,
    /// Pointer sources report absolute display positions
    Full,
}

impl TransformRule {
    pub fn for_source(source: Source) -> Self {
        if source.has_class(Source::CLASS_JOYSTICK)
            || source.has_class(Source::CLASS_POSITION)
            || source.is_from_source(Source::MOUSE_RELATIVE)
        {
            TransformRule::None
        } else if !source.has_class(Source::CLASS_POINTER) {
            TransformRule::WithoutTranslation
        } else {
            TransformRule::Full
        }
    }
}
