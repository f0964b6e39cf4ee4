use glam::DMat4;

use crate::error::CameraParameterError;
use crate::math::is_angle;

/// Projection parameters of a camera node.
///
/// Construct through [`Projection::perspective`] or
/// [`Projection::orthographic`]; both validate their arguments up front so a
/// stored projection always yields a well-formed matrix.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    Perspective {
        /// Vertical field of view in degrees, in (0, 180).
        fov_y: f64,
        aspect: f64,
        near: f64,
        far: f64,
    },
    Orthographic {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    },
}

impl Projection {
    pub fn perspective(
        fov_y: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Result<Self, CameraParameterError> {
        if !is_angle(fov_y, true, false, true) || fov_y <= 0.0 || fov_y >= 180.0 {
            return Err(CameraParameterError::new(
                format!("fov_y = {fov_y}"),
                "field of view must lie strictly between 0 and 180 degrees",
            ));
        }
        if aspect <= 0.0 {
            return Err(CameraParameterError::new(
                format!("aspect = {aspect}"),
                "aspect ratio must be positive",
            ));
        }
        Self::check_depth_range(near, far)?;
        Ok(Self::Perspective {
            fov_y,
            aspect,
            near,
            far,
        })
    }

    pub fn orthographic(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
    ) -> Result<Self, CameraParameterError> {
        if left >= right {
            return Err(CameraParameterError::new(
                format!("left = {left}, right = {right}"),
                "left must be smaller than right",
            ));
        }
        if bottom >= top {
            return Err(CameraParameterError::new(
                format!("bottom = {bottom}, top = {top}"),
                "bottom must be smaller than top",
            ));
        }
        Self::check_depth_range(near, far)?;
        Ok(Self::Orthographic {
            left,
            right,
            bottom,
            top,
            near,
            far,
        })
    }

    fn check_depth_range(near: f64, far: f64) -> Result<(), CameraParameterError> {
        if near <= 0.0 {
            return Err(CameraParameterError::new(
                format!("near = {near}"),
                "near plane must be positive",
            ));
        }
        if near >= far {
            return Err(CameraParameterError::new(
                format!("near = {near}, far = {far}"),
                "near plane must be closer than the far plane",
            ));
        }
        Ok(())
    }

    /// The GL-convention projection matrix (clip z in [-1, 1]).
    pub fn matrix(&self) -> DMat4 {
        match *self {
            Self::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => DMat4::perspective_rh_gl(fov_y.to_radians(), aspect, near, far),
            Self::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => DMat4::orthographic_rh_gl(left, right, bottom, top, near, far),
        }
    }
}
