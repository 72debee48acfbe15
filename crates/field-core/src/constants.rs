//! Fixed constants for the backdrop particle field
//!
//! Units are world units of the scene; the camera sits 8 units from the origin.

/// Number of particles generated at startup
pub const PARTICLE_COUNT: usize = 800;

/// Half-extent of the cube particles are sampled in
pub const FIELD_HALF_EXTENT: f32 = 10.0;

/// Smallest particle size
pub const MIN_PARTICLE_SIZE: f32 = 0.5;

/// Largest particle size
pub const MAX_PARTICLE_SIZE: f32 = 2.5;

/// Pairs closer than this get a connecting line
pub const CONNECTION_DISTANCE: f32 = 1.5;

/// Hard cap on emitted connections
pub const MAX_CONNECTIONS: usize = 200;

/// Tumble increment about the Y axis, radians per frame
pub const SPIN_Y_PER_FRAME: f32 = 0.0005;

/// Tumble increment about the X axis, radians per frame
pub const SPIN_X_PER_FRAME: f32 = 0.0002;

/// Fraction of the remaining distance the camera covers each frame
pub const CAMERA_PURSUIT_RATE: f32 = 0.02;

/// Horizontal parallax: camera x target = pointer x * this
pub const PARALLAX_X: f32 = 0.5;

/// Vertical parallax: camera y target = pointer y * this
pub const PARALLAX_Y: f32 = 0.3;

/// Initial camera distance along +Z
pub const CAMERA_DISTANCE: f32 = 8.0;

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Opacity of particle points (additively blended)
pub const POINT_OPACITY: f32 = 0.6;

/// World-space radius of a point per unit of particle size
pub const POINT_SCALE: f32 = 0.015;

/// Opacity of connection lines
pub const LINE_OPACITY: f32 = 0.08;
