//! # drape-contact
//!
//! Collision response for cloth particles.
//!
//! The only collider is an analytical sphere owned by the caller and
//! passed to the solver every substep. Response is a direct position
//! correction applied to predicted positions during constraint projection.

pub mod response;
pub mod sphere;

pub use response::ContactResult;
pub use sphere::SphereCollider;
