//! Canopy Core Types
//!
//! Foundational value types shared by the Canopy crates:
//!
//! - **Identifiers**: string-interned node identifiers ([`identifier::Id`])
//! - **Geometry**: node extents and horizontal spans ([`geometry`] module)

pub mod geometry;
pub mod identifier;
