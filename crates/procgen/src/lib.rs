//! Procedural generation: seeded noise, planet/moon/ring textures and the star shell.

pub mod moons;
pub mod noise;
pub mod rings;
pub mod starfield;
pub mod surfaces;
pub mod textures;

pub use moons::*;
pub use self::noise::*;
pub use rings::*;
pub use starfield::*;
pub use surfaces::*;
pub use textures::*;
