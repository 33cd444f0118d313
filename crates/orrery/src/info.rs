//! Descriptive info query for presentation layers.

use std::fmt;

use crate::body::{BodyId, Bodies};

/// Display name, type label and fact sheet of one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInfo {
    pub name: String,
    pub kind: &'static str,
    pub stats: Vec<(&'static str, &'static str)>,
    pub facts: Vec<&'static str>,
    /// Current distance from the sun, for comets.
    pub sun_distance: Option<f64>,
}

impl BodyInfo {
    pub fn of(bodies: &Bodies, id: BodyId) -> Option<Self> {
        let body = bodies.get(id)?;
        Some(Self {
            name: body.name.clone(),
            kind: body.kind.label(),
            stats: body.facts.stats.to_vec(),
            facts: body.facts.facts.to_vec(),
            sun_distance: body.comet().map(|c| c.orbit.distance()),
        })
    }
}

impl fmt::Display for BodyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.kind)?;
        for (label, value) in &self.stats {
            writeln!(f, "  {label}: {value}")?;
        }
        if let Some(distance) = self.sun_distance {
            writeln!(f, "  Distance from Sun: {distance:.1} units")?;
        }
        for fact in &self.facts {
            writeln!(f, "  - {fact}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn info_carries_the_fact_sheet() {
        let bodies = Bodies::from_catalog(&catalog::solar_system(), &catalog::comets()).unwrap();
        let earth = BodyInfo::of(&bodies, bodies.find("Earth").unwrap()).unwrap();
        assert_eq!(earth.kind, "Planet");
        assert!(!earth.stats.is_empty());
        assert!(!earth.facts.is_empty());
        assert_eq!(earth.sun_distance, None);
        assert!(earth.to_string().starts_with("Earth (Planet)\n"));

        let halley = BodyInfo::of(&bodies, bodies.find("Halley's Comet").unwrap()).unwrap();
        assert_eq!(halley.kind, "Comet");
        assert!(halley.sun_distance.is_some());
        assert!(halley.to_string().contains("Distance from Sun"));
    }

    #[test]
    fn unknown_id_has_no_info() {
        let bodies = Bodies::new();
        assert_eq!(BodyInfo::of(&bodies, BodyId(0)), None);
    }
}
