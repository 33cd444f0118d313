//! Static descriptors for every body in the default solar system.
//!
//! Distances and sizes are artistic rather than to scale. Angular rates are radians per
//! simulated second; negative rates are retrograde.

use crate::body::BodyKind;

/// Display statistics and trivia shown in the info panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactSheet {
    /// Label/value rows, e.g. `("Diameter", "12,742 km")`.
    pub stats: &'static [(&'static str, &'static str)],
    pub facts: &'static [&'static str],
}

impl FactSheet {
    pub const EMPTY: FactSheet = FactSheet { stats: &[], facts: &[] };

    pub fn stat(&self, label: &str) -> Option<&'static str> {
        self.stats.iter().find(|(l, _)| *l == label).map(|(_, v)| *v)
    }
}

/// Ring system attached to a planet.
#[derive(Debug, Clone, PartialEq)]
pub struct RingDescriptor {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Radial palette; a single entry tints the whole ring.
    pub colors: Vec<u32>,
    pub opacity: f32,
}

/// A body on a circular orbit (or the fixed sun at the origin).
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDescriptor {
    pub name: &'static str,
    pub kind: BodyKind,
    pub radius: f32,
    /// Orbit radius around the parent (or the sun).
    pub distance: f64,
    pub height: f64,
    pub orbit_speed: f64,
    pub rotation_speed: f64,
    pub color: u32,
    pub inclination_deg: f64,
    pub axial_tilt_deg: f64,
    /// Name of the body this one orbits; `None` orbits the origin.
    pub parent: Option<&'static str>,
    pub atmosphere: Option<u32>,
    pub clouds: bool,
    pub rings: Option<RingDescriptor>,
    pub facts: FactSheet,
}

impl BodyDescriptor {
    fn new(name: &'static str, kind: BodyKind, radius: f32, color: u32) -> Self {
        Self {
            name,
            kind,
            radius,
            distance: 0.0,
            height: 0.0,
            orbit_speed: 0.0,
            rotation_speed: 0.0,
            color,
            inclination_deg: 0.0,
            axial_tilt_deg: 0.0,
            parent: None,
            atmosphere: None,
            clouds: false,
            rings: None,
            facts: FactSheet::EMPTY,
        }
    }

    pub fn orbiting(mut self, distance: f64, orbit_speed: f64, rotation_speed: f64) -> Self {
        self.distance = distance;
        self.orbit_speed = orbit_speed;
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn inclined(mut self, degrees: f64) -> Self {
        self.inclination_deg = degrees;
        self
    }

    pub fn tilted(mut self, degrees: f64) -> Self {
        self.axial_tilt_deg = degrees;
        self
    }

    pub fn around(mut self, parent: &'static str) -> Self {
        self.parent = Some(parent);
        self
    }

    fn with_atmosphere(mut self, color: u32) -> Self {
        self.atmosphere = Some(color);
        self
    }

    fn with_clouds(mut self) -> Self {
        self.clouds = true;
        self
    }

    fn with_rings(mut self, rings: RingDescriptor) -> Self {
        self.rings = Some(rings);
        self
    }

    fn with_facts(mut self, facts: FactSheet) -> Self {
        self.facts = facts;
        self
    }
}

/// A comet on an elliptical orbit around the sun.
#[derive(Debug, Clone, PartialEq)]
pub struct CometDescriptor {
    pub name: &'static str,
    pub radius: f32,
    pub perihelion: f64,
    pub aphelion: f64,
    pub orbit_speed: f64,
    pub color: u32,
    pub tail_color: u32,
    pub dust_tail_color: u32,
    pub inclination_deg: f64,
    pub start_angle: f64,
    pub facts: FactSheet,
}

pub const SUN_RADIUS: f32 = 50.0;
pub const SUN_SPIN: f64 = 0.02;

pub fn sun() -> BodyDescriptor {
    // The sun spins on wall-clock time, independent of the time scale.
    BodyDescriptor::new("Sun", BodyKind::Star, SUN_RADIUS, 0xffdd00)
        .orbiting(0.0, 0.0, SUN_SPIN)
        .with_facts(FactSheet {
            stats: &[
                ("Diameter", "1,392,700 km"),
                ("Mass", "1.989 × 10³⁰ kg"),
                ("Temperature", "5,500°C (surface)"),
                ("Age", "4.6 billion years"),
                ("Type", "Yellow dwarf (G2V)"),
            ],
            facts: &[
                "Holds 99.86% of the mass of the Solar System",
                "Sunlight reaches Earth in about 8 minutes",
                "Fuses 600 million tonnes of hydrogen every second",
            ],
        })
}

pub fn planets() -> Vec<BodyDescriptor> {
    use BodyKind::Planet;
    vec![
        BodyDescriptor::new("Mercury", Planet, 2.4, 0x8c8c8c)
            .orbiting(80.0, 0.04, 0.005)
            .inclined(7.0)
            .tilted(0.03)
            .with_facts(FactSheet {
                stats: &[
                    ("Diameter", "4,879 km"),
                    ("Mass", "3.285 × 10²³ kg"),
                    ("Day", "59 Earth days"),
                    ("Year", "88 Earth days"),
                    ("Moons", "0"),
                ],
                facts: &[
                    "Smallest planet in the Solar System",
                    "Ranges from +430°C by day to -180°C by night",
                    "Has no atmosphere and no moons",
                ],
            }),
        BodyDescriptor::new("Venus", Planet, 4.5, 0xe6c35c)
            .orbiting(120.0, 0.015, -0.002)
            .inclined(3.4)
            .tilted(177.4)
            .with_atmosphere(0xffd27f)
            .with_facts(FactSheet {
                stats: &[
                    ("Diameter", "12,104 km"),
                    ("Mass", "4.867 × 10²⁴ kg"),
                    ("Day", "243 Earth days"),
                    ("Year", "225 Earth days"),
                    ("Moons", "0"),
                ],
                facts: &[
                    "Rotates backwards",
                    "Hottest planet at +465°C",
                    "Surface pressure is 90 times Earth's",
                ],
            }),
        BodyDescriptor::new("Earth", Planet, 5.0, 0x6b93d6)
            .orbiting(170.0, 0.01, 0.02)
            .tilted(23.4)
            .with_atmosphere(0x87ceeb)
            .with_clouds()
            .with_facts(FactSheet {
                stats: &[
                    ("Diameter", "12,742 km"),
                    ("Mass", "5.972 × 10²⁴ kg"),
                    ("Day", "24 hours"),
                    ("Year", "365.25 days"),
                    ("Moons", "1"),
                ],
                facts: &[
                    "The only planet known to host life",
                    "Water covers 71% of the surface",
                    "Its magnetic field shields it from the solar wind",
                ],
            }),
        BodyDescriptor::new("Mars", Planet, 3.5, 0xc1440e)
            .orbiting(230.0, 0.008, 0.018)
            .inclined(1.9)
            .tilted(25.2)
            .with_facts(FactSheet {
                stats: &[
                    ("Diameter", "6,779 km"),
                    ("Mass", "6.39 × 10²³ kg"),
                    ("Day", "24.6 hours"),
                    ("Year", "687 Earth days"),
                    ("Moons", "2"),
                ],
                facts: &[
                    "Known as the Red Planet",
                    "Home to Olympus Mons, the tallest volcano (21.9 km)",
                    "Both poles carry ice caps",
                ],
            }),
        BodyDescriptor::new("Jupiter", Planet, 20.0, 0xd8ca9d)
            .orbiting(350.0, 0.002, 0.04)
            .inclined(1.3)
            .tilted(3.1)
            .with_atmosphere(0x88ccff)
            .with_facts(FactSheet {
                stats: &[
                    ("Diameter", "139,820 km"),
                    ("Mass", "1.898 × 10²⁷ kg"),
                    ("Day", "9.9 hours"),
                    ("Year", "11.86 Earth years"),
                    ("Moons", "95"),
                ],
                facts: &[
                    "Largest planet in the Solar System",
                    "The Great Red Spot is a storm twice the size of Earth",
                    "Has 95 known moons",
                ],
            }),
        BodyDescriptor::new("Saturn", Planet, 17.0, 0xead6b8)
            .orbiting(480.0, 0.0009, 0.038)
            .inclined(2.5)
            .tilted(26.7)
            .with_atmosphere(0x88ccff)
            .with_rings(RingDescriptor {
                inner_radius: 22.0,
                outer_radius: 40.0,
                colors: vec![0xc9b896, 0xa67c52, 0xd4c4a8, 0x8b6914, 0xf5deb3],
                opacity: 1.0,
            })
            .with_facts(FactSheet {
                stats: &[
                    ("Diameter", "116,460 km"),
                    ("Mass", "5.683 × 10²⁶ kg"),
                    ("Day", "10.7 hours"),
                    ("Year", "29.46 Earth years"),
                    ("Moons", "146"),
                ],
                facts: &[
                    "Famous for its rings of ice and rock",
                    "Less dense than water",
                    "The rings span 282,000 km",
                ],
            }),
        BodyDescriptor::new("Uranus", Planet, 10.0, 0xd1e7e7)
            .orbiting(620.0, 0.0004, -0.03)
            .inclined(0.8)
            .tilted(97.8)
            .with_atmosphere(0x88ccff)
            .with_rings(RingDescriptor {
                inner_radius: 14.0,
                outer_radius: 25.0,
                colors: vec![0x666666],
                opacity: 0.2,
            })
            .with_facts(FactSheet {
                stats: &[
                    ("Diameter", "50,724 km"),
                    ("Mass", "8.681 × 10²⁵ kg"),
                    ("Day", "17.2 hours"),
                    ("Year", "84 Earth years"),
                    ("Moons", "28"),
                ],
                facts: &[
                    "Rolls around the Sun on its side (98° tilt)",
                    "Coldest atmosphere of any planet (-224°C)",
                    "Has 13 faint rings",
                ],
            }),
        BodyDescriptor::new("Neptune", Planet, 9.5, 0x5b5ddf)
            .orbiting(770.0, 0.0001, 0.032)
            .inclined(1.8)
            .tilted(28.3)
            .with_atmosphere(0x88ccff)
            .with_rings(RingDescriptor {
                inner_radius: 13.3,
                outer_radius: 23.75,
                colors: vec![0x444466],
                opacity: 0.15,
            })
            .with_facts(FactSheet {
                stats: &[
                    ("Diameter", "49,244 km"),
                    ("Mass", "1.024 × 10²⁶ kg"),
                    ("Day", "16.1 hours"),
                    ("Year", "164.8 Earth years"),
                    ("Moons", "16"),
                ],
                facts: &[
                    "Fastest winds in the Solar System (2,100 km/h)",
                    "Predicted mathematically before it was observed",
                    "Hosts the Great Dark Spot",
                ],
            }),
    ]
}

pub fn dwarf_planets() -> Vec<BodyDescriptor> {
    use BodyKind::DwarfPlanet;
    vec![
        BodyDescriptor::new("Pluto", DwarfPlanet, 1.8, 0xc2b280)
            .orbiting(900.0, 0.00004, 0.008)
            .inclined(17.2)
            .tilted(122.5)
            .with_facts(FactSheet {
                stats: &[
                    ("Diameter", "2,377 km"),
                    ("Mass", "1.303 × 10²² kg"),
                    ("Day", "6.4 Earth days"),
                    ("Year", "248 Earth years"),
                    ("Moons", "5"),
                ],
                facts: &[
                    "Counted as a planet until 2006",
                    "Has a large companion, Charon",
                    "Its surface carries a nitrogen-ice \"heart\"",
                ],
            }),
        BodyDescriptor::new("Ceres", DwarfPlanet, 0.9, 0x9f9f9f)
            .orbiting(290.0, 0.004, 0.03)
            .inclined(10.6)
            .with_facts(FactSheet {
                stats: &[
                    ("Diameter", "946 km"),
                    ("Mass", "9.39 × 10²⁰ kg"),
                    ("Day", "9.1 hours"),
                    ("Year", "4.6 Earth years"),
                    ("Moons", "0"),
                ],
                facts: &[
                    "Largest object in the asteroid belt",
                    "Holds a third of the belt's mass",
                    "May hide a subsurface ocean",
                ],
            }),
    ]
}

fn moon(
    name: &'static str,
    parent: &'static str,
    radius: f32,
    distance: f64,
    orbit_speed: f64,
    color: u32,
    facts: FactSheet,
) -> BodyDescriptor {
    // Moons are tidally locked: spin matches the orbital rate.
    BodyDescriptor::new(name, BodyKind::Moon, radius, color)
        .orbiting(distance, orbit_speed, orbit_speed.abs())
        .around(parent)
        .with_facts(facts)
}

pub fn moons() -> Vec<BodyDescriptor> {
    vec![
        moon("Moon", "Earth", 1.5, 12.0, 0.05, 0xaaaaaa, FactSheet {
            stats: &[("Diameter", "3,474 km"), ("Mass", "7.342 × 10²² kg"), ("Orbital period", "27.3 days")],
            facts: &[
                "Earth's only natural satellite",
                "Always shows the same face to Earth",
                "Twelve people have walked on its surface",
            ],
        }),
        moon("Phobos", "Mars", 0.3, 5.0, 0.15, 0x7a6a5a, FactSheet {
            stats: &[("Diameter", "22.2 km"), ("Orbital period", "7.7 hours")],
            facts: &["Spirals inward and will break up within 50 million years"],
        }),
        moon("Deimos", "Mars", 0.2, 8.0, 0.05, 0x8b7355, FactSheet {
            stats: &[("Diameter", "12.4 km"), ("Orbital period", "30.3 hours")],
            facts: &["One of the smallest known moons in the Solar System"],
        }),
        moon("Io", "Jupiter", 1.6, 28.0, 0.08, 0xffff00, FactSheet {
            stats: &[("Diameter", "3,643 km"), ("Orbital period", "1.77 days")],
            facts: &["Most volcanically active body in the Solar System", "More than 400 active volcanoes"],
        }),
        moon("Europa", "Jupiter", 1.4, 35.0, 0.05, 0xf5f5dc, FactSheet {
            stats: &[("Diameter", "3,122 km"), ("Orbital period", "3.55 days")],
            facts: &["An ocean may lie beneath its ice crust", "A leading candidate in the search for life"],
        }),
        moon("Ganymede", "Jupiter", 2.2, 45.0, 0.03, 0x9f9f9f, FactSheet {
            stats: &[("Diameter", "5,268 km"), ("Orbital period", "7.15 days")],
            facts: &["Largest moon in the Solar System", "Bigger than the planet Mercury"],
        }),
        moon("Callisto", "Jupiter", 2.0, 55.0, 0.02, 0x696969, FactSheet {
            stats: &[("Diameter", "4,821 km"), ("Orbital period", "16.7 days")],
            facts: &["Most heavily cratered surface in the Solar System", "May have a subsurface ocean"],
        }),
        moon("Titan", "Saturn", 2.3, 50.0, 0.02, 0xdaa520, FactSheet {
            stats: &[("Diameter", "5,150 km"), ("Orbital period", "16 days")],
            facts: &["The only moon with a dense atmosphere", "Has lakes and rivers of liquid methane"],
        })
        .with_atmosphere(0xffa500),
        moon("Enceladus", "Saturn", 0.6, 35.0, 0.06, 0xffffff, FactSheet {
            stats: &[("Diameter", "504 km"), ("Orbital period", "1.37 days")],
            facts: &["Vents geysers of water into space", "A salty ocean lies under the ice"],
        }),
        moon("Mimas", "Saturn", 0.4, 28.0, 0.09, 0xc0c0c0, FactSheet {
            stats: &[("Diameter", "396 km"), ("Orbital period", "22.6 hours")],
            facts: &["The giant Herschel crater makes it look like the Death Star"],
        }),
        moon("Dione", "Saturn", 0.7, 40.0, 0.04, 0xe8e8e8, FactSheet {
            stats: &[("Diameter", "1,123 km"), ("Orbital period", "2.74 days")],
            facts: &["Made mostly of water ice"],
        }),
        moon("Rhea", "Saturn", 0.9, 45.0, 0.03, 0xdcdcdc, FactSheet {
            stats: &[("Diameter", "1,527 km"), ("Orbital period", "4.52 days")],
            facts: &["Saturn's second-largest moon"],
        }),
        moon("Titania", "Uranus", 0.9, 18.0, 0.04, 0xb0b0b0, FactSheet {
            stats: &[("Diameter", "1,578 km"), ("Orbital period", "8.7 days")],
            facts: &["Largest moon of Uranus"],
        }),
        moon("Oberon", "Uranus", 0.85, 22.0, 0.03, 0xa0a0a0, FactSheet {
            stats: &[("Diameter", "1,523 km"), ("Orbital period", "13.5 days")],
            facts: &["Second-largest moon of Uranus"],
        }),
        moon("Miranda", "Uranus", 0.4, 12.0, 0.07, 0xc8c8c8, FactSheet {
            stats: &[("Diameter", "472 km"), ("Orbital period", "1.4 days")],
            facts: &["Has the most varied terrain in the Solar System"],
        }),
        moon("Triton", "Neptune", 1.2, 16.0, -0.04, 0xffb6c1, FactSheet {
            stats: &[("Diameter", "2,707 km"), ("Orbital period", "5.9 days")],
            facts: &[
                "The only large moon on a retrograde orbit",
                "Probably a captured Kuiper belt object",
                "Erupts nitrogen geysers",
            ],
        }),
        moon("Charon", "Pluto", 1.0, 6.0, 0.05, 0x808080, FactSheet {
            stats: &[("Diameter", "1,212 km"), ("Orbital period", "6.4 days")],
            facts: &[
                "So large that Pluto and Charon orbit a shared centre",
                "Sometimes called a double dwarf planet",
            ],
        }),
    ]
}

pub fn satellites() -> Vec<BodyDescriptor> {
    vec![BodyDescriptor::new("Hubble", BodyKind::Satellite, 0.05, 0xcccccc)
        .orbiting(5.21, 0.1, 0.1)
        .around("Earth")
        .with_facts(FactSheet {
            stats: &[
                ("Size", "13.2 m"),
                ("Mass", "11,110 kg"),
                ("Altitude", "540 km"),
                ("Orbital period", "95 minutes"),
                ("Launched", "24 April 1990"),
            ],
            facts: &[
                "The first large optical space telescope",
                "Has made more than 1.5 million observations",
                "Helped pin down the age of the Universe (~13.8 billion years)",
                "Named after the astronomer Edwin Hubble",
            ],
        })]
}

pub fn comets() -> Vec<CometDescriptor> {
    use std::f64::consts::PI;
    vec![
        CometDescriptor {
            name: "Halley's Comet",
            radius: 0.8,
            perihelion: 90.0,
            aphelion: 1000.0,
            orbit_speed: 0.001,
            color: 0xcccccc,
            tail_color: 0x88ccff,
            dust_tail_color: 0xffffcc,
            inclination_deg: 162.0,
            start_angle: 0.0,
            facts: FactSheet {
                stats: &[
                    ("Diameter", "11 km"),
                    ("Orbital period", "75-76 years"),
                    ("Last perihelion", "1986"),
                    ("Next perihelion", "2061"),
                ],
                facts: &[
                    "The best-known periodic comet",
                    "Observed since antiquity",
                    "Named after Edmond Halley",
                ],
            },
        },
        CometDescriptor {
            name: "Comet Hale-Bopp",
            radius: 1.2,
            perihelion: 130.0,
            aphelion: 1200.0,
            orbit_speed: 0.0005,
            color: 0xe0e0e0,
            tail_color: 0x6699ff,
            dust_tail_color: 0xffeecc,
            inclination_deg: 89.0,
            start_angle: PI * 0.7,
            facts: FactSheet {
                stats: &[("Diameter", "40-80 km"), ("Orbital period", "~2,533 years"), ("Last perihelion", "1997")],
                facts: &[
                    "One of the brightest comets of the 20th century",
                    "Visible to the naked eye for 18 months",
                    "Its nucleus is ten times larger than a typical comet's",
                ],
            },
        },
        CometDescriptor {
            name: "Comet Encke",
            radius: 0.4,
            perihelion: 70.0,
            aphelion: 350.0,
            orbit_speed: 0.008,
            color: 0xaaaaaa,
            tail_color: 0x99bbff,
            dust_tail_color: 0xffddaa,
            inclination_deg: 12.0,
            start_angle: PI * 1.3,
            facts: FactSheet {
                stats: &[("Diameter", "4.8 km"), ("Orbital period", "3.3 years")],
                facts: &["Shortest known orbital period of any comet", "Parent of the Taurid meteor shower"],
            },
        },
        CometDescriptor {
            name: "Comet 67P",
            radius: 0.5,
            perihelion: 160.0,
            aphelion: 500.0,
            orbit_speed: 0.003,
            color: 0x888888,
            tail_color: 0x7799dd,
            dust_tail_color: 0xeeddbb,
            inclination_deg: 7.0,
            start_angle: PI * 0.3,
            facts: FactSheet {
                stats: &[("Diameter", "4.3 km"), ("Orbital period", "6.45 years")],
                facts: &[
                    "Explored by the Rosetta spacecraft",
                    "First landing on a comet nucleus (2014)",
                    "Shaped like a rubber duck",
                ],
            },
        },
    ]
}

/// Sun, planets, dwarf planets, moons and satellites, parents before children.
pub fn solar_system() -> Vec<BodyDescriptor> {
    let mut bodies = vec![sun()];
    bodies.extend(planets());
    bodies.extend(dwarf_planets());
    bodies.extend(moons());
    bodies.extend(satellites());
    bodies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_child_names_an_existing_host() {
        let bodies = solar_system();
        for body in bodies.iter().filter(|b| b.parent.is_some()) {
            let parent = body.parent.unwrap_or_default();
            let host = bodies.iter().find(|b| b.name == parent);
            assert!(host.is_some_and(|h| h.kind.can_host()), "{} -> {}", body.name, parent);
        }
    }

    #[test]
    fn counts() {
        assert_eq!(planets().len(), 8);
        assert_eq!(dwarf_planets().len(), 2);
        assert_eq!(moons().len(), 17);
        assert_eq!(satellites().len(), 1);
        assert_eq!(comets().len(), 4);
        assert_eq!(solar_system().len(), 1 + 8 + 2 + 17 + 1);
    }

    #[test]
    fn triton_orbits_backwards_but_spins_forwards() {
        let triton = moons().into_iter().find(|m| m.name == "Triton");
        let triton = triton.expect("Triton in catalog");
        assert!(triton.orbit_speed < 0.0);
        assert!(triton.rotation_speed > 0.0);
    }

    #[test]
    fn fact_lookup_by_label() {
        assert_eq!(sun().facts.stat("Age"), Some("4.6 billion years"));
        assert_eq!(FactSheet::EMPTY.stat("Age"), None);
    }
}
