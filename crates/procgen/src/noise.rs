//! Seeded simplex noise with fractal composites.
//!
//! The permutation table is built by a Park–Miller style shuffle of the identity
//! table 0..255, so the same seed yields the same table in any implementation of
//! the algorithm. Integer seeds collapse the shuffle into a rotation of the identity
//! table (the first product is a multiple of the modulus); that behaviour is kept
//! so textures stay comparable with other renditions of the generator.

use noise::NoiseFn;

const MODULUS: f64 = 2_147_483_647.0;
const MULTIPLIER: f64 = 16_807.0;

const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Deterministic 2D/3D simplex noise. Immutable after construction.
#[derive(Clone)]
pub struct SimplexNoise {
    perm: [u8; 512],
    perm_mod12: [u8; 512],
}

impl std::fmt::Debug for SimplexNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexNoise")
            .field("perm_head", &&self.perm[..8])
            .finish()
    }
}

impl SimplexNoise {
    /// Build the permutation table for `seed`.
    pub fn new(seed: f64) -> Self {
        let mut p = [0u8; 256];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut s = seed * MODULUS;
        for i in (1..256usize).rev() {
            s = (s * MULTIPLIER) % MODULUS;
            let j = (s % (i as f64 + 1.0)) as usize;
            p.swap(i, j.min(i));
        }

        let mut perm = [0u8; 512];
        let mut perm_mod12 = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
            perm_mod12[i] = perm[i] % 12;
        }

        Self { perm, perm_mod12 }
    }

    /// The permutation entry at `index` (0..512).
    pub fn permutation(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }

    #[inline]
    fn perm_at(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    #[inline]
    fn grad_index(&self, index: usize) -> usize {
        self.perm_mod12[index] as usize
    }

    /// 2D simplex noise, roughly in [-1, 1].
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        let f2 = 0.5 * (3f64.sqrt() - 1.0);
        let g2 = (3.0 - 3f64.sqrt()) / 6.0;

        let s = (x + y) * f2;
        let i = (x + s).floor();
        let j = (y + s).floor();

        let t = (i + j) * g2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + g2;
        let y1 = y0 - j1 as f64 + g2;
        let x2 = x0 - 1.0 + 2.0 * g2;
        let y2 = y0 - 1.0 + 2.0 * g2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let gi0 = self.grad_index(ii + self.perm_at(jj));
        let gi1 = self.grad_index(ii + i1 + self.perm_at(jj + j1));
        let gi2 = self.grad_index(ii + 1 + self.perm_at(jj + 1));

        let corner = |gi: usize, x: f64, y: f64| {
            let t = 0.5 - x * x - y * y;
            if t < 0.0 {
                0.0
            } else {
                let t2 = t * t;
                t2 * t2 * (GRAD3[gi][0] * x + GRAD3[gi][1] * y)
            }
        };

        70.0 * (corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2))
    }

    /// 3D simplex noise, roughly in [-1, 1].
    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        const F3: f64 = 1.0 / 3.0;
        const G3: f64 = 1.0 / 6.0;

        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();

        let t = (i + j + k) * G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + G3;
        let y1 = y0 - j1 as f64 + G3;
        let z1 = z0 - k1 as f64 + G3;
        let x2 = x0 - i2 as f64 + 2.0 * G3;
        let y2 = y0 - j2 as f64 + 2.0 * G3;
        let z2 = z0 - k2 as f64 + 2.0 * G3;
        let x3 = x0 - 1.0 + 3.0 * G3;
        let y3 = y0 - 1.0 + 3.0 * G3;
        let z3 = z0 - 1.0 + 3.0 * G3;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let kk = (k as i64 & 255) as usize;
        let gi0 = self.grad_index(ii + self.perm_at(jj + self.perm_at(kk)));
        let gi1 = self.grad_index(ii + i1 + self.perm_at(jj + j1 + self.perm_at(kk + k1)));
        let gi2 = self.grad_index(ii + i2 + self.perm_at(jj + j2 + self.perm_at(kk + k2)));
        let gi3 = self.grad_index(ii + 1 + self.perm_at(jj + 1 + self.perm_at(kk + 1)));

        let corner = |gi: usize, x: f64, y: f64, z: f64| {
            let t = 0.6 - x * x - y * y - z * z;
            if t < 0.0 {
                0.0
            } else {
                let t2 = t * t;
                let g = GRAD3[gi];
                t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
            }
        };

        32.0 * (corner(gi0, x0, y0, z0)
            + corner(gi1, x1, y1, z1)
            + corner(gi2, x2, y2, z2)
            + corner(gi3, x3, y3, z3))
    }

    /// Fractal Brownian motion, normalised by the total amplitude.
    pub fn fbm(&self, x: f64, y: f64, octaves: u32, lacunarity: f64, persistence: f64) -> f64 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            value += amplitude * self.noise_2d(x * frequency, y * frequency);
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if max_value > 0.0 {
            value / max_value
        } else {
            0.0
        }
    }

    /// `fbm` with lacunarity 2 and persistence 0.5.
    pub fn fbm_default(&self, x: f64, y: f64, octaves: u32) -> f64 {
        self.fbm(x, y, octaves, 2.0, 0.5)
    }

    /// Normalised sum of absolute noise values; always in [0, 1].
    pub fn turbulence(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            value += amplitude * self.noise_2d(x * frequency, y * frequency).abs();
            max_value += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        if max_value > 0.0 {
            value / max_value
        } else {
            0.0
        }
    }

    /// Ridged multifractal: sharp creases where the base noise crosses zero.
    pub fn ridged(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut weight = 1.0;

        for _ in 0..octaves {
            let mut signal = 1.0 - self.noise_2d(x * frequency, y * frequency).abs();
            signal *= signal * weight;
            weight = (signal * 2.0).clamp(0.0, 1.0);
            value += signal * amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        value
    }
}

impl NoiseFn<f64, 2> for SimplexNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.noise_2d(point[0], point[1])
    }
}

impl NoiseFn<f64, 3> for SimplexNoise {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.noise_3d(point[0], point[1], point[2])
    }
}
