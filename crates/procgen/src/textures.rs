//! RGBA pixel buffers and the 2D painting primitives the surface painters draw with.
//!
//! Coordinates are in pixels with the origin at the top-left corner. Shapes wrap
//! horizontally so stamps near the seam continue on the other side of an
//! equirectangular map; rows outside the buffer are clipped.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use rand::Rng;

/// RGBA pixel
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque colour from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Colour with a fractional alpha.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self::rgb(r, g, b).with_alpha(alpha)
    }

    /// Integer channels clamped into 0..=255, as canvas colour strings behave.
    pub fn clamped(r: i32, g: i32, b: i32, alpha: f32) -> Self {
        let c = |v: i32| v.clamp(0, 255) as u8;
        Self::rgba(c(r), c(g), c(b), alpha)
    }

    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
        Self {
            r: q(r),
            g: q(g),
            b: q(b),
            a: q(a),
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    pub fn rgb_bytes(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Straight-alpha interpolation between two colours.
    pub fn lerp(self, other: Pixel, t: f32) -> Pixel {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Pixel::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Composite `src` over `self` ("source-over").
    pub fn blend_over(self, src: Pixel) -> Pixel {
        if src.a == 255 {
            return src;
        }
        if src.a == 0 {
            return self;
        }
        let sa = src.a as f32 / 255.0;
        let da = self.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let channel = |s: u8, d: u8| {
            let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        Pixel::new(
            channel(src.r, self.r),
            channel(src.g, self.g),
            channel(src.b, self.b),
            (out_a * 255.0).round() as u8,
        )
    }

    /// Add `delta` (in channel units) to r, g and b, saturating.
    pub fn brighten(self, delta: f32) -> Pixel {
        let c = |v: u8| (v as f32 + delta).round().clamp(0.0, 255.0) as u8;
        Pixel::new(c(self.r), c(self.g), c(self.b), self.a)
    }
}

/// Colour stops for gradients: `(offset in 0..=1, colour)`, sorted by offset.
pub type ColorStops = Vec<(f32, Pixel)>;

fn stop_color(stops: &[(f32, Pixel)], t: f32) -> Pixel {
    let Some(&(first_t, first)) = stops.first() else {
        return Pixel::TRANSPARENT;
    };
    if t <= first_t {
        return first;
    }
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let span = t1 - t0;
            let local = if span > 0.0 { (t - t0) / span } else { 1.0 };
            return c0.lerp(c1, local);
        }
    }
    stops.last().map(|&(_, c)| c).unwrap_or(first)
}

/// What a shape is filled or stroked with.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    Solid(Pixel),
    /// Gradient along the segment `from -> to`.
    Linear { from: Vec2, to: Vec2, stops: ColorStops },
    /// Gradient from `center` outwards to `radius`.
    Radial {
        center: Vec2,
        radius: f32,
        stops: ColorStops,
    },
}

impl Brush {
    pub fn linear(from: Vec2, to: Vec2, stops: &[(f32, Pixel)]) -> Self {
        Brush::Linear {
            from,
            to,
            stops: stops.to_vec(),
        }
    }

    pub fn radial(center: Vec2, radius: f32, stops: &[(f32, Pixel)]) -> Self {
        Brush::Radial {
            center,
            radius,
            stops: stops.to_vec(),
        }
    }

    /// Colour of the brush at pixel-space point `p`.
    pub fn color_at(&self, p: Vec2) -> Pixel {
        match self {
            Brush::Solid(c) => *c,
            Brush::Linear { from, to, stops } => {
                let axis = *to - *from;
                let len_sq = axis.length_squared();
                let t = if len_sq > 0.0 {
                    (p - *from).dot(axis) / len_sq
                } else {
                    0.0
                };
                stop_color(stops, t.clamp(0.0, 1.0))
            }
            Brush::Radial {
                center,
                radius,
                stops,
            } => {
                let t = if *radius > 0.0 {
                    p.distance(*center) / radius
                } else {
                    1.0
                };
                stop_color(stops, t.clamp(0.0, 1.0))
            }
        }
    }
}

impl From<Pixel> for Brush {
    fn from(color: Pixel) -> Self {
        Brush::Solid(color)
    }
}

/// Generated texture data
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pixel>,
}

impl TextureData {
    /// A fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = pixel;
        }
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Pixel::TRANSPARENT
        }
    }

    /// Nearest-neighbour lookup with UV wrap.
    pub fn sample(&self, u: f32, v: f32) -> Pixel {
        if self.width == 0 || self.height == 0 {
            return Pixel::TRANSPARENT;
        }
        let x = ((u.fract() + 1.0).fract() * self.width as f32) as u32 % self.width;
        let y = ((v.fract() + 1.0).fract() * self.height as f32) as u32 % self.height;
        self.get_pixel(x, y)
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Composite `color` over the pixel at `(x, y)`; x wraps, y clips.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        if self.width == 0 || y < 0 || y >= self.height as i32 {
            return;
        }
        let x = x.rem_euclid(self.width as i32) as u32;
        let idx = (y as u32 * self.width + x) as usize;
        self.pixels[idx] = self.pixels[idx].blend_over(color);
    }

    /// Paint every pixel whose centre lies inside `covers`, within the pixel bounds `min..max`.
    ///
    /// Each pixel is blended at most once, so overlapping parts of one shape do not
    /// darken.
    pub fn fill_shape(&mut self, min: Vec2, max: Vec2, brush: &Brush, covers: impl Fn(Vec2) -> bool) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let x0 = min.x.floor() as i32;
        let x1 = (max.x.ceil() as i32).min(x0 + self.width as i32 - 1);
        let y0 = (min.y.floor() as i32).max(0);
        let y1 = (max.y.ceil() as i32).min(self.height as i32 - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let centre = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if covers(centre) {
                    let color = brush.color_at(centre);
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    pub fn fill(&mut self, brush: &Brush) {
        let (w, h) = (self.width as f32, self.height as f32);
        self.fill_rect(0.0, 0.0, w, h, brush);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, brush: &Brush) {
        let min = Vec2::new(x, y);
        let max = Vec2::new(x + w, y + h);
        self.fill_shape(min, max, brush, |p| {
            p.x >= min.x && p.x < max.x && p.y >= min.y && p.y < max.y
        });
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, brush: &Brush) {
        let r = Vec2::splat(radius);
        self.fill_shape(center - r, center + r, brush, |p| {
            p.distance_squared(center) <= radius * radius
        });
    }

    /// Filled ellipse with semi-axes `radii`, rotated by `rotation` radians.
    pub fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, brush: &Brush) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }
        let extent = Vec2::splat(radii.x.max(radii.y));
        let (sin, cos) = rotation.sin_cos();
        self.fill_shape(center - extent, center + extent, brush, |p| {
            let d = p - center;
            let local = Vec2::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos);
            (local.x / radii.x).powi(2) + (local.y / radii.y).powi(2) <= 1.0
        });
    }

    /// Circle outline of line width `width`.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, brush: &Brush) {
        let half = width * 0.5;
        let r = Vec2::splat(radius + half);
        self.fill_shape(center - r, center + r, brush, |p| {
            (p.distance(center) - radius).abs() <= half
        });
    }

    /// Open polyline of line width `width` with round joins.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, brush: &Brush) {
        let Some((min, max)) = bounds(points) else {
            return;
        };
        let half = width * 0.5;
        let pad = Vec2::splat(half);
        self.fill_shape(min - pad, max + pad, brush, |p| {
            if points.len() == 1 {
                return p.distance(points[0]) <= half;
            }
            points
                .windows(2)
                .any(|seg| distance_to_segment(p, seg[0], seg[1]) <= half)
        });
    }

    /// Filled polygon (non-zero winding).
    pub fn fill_polygon(&mut self, points: &[Vec2], brush: &Brush) {
        if points.len() < 3 {
            return;
        }
        let Some((min, max)) = bounds(points) else {
            return;
        };
        self.fill_shape(min, max, brush, |p| winding_number(points, p) != 0);
    }

    /// Add uniform per-pixel grain of `±intensity/2` (fraction of full scale) to r, g and b.
    pub fn add_grain(&mut self, rng: &mut impl Rng, intensity: f32) {
        for pixel in &mut self.pixels {
            let delta = (rng.gen::<f32>() - 0.5) * intensity * 255.0;
            *pixel = pixel.brighten(delta);
        }
    }
}

fn bounds(points: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
    )
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn winding_number(poly: &[Vec2], p: Vec2) -> i32 {
    let mut winding = 0;
    for i in 0..poly.len() {
        let a = poly[i];
        let b = poly[(i + 1) % poly.len()];
        let cross = (b - a).perp_dot(p - a);
        if a.y <= p.y {
            if b.y > p.y && cross > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && cross < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Polyline builder with cubic Bézier segments, flattened on the fly.
#[derive(Debug, Clone)]
pub struct Path {
    points: Vec<Vec2>,
}

impl Path {
    const BEZIER_STEPS: usize = 16;

    pub fn new(start: Vec2) -> Self {
        Self {
            points: vec![start],
        }
    }

    fn last(&self) -> Vec2 {
        self.points.last().copied().unwrap_or(Vec2::ZERO)
    }

    pub fn line_to(mut self, p: Vec2) -> Self {
        self.points.push(p);
        self
    }

    pub fn bezier_to(mut self, c1: Vec2, c2: Vec2, end: Vec2) -> Self {
        let start = self.last();
        for step in 1..=Self::BEZIER_STEPS {
            let t = step as f32 / Self::BEZIER_STEPS as f32;
            self.points.push(cubic_bezier(start, c1, c2, end, t));
        }
        self
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

/// Point on a cubic Bézier curve at parameter `t`.
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}
