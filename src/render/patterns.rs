//! Procedurally generated fallback textures.
//!
//! When a texture override is missing on disk the scene falls back to these
//! generated RGBA patterns, so the demo always has something to sample. All
//! generators are pure functions of their inputs.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Side length of every generated pattern, in pixels.
pub const PATTERN_SIZE: u32 = 256;

const BRICK_WIDTH: u32 = 32;
const BRICK_HEIGHT: u32 = 16;
const MORTAR: u32 = 2;

const MORTAR_COLOR: [u8; 3] = [188, 184, 176];
const BRICK_COLOR: [u8; 3] = [150, 58, 44];

fn shade(base: [u8; 3], offset: i16) -> [u8; 4] {
    let mut pixel = [0u8; 4];
    for (out, channel) in pixel.iter_mut().zip(base) {
        *out = (channel as i16 + offset).clamp(0, 255) as u8;
    }
    pixel[3] = 255;
    pixel
}

/// A running-bond brick wall: offset brick rows separated by mortar lines,
/// with a per-brick tint so the wall does not look stamped.
pub fn brick() -> Vec<u8> {
    let mut data = Vec::with_capacity((PATTERN_SIZE * PATTERN_SIZE * 4) as usize);
    for y in 0..PATTERN_SIZE {
        let row = y / BRICK_HEIGHT;
        let offset = (row % 2) * (BRICK_WIDTH / 2);
        for x in 0..PATTERN_SIZE {
            let shifted = x + offset;
            let in_mortar = y % BRICK_HEIGHT < MORTAR || shifted % BRICK_WIDTH < MORTAR;
            let pixel = if in_mortar {
                shade(MORTAR_COLOR, 0)
            } else {
                let column = shifted / BRICK_WIDTH;
                let tint = ((row.wrapping_mul(31).wrapping_add(column.wrapping_mul(17))) % 5)
                    as i16
                    * 8
                    - 16;
                shade(BRICK_COLOR, tint)
            };
            data.extend_from_slice(&pixel);
        }
    }
    data
}

/// A flat color with per-pixel brightness jitter. Deterministic for a given
/// seed.
pub fn speckle(base: [u8; 3], seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity((PATTERN_SIZE * PATTERN_SIZE * 4) as usize);
    for _ in 0..PATTERN_SIZE * PATTERN_SIZE {
        let jitter = rng.random_range(-18i16..=18);
        data.extend_from_slice(&shade(base, jitter));
    }
    data
}

/// A flat color with smooth low-frequency blotches, bilinearly interpolated
/// from a coarse random grid. Deterministic for a given seed.
pub fn mottle(base: [u8; 3], seed: u64) -> Vec<u8> {
    const CELLS: u32 = 8;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = [[0i16; (CELLS + 1) as usize]; (CELLS + 1) as usize];
    for row in grid.iter_mut() {
        for value in row.iter_mut() {
            *value = rng.random_range(-30i16..=30);
        }
    }

    let cell_size = PATTERN_SIZE / CELLS;
    let mut data = Vec::with_capacity((PATTERN_SIZE * PATTERN_SIZE * 4) as usize);
    for y in 0..PATTERN_SIZE {
        let gy = (y / cell_size) as usize;
        let fy = (y % cell_size) as f32 / cell_size as f32;
        for x in 0..PATTERN_SIZE {
            let gx = (x / cell_size) as usize;
            let fx = (x % cell_size) as f32 / cell_size as f32;

            let top = grid[gy][gx] as f32 * (1.0 - fx) + grid[gy][gx + 1] as f32 * fx;
            let bottom = grid[gy + 1][gx] as f32 * (1.0 - fx) + grid[gy + 1][gx + 1] as f32 * fx;
            let offset = (top * (1.0 - fy) + bottom * fy) as i16;
            data.extend_from_slice(&shade(base, offset));
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_LEN: usize = (PATTERN_SIZE * PATTERN_SIZE * 4) as usize;

    #[test]
    fn patterns_fill_the_full_buffer() {
        assert_eq!(brick().len(), EXPECTED_LEN);
        assert_eq!(speckle([60, 90, 180], 1).len(), EXPECTED_LEN);
        assert_eq!(mottle([60, 140, 70], 2).len(), EXPECTED_LEN);
    }

    #[test]
    fn brick_contains_both_mortar_and_brick_pixels() {
        let data = brick();
        let mut saw_mortar = false;
        let mut saw_brick = false;
        for pixel in data.chunks_exact(4) {
            if pixel[..3] == MORTAR_COLOR {
                saw_mortar = true;
            }
            // Any red-dominant pixel is part of a brick.
            if pixel[0] > pixel[1] && pixel[0] > pixel[2] {
                saw_brick = true;
            }
        }
        assert!(saw_mortar);
        assert!(saw_brick);
    }

    #[test]
    fn speckle_is_deterministic_per_seed() {
        assert_eq!(speckle([60, 90, 180], 7), speckle([60, 90, 180], 7));
        assert_ne!(speckle([60, 90, 180], 7), speckle([60, 90, 180], 8));
    }

    #[test]
    fn mottle_stays_near_the_base_color() {
        let base = [60, 140, 70];
        for pixel in mottle(base, 3).chunks_exact(4) {
            for (channel, base_channel) in pixel[..3].iter().zip(base) {
                assert!((*channel as i16 - base_channel as i16).abs() <= 31);
            }
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn patterns_are_opaque() {
        for pixel in brick().chunks_exact(4) {
            assert_eq!(pixel[3], 255);
        }
    }
}
