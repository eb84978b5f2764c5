//! Where freshly added nodes land before the user drags them or runs a layout.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SpawnArea;
use crate::model::Position;

#[derive(Debug, Clone)]
pub struct Spawner {
    area: SpawnArea,
    rng: StdRng,
}

impl Spawner {
    pub fn new(area: SpawnArea, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { area, rng }
    }

    /// Uniformly random point in `[0, width) x [0, height)`.
    pub fn next_position(&mut self) -> Position {
        Position {
            x: self.rng.r#gen::<f64>() * self.area.width,
            y: self.rng.r#gen::<f64>() * self.area.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_stay_inside_the_area() {
        let mut spawner = Spawner::new(
            SpawnArea {
                width: 100.0,
                height: 40.0,
            },
            Some(7),
        );
        for _ in 0..100 {
            let p = spawner.next_position();
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..40.0).contains(&p.y));
        }
    }

    #[test]
    fn seeded_spawners_agree() {
        let area = SpawnArea::default();
        let mut a = Spawner::new(area, Some(42));
        let mut b = Spawner::new(area, Some(42));
        assert_eq!(a.next_position(), b.next_position());
    }

    #[test]
    fn zero_sized_area_pins_to_origin() {
        let mut spawner = Spawner::new(
            SpawnArea {
                width: 0.0,
                height: 0.0,
            },
            Some(1),
        );
        assert_eq!(spawner.next_position(), Position::new(0.0, 0.0));
    }
}
