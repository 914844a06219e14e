//! Stock planet images
//!
//! Each generated system draws from a fresh pool. Images are handed out from
//! the end of the list without replacement; once the pool is exhausted every
//! further planet gets the fallback image.

/// Stock images, handed out last to first
pub const STOCK_IMAGES: [&str; 9] = [
    "random_planet_1.png",
    "random_planet_2.png",
    "random_planet_3.png",
    "random_planet_4.png",
    "random_planet_5.png",
    "random_planet_6.png",
    "random_planet_7.png",
    "random_planet_8.png",
    "black_hole.png",
];

pub const FALLBACK_IMAGE: &str = "earth.png";

#[derive(Debug, Clone)]
pub struct ImagePool {
    dir: String,
    remaining: Vec<&'static str>,
}

impl ImagePool {
    pub fn new(dir: &str) -> Self {
        Self {
            dir: dir.trim_end_matches('/').to_string(),
            remaining: STOCK_IMAGES.to_vec(),
        }
    }

    /// Path of the next stock image, or of the fallback image once exhausted
    pub fn next_image(&mut self) -> String {
        let file = self.remaining.pop().unwrap_or(FALLBACK_IMAGE);
        self.path(file)
    }

    /// Stock images not yet handed out
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    fn path(&self, file: &str) -> String {
        if self.dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{file}", self.dir)
        }
    }
}
