use crate::images::{FALLBACK_IMAGE, ImagePool, STOCK_IMAGES};

#[test]
fn test_pool_hands_out_from_the_end() {
    let mut pool = ImagePool::new("data/planet_images/");

    assert_eq!(pool.remaining(), STOCK_IMAGES.len());
    assert_eq!(pool.next_image(), "data/planet_images/black_hole.png");
    assert_eq!(pool.next_image(), "data/planet_images/random_planet_8.png");
    assert_eq!(pool.remaining(), STOCK_IMAGES.len() - 2);
}

#[test]
fn test_exhausted_pool_returns_fallback() {
    let mut pool = ImagePool::new("img");
    for _ in 0..STOCK_IMAGES.len() {
        pool.next_image();
    }

    assert_eq!(pool.remaining(), 0);
    assert_eq!(pool.next_image(), format!("img/{FALLBACK_IMAGE}"));
    assert_eq!(pool.next_image(), format!("img/{FALLBACK_IMAGE}"));
}

#[test]
fn test_empty_dir_gives_bare_file_names() {
    let mut pool = ImagePool::new("");

    assert_eq!(pool.next_image(), "black_hole.png");
}
