// SPDX-License-Identifier: MPL-2.0
//! Sample library used to seed the store on first launch and in tests.

use super::PhotoStore;
use crate::domain::photo::{ExifData, Photo};

const CAMERA: &str = "iPhone 16 Pro";

fn exif(aperture: &str, shutter: &str, iso: u32, focal: &str, lens: &str) -> ExifData {
    ExifData {
        aperture: aperture.to_string(),
        shutter_speed: shutter.to_string(),
        iso,
        focal_length: focal.to_string(),
        lens: lens.to_string(),
        camera: CAMERA.to_string(),
    }
}

fn main_camera(shutter: &str, iso: u32) -> ExifData {
    exif("f/1.78", shutter, iso, "24mm", "Main Camera 24mm")
}

fn ultra_wide(shutter: &str, iso: u32) -> ExifData {
    exif("f/2.2", shutter, iso, "13mm", "Ultra Wide 13mm")
}

fn telephoto(shutter: &str, iso: u32) -> ExifData {
    exif("f/2.8", shutter, iso, "77mm", "Telephoto 77mm")
}

/// Eleven photos, newest first. Photos "3" and "4" are an exact duplicate pair
/// in group `group1`; photos 1, 5, 6, 8 and 11 are ProRAW.
#[must_use]
pub fn sample_photos() -> Vec<Photo> {
    vec![
        Photo::new("1", "Today, 2:45 PM")
            .with_location("Central Park, NY")
            .pro_raw(14)
            .with_resolution(8064, 6048)
            .with_file_size(44_564_480)
            .with_exif(main_camera("1/250s", 100)),
        Photo::new("2", "Yesterday, 10:15 AM")
            .with_location("Brooklyn, NY")
            .with_resolution(4032, 3024)
            .with_file_size(3_355_443)
            .with_exif(ultra_wide("1/500s", 50)),
        Photo::new("3", "Oct 12, 2025")
            .in_duplicate_group("group1", 100)
            .with_resolution(4032, 3024)
            .with_file_size(4_299_161)
            .with_exif(telephoto("1/125s", 200)),
        Photo::new("4", "Oct 12, 2025")
            .in_duplicate_group("group1", 100)
            .with_resolution(4032, 3024)
            .with_file_size(4_299_161)
            .with_exif(telephoto("1/125s", 200)),
        Photo::new("5", "Oct 10, 2025")
            .pro_raw(12)
            .with_resolution(8064, 6048)
            .with_file_size(40_055_603)
            .with_exif(main_camera("1/1000s", 80)),
        Photo::new("6", "Oct 8, 2025")
            .with_location("Yosemite, CA")
            .pro_raw(14)
            .with_resolution(8064, 6048)
            .with_file_size(47_290_777)
            .with_exif(main_camera("1/800s", 125)),
        Photo::new("7", "Oct 5, 2025")
            .with_location("Acadia Park, ME")
            .with_resolution(4032, 3024)
            .with_file_size(5_452_595)
            .with_exif(ultra_wide("1/2000s", 40)),
        Photo::new("8", "Oct 4, 2025")
            .with_location("Reykjavik, Iceland")
            .pro_raw(12)
            .with_resolution(8064, 6048)
            .with_file_size(41_733_324)
            .with_exif(main_camera("1/1250s", 64)),
        Photo::new("9", "Oct 2, 2025")
            .with_location("Shinjuku, Tokyo")
            .with_resolution(4032, 3024)
            .with_file_size(4_928_307)
            .with_exif(telephoto("1/60s", 400)),
        Photo::new("10", "Sep 28, 2025")
            .with_location("Le Marais, Paris")
            .with_resolution(4032, 3024)
            .with_file_size(4_089_446)
            .with_exif(main_camera("1/400s", 100)),
        Photo::new("11", "Sep 25, 2025")
            .with_location("The Thames, London")
            .pro_raw(14)
            .with_resolution(8064, 6048)
            .with_file_size(43_201_331)
            .with_exif(main_camera("1/500s", 160)),
    ]
}

/// A store seeded with [`sample_photos`].
#[must_use]
pub fn sample_library() -> PhotoStore {
    PhotoStore::new(sample_photos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_library_has_eleven_unique_photos() {
        let store = sample_library();
        assert_eq!(store.len(), 11);
    }

    #[test]
    fn file_size_labels_match_capture_metadata() {
        let store = sample_library();
        let labels: Vec<String> = store.list().iter().map(Photo::file_size_label).collect();
        assert_eq!(labels[0], "42.5 MB");
        assert_eq!(labels[2], "4.1 MB");
        assert_eq!(labels[5], "45.1 MB");
    }

    #[test]
    fn pro_raw_photos_carry_bit_depth() {
        for photo in sample_photos() {
            assert_eq!(photo.is_pro_raw, photo.bit_depth.is_some(), "photo {}", photo.id());
        }
    }
}
