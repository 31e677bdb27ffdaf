use super::*;
use image::Rgba;

#[test]
fn palette_has_sixteen_hues_of_ten_swatches() {
    assert_eq!(PALETTE.len(), 16);
    let names: Vec<&str> = PALETTE.iter().map(|e| e.name).collect();
    assert_eq!(names[0], "Red");
    assert_eq!(names[3], "Deep Purple");
    assert_eq!(names[15], "Deep Orange");
    for (i, name) in names.iter().enumerate() {
        assert!(!names[i + 1..].contains(name), "duplicate hue {name}");
    }
}

#[test]
fn exact_swatch_always_matches() {
    for entry in PALETTE.iter() {
        for swatch in entry.swatches.iter() {
            assert!(swatch.matches(swatch));
        }
    }
}

#[test]
fn distance_of_exactly_fifteen_does_not_match() {
    // 15 away from Red's (244, 67, 54) and no closer to any other swatch.
    let sample = rgb(244, 67, 69);
    assert_eq!(sample.distance(&rgb(244, 67, 54)), 15.0);
    let counts = count_hue_matches(&[sample], &PALETTE);
    assert_eq!(counts.total(), 0);
}

#[test]
fn pure_red_matches_no_swatch() {
    // The nearest Red swatch (244, 67, 54) is ~86 away.
    let counts = count_hue_matches(&[rgb(255, 0, 0)], &PALETTE);
    assert_eq!(counts.len(), 16);
    assert_eq!(counts.get("Red"), Some(0));
    assert_eq!(counts.total(), 0);
}

#[test]
fn red_swatch_matches_only_itself() {
    let counts = count_hue_matches(&[rgb(244, 67, 54)], &PALETTE);
    assert_eq!(counts.get("Red"), Some(1));
    assert_eq!(counts.total(), 1);
}

#[test]
fn one_sample_can_count_for_several_hues() {
    // Orange (255, 152, 0) sits between Amber and Orange swatches.
    let counts = count_hue_matches(&[rgb(255, 152, 0)], &PALETTE);
    assert_eq!(counts.get("Orange"), Some(2));
    assert_eq!(counts.get("Amber"), Some(2));
    assert_eq!(counts.total(), 4);
}

#[test]
fn counts_do_not_depend_on_palette_order() {
    let samples = vec![
        rgb(255, 152, 0),
        rgb(33, 150, 243),
        rgb(244, 67, 54),
        rgb(0, 150, 136),
        rgb(250, 250, 250),
    ];
    let forward = count_hue_matches(&samples, &PALETTE);

    let mut reversed: Vec<PaletteEntry> = PALETTE.to_vec();
    reversed.reverse();
    let mut rotated: Vec<PaletteEntry> = PALETTE.to_vec();
    rotated.rotate_left(5);

    for shuffled in [reversed, rotated] {
        let counts = count_hue_matches(&samples, &shuffled);
        for entry in PALETTE.iter() {
            assert_eq!(counts.get(entry.name), forward.get(entry.name), "{}", entry.name);
        }
    }
}

#[test]
fn empty_samples_give_zero_counts_and_palette_order() {
    let counts = count_hue_matches(&[], &PALETTE);
    assert_eq!(counts.total(), 0);
    assert_eq!(top_hues(&counts, 3), vec!["Red", "Pink", "Purple"]);
}

#[test]
fn dominant_hue_ranks_first() {
    let samples = vec![rgb(33, 150, 243); 50];
    let counts = count_hue_matches(&samples, &PALETTE);
    assert_eq!(counts.get("Blue"), Some(50));
    let top = top_hues(&counts, 3);
    assert_eq!(top[0], "Blue");
    assert_eq!(top.len(), 3);
}

#[test]
fn top_hues_breaks_ties_by_first_appearance() {
    let counts = HueMatchCounts::merge([("Teal", 5), ("Lime", 9), ("Cyan", 5), ("Amber", 1)]);
    assert_eq!(top_hues(&counts, 3), vec!["Lime", "Teal", "Cyan"]);
    assert_eq!(top_hues(&counts, 10).len(), 4);
}

#[test]
fn merge_sums_repeated_names() {
    let counts = HueMatchCounts::merge([("Red", 2), ("Blue", 1), ("Red", 3)]);
    assert_eq!(counts.get("Red"), Some(5));
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get("Green"), None);
}

#[test]
fn sampling_skips_transparent_black() {
    let img = RgbaImage::from_fn(200, 200, |x, _| {
        if x < 100 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([33, 150, 243, 255])
        }
    });
    let samples = sample_pixels(&img);
    assert!(!samples.is_empty());
    assert!(samples.len() < (SAMPLE_SIZE * SAMPLE_SIZE) as usize);
    assert!(samples.iter().all(|s| s.a != Some(0) || (s.r, s.g, s.b) != (0, 0, 0)));
}

#[test]
fn dominant_hues_of_a_flat_blue_image() {
    let img = RgbaImage::from_pixel(64, 64, Rgba([33, 150, 243, 255]));
    let hues = dominant_hues(&img, 3);
    assert_eq!(hues[0], "Blue");
}

#[test]
fn matched_top_hues_drops_zero_counts() {
    let counts = HueMatchCounts::merge([("Red", 0), ("Blue", 7), ("Teal", 0), ("Lime", 2)]);
    assert_eq!(matched_top_hues(&counts, 3), vec!["Blue", "Lime"]);
    assert!(matched_top_hues(&count_hue_matches(&[], &PALETTE), 3).is_empty());
}

#[test]
fn grayscale_image_has_no_dominant_hues() {
    let img = RgbaImage::from_pixel(64, 64, Rgba([128, 128, 128, 255]));
    assert!(dominant_hues(&img, 3).is_empty());
}
