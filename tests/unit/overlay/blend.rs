use super::*;

fn px(c: [u8; 4]) -> Pixel {
    Pixel::from_bytes(c)
}

const SAMPLES: [[u8; 4]; 8] = [
    [0, 0, 0, 0],
    [255, 255, 255, 255],
    [255, 0, 0, 255],
    [100, 110, 120, 200],
    [64, 64, 0, 128],
    [1, 2, 3, 4],
    [10, 0, 30, 30],
    [200, 100, 50, 255],
];

#[test]
fn replace_all_ignores_back_and_alpha() {
    let back = px([0, 0, 255, 255]);
    let front = px([9, 8, 7, 0]);
    assert_eq!(Algorithm::ReplaceAll.apply(back, front), front);
}

#[test]
fn replace_non_alpha_is_a_binary_cutout() {
    let blue = px([0, 0, 255, 255]);
    assert_eq!(replace_non_alpha(blue, px([255, 255, 255, 0])), blue);
    assert_eq!(replace_non_alpha(blue, px([255, 0, 0, 1])), px([255, 0, 0, 1]));
    assert_eq!(
        Algorithm::ReplaceNonAlpha.apply(blue, px([1, 2, 3, 128])),
        px([1, 2, 3, 128])
    );
}

#[test]
fn premultiplied_over_transparent_back_is_identity() {
    for front in SAMPLES {
        assert_eq!(over_premultiplied(Pixel::TRANSPARENT, px(front)), px(front));
    }
}

#[test]
fn premultiplied_transparent_front_keeps_back() {
    for back in SAMPLES {
        assert_eq!(over_premultiplied(px(back), Pixel::TRANSPARENT), px(back));
    }
}

#[test]
fn premultiplied_opaque_front_replaces_back() {
    let front = px([255, 0, 0, 255]);
    for back in SAMPLES {
        assert_eq!(over_premultiplied(px(back), front), front);
    }
}

#[test]
fn premultiplied_half_red_over_opaque_blue() {
    let out = over_premultiplied(px([0, 0, 255, 255]), px([128, 0, 0, 128]));
    assert_eq!(out.to_bytes(), [128, 0, 126, 255]);

    let out = over_premultiplied(px([0, 0, 128, 128]), px([64, 64, 0, 128]));
    assert_eq!(out.to_bytes(), [64, 64, 63, 191]);
}

#[test]
fn premultiplied_saturates_invalid_color() {
    // Color above alpha is not valid premultiplied data; the sum must not spill into alpha.
    let out = over_premultiplied(px([255, 255, 255, 255]), px([255, 0, 0, 0]));
    assert_eq!(out.to_bytes(), [255, 255, 255, 255]);
}

#[test]
fn straight_both_transparent_is_zero() {
    assert_eq!(over_straight(Pixel::TRANSPARENT, Pixel::TRANSPARENT), Pixel::TRANSPARENT);
    assert_eq!(
        over_straight(px([200, 10, 10, 0]), px([1, 255, 3, 0])),
        Pixel::TRANSPARENT
    );
}

#[test]
fn straight_opaque_front_replaces_back() {
    let front = px([10, 20, 30, 255]);
    for back in SAMPLES {
        assert_eq!(over_straight(px(back), front), front);
    }
}

#[test]
fn straight_transparent_front_keeps_back_within_rounding() {
    for back in SAMPLES {
        let out = over_straight(px(back), Pixel::TRANSPARENT);
        if back[3] == 0 {
            assert_eq!(out, Pixel::TRANSPARENT);
            continue;
        }
        assert_eq!(out.a(), back[3]);
        for (o, b) in out.to_bytes()[..3].iter().zip(&back[..3]) {
            assert!(o.abs_diff(*b) <= 1, "{out:?} vs {back:?}");
        }
    }
}

#[test]
fn straight_half_red_over_blue() {
    let out = over_straight(px([0, 0, 255, 255]), px([255, 0, 0, 128]));
    assert_eq!(out.to_bytes(), [128, 0, 126, 255]);

    let out = over_straight(px([0, 0, 255, 128]), px([255, 0, 0, 128]));
    assert_eq!(out.to_bytes(), [170, 0, 84, 191]);
}

#[test]
fn result_alpha_is_monotone_and_bounded() {
    for fa in (0u8..=255).step_by(3) {
        for ba in (0u8..=255).step_by(5) {
            let front = px([90, 40, 200, fa]);
            let back = px([30, 220, 10, ba]);
            for algo in [Algorithm::OverPremultiplied, Algorithm::OverStraight] {
                let a = algo.apply(back, front).a();
                assert!(a >= fa.max(ba), "{algo}: fa={fa} ba={ba} -> {a}");
            }
        }
    }
}

#[test]
fn names_round_trip() {
    for algo in Algorithm::ALL {
        assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
    }
    assert!("multiply".parse::<Algorithm>().is_err());
}

#[test]
fn serde_uses_snake_case() {
    let json = serde_json::to_string(&Algorithm::OverPremultiplied).unwrap();
    assert_eq!(json, "\"over_premultiplied\"");
    let algo: Algorithm = serde_json::from_str("\"replace_non_alpha\"").unwrap();
    assert_eq!(algo, Algorithm::ReplaceNonAlpha);
}
