use super::*;

fn numbered(n: usize, base: u32) -> Vec<Pixel> {
    (0..n as u32).map(|i| Pixel(base + i)).collect()
}

#[test]
fn render_rect_clips_to_canvas() {
    let canvas = Size::new(10, 8);
    assert_eq!(
        render_rect(canvas, Position::new(2, 3), Size::new(4, 2)),
        Some(Rect {
            x: 2,
            y: 3,
            width: 4,
            height: 2
        })
    );
    assert_eq!(
        render_rect(canvas, Position::new(8, 7), Size::new(5, 5)),
        Some(Rect {
            x: 8,
            y: 7,
            width: 2,
            height: 1
        })
    );
}

#[test]
fn render_rect_rejects_positions_past_the_edge() {
    let canvas = Size::new(10, 8);
    assert_eq!(render_rect(canvas, Position::new(11, 0), Size::new(1, 1)), None);
    assert_eq!(render_rect(canvas, Position::new(0, 9), Size::new(1, 1)), None);
    let on_edge = render_rect(canvas, Position::new(10, 8), Size::new(3, 3)).unwrap();
    assert!(on_edge.is_empty());
}

#[test]
fn writes_stay_inside_the_clipped_rect() {
    for (cw, ch) in [(1usize, 1usize), (3, 2), (4, 4), (5, 3)] {
        for (pw, ph) in [(0usize, 0usize), (1, 1), (2, 3), (6, 2), (7, 7)] {
            for x in 0..=cw + 1 {
                for y in 0..=ch + 1 {
                    let canvas_size = Size::new(cw, ch);
                    let before = numbered(cw * ch, 0x1000);
                    let mut canvas = before.clone();
                    let src = numbered(pw * ph, 0x8000);
                    let payload = Payload::new(&src, Size::new(pw, ph)).unwrap();

                    overlay_in_place(
                        &mut canvas,
                        canvas_size,
                        Position::new(x, y),
                        &payload,
                        Algorithm::ReplaceAll,
                    )
                    .unwrap();

                    let rect = render_rect(canvas_size, Position::new(x, y), Size::new(pw, ph));
                    for cy in 0..ch {
                        for cx in 0..cw {
                            let got = canvas[cy * cw + cx];
                            match rect {
                                Some(r) if r.contains(cx, cy) => {
                                    let (px, py) = (cx - x, cy - y);
                                    assert_eq!(got, src[py * pw + px]);
                                }
                                _ => assert_eq!(got, before[cy * cw + cx]),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn out_of_bounds_position_is_a_noop_for_every_algorithm() {
    let canvas_size = Size::new(3, 3);
    let before = numbered(9, 0xFF00_0000);
    let src = vec![Pixel::from_rgba(1, 2, 3, 255); 4];
    let payload = Payload::new(&src, Size::new(2, 2)).unwrap();
    for algo in Algorithm::ALL {
        for pos in [Position::new(4, 0), Position::new(0, 4), Position::new(usize::MAX, 1)] {
            let mut canvas = before.clone();
            overlay_in_place(&mut canvas, canvas_size, pos, &payload, algo).unwrap();
            assert_eq!(canvas, before);
        }
    }
}

#[test]
fn overhanging_payload_uses_its_top_left_block() {
    let mut canvas = vec![Pixel::TRANSPARENT; 4];
    let src = numbered(9, 1);
    let payload = Payload::new(&src, Size::new(3, 3)).unwrap();
    overlay_in_place(
        &mut canvas,
        Size::new(2, 2),
        Position::ORIGIN,
        &payload,
        Algorithm::ReplaceAll,
    )
    .unwrap();
    assert_eq!(canvas, vec![Pixel(1), Pixel(2), Pixel(4), Pixel(5)]);
}

#[test]
fn overlay_in_place_rejects_wrong_canvas_length() {
    let mut canvas = vec![Pixel::TRANSPARENT; 5];
    let payload = Payload::new(&[], Size::new(0, 0)).unwrap();
    let err = overlay_in_place(
        &mut canvas,
        Size::new(2, 2),
        Position::ORIGIN,
        &payload,
        Algorithm::ReplaceAll,
    )
    .unwrap_err();
    assert!(err.to_string().contains("expects 4 pixels, got 5"));
}

#[test]
fn blending_reads_the_existing_canvas_pixel() {
    let blue = Pixel::from_rgba(0, 0, 255, 255);
    let mut canvas = vec![blue; 2];
    let src = [Pixel::from_rgba(128, 0, 0, 128), Pixel::TRANSPARENT];
    let payload = Payload::new(&src, Size::new(2, 1)).unwrap();
    overlay_in_place(
        &mut canvas,
        Size::new(2, 1),
        Position::ORIGIN,
        &payload,
        Algorithm::OverPremultiplied,
    )
    .unwrap();
    assert_eq!(canvas[0].to_bytes(), [128, 0, 126, 255]);
    assert_eq!(canvas[1], blue);
}
