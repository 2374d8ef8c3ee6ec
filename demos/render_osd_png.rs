use std::path::PathBuf;

use rgba_osd::{Algorithm, Osd, OsdConfig, OwnedPayload, Pixel, Position, Size, write_png};

const BADGE: Size = Size::new(64, 32);

/// A 64x32 badge: opaque border, translucent premultiplied fill, fully transparent corners.
fn badge(fill: [u8; 3], alpha: u8) -> anyhow::Result<OwnedPayload> {
    let mut payload = OwnedPayload::filled(BADGE, Pixel::TRANSPARENT)?;
    let w = BADGE.width;
    let h = BADGE.height;
    for (i, px) in payload.pixels_mut().iter_mut().enumerate() {
        let (x, y) = (i % w, i / w);
        let corner = (x < 2 || x >= w - 2) && (y < 2 || y >= h - 2);
        let border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
        *px = if corner {
            Pixel::TRANSPARENT
        } else if border {
            Pixel::from_rgba(255, 255, 255, 255)
        } else {
            Pixel::from_rgba(fill[0], fill[1], fill[2], alpha).premultiplied()
        };
    }
    Ok(payload)
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let out_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/osd_frame.png"));

    let mut osd = Osd::new(OsdConfig::new(640, 320))?;
    let red = badge([220, 40, 40], 160)?;
    let blue = badge([40, 80, 220], 200)?;

    osd.begin_frame();
    // Opaque backdrop so the translucent fills have something to blend with.
    let backdrop = OwnedPayload::filled(Size::new(640, 320), Pixel::from_rgba(18, 20, 28, 255))?;
    osd.overlay(&backdrop.as_payload(), Position::ORIGIN, Algorithm::ReplaceAll);

    for (i, algo) in Algorithm::ALL.into_iter().enumerate() {
        let x = 32 + i * 150;
        osd.overlay(&blue.as_payload(), Position::new(x, 100), Algorithm::ReplaceAll);
        osd.overlay(&red.as_payload(), Position::new(x + 24, 112), algo);
    }
    // Hangs off the bottom-right corner and gets clipped.
    osd.overlay(&red.as_payload(), Position::new(600, 300), Algorithm::OverPremultiplied);
    osd.end_frame();

    write_png(&out_path, &osd.frame_rgba8(), true)?;
    osd.teardown();

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
