use std::sync::Arc;

use augmenta::application::ports::SpectrogramRenderer;
use augmenta::domain::DecibelSpectrogram;
use augmenta::infrastructure::audio::SvgSpectrogramRenderer;
use image::RgbaImage;

fn renderer() -> SvgSpectrogramRenderer {
    SvgSpectrogramRenderer::new(Arc::new(usvg::fontdb::Database::new()))
}

fn decode(png: &[u8]) -> RgbaImage {
    image::load_from_memory(png).unwrap().to_rgba8()
}

/// Low bin at the floor, high bin at the peak.
fn two_band_spectrogram() -> DecibelSpectrogram {
    DecibelSpectrogram {
        frames: vec![vec![-80.0, 0.0]; 10],
        sample_rate: 22_050,
        n_fft: 2,
        hop_length: 512,
    }
}

#[test]
fn given_spectrogram_when_rendering_then_png_is_1000_by_400() {
    let png = renderer().render(&two_band_spectrogram()).unwrap();

    assert_eq!(decode(&png).dimensions(), (1000, 400));
}

#[test]
fn given_two_bands_when_rendering_then_low_frequencies_are_drawn_at_the_bottom() {
    let image = decode(&renderer().render(&two_band_spectrogram()).unwrap());

    let bottom = image.get_pixel(435, 340);
    let top = image.get_pixel(435, 60);

    assert!(bottom[0] < 40 && bottom[1] < 40, "bottom {:?}", bottom);
    assert!(top[0] > 200 && top[1] > 200, "top {:?}", top);
}

#[test]
fn given_spectrogram_when_rendering_then_margin_stays_white_and_colour_bar_is_drawn() {
    let image = decode(&renderer().render(&two_band_spectrogram()).unwrap());

    assert_eq!(image.get_pixel(5, 5).0, [255, 255, 255, 255]);

    let bar_low = image.get_pixel(790, 350);
    let bar_high = image.get_pixel(790, 52);
    assert!(bar_low[0] < 40);
    assert!(bar_high[0] > 200);
}

#[test]
fn given_empty_spectrogram_when_rendering_then_still_produces_canvas() {
    let empty = DecibelSpectrogram {
        frames: Vec::new(),
        sample_rate: 22_050,
        n_fft: 2048,
        hop_length: 512,
    };

    let image = decode(&renderer().render(&empty).unwrap());

    assert_eq!(image.dimensions(), (1000, 400));
    assert_eq!(image.get_pixel(435, 200).0, [255, 255, 255, 255]);
}
