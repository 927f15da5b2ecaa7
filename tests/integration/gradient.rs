use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;
use trinkets::gradient::{
    generate_gradient_background, DigitCap, GradientConfig, GradientGenerator, HexColor, RngSource,
};

use crate::common::{hex_tokens, init_tracing, split_layers};

fn assert_layer_grammar(layer: &str) {
    if let Some(body) = layer.strip_prefix("linear-gradient(") {
        let body = body.strip_suffix(')').expect("linear layer should close");
        let parts: Vec<_> = body.split(", ").collect();
        assert!((3..=4).contains(&parts.len()), "angle plus 2-3 colors: {layer}");

        let degrees: u16 =
            parts[0].strip_suffix("deg").and_then(|d| d.parse().ok()).expect("angle");
        assert!(degrees < 360);
    } else if let Some(body) = layer.strip_prefix("radial-gradient(ellipse at ") {
        let body =
            body.strip_suffix(", transparent)").expect("radial layer should end transparent");
        let (position, _color) = body.split_once(", ").expect("position and color");
        let (vertical, horizontal) = position.split_once(' ').expect("two position keywords");
        assert!(["top", "bottom", ""].contains(&vertical), "{position:?}");
        assert!(["left", "right"].contains(&horizontal), "{position:?}");
    } else {
        panic!("unexpected layer: {layer}");
    }
}

#[test]
fn test_background_grammar() {
    init_tracing();

    for _ in 0..300 {
        let css = generate_gradient_background();
        let layers = split_layers(&css);
        assert!((2..=3).contains(&layers.len()), "{css}");
        layers.iter().for_each(|layer| assert_layer_grammar(layer));

        for token in hex_tokens(&css) {
            let color: HexColor = token.parse().expect("six hex digits");
            assert!(color.fits_under(DigitCap::MUTED), "{token} is too light");
        }
    }
}

#[test]
fn test_rendered_layers_match_typed_layers() {
    let mut generator = GradientGenerator::new(RngSource::new(StdRng::seed_from_u64(2024)));

    for _ in 0..100 {
        let background = generator.random_gradient_background();
        let css = background.to_string();
        let rendered: Vec<String> = background.layers().iter().map(ToString::to_string).collect();
        assert_eq!(split_layers(&css), rendered);
    }
}

#[test]
fn test_config_file_drives_generator() -> Result<(), Box<dyn std::error::Error>> {
    let config = GradientConfig::from_json(
        r#"{ "color_cap": 8, "min_layers": 3, "max_layers": 3, "min_colors": 2, "max_colors": 2 }"#,
    )?;
    let mut generator =
        GradientGenerator::with_config(RngSource::new(StdRng::seed_from_u64(1)), config)?;

    for _ in 0..50 {
        let css = generator.random_gradient_background().to_string();
        assert_eq!(split_layers(&css).len(), 3);
        for token in hex_tokens(&css) {
            assert!(token.parse::<HexColor>()?.fits_under(DigitCap::new(8)?));
        }
    }
    Ok(())
}

#[test]
fn test_generation_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| (0..50).map(|_| generate_gradient_background()).collect::<Vec<_>>())
        })
        .collect();

    for handle in handles {
        let backgrounds = handle.join().expect("generator thread panicked");
        assert!(backgrounds.iter().all(|css| (2..=3).contains(&split_layers(css).len())));
    }
}
