use libstroke::{
    read_glyph,
    ser::{read_drawings, DrawingFormat},
    svg::{BezierSampler, IdSampler},
    svg2drawings, Config, Error,
};
use pretty_assertions::assert_eq;
use strokepath::{FlattenError, ParseError, PathCommand, PathError};

const GLYPH: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="109" height="109" viewBox="0 0 109 109">
<g id="kvg:StrokePaths_04e8c" style="fill:none;stroke:#000000;stroke-width:3;">
<g id="kvg:04e8c" kvg:element="二">
	<path id="kvg:04e8c-s1" d="M28.5,29.5C32.25,30.25,37.5,30.5,41.25,30.25C50.75,29.5,62.5,28.25,73.5,27.75"/>
	<path id="kvg:04e8c-s2" d="M13.5,82.25C17.75,83.5,24,83.75,28.25,83.5C44,82.5,71.5,80.75,91.25,80.5"/>
</g>
</g>
<g id="kvg:StrokeNumbers_04e8c" kvg:element="numbers">
	<text transform="matrix(1 0 0 1 21.50 29.50)">1</text>
</g>
</svg>
"#;

#[test]
fn glyph_is_flattened_per_path() {
    let glyph = read_glyph(GLYPH, &Config::default(), BezierSampler::default()).unwrap();
    assert_eq!(glyph.label.as_deref(), Some("二"));
    assert_eq!((glyph.size.width, glyph.size.height), (109.0, 109.0));
    assert!(glyph.failures.is_empty());
    assert_eq!(glyph.paths.len(), 2);
    for path in &glyph.paths {
        // one move and two curves at four steps
        assert_eq!(path.len(), 1 + 2 * 5);
    }
    let first = &glyph.paths[0];
    assert_eq!((first[0].x, first[0].y), (28.5, 29.5));
    assert_eq!((first[10].x, first[10].y), (73.5, 27.75));
}

#[test]
fn identity_sampler_keeps_commands() {
    let glyph = read_glyph(GLYPH, &Config::default(), IdSampler).unwrap();
    assert_eq!(glyph.paths[1].len(), 3);
    assert!(matches!(glyph.paths[1][0], PathCommand::Move(_)));
}

#[test]
fn pipeline_is_deterministic() {
    let config = Config {
        steps: 7,
        ..Default::default()
    };
    let a = read_glyph(GLYPH, &config, config.sampler()).unwrap();
    let b = read_glyph(GLYPH, &config, config.sampler()).unwrap();
    let bits = |g: &libstroke::glyph::Glyph<strokepath::SampledPath>| {
        g.paths
            .iter()
            .flatten()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect::<Vec<_>>()
    };
    assert_eq!(bits(&a), bits(&b));
}

const BROKEN: &str = r#"<svg width="109" height="109">
<g kvg:element="三">
<path d="C1 3 3 1 4 4"/>
<path d="M10,10 A5 5 0 0 1 20 20"/>
<path d="M0 0C1 3 3 1 4 4"/>
</g>
</svg>"#;

#[test]
fn bad_paths_do_not_stop_the_glyph() {
    let glyph = read_glyph(BROKEN, &Config::default(), BezierSampler::default()).unwrap();
    assert_eq!(glyph.paths.len(), 1);
    assert_eq!(glyph.paths[0].len(), 6);
    assert_eq!(glyph.failures.len(), 2);
    assert_eq!(glyph.failures[0].index, 0);
    assert_eq!(
        glyph.failures[0].error,
        PathError::Flatten(FlattenError::MissingInitialMove { index: 0 })
    );
    assert_eq!(glyph.failures[1].index, 1);
    assert_eq!(
        glyph.failures[1].error,
        PathError::Parse(ParseError::UnsupportedCommand {
            command: 'A',
            offset: 7
        })
    );
}

#[test]
fn strict_config_fails_the_glyph() {
    let config = Config {
        strict: true,
        ..Default::default()
    };
    let err = read_glyph(BROKEN, &config, config.sampler()).unwrap_err();
    assert!(matches!(err, Error::Path { index: 0, .. }));
}

#[test]
fn no_svg_element() {
    let err = read_glyph("<g><path d=\"M0 0\"/></g>", &Config::default(), IdSampler).unwrap_err();
    assert!(matches!(err, Error::EmptyDocument));
}

#[test]
fn malformed_markup_fails_the_document() {
    let doc = r#"<svg width="109" height="109">
<g kvg:element="三">
<path d="M1 1C1 3 3 1 4 4" <oops </g>
</svg>"#;
    let err = read_glyph(doc, &Config::default(), BezierSampler::default()).unwrap_err();
    assert!(matches!(err, Error::Svg(_)));
    assert!(err.to_string().starts_with("malformed svg"));
}

#[test]
fn file_to_drawings() {
    let dir = std::env::temp_dir().join(format!("libstroke-pipeline-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("04e8c.svg");
    std::fs::write(&input, GLYPH).unwrap();

    for format in [DrawingFormat::Json, DrawingFormat::Flex] {
        let mut bytes = vec![];
        let drawings = svg2drawings(&input, &mut bytes, format, &Config::default()).unwrap();
        assert_eq!(drawings.len(), 1);
        assert_eq!(drawings[0].label.as_deref(), Some("二"));
        assert_eq!(drawings[0].strokes.len(), 2);
        assert_eq!(drawings[0].strokes[1].points.len(), 11);
        assert_eq!(read_drawings(&bytes, format).unwrap(), drawings);
    }

    std::fs::remove_dir_all(&dir).unwrap();
}
