use super::*;

fn at(t: f64, elapsed: f64, duration: f64) -> Progress {
    Progress {
        t,
        elapsed,
        duration,
    }
}

#[test]
fn text_reveals_one_char_per_interval() {
    let mut text = Text::new("hello");
    text.reveal_interval = 0.1;
    assert_eq!(text.natural_duration(), 0.5);

    text.reveal(&at(0.0, 0.0, 0.5));
    assert_eq!(text.visible_chars(), 0);
    text.reveal(&at(0.5, 0.25, 0.5));
    assert_eq!(text.visible_text(), "he");
    text.reveal(&at(1.0, 0.5, 0.5));
    assert_eq!(text.visible_text(), "hello");
}

#[test]
fn text_reveal_follows_eased_progress() {
    let mut text = Text::new("abcdefgh");
    text.reveal_interval = 0.1;
    // Half the time has passed but an ease-in curve reports a quarter.
    text.reveal(&at(0.25, 0.4, 0.8));
    assert_eq!(text.visible_text(), "ab");
    text.reveal(&at(0.75, 0.4, 0.8));
    assert_eq!(text.visible_text(), "abcdef");
}

#[test]
fn text_counts_characters_not_bytes() {
    let mut text = Text::new("héllo");
    text.reveal_interval = 1.0;
    text.reveal(&at(0.4, 2.0, 5.0));
    assert_eq!(text.visible_text(), "hé");
    assert_eq!(text.char_count(), 5);
}

#[test]
fn text_without_interval_follows_progress() {
    let mut text = Text::new("abcd");
    text.reveal_interval = 0.0;
    text.reveal(&at(0.5, 0.1, 0.2));
    assert_eq!(text.visible_text(), "ab");
}

#[test]
fn text_draws_only_revealed_prefix() {
    let mut text = Text::new("abc");
    let mut ops = Vec::new();
    text.draw(Point::ZERO, &mut ops);
    assert!(ops.is_empty());

    text.reveal(&at(1.0, 1.0, 1.0));
    text.draw(Point::new(5.0, 6.0), &mut ops);
    assert_eq!(
        ops,
        vec![DrawOp::Text {
            origin: Point::new(5.0, 6.0),
            text: "abc".to_owned(),
            font_size: 40.0,
            font: None,
            color: Rgba8::BLACK,
        }]
    );
}

#[test]
fn image_fades_in_with_progress() {
    let mut image = Image::new(TextureHandle(1));
    let mut ops = Vec::new();
    image.draw(Point::ZERO, &mut ops);
    assert!(ops.is_empty());

    image.reveal(0.5);
    assert_eq!(image.opacity(), 0.5);
    image.draw(Point::ZERO, &mut ops);
    assert_eq!(
        ops,
        vec![DrawOp::Texture {
            texture: TextureHandle(1),
            origin: Point::ZERO,
            scale: 1.0,
            tint: Rgba8::rgba(255, 255, 255, 128),
        }]
    );
}
