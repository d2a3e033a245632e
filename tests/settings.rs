extern crate trigon;

use trigon::prelude::*;

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.exit_key, Key::Escape);
    assert_eq!(settings.window.title, "LearnOpenGL");
    assert_eq!(settings.window.size, Vector2::new(800, 600));
    assert_eq!(settings.window.gl_version, (3, 3));
}

#[test]
fn partial_json() {
    let settings = Settings::from_json(r#"{ "exit_key": "Q" }"#).unwrap();
    assert_eq!(settings.exit_key, Key::Q);
    assert_eq!(settings.window, WindowParams::default());

    let settings =
        Settings::from_json(r#"{ "window": { "title": "Triangles", "vsync": false } }"#).unwrap();
    assert_eq!(settings.exit_key, Key::Escape);
    assert_eq!(settings.window.title, "Triangles");
    assert!(!settings.window.vsync);
    assert_eq!(settings.window.size, Vector2::new(800, 600));
}

#[test]
fn full_json() {
    let settings = Settings::from_json(
        r#"{
            "window": {
                "title": "Triangles",
                "size": { "x": 1024, "y": 768 },
                "gl_version": [4, 1],
                "multisample": 4,
                "vsync": true
            },
            "exit_key": "Return"
        }"#,
    )
    .unwrap();

    assert_eq!(settings.window.size, Vector2::new(1024, 768));
    assert_eq!(settings.window.gl_version, (4, 1));
    assert_eq!(settings.window.multisample, 4);
    assert_eq!(settings.exit_key, Key::Return);
}

#[test]
fn malformed_json() {
    match Settings::from_json("{ exit_key: ") {
        Err(Error::Settings(_)) => {}
        v => panic!("unexpected result {:?}", v),
    }

    match Settings::from_json(r#"{ "exit_key": "NotAKey" }"#) {
        Err(Error::Settings(_)) => {}
        v => panic!("unexpected result {:?}", v),
    }
}

#[test]
fn missing_file() {
    match Settings::load("tests/resources/does-not-exist.json") {
        Err(Error::Settings(_)) => {}
        v => panic!("unexpected result {:?}", v),
    }
}

#[test]
fn load_file() {
    let settings = Settings::load("tests/resources/settings.json").unwrap();
    assert_eq!(settings.window.title, "Two Triangles");
    assert_eq!(settings.exit_key, Key::Q);
}
