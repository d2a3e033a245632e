extern crate trigon;

use trigon::prelude::*;
use trigon::scene::variants::*;
use trigon::video::backends::headless::{Command, Resource};
use trigon::video::{HeadlessVisitor, Recorder};

fn setup(
    visitor: HeadlessVisitor,
    variant: Variant,
) -> (FrameRenderer, Recorder, Window, HeadlessControl) {
    let recorder = visitor.recorder();
    let mut renderer = FrameRenderer::from_visitor(Box::new(visitor), Key::Escape);
    let (window, control) = Window::headless(Vector2::new(800, 600));

    renderer
        .initialize(&variant.scene(), window.dimensions())
        .unwrap();

    (renderer, recorder, window, control)
}

#[test]
fn uploads_literal_vertices() {
    let (_renderer, recorder, _, _) = setup(HeadlessVisitor::new(), Variant::SharedProgram);
    let record = recorder.borrow();

    assert_eq!(record.uploads.len(), 2);
    assert_eq!(record.uploads[0].1, LEFT_TRIANGLE.to_vec());
    assert_eq!(record.uploads[1].1, RIGHT_TRIANGLE.to_vec());

    assert_eq!(record.layouts.len(), 2);
    for &(_, buffer, layout) in &record.layouts {
        assert!(record.uploads.iter().any(|v| v.0 == buffer));
        assert_eq!(layout, VertexLayout::position());
    }
}

#[test]
fn shaders_are_deleted_after_linking() {
    let (renderer, recorder, _, _) = setup(HeadlessVisitor::new(), Variant::TwoPrograms);
    assert_eq!(renderer.state(), RendererState::Running);

    let record = recorder.borrow();
    let shaders: Vec<_> = record
        .created
        .iter()
        .filter(|v| match v {
            Resource::Shader(_) => true,
            _ => false,
        })
        .collect();

    assert_eq!(shaders.len(), 4);
    for &&v in &shaders {
        assert_eq!(record.deletions(v), 1);
    }

    assert_eq!(record.programs().len(), 2);
    assert_eq!(record.alive().len(), 2 + 2 + 2);
}

#[test]
fn initial_viewport() {
    let (_renderer, recorder, _, _) = setup(HeadlessVisitor::new(), Variant::SharedProgram);
    assert_eq!(
        recorder.borrow().last_viewport(),
        Some(SurfaceViewport {
            position: Vector2::new(0, 0),
            size: Vector2::new(800, 600),
        })
    );
}

#[test]
fn shared_program_frame() {
    let (mut renderer, recorder, mut window, _) =
        setup(HeadlessVisitor::new(), Variant::SharedProgram);
    recorder.clear_commands();

    assert_eq!(renderer.render_frame(&mut window).unwrap(), 6);

    let record = recorder.borrow();
    assert_eq!(
        record.commands[0],
        Command::Clear(Color::new(0.2, 0.3, 0.3, 1.0))
    );

    let draws = record.draws();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].0, draws[1].0);
    assert!(draws[0].1 != draws[1].1);
    for v in &draws {
        assert_eq!((v.2, v.3), (0, 3));
    }
}

#[test]
fn two_programs_frame() {
    let (mut renderer, recorder, mut window, _) =
        setup(HeadlessVisitor::new(), Variant::TwoPrograms);
    recorder.clear_commands();

    assert_eq!(renderer.render_frame(&mut window).unwrap(), 6);

    let record = recorder.borrow();
    let draws = record.draws();
    let programs = record.programs();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].0, programs[0]);
    assert_eq!(draws[1].0, programs[1]);
    for v in &draws {
        assert_eq!(v.3, 3);
    }
}

#[test]
fn combined_buffer_frame() {
    let (mut renderer, recorder, mut window, _) =
        setup(HeadlessVisitor::new(), Variant::CombinedBuffer);
    recorder.clear_commands();

    assert_eq!(renderer.render_frame(&mut window).unwrap(), 6);

    let record = recorder.borrow();
    let draws = record.draws();
    assert_eq!(draws.len(), 1);
    assert_eq!((draws[0].2, draws[0].3), (0, 6));
}

#[test]
fn every_frame_presents() {
    let (mut renderer, recorder, mut window, control) =
        setup(HeadlessVisitor::new(), Variant::SharedProgram);
    recorder.clear_commands();

    for _ in 0..3 {
        renderer.render_frame(&mut window).unwrap();
    }

    assert_eq!(control.presents(), 3);

    let record = recorder.borrow();
    let clears = record
        .commands
        .iter()
        .filter(|v| match v {
            Command::Clear(_) => true,
            _ => false,
        })
        .count();

    assert_eq!(clears, 3);
    assert_eq!(record.draws().len(), 6);
}

#[test]
fn exit_key_closes_after_one_more_frame() {
    let (mut renderer, _, mut window, control) =
        setup(HeadlessVisitor::new(), Variant::SharedProgram);

    control.press(Key::Escape);
    renderer.render_frame(&mut window).unwrap();
    assert!(!window.should_close());
    assert_eq!(renderer.state(), RendererState::Running);

    renderer.render_frame(&mut window).unwrap();
    assert!(window.should_close());
    assert_eq!(renderer.state(), RendererState::Closing);
}

#[test]
fn tapped_exit_key_is_not_missed() {
    let (mut renderer, _, mut window, control) =
        setup(HeadlessVisitor::new(), Variant::SharedProgram);

    control.press(Key::Escape);
    control.release(Key::Escape);
    renderer.render_frame(&mut window).unwrap();
    renderer.render_frame(&mut window).unwrap();
    assert!(window.should_close());
}

#[test]
fn other_keys_do_not_close() {
    let (mut renderer, _, mut window, control) =
        setup(HeadlessVisitor::new(), Variant::SharedProgram);

    control.press(Key::Q);
    renderer.render_frame(&mut window).unwrap();
    renderer.render_frame(&mut window).unwrap();
    assert!(!window.should_close());
    assert_eq!(renderer.state(), RendererState::Running);
}

#[test]
fn configured_exit_key() {
    let visitor = HeadlessVisitor::new();
    let mut renderer = FrameRenderer::from_visitor(Box::new(visitor), Key::Q);
    let (mut window, control) = Window::headless(Vector2::new(800, 600));
    renderer
        .initialize(&Variant::SharedProgram.scene(), window.dimensions())
        .unwrap();

    control.press(Key::Escape);
    renderer.render_frame(&mut window).unwrap();
    renderer.render_frame(&mut window).unwrap();
    assert!(!window.should_close());

    control.press(Key::Q);
    renderer.render_frame(&mut window).unwrap();
    renderer.render_frame(&mut window).unwrap();
    assert!(window.should_close());
}

#[test]
fn close_event() {
    let (mut renderer, _, mut window, control) =
        setup(HeadlessVisitor::new(), Variant::SharedProgram);

    control.close();
    renderer.render_frame(&mut window).unwrap();
    assert!(window.should_close());
    assert_eq!(renderer.state(), RendererState::Closing);
}

#[test]
fn resize_updates_viewport() {
    let (mut renderer, recorder, mut window, control) =
        setup(HeadlessVisitor::new(), Variant::SharedProgram);

    control.resize(1024, 768);
    renderer.render_frame(&mut window).unwrap();

    assert_eq!(
        recorder.borrow().last_viewport(),
        Some(SurfaceViewport {
            position: Vector2::new(0, 0),
            size: Vector2::new(1024, 768),
        })
    );
    assert_eq!(window.dimensions(), Vector2::new(1024, 768));
}

#[test]
fn shutdown_releases_everything_once() {
    let (mut renderer, recorder, mut window, _) =
        setup(HeadlessVisitor::new(), Variant::TwoPrograms);
    renderer.render_frame(&mut window).unwrap();

    renderer.shutdown().unwrap();
    assert_eq!(renderer.state(), RendererState::Terminated);

    let record = recorder.borrow();
    assert!(record.alive().is_empty());
    for &v in &record.created {
        assert_eq!(record.deletions(v), 1, "{:?}", v);
    }

    // Vertex arrays, then buffers, then programs.
    let order: Vec<_> = record
        .deleted
        .iter()
        .filter_map(|v| match v {
            Resource::Shader(_) => None,
            Resource::VertexArray(_) => Some(0),
            Resource::Buffer(_) => Some(1),
            Resource::Program(_) => Some(2),
        })
        .collect();

    assert_eq!(order, vec![0, 0, 1, 1, 2, 2]);
}

#[test]
fn shutdown_twice() {
    let (mut renderer, recorder, _, _) = setup(HeadlessVisitor::new(), Variant::SharedProgram);
    renderer.shutdown().unwrap();
    let deleted = recorder.borrow().deleted.len();

    renderer.shutdown().unwrap();
    assert_eq!(recorder.borrow().deleted.len(), deleted);
}

#[test]
fn drop_releases_everything() {
    let (renderer, recorder, _, _) = setup(HeadlessVisitor::new(), Variant::CombinedBuffer);
    assert!(!recorder.borrow().alive().is_empty());

    drop(renderer);
    assert!(recorder.borrow().alive().is_empty());
}

#[test]
fn no_rendering_after_shutdown() {
    let (mut renderer, recorder, mut window, control) =
        setup(HeadlessVisitor::new(), Variant::SharedProgram);
    renderer.shutdown().unwrap();
    recorder.clear_commands();

    assert_eq!(renderer.render_frame(&mut window).unwrap(), 0);
    assert!(recorder.borrow().commands.is_empty());
    assert_eq!(control.presents(), 0);
}

#[test]
fn initialize_twice() {
    let (mut renderer, _, window, _) = setup(HeadlessVisitor::new(), Variant::SharedProgram);
    let scene = Variant::SharedProgram.scene();
    assert!(renderer.initialize(&scene, window.dimensions()).is_err());
    assert_eq!(renderer.state(), RendererState::Running);
}

fn initialize_with(visitor: HeadlessVisitor, variant: Variant) -> (Error, FrameRenderer, Recorder) {
    let recorder = visitor.recorder();
    let mut renderer = FrameRenderer::from_visitor(Box::new(visitor), Key::Escape);
    let err = renderer
        .initialize(&variant.scene(), Vector2::new(800, 600))
        .unwrap_err();

    (err, renderer, recorder)
}

#[test]
fn vertex_compile_failure() {
    let visitor = HeadlessVisitor::new().fail(ShaderStage::Vertex, 0, "syntax error");
    let (err, renderer, recorder) = initialize_with(visitor, Variant::SharedProgram);

    assert_eq!(err.shader_stage(), Some(ShaderStage::Vertex));
    assert_eq!(
        format!("{}", err),
        "ERROR::SHADER::VERTEX::COMPILATION_FAILED\nsyntax error"
    );
    assert_eq!(renderer.state(), RendererState::Terminated);
    assert!(recorder.borrow().alive().is_empty());
    assert!(recorder.borrow().uploads.is_empty());
}

#[test]
fn fragment_compile_failure_releases_vertex_shader() {
    let visitor = HeadlessVisitor::new().fail(ShaderStage::Fragment, 0, "bad fragment");
    let (err, _, recorder) = initialize_with(visitor, Variant::SharedProgram);

    assert_eq!(err.shader_stage(), Some(ShaderStage::Fragment));
    let record = recorder.borrow();
    assert!(record.alive().is_empty());
    for &v in &record.created {
        assert_eq!(record.deletions(v), 1);
    }
}

#[test]
fn second_program_failure_reports_its_own_log() {
    let visitor = HeadlessVisitor::new()
        .fail(ShaderStage::Fragment, 1, "log of the yellow fragment shader");
    let (err, _, recorder) = initialize_with(visitor, Variant::TwoPrograms);

    match err {
        Error::ShaderBuild { stage, ref log } => {
            assert_eq!(stage, ShaderStage::Fragment);
            assert_eq!(log, "log of the yellow fragment shader");
        }
        _ => panic!("unexpected error {:?}", err),
    }

    // The first program had been linked, and must be released as well.
    let record = recorder.borrow();
    assert_eq!(record.programs().len(), 1);
    assert!(record.alive().is_empty());
}

#[test]
fn link_failure() {
    let visitor = HeadlessVisitor::new().fail(ShaderStage::Program, 0, "undefined main");
    let (err, renderer, recorder) = initialize_with(visitor, Variant::CombinedBuffer);

    assert_eq!(err.shader_stage(), Some(ShaderStage::Program));
    assert!(format!("{}", err).starts_with("ERROR::SHADER::PROGRAM::LINK_FAILED"));
    assert_eq!(renderer.state(), RendererState::Terminated);
    assert!(recorder.borrow().alive().is_empty());
}

#[test]
fn invalid_scene_creates_nothing() {
    let visitor = HeadlessVisitor::new();
    let recorder = visitor.recorder();
    let mut renderer = FrameRenderer::from_visitor(Box::new(visitor), Key::Escape);

    let mut scene = Variant::SharedProgram.scene();
    scene.vertex_data[1].positions.pop();

    match renderer.initialize(&scene, Vector2::new(800, 600)) {
        Err(Error::ResourceCreation(..)) => {}
        v => panic!("unexpected result {:?}", v),
    }

    assert_eq!(renderer.state(), RendererState::Terminated);
    assert!(recorder.borrow().created.is_empty());
}

#[test]
fn fragment_failure_survives_release_failure() {
    let visitor = HeadlessVisitor::new()
        .fail(ShaderStage::Fragment, 0, "missing semicolon")
        .pin_shaders();
    let (err, renderer, _) = initialize_with(visitor, Variant::SharedProgram);

    match err {
        Error::ShaderBuild { stage, ref log } => {
            assert_eq!(stage, ShaderStage::Fragment);
            assert_eq!(log, "missing semicolon");
        }
        _ => panic!("unexpected error {:?}", err),
    }

    assert_eq!(renderer.state(), RendererState::Terminated);
}

#[test]
fn link_failure_survives_release_failure() {
    let visitor = HeadlessVisitor::new()
        .fail(ShaderStage::Program, 0, "undefined main")
        .pin_shaders();
    let (err, _, recorder) = initialize_with(visitor, Variant::SharedProgram);

    match err {
        Error::ShaderBuild { stage, ref log } => {
            assert_eq!(stage, ShaderStage::Program);
            assert_eq!(log, "undefined main");
        }
        _ => panic!("unexpected error {:?}", err),
    }

    assert_eq!(recorder.borrow().programs().len(), 1);
}

#[test]
fn program_is_released_when_its_shaders_can_not_be() {
    let visitor = HeadlessVisitor::new().pin_shaders();
    let (err, _, recorder) = initialize_with(visitor, Variant::SharedProgram);

    match err {
        Error::HandleInvalid(_) => {}
        _ => panic!("unexpected error {:?}", err),
    }

    let record = recorder.borrow();
    assert_eq!(record.programs().len(), 1);
    assert_eq!(record.deletions(Resource::Program(record.programs()[0])), 1);
    assert!(record.uploads.is_empty());
}

#[test]
fn clear_color_is_clipped() {
    let visitor = HeadlessVisitor::new();
    let recorder = visitor.recorder();
    let mut renderer = FrameRenderer::from_visitor(Box::new(visitor), Key::Escape);
    let (mut window, _) = Window::headless(Vector2::new(800, 600));

    let mut scene = Variant::SharedProgram.scene();
    scene.clear_color = Color::new(1.5, -0.5, 0.3, 1.0);
    renderer.initialize(&scene, window.dimensions()).unwrap();
    recorder.clear_commands();

    renderer.render_frame(&mut window).unwrap();
    assert_eq!(
        recorder.borrow().commands[0],
        Command::Clear(Color::new(1.0, 0.0, 0.3, 1.0))
    );
}
