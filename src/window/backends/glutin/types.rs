use glutin;

use super::super::super::events::{Event, WindowEvent};

use crate::input::prelude::{InputEvent, Key};

/// Translates a native event. Sizes are converted into physical pixels with
/// `dpr`.
pub fn from_event(source: glutin::Event, dpr: f64) -> Option<Event> {
    match source {
        glutin::Event::WindowEvent { event, .. } => from_window_event(&event, dpr),
        _ => None,
    }
}

fn from_window_event(source: &glutin::WindowEvent, dpr: f64) -> Option<Event> {
    match *source {
        glutin::WindowEvent::CloseRequested => Some(Event::Window(WindowEvent::Closed)),

        glutin::WindowEvent::Focused(v) => if v {
            Some(Event::Window(WindowEvent::GainFocus))
        } else {
            Some(Event::Window(WindowEvent::LostFocus))
        },

        glutin::WindowEvent::Resized(size) => {
            let size = size.to_physical(dpr);
            Some(Event::Window(WindowEvent::Resized(
                size.width as u32,
                size.height as u32,
            )))
        }

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Pressed,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key)
            .map(|key| Event::InputDevice(InputEvent::KeyboardPressed { key })),

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Released,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key)
            .map(|key| Event::InputDevice(InputEvent::KeyboardReleased { key })),

        _ => None,
    }
}

fn from_virtual_key_code(key: glutin::VirtualKeyCode) -> Option<Key> {
    match key {
        glutin::VirtualKeyCode::Escape => Some(Key::Escape),
        glutin::VirtualKeyCode::Return => Some(Key::Return),
        glutin::VirtualKeyCode::Space => Some(Key::Space),
        glutin::VirtualKeyCode::Back => Some(Key::Back),
        glutin::VirtualKeyCode::Tab => Some(Key::Tab),
        glutin::VirtualKeyCode::Q => Some(Key::Q),
        glutin::VirtualKeyCode::W => Some(Key::W),
        glutin::VirtualKeyCode::A => Some(Key::A),
        glutin::VirtualKeyCode::S => Some(Key::S),
        glutin::VirtualKeyCode::D => Some(Key::D),
        glutin::VirtualKeyCode::X => Some(Key::X),
        glutin::VirtualKeyCode::F1 => Some(Key::F1),
        glutin::VirtualKeyCode::F2 => Some(Key::F2),
        glutin::VirtualKeyCode::F3 => Some(Key::F3),
        glutin::VirtualKeyCode::F4 => Some(Key::F4),
        glutin::VirtualKeyCode::Left => Some(Key::Left),
        glutin::VirtualKeyCode::Up => Some(Key::Up),
        glutin::VirtualKeyCode::Right => Some(Key::Right),
        glutin::VirtualKeyCode::Down => Some(Key::Down),
        _ => None,
    }
}
