use shape_ngin::{DeviceEvent, KeyCode, WindowEvent, input::InputState};

#[test]
fn keys_are_held_until_released() {
    let mut input = InputState::new();
    assert!(!input.key_down(KeyCode::KeyW));

    input.press(KeyCode::KeyW);
    input.end_frame();
    assert!(input.key_down(KeyCode::KeyW));

    input.release(KeyCode::KeyW);
    assert!(!input.key_down(KeyCode::KeyW));
}

#[test]
fn mouse_motion_accumulates_until_end_of_frame() {
    let mut input = InputState::new();
    input.handle_device_event(&DeviceEvent::MouseMotion { delta: (3.0, -1.0) });
    input.handle_device_event(&DeviceEvent::MouseMotion { delta: (2.0, 4.0) });
    assert_eq!(input.mouse_delta(), cgmath::Vector2::new(5.0, 3.0));

    input.end_frame();
    assert_eq!(input.mouse_delta(), cgmath::Vector2::new(0.0, 0.0));
}

#[test]
fn losing_focus_releases_everything() {
    let mut input = InputState::new();
    input.press(KeyCode::KeyA);
    input.set_right_mouse(true);

    input.handle_window_event(&WindowEvent::Focused(false));
    assert!(!input.key_down(KeyCode::KeyA));
    assert!(!input.right_mouse_down());
}

#[test]
fn capture_hides_only_the_captured_device() {
    let mut input = InputState::new();
    input.press(KeyCode::KeyD);
    input.set_right_mouse(true);
    input.accumulate_mouse_motion(1.0, 1.0);

    input.set_capture(true, false);
    assert!(!input.key_down(KeyCode::KeyD));
    assert!(input.right_mouse_down());

    input.set_capture(false, true);
    assert!(input.key_down(KeyCode::KeyD));
    assert!(!input.right_mouse_down());
    assert_eq!(input.mouse_delta(), cgmath::Vector2::new(0.0, 0.0));

    // the key is still held once the UI lets go
    input.set_capture(false, false);
    assert!(input.key_down(KeyCode::KeyD));
}

#[test]
fn escape_requests_quit() {
    let mut input = InputState::new();
    assert!(!input.quit_requested());
    input.press(KeyCode::Escape);
    assert!(input.quit_requested());
}

#[test]
fn releases_while_captured_are_not_lost() {
    let mut input = InputState::new();
    input.press(KeyCode::KeyW);
    input.set_right_mouse(true);

    // the UI grabs both devices, then the key and button come up over it
    input.set_capture(true, true);
    input.release(KeyCode::KeyW);
    input.set_right_mouse(false);
    input.set_capture(false, false);

    assert!(!input.key_down(KeyCode::KeyW));
    assert!(!input.right_mouse_down());
}
