// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the control surface
//!
//! These tests drive a mounted [`ControlSurface`] over the headless adapters,
//! the way a toolkit would: raw `iced_core` events in, view model out.

use approx::assert_abs_diff_eq;
use iced_core::{keyboard, mouse, Event, Point};
use iced_transport::application::port::{FocusedControl, GlobalListener, MediaElement};
use iced_transport::config::{self, Config};
use iced_transport::controls::{ControlSurface, Message, PointerButtons, PointerEvent};
use iced_transport::domain::video::VolumeLevel;
use iced_transport::infrastructure::headless::DEFAULT_TIMELINE_BOUNDS;
use iced_transport::infrastructure::{HeadlessMedia, HeadlessWindow};
use std::fs;

type Surface = ControlSurface<HeadlessMedia, HeadlessWindow>;

const DURATION: f64 = 200.0;

fn mount_with(config: &Config) -> Surface {
    let mut surface = Surface::mount(
        HeadlessMedia::with_duration(DURATION),
        HeadlessWindow::default(),
        config,
    );
    surface.settle();
    surface
}

fn mount() -> Surface {
    mount_with(&Config::default())
}

/// X coordinate of `fraction` along the default timeline.
fn timeline_x(fraction: f32) -> f32 {
    DEFAULT_TIMELINE_BOUNDS.x + DEFAULT_TIMELINE_BOUNDS.width * fraction
}

fn move_to(surface: &mut Surface, x: f32, y: f32) {
    surface.handle_event(&Event::Mouse(mouse::Event::CursorMoved {
        position: Point::new(x, y),
    }));
}

fn press(surface: &mut Surface) {
    surface.handle_event(&Event::Mouse(mouse::Event::ButtonPressed(
        mouse::Button::Left,
    )));
}

fn release(surface: &mut Surface) {
    surface.handle_event(&Event::Mouse(mouse::Event::ButtonReleased(
        mouse::Button::Left,
    )));
}

fn key_press(surface: &mut Surface, key: keyboard::Key) {
    surface.handle_event(&Event::Keyboard(keyboard::Event::KeyPressed {
        key: key.clone(),
        modified_key: key,
        physical_key: keyboard::key::Physical::Unidentified(
            keyboard::key::NativeCode::Unidentified,
        ),
        location: keyboard::Location::Standard,
        modifiers: keyboard::Modifiers::default(),
        text: None,
        repeat: false,
    }));
}

#[test]
fn test_scrub_at_half_pauses_then_seeks_and_resumes() {
    let mut surface = mount();
    surface.handle(Message::TogglePlay);
    surface.settle();
    assert!(!surface.media().is_paused());

    let y = DEFAULT_TIMELINE_BOUNDS.center_y();
    move_to(&mut surface, timeline_x(0.5), y);
    press(&mut surface);
    surface.settle();

    let view = surface.view();
    assert!(surface.media().is_paused(), "pressing the timeline pauses");
    assert!(view.scrubbing);
    assert_abs_diff_eq!(view.preview_position, 0.5);
    assert_abs_diff_eq!(view.progress_position, 0.5);

    release(&mut surface);
    surface.settle();

    assert_eq!(surface.media().last_seek(), Some(0.5 * DURATION));
    assert!(!surface.media().is_paused(), "release resumes playback");
    assert!(surface.view().playing);
    assert!(!surface.view().scrubbing);
}

#[test]
fn test_scrub_release_resumes_even_when_paused_before() {
    let mut surface = mount();
    assert!(surface.media().is_paused());

    let y = DEFAULT_TIMELINE_BOUNDS.center_y();
    move_to(&mut surface, timeline_x(0.2), y);
    press(&mut surface);
    release(&mut surface);
    surface.settle();

    assert!(!surface.media().is_paused());
    assert!(surface.view().playing);
}

#[test]
fn test_scrub_release_respects_resume_opt_out() {
    let config = config::from_toml_str("resume_after_scrub = false").unwrap();
    let mut surface = mount_with(&config);

    let y = DEFAULT_TIMELINE_BOUNDS.center_y();
    move_to(&mut surface, timeline_x(0.2), y);
    press(&mut surface);
    release(&mut surface);
    surface.settle();

    assert_eq!(surface.media().last_seek(), Some(0.2 * DURATION));
    assert!(surface.media().is_paused());
}

#[test]
fn test_drag_outside_window_clamps_to_edges() {
    let mut surface = mount();
    let y = DEFAULT_TIMELINE_BOUNDS.center_y();
    move_to(&mut surface, timeline_x(0.5), y);
    press(&mut surface);

    move_to(&mut surface, DEFAULT_TIMELINE_BOUNDS.x - 500.0, 20.0);
    assert_abs_diff_eq!(surface.view().progress_position, 0.0);

    release(&mut surface);
    surface.settle();
    assert_eq!(surface.media().last_seek(), Some(0.0));
}

#[test]
fn test_playback_progress_and_time_labels() {
    let mut surface = mount();
    key_press(&mut surface, keyboard::Key::Named(keyboard::key::Named::Space));
    surface.settle();

    surface.media_mut().advance(65.0);
    surface.settle();

    let view = surface.view();
    assert_eq!(view.current_time, "1:05");
    assert_eq!(view.total_time, "3:20");
    assert_abs_diff_eq!(view.progress_position, 65.0 / DURATION);
}

#[test]
fn test_keyboard_suppressed_while_typing() {
    let mut surface = mount();
    surface.host_mut().set_focus(FocusedControl::TextInput);
    let before = surface.view();

    for c in ["k", "f", "t", "i", "m"] {
        key_press(&mut surface, keyboard::Key::Character(c.into()));
    }
    key_press(
        &mut surface,
        keyboard::Key::Named(keyboard::key::Named::ArrowRight),
    );
    surface.settle();

    assert_eq!(surface.view(), before);
    assert!(surface.media().is_paused());
    assert_eq!(surface.media().last_seek(), None);
}

#[test]
fn test_keyboard_skip_uses_configured_step() {
    let config = config::from_toml_str("seek_step_secs = 10.0").unwrap();
    let mut surface = mount_with(&config);

    key_press(
        &mut surface,
        keyboard::Key::Named(keyboard::key::Named::ArrowRight),
    );
    key_press(
        &mut surface,
        keyboard::Key::Named(keyboard::key::Named::ArrowRight),
    );
    key_press(
        &mut surface,
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
    );
    surface.settle();

    assert_eq!(surface.media().last_seek(), Some(10.0));
    assert_eq!(surface.view().current_time, "0:10");
}

#[test]
fn test_host_fullscreen_exit_reconciles() {
    let mut surface = mount();
    key_press(&mut surface, keyboard::Key::Character("f".into()));
    surface.settle();
    assert!(surface.view().full_screen);

    surface.host_mut().user_exit_fullscreen();
    surface.settle();
    assert!(!surface.view().full_screen);

    // The next toggle enters again instead of trying to exit.
    surface.handle(Message::ToggleFullScreen);
    surface.settle();
    assert!(surface.view().full_screen);
}

#[test]
fn test_rejected_fullscreen_request_is_swallowed() {
    let mut surface = mount();
    surface.host_mut().set_fullscreen_allowed(false);
    surface.handle(Message::ToggleFullScreen);
    surface.settle();
    assert!(!surface.view().full_screen);
}

#[test]
fn test_floating_window_closed_by_host() {
    let mut surface = mount();
    surface.handle(Message::ToggleFloatingWindow);
    surface.settle();
    assert!(surface.view().container_classes().contains(&"mini-player"));

    surface.host_mut().user_close_floating_window();
    surface.settle();
    assert!(!surface.view().floating_window);
}

#[test]
fn test_volume_slider_and_mute_indicator() {
    let mut surface = mount();

    surface.handle(Message::VolumeInput(0.6));
    surface.settle();
    assert_eq!(surface.view().volume_level, VolumeLevel::High);

    surface.handle(Message::VolumeInput(0.4));
    surface.settle();
    assert_eq!(surface.view().volume_level, VolumeLevel::Low);

    key_press(&mut surface, keyboard::Key::Character("m".into()));
    surface.settle();
    let view = surface.view();
    assert_eq!(view.volume_level, VolumeLevel::Muted);
    assert_abs_diff_eq!(view.slider_volume, 0.0);

    surface.handle(Message::VolumeInput(0.0));
    surface.settle();
    assert_eq!(surface.view().volume_level, VolumeLevel::Muted);
}

#[test]
fn test_speed_cycles_through_all_rates() {
    let mut surface = mount();
    let mut labels = Vec::new();
    for _ in 0..8 {
        surface.handle(Message::ChangePlaybackSpeed);
        labels.push(surface.view().playback_rate_label);
    }
    assert_eq!(
        labels,
        ["1.25x", "1.5x", "1.75x", "2x", "0.25x", "0.5x", "0.75x", "1x"]
    );
}

#[test]
fn test_double_toggle_play_is_idempotent() {
    let mut surface = mount();
    surface.handle(Message::TogglePlay);
    surface.handle(Message::TogglePlay);
    assert!(!surface.view().playing);
    surface.settle();
    assert!(!surface.view().playing);
}

#[test]
fn test_unmount_deregisters_listeners() {
    let mut surface = mount();
    assert_eq!(surface.host().listeners(), &GlobalListener::ALL);

    surface.unmount();
    assert!(surface.host().listeners().is_empty());
    assert!(!surface.is_mounted());

    surface.unmount();
    assert!(surface.host().listeners().is_empty());
}

#[test]
fn test_unmount_stops_global_pointer_tracking() {
    let mut surface = mount();
    let y = DEFAULT_TIMELINE_BOUNDS.center_y();
    move_to(&mut surface, timeline_x(0.5), y);
    press(&mut surface);
    surface.unmount();

    move_to(&mut surface, timeline_x(0.9), 10.0);
    release(&mut surface);
    assert!(surface.view().scrubbing);
    assert_abs_diff_eq!(surface.view().progress_position, 0.5);
}

#[test]
fn test_drop_deregisters_listeners() {
    use iced_core::Rectangle;
    use iced_transport::application::port::{HostWindow, ListenerRegistry};
    use iced_transport::error::HostError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Window whose listener set outlives the surface that owns it.
    struct SharedWindow(Rc<RefCell<HeadlessWindow>>);

    impl ListenerRegistry for SharedWindow {
        fn add_listener(&mut self, listener: GlobalListener) {
            self.0.borrow_mut().add_listener(listener);
        }
        fn remove_listener(&mut self, listener: GlobalListener) {
            self.0.borrow_mut().remove_listener(listener);
        }
    }

    impl HostWindow for SharedWindow {
        fn is_fullscreen_active(&self) -> bool {
            self.0.borrow().is_fullscreen_active()
        }
        fn request_fullscreen(&mut self) -> Result<(), HostError> {
            self.0.borrow_mut().request_fullscreen()
        }
        fn exit_fullscreen(&mut self) -> Result<(), HostError> {
            self.0.borrow_mut().exit_fullscreen()
        }
        fn exit_floating_window(&mut self) -> Result<(), HostError> {
            self.0.borrow_mut().exit_floating_window()
        }
        fn focused_control(&self) -> FocusedControl {
            self.0.borrow().focused_control()
        }
        fn timeline_bounds(&self) -> Rectangle {
            self.0.borrow().timeline_bounds()
        }
    }

    let window = Rc::new(RefCell::new(HeadlessWindow::default()));
    {
        let _surface = ControlSurface::mount(
            HeadlessMedia::with_duration(DURATION),
            SharedWindow(Rc::clone(&window)),
            &Config::default(),
        );
        assert_eq!(window.borrow().listeners().len(), 3);
    }
    assert!(window.borrow().listeners().is_empty());
}

#[test]
fn test_secondary_button_does_not_scrub() {
    let mut surface = mount();
    let y = DEFAULT_TIMELINE_BOUNDS.center_y();
    move_to(&mut surface, timeline_x(0.3), y);
    surface.handle(Message::TimelinePointerDown(PointerEvent::new(
        Point::new(timeline_x(0.3), y),
        PointerButtons::SECONDARY,
    )));
    assert!(!surface.view().scrubbing);
    assert_abs_diff_eq!(surface.view().preview_position, 0.3, epsilon = 1e-6);
    assert_abs_diff_eq!(surface.view().progress_position, 0.0);
}

#[test]
fn test_secondary_release_keeps_scrubbing() {
    let mut surface = mount();
    surface.handle(Message::TogglePlay);
    surface.settle();

    let y = DEFAULT_TIMELINE_BOUNDS.center_y();
    move_to(&mut surface, timeline_x(0.25), y);
    press(&mut surface);
    surface.handle_event(&Event::Mouse(mouse::Event::ButtonPressed(
        mouse::Button::Right,
    )));
    surface.handle_event(&Event::Mouse(mouse::Event::ButtonReleased(
        mouse::Button::Right,
    )));
    surface.settle();

    assert!(surface.view().scrubbing, "left button is still held");
    assert_eq!(surface.media().last_seek(), None);
    assert!(surface.media().is_paused());

    move_to(&mut surface, timeline_x(0.75), y);
    release(&mut surface);
    surface.settle();

    assert!(!surface.view().scrubbing);
    assert_eq!(surface.media().last_seek(), Some(0.75 * DURATION));
    assert!(!surface.media().is_paused());
}

#[test]
fn test_config_loaded_from_file() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("controls.toml");
    fs::write(&path, "seek_step_secs = 5.0\nresume_after_scrub = false\n")
        .expect("failed to write config");

    let config = config::load_from_path(&path).expect("config should load");
    assert_abs_diff_eq!(config.seek_step_secs, 5.0);
    assert!(!config.resume_after_scrub);
}

#[test]
fn test_invalid_config_file_falls_back_to_defaults() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("controls.toml");
    fs::write(&path, "seek_step_secs = [oops").expect("failed to write config");

    let config = config::load_from_path(&path).expect("invalid contents are not an error");
    assert_eq!(config, Config::default());
}
