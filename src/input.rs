//! Input handling.
//!
//! SDL events are translated into [`Command`]s. Most of them carry an [`Action`] that
//! [`SceneState::apply`](crate::scene::SceneState::apply) understands; a right click instead
//! asks the event loop to open the context menu, whose choice becomes an action of its own.

use sdl2::{
    event::{Event, WindowEvent},
    keyboard::{Keycode, Mod},
    messagebox::{
        ButtonData, ClickedButton, MessageBoxButtonFlag, MessageBoxColorScheme, MessageBoxFlag,
    },
    mouse::MouseButton,
};

/// A state change requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FlipDirection,
    SetSpeed(u8),
    StartRotation,
    StopRotation,
    Resize(u32, u32),
}

impl Action {
    /// Replaces the size carried by a resize with the drawable size in pixels. SDL reports
    /// window sizes in points, which differ from pixels on high-DPI displays.
    pub fn with_drawable_size(self, (width, height): (u32, u32)) -> Self {
        match self {
            Action::Resize(..) => Action::Resize(width, height),
            other => other,
        }
    }
}

/// The result of translating one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Apply(Action),
    OpenMenu,
}

/// Maps a pressed key to an action, given the modifiers held with it.
///
/// Shift turns the digit row into symbols. Shift or Caps Lock (but not both) turns `a` into `A`.
pub fn key_action(keycode: Keycode, keymod: Mod) -> Option<Action> {
    let shifted = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);
    let uppercase = shifted != keymod.contains(Mod::CAPSMOD);
    let action = match keycode {
        Keycode::Q | Keycode::Escape => Action::Quit,
        Keycode::A if !uppercase => Action::FlipDirection,
        Keycode::Num1 if !shifted => Action::SetSpeed(1),
        Keycode::Num2 if !shifted => Action::SetSpeed(2),
        Keycode::Num3 if !shifted => Action::SetSpeed(3),
        Keycode::Num4 if !shifted => Action::SetSpeed(4),
        Keycode::Num5 if !shifted => Action::SetSpeed(5),
        Keycode::Num6 if !shifted => Action::SetSpeed(6),
        Keycode::Kp1 => Action::SetSpeed(1),
        Keycode::Kp2 => Action::SetSpeed(2),
        Keycode::Kp3 => Action::SetSpeed(3),
        Keycode::Kp4 => Action::SetSpeed(4),
        Keycode::Kp5 => Action::SetSpeed(5),
        Keycode::Kp6 => Action::SetSpeed(6),
        _ => return None,
    };
    Some(action)
}

/// Maps a mouse button press to a command.
pub fn mouse_command(button: MouseButton) -> Option<Command> {
    match button {
        MouseButton::Left => Some(Command::Apply(Action::FlipDirection)),
        MouseButton::Right => Some(Command::OpenMenu),
        _ => None,
    }
}

/// Translates an SDL event, ignoring everything the demo does not react to.
pub fn translate(event: &Event) -> Option<Command> {
    match event {
        Event::Quit { .. } => Some(Command::Apply(Action::Quit)),
        Event::Window {
            win_event: WindowEvent::Resized(width, height),
            ..
        } => Some(Command::Apply(Action::Resize(
            (*width).max(0) as u32,
            (*height).max(0) as u32,
        ))),
        Event::KeyDown {
            keycode: Some(keycode),
            keymod,
            repeat: false,
            ..
        } => key_action(*keycode, *keymod).map(Command::Apply),
        Event::MouseButtonDown { mouse_btn, .. } => mouse_command(*mouse_btn),
        _ => None,
    }
}

/// Entries of the right-click menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Quit,
    StartRotation,
    StopRotation,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [
        MenuEntry::Quit,
        MenuEntry::StartRotation,
        MenuEntry::StopRotation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Quit => "quit",
            MenuEntry::StartRotation => "start rotation",
            MenuEntry::StopRotation => "stop rotation",
        }
    }

    pub fn id(self) -> i32 {
        match self {
            MenuEntry::Quit => 1,
            MenuEntry::StartRotation => 2,
            MenuEntry::StopRotation => 3,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|entry| entry.id() == id)
    }

    pub fn action(self) -> Action {
        match self {
            MenuEntry::Quit => Action::Quit,
            MenuEntry::StartRotation => Action::StartRotation,
            MenuEntry::StopRotation => Action::StopRotation,
        }
    }
}

/// Shows the context menu as a modal dialog attached to `window` and blocks until the user
/// picks an entry or dismisses it.
pub fn show_menu(window: &sdl2::video::Window) -> Option<MenuEntry> {
    let buttons: Vec<ButtonData> = MenuEntry::ALL
        .iter()
        .map(|entry| ButtonData {
            flags: MessageBoxButtonFlag::NOTHING,
            button_id: entry.id(),
            text: entry.label(),
        })
        .collect();

    match sdl2::messagebox::show_message_box(
        MessageBoxFlag::INFORMATION,
        &buttons,
        window.title(),
        "Choose an action",
        Some(window),
        None::<MessageBoxColorScheme>,
    ) {
        Ok(ClickedButton::CustomButton(button)) => MenuEntry::from_id(button.button_id),
        Ok(ClickedButton::CloseButton) => None,
        Err(e) => {
            log::warn!("Could not show the context menu: {e}");
            None
        }
    }
}
