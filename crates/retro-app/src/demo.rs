use retro_core::geometry::ResizeEdges;
use retro_core::input::{HitTarget, Key, WindowPart};
use retro_core::{Command, Script};

/// A short scripted session touching every subsystem.
pub fn demo_script() -> Script {
    let open = |id: &str| Command::Open { id: id.to_string() };
    let on = |id: &str, part: WindowPart| HitTarget::window(id, part);

    Script {
        commands: vec![
            open("notepad"),
            open("paint"),
            // Drag notepad by its title bar.
            Command::PointerDown {
                x: 200,
                y: 110,
                target: on("notepad", WindowPart::TitleBar),
            },
            Command::PointerMove { x: 240, y: 130 },
            Command::PointerMove { x: 260, y: 160 },
            Command::PointerUp,
            // Grow paint from its bottom-right corner.
            Command::PointerDown {
                x: 500,
                y: 400,
                target: on(
                    "paint",
                    WindowPart::Handle {
                        edges: ResizeEdges::BOTTOM_RIGHT,
                    },
                ),
            },
            Command::PointerMove { x: 560, y: 450 },
            Command::PointerUp,
            Command::Minimize {
                id: "paint".to_string(),
            },
            Command::ToggleStartMenu,
            Command::StartMenuSelect {
                id: "snake".to_string(),
            },
            Command::StartGame,
            Command::KeyDown { key: Key::ArrowDown },
            Command::Elapse { ms: 300 },
            Command::KeyDown { key: Key::ArrowLeft },
            Command::Elapse { ms: 450 },
        ],
    }
}
