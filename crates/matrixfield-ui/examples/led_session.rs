//! Headless editing session: opens the editor, paints a few cells with
//! synthetic pointer events and records every frame.
//!
//! Run with `RUST_LOG=debug` to watch the value changes go by.

use matrixfield_core::Vec2;
use matrixfield_ui::{
    MatrixField, PointerButton, PointerEvent, RecordingBackend, RenderBackend,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut field = MatrixField::with_value("11111:00000:00000:00000:00000");
    field.on_change(|change| println!("value: {} -> {}", change.old, change.new));

    let mut backend = RecordingBackend::default();
    backend.frame(&field.thumbnail_scene());

    // Click the thumbnail, then drag across the second row of the editor.
    field.handle_pointer(PointerEvent::down(
        Vec2::new(10.0, 13.0),
        PointerButton::Primary,
    ));
    let row: Vec<Vec2> = {
        let layout = field.model().borrow().editor_layout();
        (0..5).map(|col| layout.cell_rect(1, col).center()).collect()
    };
    let editor = field.editor_mut().expect("editor opens on click");
    editor.handle_pointer(PointerEvent::down(row[0], PointerButton::Primary));
    for p in &row[1..] {
        editor.handle_pointer(PointerEvent::moved(*p));
    }
    editor.handle_pointer(PointerEvent::up(row[4], PointerButton::Primary));
    backend.frame(&editor.scene());

    field.close_editor();
    backend.frame(&field.thumbnail_scene());

    println!("final value: {}", field.value());
    println!(
        "recorded {} frames, {} nodes",
        backend.frames.len(),
        backend.frames.iter().map(|f| f.nodes.len()).sum::<usize>()
    );
    Ok(())
}
