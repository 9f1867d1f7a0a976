//! recolor and tilegen end to end

use crate::common::Workspace;
use anyhow::Result;
use imaging::{Canvas, Color};

const GRAY: Color = Color::rgb(128, 128, 128);

#[test]
fn test_recolor_default_colors() -> Result<()> {
    let ws = Workspace::new();
    let input = ws.path().join("in.png");

    let mut canvas = Canvas::new(2, 2, Color::BLACK)?;
    canvas.set_pixel(1, 0, Color::WHITE)?;
    canvas.set_pixel(1, 1, GRAY)?;
    canvas.save(&input)?;

    let result = crate::bin!("recolor", ws.path(), "in.png").assert_success()?;
    assert!(result.contains_stdout("2 pixels replaced"));

    let out = Canvas::load(&ws.path().join("out.png"))?;
    assert_eq!(out.get_pixel(0, 0)?, Color::WHITE);
    assert_eq!(out.get_pixel(1, 0)?, Color::WHITE);
    assert_eq!(out.get_pixel(0, 1)?, Color::WHITE);
    assert_eq!(out.get_pixel(1, 1)?, GRAY);
    Ok(())
}

#[test]
fn test_recolor_custom_colors_and_output() -> Result<()> {
    let ws = Workspace::new();
    Canvas::new(3, 1, GRAY)?.save(&ws.path().join("in.png"))?;

    crate::bin!(
        "recolor",
        ws.path(),
        "in.png",
        "-t",
        "128,128,128",
        "-b",
        "#ff0000",
        "-o",
        "red.png"
    )
    .assert_success()?;

    let out = Canvas::load(&ws.path().join("red.png"))?;
    assert_eq!(out.get_pixel(2, 0)?, Color::rgb(255, 0, 0));
    Ok(())
}

#[test]
fn test_recolor_unreadable_input() -> Result<()> {
    let ws = Workspace::new();
    ws.write("broken.png", "definitely not an image");

    let result = crate::bin!("recolor", ws.path(), "broken.png").assert_failure()?;
    assert!(result.contains_stderr("broken.png"));
    assert!(!ws.path().join("out.png").exists());
    Ok(())
}

#[test]
fn test_recolor_keeps_alpha() -> Result<()> {
    let ws = Workspace::new();

    let mut canvas = Canvas::new(3, 1, Color::rgba(0, 0, 0, 0))?;
    canvas.set_pixel(1, 0, Color::rgba(255, 0, 0, 128))?;
    canvas.set_pixel(2, 0, Color::BLACK)?;
    canvas.save(&ws.path().join("sprite.png"))?;

    let result = crate::bin!("recolor", ws.path(), "sprite.png").assert_success()?;
    assert!(result.contains_stdout("1 pixels replaced"));

    let out = Canvas::load(&ws.path().join("out.png"))?;
    assert_eq!(out.get_pixel(0, 0)?, Color::rgba(0, 0, 0, 0));
    assert_eq!(out.get_pixel(1, 0)?, Color::rgba(255, 0, 0, 128));
    assert_eq!(out.get_pixel(2, 0)?, Color::WHITE);
    Ok(())
}

#[test]
fn test_piped_output_has_no_color_codes() -> Result<()> {
    let ws = Workspace::new();

    let result = crate::bin!("tilegen", ws.path(), "4", "2").assert_success()?;
    assert!(result.contains_stdout("✓ out.png (8x4)"));
    assert!(!result.stdout.contains('\x1b'));
    Ok(())
}

#[test]
fn test_tilegen_two_cells() -> Result<()> {
    let ws = Workspace::new();

    crate::bin!(
        "tilegen",
        ws.path(),
        "10",
        "2",
        "1",
        "--color1",
        "#ff0000",
        "--color2",
        "#0000ff"
    )
    .assert_success()?;

    let out = Canvas::load(&ws.path().join("out.png"))?;
    assert_eq!((out.width(), out.height()), (20, 10));
    assert_eq!(out.get_pixel(0, 0)?, Color::rgb(255, 0, 0));
    assert_eq!(out.get_pixel(9, 9)?, Color::rgb(255, 0, 0));
    assert_eq!(out.get_pixel(10, 0)?, Color::rgb(0, 0, 255));
    assert_eq!(out.get_pixel(19, 9)?, Color::rgb(0, 0, 255));
    Ok(())
}

#[test]
fn test_tilegen_height_defaults_to_one_row() -> Result<()> {
    let ws = Workspace::new();

    crate::bin!("tilegen", ws.path(), "8", "3").assert_success()?;

    let out = Canvas::load(&ws.path().join("out.png"))?;
    assert_eq!((out.width(), out.height()), (24, 8));
    assert_eq!(out.get_pixel(0, 0)?, Color::WHITE);
    assert_eq!(out.get_pixel(8, 0)?, Color::rgb(200, 200, 200));
    assert_eq!(out.get_pixel(16, 7)?, Color::WHITE);
    Ok(())
}

#[test]
fn test_tilegen_settings_file() -> Result<()> {
    let ws = Workspace::new();
    ws.write(
        "tiles.toml",
        "[tiles]\ncolor2 = \"#000000\"\noutput = \"sheet.png\"\n",
    );

    crate::bin!("tilegen", ws.path(), "--config", "tiles.toml", "4", "3", "2")
        .assert_success()?;

    let out = Canvas::load(&ws.path().join("sheet.png"))?;
    assert_eq!((out.width(), out.height()), (12, 8));
    assert_eq!(out.get_pixel(4, 0)?, Color::BLACK);
    Ok(())
}

#[test]
fn test_tilegen_zero_size_rejected() -> Result<()> {
    let ws = Workspace::new();

    let result = crate::bin!("tilegen", ws.path(), "0", "2").assert_failure()?;
    assert!(result.contains_stderr("invalid image dimensions"));
    Ok(())
}

#[test]
fn test_tilegen_huge_sheet_rejected() -> Result<()> {
    let ws = Workspace::new();

    let result =
        crate::bin!("tilegen", ws.path(), "65535", "65535", "65535").assert_failure()?;
    assert!(result.contains_stderr("invalid image dimensions"));
    assert!(!ws.path().join("out.png").exists());
    Ok(())
}
