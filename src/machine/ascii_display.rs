use super::basics::{SCREEN_HEIGHT, SCREEN_WIDTH};
use super::screen::Screen;

/// Prints the screen contents to stdout, one character per pixel.
pub fn draw_screen(screen: &Screen) {
    for y in 0..SCREEN_HEIGHT {
        for x in 0..SCREEN_WIDTH {
            if screen.is_pixel_set(x, y) {
                print!("@");
            } else {
                print!(" ");
            }
        }
        println!();
    }
}
